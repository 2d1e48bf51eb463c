// Product model with validation
//
// A product is an inventory entry with a display name, a unit price, and a
// stock level. Checkout snapshots the name and price into the sale line
// items, so later edits never rewrite recorded sales.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::{AppError, Result};

/// A product available for sale
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Unit price; non-negative.
    pub price: Decimal,
    /// Units on hand; decremented by checkout.
    pub stock: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product with validation
    pub fn new(name: String, price: Decimal, stock: i64) -> Result<Self> {
        let name = name.trim().to_string();
        Self::validate_name(&name)?;
        Self::validate_price(price)?;
        Self::validate_stock(stock)?;

        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            price,
            stock,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update, re-validating each changed field
    pub fn apply_update(&mut self, update: UpdateProductRequest) -> Result<()> {
        if let Some(name) = update.name {
            let name = name.trim().to_string();
            Self::validate_name(&name)?;
            self.name = name;
        }

        if let Some(price) = update.price {
            Self::validate_price(price)?;
            self.price = price;
        }

        if let Some(stock) = update.stock {
            Self::validate_stock(stock)?;
            self.stock = stock;
        }

        self.updated_at = Utc::now();

        Ok(())
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(AppError::validation("Product name cannot be empty"));
        }

        if name.len() > 100 {
            return Err(AppError::validation(
                "Product name cannot exceed 100 characters",
            ));
        }

        Ok(())
    }

    fn validate_price(price: Decimal) -> Result<()> {
        if price < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Price must be non-negative, got: {}",
                price
            )));
        }

        Ok(())
    }

    fn validate_stock(stock: i64) -> Result<()> {
        if stock < 0 {
            return Err(AppError::validation(format!(
                "Stock must be non-negative, got: {}",
                stock
            )));
        }

        Ok(())
    }
}

/// Create request body
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub stock: i64,
}

/// Partial update request body
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i64>,
}
