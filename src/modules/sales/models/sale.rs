// Sale record model
//
// A sale is an immutable transaction entry produced by checkout. Line items
// snapshot the product name and unit price at the time of sale, and the
// stored total equals the sum of quantity × unit_price over the items. The
// report aggregator trusts this stored total and never recomputes it from
// the items.
//
// Timestamps are wall-clock naive datetimes; all report windows operate on
// local time.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::products::models::Product;

/// An immutable, completed sale
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Sale {
    pub id: String,
    pub user_id: String,
    /// Sum of line totals, frozen at checkout.
    pub total_amount: Decimal,
    /// Wall-clock time the sale was recorded.
    pub recorded_at: NaiveDateTime,
    /// Line items; empty when loaded through list queries.
    #[sqlx(skip)]
    #[serde(default)]
    pub items: Vec<SaleItem>,
}

/// A line item in a sale, with product data frozen at time of sale
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SaleItem {
    pub id: String,
    pub sale_id: String,
    pub product_id: String,
    /// Product name at time of sale.
    pub name: String,
    pub quantity: i32,
    /// Unit price at time of sale.
    pub unit_price: Decimal,
    /// quantity × unit_price.
    pub line_total: Decimal,
}

/// One cart line in a checkout request
#[derive(Debug, Clone, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub quantity: i32,
}

/// Checkout request body
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub items: Vec<CartLine>,
}

impl Sale {
    /// Build a sale from resolved cart lines.
    ///
    /// Quantities must be positive and the cart non-empty; stock checks
    /// happen later, inside the checkout transaction.
    pub fn from_cart(
        user_id: &str,
        lines: Vec<(Product, i32)>,
        recorded_at: NaiveDateTime,
    ) -> Result<Self> {
        if lines.is_empty() {
            return Err(AppError::validation("Cart must have at least one item"));
        }

        let sale_id = Uuid::new_v4().to_string();
        let mut items = Vec::with_capacity(lines.len());
        let mut total_amount = Decimal::ZERO;

        for (product, quantity) in lines {
            if quantity <= 0 {
                return Err(AppError::validation(format!(
                    "Quantity must be positive, got: {}",
                    quantity
                )));
            }

            let line_total = Decimal::from(quantity) * product.price;
            total_amount += line_total;

            items.push(SaleItem {
                id: Uuid::new_v4().to_string(),
                sale_id: sale_id.clone(),
                product_id: product.id,
                name: product.name,
                quantity,
                unit_price: product.price,
                line_total,
            });
        }

        Ok(Self {
            id: sale_id,
            user_id: user_id.to_string(),
            total_amount,
            recorded_at,
            items,
        })
    }
}
