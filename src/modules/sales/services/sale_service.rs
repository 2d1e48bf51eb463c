use std::sync::Arc;

use chrono::Local;
use sqlx::MySqlPool;
use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::products::repositories::ProductRepository;
use crate::modules::sales::models::{CheckoutRequest, Sale};
use crate::modules::sales::repositories::{SaleRecordSource, SaleRepository};

/// Service for cart checkout and sale lookup
pub struct SaleService {
    pool: MySqlPool,
    sale_repo: Arc<SaleRepository>,
    product_repo: Arc<ProductRepository>,
}

impl SaleService {
    pub fn new(
        pool: MySqlPool,
        sale_repo: Arc<SaleRepository>,
        product_repo: Arc<ProductRepository>,
    ) -> Self {
        Self {
            pool,
            sale_repo,
            product_repo,
        }
    }

    /// Turn a cart into an immutable sale record.
    ///
    /// Stock decrements and the sale insert commit in one transaction, so a
    /// failed stock check leaves nothing behind.
    pub async fn checkout(&self, user_id: &str, request: CheckoutRequest) -> Result<Sale> {
        let mut lines = Vec::with_capacity(request.items.len());

        for cart_line in &request.items {
            let product = self
                .product_repo
                .find_by_id(&cart_line.product_id)
                .await?
                .ok_or_else(|| {
                    AppError::not_found(format!(
                        "Product with id '{}' not found",
                        cart_line.product_id
                    ))
                })?;

            lines.push((product, cart_line.quantity));
        }

        let recorded_at = Local::now().naive_local();
        let sale = Sale::from_cart(user_id, lines, recorded_at)?;

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        for item in &sale.items {
            self.product_repo
                .decrement_stock_with_tx(&mut tx, &item.product_id, i64::from(item.quantity))
                .await?;
        }

        self.sale_repo.create_with_tx(&mut tx, &sale).await?;

        tx.commit().await.map_err(AppError::Database)?;

        info!(
            sale_id = %sale.id,
            total = %sale.total_amount,
            items = sale.items.len(),
            "Recorded sale"
        );

        Ok(sale)
    }

    /// Full sale history for the user
    pub async fn list_sales(&self, user_id: &str) -> Result<Vec<Sale>> {
        self.sale_repo.sales_for_user(user_id).await
    }

    /// One sale with its line items
    pub async fn get_sale(&self, id: &str, user_id: &str) -> Result<Sale> {
        self.sale_repo
            .find_by_id(id, user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Sale with id '{}' not found", id)))
    }
}
