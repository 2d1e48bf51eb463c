// MySQL persistence for sale records.
//
// Sales are write-once: checkout inserts the sale and its line items in one
// transaction (alongside the stock decrements) and nothing ever updates or
// deletes them afterwards.

use async_trait::async_trait;
use sqlx::{MySql, MySqlPool, Transaction};

use crate::core::{AppError, Result};
use crate::modules::sales::models::{Sale, SaleItem};

/// The sale record feed consumed by report generation.
///
/// A single read returning the complete history for one user; no
/// pagination, filtering, or windowing parameters.
#[async_trait]
pub trait SaleRecordSource: Send + Sync {
    async fn sales_for_user(&self, user_id: &str) -> Result<Vec<Sale>>;
}

/// Repository for sale database operations
pub struct SaleRepository {
    pool: MySqlPool,
}

impl SaleRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Insert a sale and its line items within an existing transaction
    pub async fn create_with_tx(
        &self,
        tx: &mut Transaction<'_, MySql>,
        sale: &Sale,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO sales (id, user_id, total_amount, recorded_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&sale.id)
        .bind(&sale.user_id)
        .bind(sale.total_amount)
        .bind(sale.recorded_at)
        .execute(&mut **tx)
        .await
        .map_err(AppError::Database)?;

        for item in &sale.items {
            sqlx::query(
                r#"
                INSERT INTO sale_items (
                    id, sale_id, product_id, name, quantity, unit_price, line_total
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&item.id)
            .bind(&item.sale_id)
            .bind(&item.product_id)
            .bind(&item.name)
            .bind(item.quantity)
            .bind(item.unit_price)
            .bind(item.line_total)
            .execute(&mut **tx)
            .await
            .map_err(AppError::Database)?;
        }

        Ok(())
    }

    /// Find a sale by ID, including line items
    pub async fn find_by_id(&self, id: &str, user_id: &str) -> Result<Option<Sale>> {
        let sale = sqlx::query_as::<_, Sale>(
            r#"
            SELECT id, user_id, total_amount, recorded_at
            FROM sales
            WHERE id = ? AND user_id = ?
            LIMIT 1
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let Some(mut sale) = sale else {
            return Ok(None);
        };

        sale.items = sqlx::query_as::<_, SaleItem>(
            r#"
            SELECT id, sale_id, product_id, name, quantity, unit_price, line_total
            FROM sale_items
            WHERE sale_id = ?
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(Some(sale))
    }
}

#[async_trait]
impl SaleRecordSource for SaleRepository {
    /// Full sale history for one user, newest first, without line items.
    ///
    /// The aggregator only reads timestamps and stored totals.
    async fn sales_for_user(&self, user_id: &str) -> Result<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(
            r#"
            SELECT id, user_id, total_amount, recorded_at
            FROM sales
            WHERE user_id = ?
            ORDER BY recorded_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(sales)
    }
}
