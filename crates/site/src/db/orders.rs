//! Order repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use homecraft_core::OrderId;

use super::RepositoryError;
use crate::models::order::Order;

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    customer_name: String,
    product: String,
    quantity: i64,
    total_price: i64,
    created_at: DateTime<Utc>,
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, customer_name, product, quantity, total_price, created_at
            FROM orders
            ORDER BY id DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Order {
                id: OrderId::new(r.id),
                customer_name: r.customer_name,
                product: r.product,
                quantity: r.quantity,
                total_price: r.total_price,
                created_at: r.created_at,
            })
            .collect())
    }
}
