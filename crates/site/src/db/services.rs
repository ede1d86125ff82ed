//! Catalog repository for database operations.

use sqlx::SqlitePool;

use homecraft_core::ServiceId;

use super::RepositoryError;
use crate::models::service::Service;

#[derive(sqlx::FromRow)]
struct ServiceRow {
    id: i64,
    name: String,
    description: Option<String>,
}

/// Repository for catalog database operations.
pub struct ServiceRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ServiceRepository<'a> {
    /// Create a new service repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all catalog services, by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Service>, RepositoryError> {
        let rows = sqlx::query_as::<_, ServiceRow>(
            r"
            SELECT id, name, description
            FROM services
            ORDER BY name ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Service {
                id: ServiceId::new(r.id),
                name: r.name,
                description: r.description,
            })
            .collect())
    }
}
