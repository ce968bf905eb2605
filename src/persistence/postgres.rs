//! PostgreSQL implementation of the customer store.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::CustomerStore;
use crate::config::ApiConfig;
use crate::domain::{Customer, CustomerId};
use crate::error::ApiError;

const INSERT_CUSTOMER: &str = "INSERT INTO customer (first_name, last_name) VALUES ($1, $2)";
const SELECT_CUSTOMERS: &str = "SELECT id, first_name, last_name FROM customer";
const UPDATE_CUSTOMER: &str = "UPDATE customer SET first_name = $1, last_name = $2 WHERE id = $3";
const DELETE_CUSTOMER: &str = "DELETE FROM customer WHERE id = $1";

/// Opens a connection pool sized from the configuration.
///
/// # Errors
///
/// Returns [`ApiError::Persistence`] if the database is unreachable
/// within the configured acquire timeout.
pub async fn connect_pool(config: &ApiConfig) -> Result<PgPool, ApiError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(config.database_connect_timeout())
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

/// PostgreSQL-backed customer store using `sqlx::PgPool`.
///
/// Every call issues one parameterized statement. Atomicity and
/// isolation are whatever the database provides for a single statement.
#[derive(Debug, Clone)]
pub struct PostgresCustomerStore {
    pool: PgPool,
}

impl PostgresCustomerStore {
    /// Creates a store over the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for PostgresCustomerStore {
    async fn add(&self, first_name: &str, last_name: &str) -> Result<(), ApiError> {
        sqlx::query(INSERT_CUSTOMER)
            .bind(first_name)
            .bind(last_name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find(&self) -> Result<Vec<Customer>, ApiError> {
        let rows = sqlx::query_as::<_, (i64, String, String)>(SELECT_CUSTOMERS)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, first_name, last_name)| Customer {
                id: CustomerId::new(id),
                first_name,
                last_name,
            })
            .collect())
    }

    async fn update(
        &self,
        id: CustomerId,
        first_name: &str,
        last_name: &str,
    ) -> Result<(), ApiError> {
        let result = sqlx::query(UPDATE_CUSTOMER)
            .bind(first_name)
            .bind(last_name)
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        tracing::debug!(%id, rows = result.rows_affected(), "customer update executed");
        Ok(())
    }

    async fn delete(&self, id: CustomerId) -> Result<(), ApiError> {
        let result = sqlx::query(DELETE_CUSTOMER)
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        tracing::debug!(%id, rows = result.rows_affected(), "customer delete executed");
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
