//! Persistence layer: the customer store boundary.
//!
//! [`CustomerStore`] is the contract the service layer talks to. Each
//! method maps to exactly one statement against the `customer` table.
//! [`PostgresCustomerStore`] is the durable backend; [`InMemoryCustomerStore`]
//! mirrors its semantics without a database for development and tests.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

pub use memory::InMemoryCustomerStore;
pub use postgres::{PostgresCustomerStore, connect_pool};

use crate::domain::{Customer, CustomerId};
use crate::error::ApiError;

/// Storage contract for customer rows.
///
/// Implementations hold no request-scoped state. `update` and `delete`
/// against an id with no row succeed without changing anything.
#[async_trait]
pub trait CustomerStore: Send + Sync + std::fmt::Debug {
    /// Inserts a new row; the store assigns the id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] if the statement fails.
    async fn add(&self, first_name: &str, last_name: &str) -> Result<(), ApiError>;

    /// Returns every row in the table.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] if the statement fails.
    async fn find(&self) -> Result<Vec<Customer>, ApiError>;

    /// Replaces both name fields of the row with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] if the statement fails.
    async fn update(
        &self,
        id: CustomerId,
        first_name: &str,
        last_name: &str,
    ) -> Result<(), ApiError>;

    /// Removes the row with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] if the statement fails.
    async fn delete(&self, id: CustomerId) -> Result<(), ApiError>;

    /// Short backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;
}
