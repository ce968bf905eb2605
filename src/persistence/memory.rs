//! Non-durable customer store for development and tests.
//!
//! Rows live in a `BTreeMap` behind a [`tokio::sync::RwLock`], so `find`
//! always returns customers in ascending id order. Ids come from a
//! monotonic counter and are never reused after a delete, matching a
//! `BIGSERIAL` column.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::CustomerStore;
use crate::domain::{Customer, CustomerId};
use crate::error::ApiError;

#[derive(Debug)]
struct Table {
    rows: BTreeMap<CustomerId, Customer>,
    next_id: i64,
}

/// In-memory customer store.
#[derive(Debug)]
pub struct InMemoryCustomerStore {
    table: RwLock<Table>,
}

impl InMemoryCustomerStore {
    /// Creates an empty store. The first inserted customer gets id 1.
    #[must_use]
    pub fn new() -> Self {
        Self::with_customers(Vec::new())
    }

    /// Creates a store pre-populated with existing rows.
    ///
    /// Later inserts continue after the largest seeded id. A duplicate id
    /// in `customers` keeps the last occurrence.
    #[must_use]
    pub fn with_customers(customers: impl IntoIterator<Item = Customer>) -> Self {
        let rows: BTreeMap<CustomerId, Customer> =
            customers.into_iter().map(|c| (c.id, c)).collect();
        let next_id = rows
            .keys()
            .next_back()
            .map_or(1, |id| id.get().saturating_add(1));
        Self {
            table: RwLock::new(Table { rows, next_id }),
        }
    }

    /// Returns the number of stored customers.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Returns `true` if the store holds no customers.
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }
}

impl Default for InMemoryCustomerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn add(&self, first_name: &str, last_name: &str) -> Result<(), ApiError> {
        let mut table = self.table.write().await;
        let id = CustomerId::new(table.next_id);
        table.next_id = table
            .next_id
            .checked_add(1)
            .ok_or_else(|| ApiError::Persistence("customer id sequence exhausted".to_string()))?;
        table.rows.insert(id, Customer::new(id, first_name, last_name));
        Ok(())
    }

    async fn find(&self) -> Result<Vec<Customer>, ApiError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn update(
        &self,
        id: CustomerId,
        first_name: &str,
        last_name: &str,
    ) -> Result<(), ApiError> {
        let mut table = self.table.write().await;
        if let Some(row) = table.rows.get_mut(&id) {
            row.first_name = first_name.to_string();
            row.last_name = last_name.to_string();
        }
        Ok(())
    }

    async fn delete(&self, id: CustomerId) -> Result<(), ApiError> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
