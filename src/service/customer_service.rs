//! Customer service: the operations exposed to the transport layer.

use std::sync::Arc;

use crate::domain::{Customer, CustomerId};
use crate::error::ApiError;
use crate::persistence::CustomerStore;

/// Pass-through coordinator over a [`CustomerStore`].
///
/// Each method forwards exactly one call to the store and returns its
/// result unchanged. Store failures propagate to the caller.
#[derive(Debug, Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    /// Creates a new `CustomerService` over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    /// Returns the backend name of the underlying store.
    #[must_use]
    pub fn store_backend(&self) -> &'static str {
        self.store.backend()
    }

    /// Persists a new customer. The store assigns the id.
    ///
    /// # Errors
    ///
    /// Returns the store's [`ApiError`] if the insert fails.
    pub async fn create(&self, first_name: &str, last_name: &str) -> Result<(), ApiError> {
        self.store.add(first_name, last_name).await?;
        tracing::info!(first_name, last_name, "customer created");
        Ok(())
    }

    /// Returns all persisted customers in store order.
    ///
    /// # Errors
    ///
    /// Returns the store's [`ApiError`] if the query fails.
    pub async fn list(&self) -> Result<Vec<Customer>, ApiError> {
        self.store.find().await
    }

    /// Replaces the names of the customer with `id`. A missing id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns the store's [`ApiError`] if the update fails.
    pub async fn update(
        &self,
        id: CustomerId,
        first_name: &str,
        last_name: &str,
    ) -> Result<(), ApiError> {
        self.store.update(id, first_name, last_name).await?;
        tracing::info!(%id, first_name, last_name, "customer updated");
        Ok(())
    }

    /// Removes the customer with `id`. A missing id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns the store's [`ApiError`] if the delete fails.
    pub async fn delete(&self, id: CustomerId) -> Result<(), ApiError> {
        self.store.delete(id).await?;
        tracing::info!(%id, "customer deleted");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::domain::sample_customers;
    use crate::persistence::InMemoryCustomerStore;

    #[derive(Debug)]
    struct FailingStore;

    #[async_trait]
    impl CustomerStore for FailingStore {
        async fn add(&self, _: &str, _: &str) -> Result<(), ApiError> {
            Err(ApiError::Persistence("connection refused".to_string()))
        }

        async fn find(&self) -> Result<Vec<Customer>, ApiError> {
            Err(ApiError::Persistence("connection refused".to_string()))
        }

        async fn update(&self, _: CustomerId, _: &str, _: &str) -> Result<(), ApiError> {
            Err(ApiError::Persistence("connection refused".to_string()))
        }

        async fn delete(&self, _: CustomerId) -> Result<(), ApiError> {
            Err(ApiError::Persistence("connection refused".to_string()))
        }

        fn backend(&self) -> &'static str {
            "failing"
        }
    }

    fn make_service() -> CustomerService {
        CustomerService::new(Arc::new(InMemoryCustomerStore::new()))
    }

    async fn list(service: &CustomerService) -> Vec<Customer> {
        let Ok(rows) = service.list().await else {
            panic!("list failed");
        };
        rows
    }

    #[tokio::test]
    async fn create_then_list_shows_new_entry() {
        let service = make_service();
        assert!(service.create("Grace", "Hopper").await.is_ok());

        let rows = list(&service).await;
        assert_eq!(rows.len(), 1);
        let Some(row) = rows.first() else {
            panic!("expected a row");
        };
        assert_eq!(row.first_name, "Grace");
        assert_eq!(row.last_name, "Hopper");
    }

    #[tokio::test]
    async fn create_assigns_fresh_ids() {
        let service = make_service();
        for _ in 0..3 {
            let _ = service.create("same", "name").await;
        }
        let ids: Vec<CustomerId> = list(&service).await.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![CustomerId::new(1), CustomerId::new(2), CustomerId::new(3)]);
    }

    #[tokio::test]
    async fn update_keeps_id() {
        let service = CustomerService::new(Arc::new(InMemoryCustomerStore::with_customers(
            sample_customers(),
        )));
        assert!(service.update(CustomerId::new(1), "Alicia", "Renamed").await.is_ok());

        let rows = list(&service).await;
        assert!(rows.contains(&Customer::new(CustomerId::new(1), "Alicia", "Renamed")));
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn delete_then_list_omits_id() {
        let service = CustomerService::new(Arc::new(InMemoryCustomerStore::with_customers(
            sample_customers(),
        )));
        assert!(service.delete(CustomerId::new(2)).await.is_ok());

        let rows = list(&service).await;
        assert!(rows.iter().all(|c| c.id != CustomerId::new(2)));
    }

    #[tokio::test]
    async fn store_failures_propagate() {
        let service = CustomerService::new(Arc::new(FailingStore));
        assert!(matches!(
            service.create("a", "b").await,
            Err(ApiError::Persistence(_))
        ));
        assert!(service.list().await.is_err());
        assert!(service.update(CustomerId::new(1), "a", "b").await.is_err());
        assert!(service.delete(CustomerId::new(1)).await.is_err());
        assert_eq!(service.store_backend(), "failing");
    }
}
