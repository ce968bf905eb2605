//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::CustomerService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Customer operations.
    pub customer_service: Arc<CustomerService>,
}

impl AppState {
    /// Wraps a service into handler state.
    #[must_use]
    pub fn new(customer_service: CustomerService) -> Self {
        Self {
            customer_service: Arc::new(customer_service),
        }
    }
}
