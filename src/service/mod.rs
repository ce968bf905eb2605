//! Service layer: customer operations.
//!
//! [`CustomerService`] is the contract handlers call. It forwards to a
//! [`super::persistence::CustomerStore`] and adds nothing but logging.

pub mod customer_service;

pub use customer_service::CustomerService;
