//! Domain layer: the customer entity and its identifier.

pub mod customer;
pub mod customer_id;

pub use customer::{Customer, sample_customers};
pub use customer_id::CustomerId;
