//! The customer entity.

use super::CustomerId;

/// A persisted customer row.
///
/// `first_name` and `last_name` carry no length or charset constraint;
/// an update replaces both together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Store-assigned primary key.
    pub id: CustomerId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl Customer {
    /// Builds a customer from its parts.
    #[must_use]
    pub fn new(
        id: CustomerId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// The two rows shipped in `sql/data.sql`.
#[must_use]
pub fn sample_customers() -> Vec<Customer> {
    vec![
        Customer::new(CustomerId::new(1), "Alice", "Sample1"),
        Customer::new(CustomerId::new(2), "Bob", "Sample2"),
    ]
}
