//! Customer request and response bodies.
//!
//! Request keys are snake_case while customer objects in responses use
//! camelCase; existing clients depend on both shapes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Customer, CustomerId};

/// Request body for `POST /customers` and `PUT /customers/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerRequest {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

/// A customer as rendered by `GET /customers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    /// Store-assigned identifier.
    pub id: CustomerId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl From<Customer> for CustomerDto {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            first_name: c.first_name,
            last_name: c.last_name,
        }
    }
}

/// Response body for `GET /customers`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerListResponse {
    /// All customers in store order.
    pub customers: Vec<CustomerDto>,
}

/// Acknowledgement returned by every mutating endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Always `"success"`.
    pub message: String,
}

impl MessageResponse {
    /// The fixed `{"message":"success"}` body.
    #[must_use]
    pub fn success() -> Self {
        Self {
            message: "success".to_string(),
        }
    }
}
