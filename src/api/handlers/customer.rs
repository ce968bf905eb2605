//! Customer CRUD handlers: create, list, update, delete.
//!
//! Mutating endpoints always answer `{"message":"success"}` once the store
//! call returns, including update or delete of an id with no row.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::{post, put};
use axum::{Json, Router};

use crate::api::dto::{CustomerDto, CustomerListResponse, CustomerRequest, MessageResponse};
use crate::app_state::AppState;
use crate::domain::CustomerId;
use crate::error::{ApiError, ErrorResponse};

/// `POST /customers` — Insert a customer.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] on a malformed body and
/// [`ApiError::Persistence`] if the insert fails.
#[utoipa::path(
    post,
    path = "/customers",
    tag = "Customers",
    summary = "Create a customer",
    description = "Inserts a row with the given names. The id is assigned by the store; call `GET /customers` to observe it.",
    request_body = CustomerRequest,
    responses(
        (status = 200, description = "Customer stored", body = MessageResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    body: Result<Json<CustomerRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    state
        .customer_service
        .create(&req.first_name, &req.last_name)
        .await?;
    Ok(Json(MessageResponse::success()))
}

/// `GET /customers` — List every customer.
///
/// # Errors
///
/// Returns [`ApiError::Persistence`] if the query fails.
#[utoipa::path(
    get,
    path = "/customers",
    tag = "Customers",
    summary = "List customers",
    description = "Returns all customers in store order. No pagination, filtering or sorting.",
    responses(
        (status = 200, description = "All customers", body = CustomerListResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<CustomerListResponse>, ApiError> {
    let customers = state
        .customer_service
        .list()
        .await?
        .into_iter()
        .map(CustomerDto::from)
        .collect();
    Ok(Json(CustomerListResponse { customers }))
}

/// `PUT /customers/{id}` — Replace both names of a customer.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] on a non-integer id or malformed
/// body and [`ApiError::Persistence`] if the update fails.
#[utoipa::path(
    put,
    path = "/customers/{id}",
    tag = "Customers",
    summary = "Update a customer",
    description = "Replaces `first_name` and `last_name` of the customer. An unknown id changes nothing and still succeeds.",
    params(
        ("id" = i64, Path, description = "Customer id"),
    ),
    request_body = CustomerRequest,
    responses(
        (status = 200, description = "Update applied (or no matching row)", body = MessageResponse),
        (status = 400, description = "Malformed id or body", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    id: Result<Path<CustomerId>, PathRejection>,
    body: Result<Json<CustomerRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let Json(req) = body.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    state
        .customer_service
        .update(id, &req.first_name, &req.last_name)
        .await?;
    Ok(Json(MessageResponse::success()))
}

/// `DELETE /customers/{id}` — Remove a customer.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] on a non-integer id and
/// [`ApiError::Persistence`] if the delete fails.
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = "Customers",
    summary = "Delete a customer",
    description = "Removes the customer permanently. An unknown id changes nothing and still succeeds.",
    params(
        ("id" = i64, Path, description = "Customer id"),
    ),
    responses(
        (status = 200, description = "Delete applied (or no matching row)", body = MessageResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    id: Result<Path<CustomerId>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    state.customer_service.delete(id).await?;
    Ok(Json(MessageResponse::success()))
}

/// Customer routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/customers", post(create_customer).get(list_customers))
        .route("/customers/{id}", put(update_customer).delete(delete_customer))
}
