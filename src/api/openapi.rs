//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use crate::api::dto::{CustomerDto, CustomerListResponse, CustomerRequest, MessageResponse};
use crate::api::handlers::{customer, system};
use crate::domain::CustomerId;
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI specification for all endpoints.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "customer-api", description = "CRUD service for customer records"),
    paths(
        customer::create_customer,
        customer::list_customers,
        customer::update_customer,
        customer::delete_customer,
        system::health_handler,
    ),
    components(schemas(
        CustomerId,
        CustomerDto,
        CustomerRequest,
        CustomerListResponse,
        MessageResponse,
        ErrorResponse,
        ErrorBody,
        system::HealthResponse,
    )),
    tags(
        (name = "Customers", description = "Customer CRUD"),
        (name = "System", description = "Operational endpoints"),
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/swagger-ui`, backed by `/api-docs/openapi.json`.
#[cfg(feature = "swagger-ui")]
#[must_use]
pub fn swagger_ui() -> utoipa_swagger_ui::SwaggerUi {
    utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
