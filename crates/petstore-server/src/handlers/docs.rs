//! API description handler.

use axum::Json;

use crate::openapi::{openapi_document, OpenApiDocument};
use crate::routes::PET_ROUTES;

/// Serves the OpenAPI document generated from the route table.
///
/// `GET /openapi.json`
pub async fn openapi_json() -> Json<OpenApiDocument> {
    Json(openapi_document(PET_ROUTES))
}
