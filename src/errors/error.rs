use serde::Serialize;
use utoipa::ToSchema;

/// JSON body for every non-success response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}
