use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps each failure to an HTTP status code and formats it as a JSON body,
/// so every endpoint reports errors in the same shape.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed identity in a path parameter
    InvalidId(String),
    /// No employee stored under the requested identity
    EmployeeNotFound(Uuid),
    /// Storage operation error
    StorageError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidId(id) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid id: expected a UUID, got '{}'", id),
            ),
            ApiError::EmployeeNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Could not find employee {}", id),
            ),
            ApiError::StorageError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Storage error: {}", err),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::StorageError(err)
    }
}
