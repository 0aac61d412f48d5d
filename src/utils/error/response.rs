//! HTTP response handling for errors

use super::types::ServiceError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

/// Message returned when waiting for the processing units was cut short
pub const PROCESSING_INTERRUPTED_MESSAGE: &str = "Processing was interrupted.";

/// Message returned for any other failure of the bulk processing operation
pub const PROCESSING_FAILED_MESSAGE: &str = "An error occurred while processing the items.";

impl ServiceError {
    /// Status code, machine-readable code and client-facing message for this error
    fn response_parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            ServiceError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                self.to_string(),
            ),
            ServiceError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "Database operation failed".to_string(),
            ),
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()),
            ServiceError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", self.to_string())
            }
            ServiceError::StoreUnavailable(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PROCESSING_ERROR",
                PROCESSING_FAILED_MESSAGE.to_string(),
            ),
            ServiceError::Interrupted(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PROCESSING_INTERRUPTED",
                PROCESSING_INTERRUPTED_MESSAGE.to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        self.response_parts().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = self.response_parts();

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}
