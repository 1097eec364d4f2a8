//! HTTP response handling for errors

use super::types::DispatchError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for DispatchError {
    fn status_code(&self) -> StatusCode {
        match self {
            DispatchError::Parse(_)
            | DispatchError::Validation(_)
            | DispatchError::UnsupportedType(_)
            | DispatchError::NoAgents
            | DispatchError::BadRequest(_) => StatusCode::BAD_REQUEST,
            DispatchError::NotFound(_) => StatusCode::NOT_FOUND,
            DispatchError::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (code, message) = match self {
            DispatchError::Parse(_) => ("PARSE_ERROR", self.to_string()),
            DispatchError::Validation(_) => ("VALIDATION_ERROR", self.to_string()),
            DispatchError::UnsupportedType(_) => ("UNSUPPORTED_TYPE", self.to_string()),
            DispatchError::NoAgents => ("NO_AGENTS", self.to_string()),
            DispatchError::NotFound(_) => ("NOT_FOUND", self.to_string()),
            DispatchError::BadRequest(_) => ("BAD_REQUEST", self.to_string()),
            DispatchError::Conflict(_) => ("CONFLICT", self.to_string()),
            DispatchError::Database(_) => {
                ("DATABASE_ERROR", "Database operation failed".to_string())
            }
            _ => ("INTERNAL_ERROR", "An internal error occurred".to_string()),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            message,
            code: code.to_string(),
        })
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message for the administrator
    pub message: String,
    /// Stable machine-readable error code
    pub code: String,
}
