//! HTTP adapter mapping for store errors.
//!
//! Stores return typed `StoreError`s; this module alone decides status codes
//! and the failure envelope. Persistence details are logged, never sent to
//! clients.

use actix_web::error::{BlockingError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;
use tracing::error;

use stockroom_core::StoreError;

use super::envelope::Envelope;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 400 with an optional list of per-field problems
    #[error("{message}")]
    BadRequest {
        message: String,
        errors: Vec<String>,
    },

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn validation(errors: Vec<String>) -> Self {
        ApiError::BadRequest {
            message: "Validation failed".to_string(),
            errors,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            StoreError::InvalidInput(errors) => ApiError::validation(errors),
            StoreError::IdsExhausted => {
                error!(error = %err, "create rejected");
                ApiError::Internal
            }
            StoreError::Persistence(e) => {
                error!(error = %e, "data file write failed; change was not saved");
                ApiError::Internal
            }
        }
    }
}

impl From<BlockingError> for ApiError {
    fn from(err: BlockingError) -> Self {
        error!(error = %err, "store call did not complete");
        ApiError::Internal
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let errors = match self {
            ApiError::BadRequest { errors, .. } if !errors.is_empty() => Some(errors.clone()),
            _ => None,
        };

        HttpResponse::build(self.status_code()).json(Envelope::failure(self.to_string(), errors))
    }
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest {
        message: "Invalid request body".to_string(),
        errors: vec![err.to_string()],
    }
    .into()
}

pub fn path_error_handler(_err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::bad_request("Validation failed (numeric string is expected)").into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest {
        message: "Invalid query string".to_string(),
        errors: vec![err.to_string()],
    }
    .into()
}
