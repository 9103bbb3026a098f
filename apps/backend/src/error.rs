use actix_web::error::ResponseError;
use actix_web::http::header::{self, HeaderValue};
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;
use tracing::error;

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::errors::ErrorCode;
use crate::trace_ctx;

/// Public message for every 500 that has no more specific wording.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// HTTP-facing error. `detail` is the exact single line the caller sees;
/// causes are logged where the error is produced, never rendered.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Internal error: {detail}")]
    Internal { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::BadRequest { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::MethodNotAllowed => ErrorCode::MethodNotAllowed,
            AppError::Internal { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// The line written to the response body (without the trailing newline).
    pub fn public_message(&self) -> &str {
        match self {
            AppError::BadRequest { detail, .. } => detail,
            AppError::NotFound { detail, .. } => detail,
            AppError::MethodNotAllowed => "Method Not Allowed",
            AppError::Internal { detail, .. } => detail,
            AppError::Config { .. } => INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Internal {
            code,
            detail: detail.into(),
        }
    }

    pub fn method_not_allowed() -> Self {
        Self::MethodNotAllowed
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

/// Only `NotFound` is classified; every other store failure is logged here
/// and collapsed into an opaque 500.
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotFound(NotFoundKind::Breed, _) => {
                AppError::not_found(ErrorCode::BreedNotFound, "Breed not found")
            }
            DomainError::NotFound(NotFoundKind::Pet, _) => {
                AppError::not_found(ErrorCode::PetNotFound, "Pet not found")
            }
            DomainError::NotFound(_, _) => AppError::not_found(ErrorCode::NotFound, "Not found"),
            DomainError::Validation(detail) => {
                AppError::bad_request(ErrorCode::BadRequest, detail.clone())
            }
            DomainError::ForeignKeyViolation(_) => {
                error!(trace_id = %trace_ctx::trace_id(), error = %err, "store rejected foreign key");
                AppError::internal(ErrorCode::FkViolation, INTERNAL_SERVER_ERROR)
            }
            DomainError::Infra(kind, _) => {
                let code = match kind {
                    InfraErrorKind::DbUnavailable => ErrorCode::DbUnavailable,
                    InfraErrorKind::Timeout => ErrorCode::DbTimeout,
                    InfraErrorKind::DataCorruption => ErrorCode::DataCorruption,
                    _ => ErrorCode::Internal,
                };
                error!(trace_id = %trace_ctx::trace_id(), code = %code, error = %err, "store operation failed");
                AppError::internal(code, INTERNAL_SERVER_ERROR)
            }
        }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::config(format!("env var error: {e}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status())
            .content_type("text/plain; charset=utf-8")
            .insert_header((
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .insert_header(("x-error-code", self.code().as_str()))
            .body(format!("{}\n", self.public_message()))
    }
}
