//! Error codes for the dog BFF API.
//!
//! Every `AppError` carries one of these. Codes never reach the response
//! body (which is a fixed human-readable line) but are logged with each
//! failed request so operators can tell failures apart.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Body was not valid JSON for the expected shape
    InvalidBody,
    /// Referenced breed could not be confirmed
    UnknownBreed,
    /// Birth date not in `YYYY-MM-DD`
    InvalidBirthDate,
    /// General bad request error
    BadRequest,
    /// HTTP method not supported on this resource
    MethodNotAllowed,

    // Resource Not Found
    BreedNotFound,
    PetNotFound,
    /// General not found error
    NotFound,

    // System Errors
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,
    /// Foreign key constraint violation
    FkViolation,
    /// Stored data failed to map onto domain records
    DataCorruption,
    /// Pet insert failed
    PetCreateFailed,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidBody => "INVALID_BODY",
            Self::UnknownBreed => "UNKNOWN_BREED",
            Self::InvalidBirthDate => "INVALID_BIRTH_DATE",
            Self::BadRequest => "BAD_REQUEST",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",

            Self::BreedNotFound => "BREED_NOT_FOUND",
            Self::PetNotFound => "PET_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::FkViolation => "FK_VIOLATION",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::PetCreateFailed => "PET_CREATE_FAILED",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
