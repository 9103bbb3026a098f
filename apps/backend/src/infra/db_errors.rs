//! SeaORM -> DomainError translation helpers.
//!
//! `SqlStore` converts every `sea_orm::DbErr` through `map_db_err`; higher
//! layers then map `DomainError` to `AppError` via `From`. Raw driver text is
//! logged here and never copied into the returned detail.

use tracing::{error, warn};

use crate::adapters::pets_sea::DATA_CORRUPTION_PREFIX;
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

/// Driver-classified FK violation, with a text fallback for errors that
/// reach us already stringified.
fn is_fk_violation(e: &sea_orm::DbErr, msg: &str) -> bool {
    matches!(
        e.sql_err(),
        Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_))
    ) || msg.contains("SQLSTATE(23503)")
        || msg.contains("violates foreign key constraint")
        || msg.contains("FOREIGN KEY constraint failed")
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with(DATA_CORRUPTION_PREFIX) => {
            error!(trace_id = %trace_id, raw_error = %msg, "Stored rows failed integrity check");
            return DomainError::infra(
                InfraErrorKind::DataCorruption,
                "Stored data is inconsistent",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        sea_orm::DbErr::Type(_) | sea_orm::DbErr::TryIntoErr { .. } => {
            error!(trace_id = %trace_id, raw_error = %error_msg, "Row did not match the expected shape");
            return DomainError::infra(InfraErrorKind::DataCorruption, "Malformed row");
        }
        _ => {}
    }

    if is_fk_violation(&e, &error_msg) {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::foreign_key_violation("Foreign key constraint violation");
    }

    if error_msg.contains("timeout")
        || error_msg.contains("pool")
        || error_msg.contains("unavailable")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Database timeout or pool issue");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}
