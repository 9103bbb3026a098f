//! Domain-level error type returned by the store contract.
//!
//! This error type is HTTP- and DB-agnostic. Store implementations translate
//! their backend failures into it; handlers convert it into
//! `crate::error::AppError` via the provided `From<DomainError> for AppError`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    DataCorruption,
    Other(String),
}

/// Entity that a lookup failed to find
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Breed,
    Pet,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(String),
    /// No entity matches the requested key
    NotFound(NotFoundKind, String),
    /// A write referenced a row that does not exist
    ForeignKeyViolation(String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(d) => write!(f, "validation error: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::ForeignKeyViolation(d) => write!(f, "foreign key violation: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn foreign_key_violation(detail: impl Into<String>) -> Self {
        Self::ForeignKeyViolation(detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    pub fn breed_not_found(id: &str) -> Self {
        Self::not_found(NotFoundKind::Breed, format!("Breed {id} not found"))
    }

    pub fn pet_not_found(id: &str) -> Self {
        Self::not_found(NotFoundKind::Pet, format!("Pet {id} not found"))
    }

    /// True for any `NotFound`, regardless of entity or detail text.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(..))
    }

    /// Prefix the detail with caller context, keeping the kind intact.
    pub fn context(self, ctx: impl Display) -> Self {
        match self {
            DomainError::Validation(d) => DomainError::Validation(format!("{ctx}: {d}")),
            DomainError::NotFound(k, d) => DomainError::NotFound(k, format!("{ctx}: {d}")),
            DomainError::ForeignKeyViolation(d) => {
                DomainError::ForeignKeyViolation(format!("{ctx}: {d}"))
            }
            DomainError::Infra(k, d) => DomainError::Infra(k, format!("{ctx}: {d}")),
        }
    }
}
