//! SeaORM query functions, one module per table.
//!
//! Adapter functions return `DbErr`; `SqlStore` maps to `DomainError` via
//! `infra::db_errors::map_db_err`.

pub mod breeds_sea;
pub mod pets_sea;
