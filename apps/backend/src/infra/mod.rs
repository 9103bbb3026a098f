//! Infrastructure layer - database bootstrap, error translation, state building.

pub mod db;
pub mod db_errors;
pub mod state;
