//! Error types for the ERP Engine.
//!
//! The taxonomy is intentionally small: most invalid inputs are
//! normalised rather than rejected (unknown permission keys resolve
//! to deny, out-of-range page numbers to an empty page).  Only inputs
//! that would silently produce nonsense fail.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("invalid {field}: {value} (must not be negative)")]
    InvalidRate { field: &'static str, value: f64 },
}

pub type EngineResult<T> = Result<T, EngineError>;
