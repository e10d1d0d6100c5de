//! Error types for the crate.
//!
//! Registry operations are total by contract: lifecycle races (dead
//! emitters, no-match filters, missing emitters) are absorbed as no-ops, not
//! surfaced. The only fallible surface is parsing the string-encoded values
//! the configuration dialog persists.

use thiserror::Error;

/// Error parsing a persisted settings value.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("missing '::' separator in {0:?}")]
    MissingSeparator(String),

    #[error("unknown orientation: {0:?}")]
    UnknownOrientation(String),

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(#[from] std::num::ParseIntError),
}

/// Result type for settings parsing.
pub type Result<T> = std::result::Result<T, SettingsError>;
