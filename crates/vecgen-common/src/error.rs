//! Errors shared by the test generators.

use thiserror::Error;

/// Errors that can occur while generating a test source file.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("unknown scalar type: {0}")]
    UnknownType(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid type table: {0}")]
    Schema(#[from] toml::de::Error),
}
