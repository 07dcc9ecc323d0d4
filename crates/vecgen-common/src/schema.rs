//! Scalar type and vector width tables.
//!
//! The table drives which (type, width) combinations the generators
//! enumerate. It is loaded from `types.toml` and handed to a generator at
//! construction, so tests can substitute a reduced table instead of
//! relying on ambient global state.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::GenError;

/// A scalar element type under test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalarType {
    /// Identifier-safe name, used on the CLI and in generated symbols
    pub name: String,
    /// Spelling emitted into generated code (e.g. "unsigned long long")
    pub cxx: String,
    /// Literal used as the example element value
    pub default: String,
}

/// Scalar type definitions plus the supported vector widths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeTable {
    /// Supported vector widths, ascending
    pub widths: Vec<u32>,
    /// All scalar type definitions
    pub scalar: Vec<ScalarType>,
}

impl TypeTable {
    /// Load a table from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GenError> {
        let contents = fs::read_to_string(path)?;
        let table: TypeTable = toml::from_str(&contents)?;
        Ok(table)
    }

    /// Load the default table from types.toml.
    pub fn load_default() -> Result<Self, GenError> {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("types.toml");
        Self::from_file(path)
    }

    /// Find a scalar type by name.
    pub fn find(&self, name: &str) -> Option<&ScalarType> {
        self.scalar.iter().find(|ty| ty.name == name)
    }

    /// Names of all scalar types, in table order.
    pub fn type_names(&self) -> Vec<String> {
        self.scalar.iter().map(|ty| ty.name.clone()).collect()
    }

    /// Supported vector widths, in table order.
    pub fn widths(&self) -> &[u32] {
        &self.widths
    }
}
