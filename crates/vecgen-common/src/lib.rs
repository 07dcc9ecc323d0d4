//! Shared tables and helpers for the conformance test generators.
//!
//! Each generator enumerates (scalar type, vector width) combinations from
//! a [`schema::TypeTable`], wraps rendered test bodies with the kernel and
//! test-function scaffolding in [`wrap`], and persists the result through
//! [`emit`].

pub mod emit;
pub mod error;
pub mod schema;
pub mod wrap;

pub use error::GenError;
pub use schema::{ScalarType, TypeTable};
