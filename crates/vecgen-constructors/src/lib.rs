//! Conformance test generator for short-vector constructors.
//!
//! For one scalar type, renders a default, explicit-scalar and vector-copy
//! constructor test for every supported vector width, then merges the
//! generated test functions and call sites with a code template into a
//! single source file.

mod templates;

pub mod generator;

pub use generator::{ConstructorGenerator, TEST_NAME};
