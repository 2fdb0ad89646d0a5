//! Core utilities for dbstruct.
//!
//! This crate provides the identifier normalization and file output
//! primitives shared by the rest of the workspace.

mod file;
mod naming;

// File operations
pub use file::{OutputFile, WriteMode, WriteResult};
// String utilities
pub use naming::{normalize, to_camel_case, to_pascal_case, to_snake_case};
