//! Core operations.
//!
//! This module contains the business logic for dbstruct commands,
//! separated from CLI argument parsing and output rendering.

pub mod describe;
pub mod generate;

pub use describe::describe;
pub use generate::{GenerateOptions, generate, select_tables};
