//! Struct code generation for dbstruct.
//!
//! This crate turns MySQL column descriptors into struct definitions for a
//! target language.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, ImportCollector)
//! - [`language`] - Language abstractions (TypeMapper, StructLayout, NamingConvention)
//! - [`mappers`] - Go and Rust implementations of the language traits
//! - [`emit`] - Struct emission (StructEmitter, StructSpec, FieldRow)

pub mod builder;
pub mod emit;
mod error;
pub mod language;
pub mod mappers;

pub use emit::{FieldRow, StructEmitter, StructSpec};
pub use error::{EmitError, Result};
pub use language::LanguageSupport;
