//! Schema model and configuration for dbstruct.
//!
//! - [`ColumnDescriptor`] - one row of `DESCRIBE <table>`
//! - [`TypeCategory`] - classification of raw type declarations
//! - [`Config`] - the `dbstruct.toml` configuration file
//! - [`SchemaFile`] - offline table descriptions

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod column;
pub mod config;
mod error;
mod language;
mod schema_file;
mod sql_type;

pub use column::{ColumnDescriptor, TableMap, is_nullable_marker};
pub use config::{Config, ConfigFile};
pub use error::{Error, Result, SourceContext, validate_identifier};
pub use language::Language;
pub use schema_file::{ColumnRow, SchemaFile, TableEntry, parse_schema_file};
pub use sql_type::{IntWidth, TypeCategory, clean_type};
