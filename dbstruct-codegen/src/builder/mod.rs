//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Consuming builder for indented source lines
//! - [`Indent`] - Indentation configuration
//! - [`ImportCollector`] - Deduplicated, sorted import list

mod code_builder;
mod imports;
mod indent;

pub use code_builder::CodeBuilder;
pub use imports::ImportCollector;
pub use indent::Indent;
