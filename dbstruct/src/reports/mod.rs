//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod describe;
mod generate;
mod output;
mod tables;

pub use describe::{ColumnInfo, DescribeReport};
pub use generate::{GenerateReport, GenerationResult, PreviewResult, TableSummary, WrittenResult};
pub use output::{Report, TerminalOutput};
pub use tables::TablesReport;

#[cfg(test)]
pub(crate) use output::testing;
