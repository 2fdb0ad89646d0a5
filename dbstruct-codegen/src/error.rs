use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmitError>;

/// Errors produced while emitting struct definitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    #[error("table `{table}` has no columns")]
    EmptyTable { table: String },
}
