//! Struct emission.
//!
//! - [`FieldRow`] - one rendered field, derived from a column
//! - [`StructSpec`] - a struct ready for rendering
//! - [`StructEmitter`] - turns column descriptors into source text

mod emitter;
mod spec;

pub use emitter::StructEmitter;
pub use spec::{FieldRow, StructSpec};
