//! Language-specific type mappers and struct layouts.

mod go;
mod rust;

pub use go::{GoLayout, GoTypeMapper};
pub use rust::{RustLayout, RustTypeMapper};
