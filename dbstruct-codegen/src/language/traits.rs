//! Language-agnostic code generation traits.

use dbstruct_schema::{ColumnDescriptor, Language, TypeCategory};

use crate::{builder::ImportCollector, emit::FieldRow};

/// Trait for mapping column types to language-specific type strings.
///
/// Implement this trait for each target language to provide type mappings.
pub trait TypeMapper {
    /// The target language
    fn language(&self) -> Language;

    /// Map a base type category to a language-specific type string
    fn map_category(&self, category: TypeCategory) -> &'static str;

    /// Wrap a type for a nullable column (e.g., `*T` in Go, `Option<T>` in Rust)
    fn map_optional(&self, inner: &str) -> String;

    /// Module that must be imported to use a category, if any
    fn import_for(&self, _category: TypeCategory) -> Option<&'static str> {
        None
    }

    /// Resolve the full type of a column, applying the nullable wrapper.
    fn resolve(&self, column: &ColumnDescriptor) -> String {
        let base = self.map_category(column.category());
        if column.nullable {
            self.map_optional(base)
        } else {
            base.to_string()
        }
    }
}

/// Column widths shared by every row of a struct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Widths {
    /// Longest field name
    pub name: usize,
    /// Longest resolved type
    pub ty: usize,
    /// Longest serialization tag (0 without tags)
    pub tag: usize,
}

/// Trait for the textual layout of a generated struct and its file.
pub trait StructLayout {
    /// Opening line of the struct declaration. `tagged` is set when any
    /// field carries a serialization tag.
    fn header(&self, type_name: &str, tagged: bool) -> String;

    /// One field line, without indentation or newline.
    fn field(&self, row: &FieldRow, widths: Widths) -> String;

    /// Closing line of the struct declaration.
    fn footer(&self) -> &'static str {
        "}"
    }

    /// File preamble naming the package/module and listing imports.
    fn file_header(&self, package: &str, imports: &ImportCollector) -> String;
}
