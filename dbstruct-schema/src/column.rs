//! Column descriptors as reported by `DESCRIBE <table>`.

use indexmap::IndexMap;

use crate::TypeCategory;

/// Tables in emission order, each with its columns in declaration order.
pub type TableMap = IndexMap<String, Vec<ColumnDescriptor>>;

/// Metadata for a single table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Column identifier
    pub name: String,
    /// Raw type declaration (e.g. `varchar(255)`, `bigint unsigned`)
    pub sql_type: String,
    /// Whether the column accepts NULL
    pub nullable: bool,
    /// Key role (`PRI`, `UNI`, `MUL` or empty). Advisory only.
    pub key: String,
    /// Column default, if any. Advisory only.
    pub default: Option<String>,
    /// Extra metadata (e.g. `auto_increment`). Advisory only.
    pub extra: String,
}

impl ColumnDescriptor {
    /// Create a non-nullable column with no key, default or extra metadata.
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            nullable: false,
            key: String::new(),
            default: None,
            extra: String::new(),
        }
    }

    /// Build a descriptor from the six columns of a `DESCRIBE` row.
    pub fn from_describe_row(
        field: impl Into<String>,
        ty: impl Into<String>,
        null: &str,
        key: impl Into<String>,
        default: Option<String>,
        extra: impl Into<String>,
    ) -> Self {
        Self {
            name: field.into(),
            sql_type: ty.into(),
            nullable: is_nullable_marker(null),
            key: key.into(),
            default,
            extra: extra.into(),
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Classify the raw type declaration.
    pub fn category(&self) -> TypeCategory {
        TypeCategory::parse(&self.sql_type)
    }
}

/// Interpret the `Null` column of a `DESCRIBE` row.
///
/// Only `YES` (any case) means nullable.
pub fn is_nullable_marker(marker: &str) -> bool {
    marker.trim().eq_ignore_ascii_case("YES")
}
