//! Offline schema files: `DESCRIBE` output captured as TOML.
//!
//! ```toml
//! [[tables]]
//! name = "users"
//!
//! [[tables.columns]]
//! field = "id"
//! type = "bigint unsigned"
//! null = "NO"
//! key = "PRI"
//! extra = "auto_increment"
//! ```

use std::{collections::HashSet, path::Path, str::FromStr};

use serde::Deserialize;

use crate::{ColumnDescriptor, Error, Result, SourceContext, TableMap};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaFile {
    #[serde(default)]
    pub tables: Vec<TableEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableEntry {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<ColumnRow>,
}

/// One `DESCRIBE` row. Field names follow the MySQL output columns.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnRow {
    pub field: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default = "default_null")]
    pub null: String,
    #[serde(default)]
    pub key: String,
    pub default: Option<String>,
    #[serde(default)]
    pub extra: String,
}

fn default_null() -> String {
    "NO".to_string()
}

impl From<&ColumnRow> for ColumnDescriptor {
    fn from(row: &ColumnRow) -> Self {
        ColumnDescriptor::from_describe_row(
            &row.field,
            &row.ty,
            &row.null,
            &row.key,
            row.default.clone(),
            &row.extra,
        )
    }
}

impl FromStr for SchemaFile {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_schema_file(s, "schema.toml")
    }
}

impl SchemaFile {
    /// Read and parse a schema file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::io(path.to_path_buf(), e))?;
        parse_schema_file(&content, &path.display().to_string())
    }

    /// Table names in file order.
    pub fn table_names(&self) -> Vec<String> {
        self.tables.iter().map(|t| t.name.clone()).collect()
    }

    /// Find a table by name.
    pub fn table(&self, name: &str) -> Option<&TableEntry> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Convert to descriptors, keeping file order.
    pub fn to_table_map(&self) -> TableMap {
        self.tables
            .iter()
            .map(|t| (t.name.clone(), t.descriptors()))
            .collect()
    }
}

impl TableEntry {
    pub fn descriptors(&self) -> Vec<ColumnDescriptor> {
        self.columns.iter().map(ColumnDescriptor::from).collect()
    }
}

/// Parse and validate a schema file.
pub fn parse_schema_file(content: &str, filename: &str) -> Result<SchemaFile> {
    let ctx = SourceContext::new(content, filename);
    let schema: SchemaFile = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

    let mut seen = HashSet::new();
    for table in &schema.tables {
        let quoted = format!("\"{}\"", table.name);
        if table.name.trim().is_empty() {
            return Err(ctx.validation_error("table names cannot be empty", Some("name")));
        }
        if !seen.insert(table.name.as_str()) {
            return Err(ctx.validation_error(
                format!("table '{}' is defined more than once", table.name),
                Some(quoted.as_str()),
            ));
        }
        if table.columns.is_empty() {
            return Err(ctx.validation_error(
                format!("table '{}' has no columns", table.name),
                Some(quoted.as_str()),
            ));
        }
    }

    Ok(schema)
}
