//! Column descriptors to struct source text.

use dbstruct_schema::{ColumnDescriptor, Language, TableMap};
use tracing::debug;

use super::{FieldRow, StructSpec};
use crate::{
    builder::{CodeBuilder, ImportCollector, Indent},
    error::{EmitError, Result},
    language::LanguageSupport,
};

/// Emits struct definitions for one target language.
///
/// ```
/// use dbstruct_codegen::StructEmitter;
/// use dbstruct_schema::ColumnDescriptor;
///
/// let columns = vec![ColumnDescriptor::new("flag", "tinyint unsigned")];
/// let code = StructEmitter::go().emit_struct(&columns, "settings", true).unwrap();
///
/// assert_eq!(code, "type SettingsData struct {\n    Flag uint8\t`json:\"flag\"`\n}");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StructEmitter {
    support: LanguageSupport,
}

impl StructEmitter {
    pub fn new(language: Language) -> Self {
        Self {
            support: LanguageSupport::get(language),
        }
    }

    pub fn go() -> Self {
        Self::new(Language::Go)
    }

    pub fn rust() -> Self {
        Self::new(Language::Rust)
    }

    pub fn language(&self) -> Language {
        self.support.language
    }

    /// Resolve the target type of a column, including the nullable wrapper.
    pub fn resolve_type(&self, column: &ColumnDescriptor) -> String {
        self.support.mapper.resolve(column)
    }

    /// Build the field row for a column.
    pub fn field_row(&self, column: &ColumnDescriptor, with_tags: bool) -> FieldRow {
        let naming = self.support.naming;
        FieldRow {
            name: naming.field_name(&column.name),
            ty: self.resolve_type(column),
            tag: with_tags.then(|| naming.tag_name(&column.name)),
        }
    }

    /// Build the struct spec for a table, in column order.
    pub fn struct_spec(
        &self,
        columns: &[ColumnDescriptor],
        table: &str,
        with_tags: bool,
    ) -> Result<StructSpec> {
        if columns.is_empty() {
            return Err(EmitError::EmptyTable {
                table: table.to_string(),
            });
        }

        let rows = columns
            .iter()
            .map(|column| {
                let row = self.field_row(column, with_tags);
                debug!(table, column = %column.name, ty = %row.ty, "resolved column");
                row
            })
            .collect();

        Ok(StructSpec {
            type_name: self.support.naming.type_name(table),
            rows,
        })
    }

    /// Render a struct spec. The result has no trailing newline.
    pub fn render(&self, spec: &StructSpec) -> String {
        let layout = self.support.layout;
        let widths = spec.widths();

        CodeBuilder::new(Indent::FourSpaces)
            .block(&layout.header(&spec.type_name, spec.is_tagged()), layout.footer(), |b| {
                b.each(&spec.rows, |b, row| b.line(&layout.field(row, widths)))
            })
            .finish_trimmed()
    }

    /// Emit one struct definition for a table.
    pub fn emit_struct(
        &self,
        columns: &[ColumnDescriptor],
        table: &str,
        with_tags: bool,
    ) -> Result<String> {
        let spec = self.struct_spec(columns, table, with_tags)?;
        debug!(table, type_name = %spec.type_name, fields = spec.rows.len(), "emitting struct");
        Ok(self.render(&spec))
    }

    /// Modules the emitted types for these tables depend on.
    pub fn imports(&self, tables: &TableMap) -> ImportCollector {
        let mapper = self.support.mapper;
        let mut imports = ImportCollector::new();
        for module in tables
            .values()
            .flatten()
            .filter_map(|column| mapper.import_for(column.category()))
        {
            imports.add_module(module);
        }
        imports
    }

    /// Emit a whole file: the package header followed by one struct per table,
    /// in map order.
    pub fn emit_all(&self, tables: &TableMap, package: &str, with_tags: bool) -> Result<String> {
        let mut output = self
            .support
            .layout
            .file_header(package, &self.imports(tables));

        for (table, columns) in tables {
            output.push_str(&self.emit_struct(columns, table, with_tags)?);
            output.push_str("\n\n");
        }

        Ok(output)
    }
}
