//! Go type mapper and struct layout.

use dbstruct_schema::{IntWidth, Language, TypeCategory};

use crate::{
    builder::{CodeBuilder, ImportCollector, Indent},
    emit::FieldRow,
    language::{StructLayout, TypeMapper, Widths},
};

/// Go type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTypeMapper;

impl TypeMapper for GoTypeMapper {
    fn language(&self) -> Language {
        Language::Go
    }

    fn map_category(&self, category: TypeCategory) -> &'static str {
        match category {
            TypeCategory::Text => "string",
            TypeCategory::Integer { width, unsigned } => match (width, unsigned) {
                (IntWidth::W64, false) => "int64",
                (IntWidth::W64, true) => "uint64",
                (IntWidth::W32, false) => "int32",
                (IntWidth::W32, true) => "uint32",
                (IntWidth::W16, false) => "int16",
                (IntWidth::W16, true) => "uint16",
                (IntWidth::W8, false) => "int8",
                (IntWidth::W8, true) => "uint8",
            },
            TypeCategory::Float => "float64",
            TypeCategory::Timestamp => "time.Time",
            TypeCategory::Bytes => "[]byte",
            TypeCategory::Boolean => "bool",
            TypeCategory::Unknown => "interface{}",
        }
    }

    fn map_optional(&self, inner: &str) -> String {
        format!("*{}", inner)
    }

    fn import_for(&self, category: TypeCategory) -> Option<&'static str> {
        match category {
            TypeCategory::Timestamp => Some("time"),
            _ => None,
        }
    }
}

/// Go struct layout: `json` struct tags after a tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoLayout;

impl StructLayout for GoLayout {
    fn header(&self, type_name: &str, _tagged: bool) -> String {
        format!("type {} struct {{", type_name)
    }

    fn field(&self, row: &FieldRow, widths: Widths) -> String {
        let mut line = format!(
            "{:<name_w$} {:<ty_w$}",
            row.name,
            row.ty,
            name_w = widths.name,
            ty_w = widths.ty
        );
        if let Some(tag) = &row.tag {
            line.push_str(&format!("\t`json:\"{}\"`", tag));
        }
        line
    }

    fn file_header(&self, package: &str, imports: &ImportCollector) -> String {
        let builder = CodeBuilder::new(Indent::Tab)
            .line(&format!("package {}", package))
            .blank();

        let builder = match imports.len() {
            0 => builder,
            1 => builder
                .each(imports.iter(), |b, module| {
                    b.line(&format!("import \"{}\"", module))
                })
                .blank(),
            _ => builder
                .block("import (", ")", |b| {
                    b.each(imports.iter(), |b, module| b.line(&format!("\"{}\"", module)))
                })
                .blank(),
        };

        builder.finish()
    }
}
