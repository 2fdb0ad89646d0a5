//! Rust type mapper and struct layout.

use dbstruct_schema::{IntWidth, Language, TypeCategory};

use crate::{
    builder::ImportCollector,
    emit::FieldRow,
    language::{StructLayout, TypeMapper, Widths},
};

/// Rust type mapper implementation.
///
/// Types outside the prelude are fully qualified, so generated files need
/// no `use` lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustTypeMapper;

impl TypeMapper for RustTypeMapper {
    fn language(&self) -> Language {
        Language::Rust
    }

    fn map_category(&self, category: TypeCategory) -> &'static str {
        match category {
            TypeCategory::Text => "String",
            TypeCategory::Integer { width, unsigned } => match (width, unsigned) {
                (IntWidth::W64, false) => "i64",
                (IntWidth::W64, true) => "u64",
                (IntWidth::W32, false) => "i32",
                (IntWidth::W32, true) => "u32",
                (IntWidth::W16, false) => "i16",
                (IntWidth::W16, true) => "u16",
                (IntWidth::W8, false) => "i8",
                (IntWidth::W8, true) => "u8",
            },
            TypeCategory::Float => "f64",
            TypeCategory::Timestamp => "chrono::NaiveDateTime",
            TypeCategory::Bytes => "Vec<u8>",
            TypeCategory::Boolean => "bool",
            TypeCategory::Unknown => "serde_json::Value",
        }
    }

    fn map_optional(&self, inner: &str) -> String {
        format!("Option<{}>", inner)
    }
}

const SERDE_DERIVE: &str = "#[derive(serde::Serialize, serde::Deserialize)]";
const RENAME_OPEN: &str = "#[serde(rename = \"";
const RENAME_CLOSE: &str = "\")]";

/// Rust struct layout: `pub` fields, `serde` renames inline before the field.
///
/// Tagged structs derive the serde traits on the header line so the
/// `rename` attributes resolve.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustLayout;

impl StructLayout for RustLayout {
    fn header(&self, type_name: &str, tagged: bool) -> String {
        if tagged {
            format!("{} pub struct {} {{", SERDE_DERIVE, type_name)
        } else {
            format!("pub struct {} {{", type_name)
        }
    }

    fn field(&self, row: &FieldRow, widths: Widths) -> String {
        let declaration = format!(
            "pub {:<name_w$} {},",
            format!("{}:", row.name),
            row.ty,
            name_w = widths.name + 1
        );

        match &row.tag {
            Some(tag) => {
                let attr = format!("{}{}{}", RENAME_OPEN, tag, RENAME_CLOSE);
                let attr_w = widths.tag + RENAME_OPEN.len() + RENAME_CLOSE.len();
                format!("{:<attr_w$} {}", attr, declaration)
            }
            None => declaration,
        }
    }

    fn file_header(&self, package: &str, _imports: &ImportCollector) -> String {
        format!("//! Table structs for the `{}` module.\n\n", package)
    }
}

#[cfg(test)]
mod tests {
    use dbstruct_schema::ColumnDescriptor;

    use super::*;

    fn resolve(sql_type: &str, nullable: bool) -> String {
        RustTypeMapper.resolve(&ColumnDescriptor::new("c", sql_type).nullable(nullable))
    }

    #[test]
    fn test_rust_base_types() {
        assert_eq!(resolve("varchar(64)", false), "String");
        assert_eq!(resolve("bigint", false), "i64");
        assert_eq!(resolve("int", false), "i32");
        assert_eq!(resolve("smallint", false), "i16");
        assert_eq!(resolve("tinyint", false), "i8");
        assert_eq!(resolve("float", false), "f64");
        assert_eq!(resolve("date", false), "chrono::NaiveDateTime");
        assert_eq!(resolve("varbinary(16)", false), "Vec<u8>");
        assert_eq!(resolve("boolean", false), "bool");
        assert_eq!(resolve("point", false), "serde_json::Value");
    }

    #[test]
    fn test_rust_unsigned_and_nullable() {
        assert_eq!(resolve("bigint unsigned", false), "u64");
        assert_eq!(resolve("tinyint unsigned", true), "Option<u8>");
        assert_eq!(resolve("longblob", true), "Option<Vec<u8>>");
        assert_eq!(resolve("decimal(8,2) unsigned", true), "Option<f64>");
    }

    #[test]
    fn test_rust_has_no_imports() {
        assert_eq!(RustTypeMapper.import_for(TypeCategory::Timestamp), None);
    }

    #[test]
    fn test_rust_header_derives_serde_when_tagged() {
        assert_eq!(
            RustLayout.header("UsersData", true),
            "#[derive(serde::Serialize, serde::Deserialize)] pub struct UsersData {"
        );
        assert_eq!(RustLayout.header("UsersData", false), "pub struct UsersData {");
    }

    #[test]
    fn test_rust_field_line() {
        let widths = Widths {
            name: 9,
            ty: 14,
            tag: 8,
        };
        let tagged = FieldRow {
            name: "id".to_string(),
            ty: "u64".to_string(),
            tag: Some("id".to_string()),
        };
        let plain = FieldRow {
            name: "user_name".to_string(),
            ty: "Option<String>".to_string(),
            tag: None,
        };

        assert_eq!(
            RustLayout.field(&tagged, widths),
            "#[serde(rename = \"id\")]       pub id:        u64,"
        );
        assert_eq!(
            RustLayout.field(&plain, widths),
            "pub user_name: Option<String>,"
        );
    }

    #[test]
    fn test_rust_file_header() {
        assert_eq!(
            RustLayout.file_header("models", &ImportCollector::new()),
            "//! Table structs for the `models` module.\n\n"
        );
    }
}
