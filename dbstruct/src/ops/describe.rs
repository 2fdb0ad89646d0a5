//! Describe operation - one table's columns with their resolved types.

use dbstruct_codegen::{LanguageSupport, StructEmitter};
use dbstruct_schema::Language;
use eyre::Result;

use crate::{
    reports::{ColumnInfo, DescribeReport},
    source::SchemaSource,
};

/// Execute the describe operation.
pub async fn describe<S: SchemaSource>(
    source: &S,
    table: &str,
    language: Language,
) -> Result<DescribeReport> {
    let columns = source.describe(table).await?;
    let emitter = StructEmitter::new(language);
    let naming = LanguageSupport::get(language).naming;

    let columns = columns
        .iter()
        .map(|column| ColumnInfo {
            field: column.name.clone(),
            sql_type: column.sql_type.clone(),
            nullable: column.nullable,
            key: column.key.clone(),
            default: column.default.clone(),
            extra: column.extra.clone(),
            category: column.category(),
            field_name: naming.field_name(&column.name),
            resolved: emitter.resolve_type(column),
        })
        .collect();

    Ok(DescribeReport {
        table: table.to_string(),
        type_name: naming.type_name(table),
        language,
        columns,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use dbstruct_schema::SchemaFile;

    use super::*;
    use crate::source::FileSource;

    #[tokio::test]
    async fn test_describe_resolves_types() {
        let source = FileSource::new(
            SchemaFile::from_str(
                r#"
                [[tables]]
                name = "order_items"

                [[tables.columns]]
                field = "type"
                type = "tinyint unsigned"
                null = "YES"
                default = "0"
                "#,
            )
            .unwrap(),
        );

        let report = describe(&source, "order_items", Language::Rust)
            .await
            .unwrap();
        assert_eq!(report.type_name, "OrderItemsData");
        assert_eq!(report.columns.len(), 1);
        assert_eq!(report.columns[0].field_name, "r#type");
        assert_eq!(report.columns[0].resolved, "Option<u8>");
        assert_eq!(report.columns[0].default.as_deref(), Some("0"));
        assert_eq!(report.columns[0].category.to_string(), "unsigned 8-bit integer");

        let report = describe(&source, "order_items", Language::Go)
            .await
            .unwrap();
        assert_eq!(report.columns[0].field_name, "Type");
        assert_eq!(report.columns[0].resolved, "*uint8");
    }
}
