//! Describe command report.

use dbstruct_schema::{Language, TypeCategory};

use super::output::{Output, Report};

/// Column rows of one table with their resolved types.
#[derive(Debug)]
pub struct DescribeReport {
    pub table: String,
    /// Struct name the table maps to.
    pub type_name: String,
    pub language: Language,
    pub columns: Vec<ColumnInfo>,
}

/// One `DESCRIBE` row plus the field it becomes.
#[derive(Debug, Clone)]
pub struct ColumnInfo {
    pub field: String,
    pub sql_type: String,
    pub nullable: bool,
    pub key: String,
    pub default: Option<String>,
    pub extra: String,
    /// Classified base type.
    pub category: TypeCategory,
    /// Field identifier in the generated struct.
    pub field_name: String,
    /// Resolved target type.
    pub resolved: String,
}

const HEADERS: [&str; 8] = [
    "Field", "Type", "Null", "Key", "Default", "Extra", "Category", "Maps to",
];

impl ColumnInfo {
    fn cells(&self) -> [String; 8] {
        [
            self.field.clone(),
            self.sql_type.clone(),
            if self.nullable { "YES" } else { "NO" }.to_string(),
            self.key.clone(),
            self.default.clone().unwrap_or_else(|| "NULL".to_string()),
            self.extra.clone(),
            self.category.to_string(),
            format!("{} {}", self.field_name, self.resolved),
        ]
    }
}

impl Report for DescribeReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value(
            "Table",
            &format!("{} -> {} ({})", self.table, self.type_name, self.language),
        );
        out.newline();

        let rows: Vec<[String; 8]> = self.columns.iter().map(ColumnInfo::cells).collect();
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        out.preformatted(&format_row(&HEADERS.map(str::to_string), &widths));
        for row in &rows {
            out.preformatted(&format_row(row, &widths));
        }
    }
}

fn format_row(cells: &[String; 8], widths: &[usize; 8]) -> String {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    line.join("  ").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use dbstruct_schema::IntWidth;

    use super::*;
    use crate::reports::testing::RecordingOutput;

    #[test]
    fn test_render_describe() {
        let report = DescribeReport {
            table: "users".to_string(),
            type_name: "UsersData".to_string(),
            language: Language::Go,
            columns: vec![
                ColumnInfo {
                    field: "id".to_string(),
                    sql_type: "bigint unsigned".to_string(),
                    nullable: false,
                    key: "PRI".to_string(),
                    default: None,
                    extra: "auto_increment".to_string(),
                    category: TypeCategory::Integer {
                        width: IntWidth::W64,
                        unsigned: true,
                    },
                    field_name: "Id".to_string(),
                    resolved: "uint64".to_string(),
                },
                ColumnInfo {
                    field: "nick".to_string(),
                    sql_type: "varchar(32)".to_string(),
                    nullable: true,
                    key: String::new(),
                    default: Some("anon".to_string()),
                    extra: String::new(),
                    category: TypeCategory::Text,
                    field_name: "Nick".to_string(),
                    resolved: "*string".to_string(),
                },
            ],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[0], "Table: users -> UsersData (go)");
        assert_eq!(
            out.lines[2],
            "Field  Type             Null  Key  Default  Extra           Category                 Maps to"
        );
        assert_eq!(
            out.lines[3],
            "id     bigint unsigned  NO    PRI  NULL     auto_increment  unsigned 64-bit integer  Id uint64"
        );
        assert_eq!(
            out.lines[4],
            "nick   varchar(32)      YES        anon                     text                     Nick *string"
        );
    }
}
