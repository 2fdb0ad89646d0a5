//! Generate command report data structures.

use std::path::PathBuf;

use dbstruct_core::WriteResult;
use dbstruct_schema::Language;

use super::output::{Output, Report};

/// Report data from struct generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Target language.
    pub language: Language,
    /// Package or module name in the file header.
    pub package: String,
    /// Generated structs, in output order.
    pub tables: Vec<TableSummary>,
    /// Written file or preview.
    pub result: GenerationResult,
}

/// One generated struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    pub table: String,
    pub type_name: String,
    pub fields: usize,
}

/// Result of struct generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The file was written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when the file was written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub path: PathBuf,
    pub write: WriteResult,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Path the content would be written to.
    pub path: PathBuf,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Language", self.language.as_str());
        out.key_value("Package", &self.package);
        out.newline();

        self.render_tables(out);
        out.newline();

        let action = match written.write {
            WriteResult::Created => "Created",
            WriteResult::Appended => "Appended to",
            WriteResult::Overwritten => "Overwrote",
        };
        out.key_value(action, &written.path.display().to_string());
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        out.divider(&preview.path.display().to_string());
        out.preformatted(preview.content.trim_end());

        out.divider("Summary");
        self.render_tables(out);
    }

    fn render_tables(&self, out: &mut dyn Output) {
        out.section(&format!("Structs ({})", self.tables.len()));
        for summary in &self.tables {
            out.list_item(&format!(
                "{} -> {} ({} fields)",
                summary.table, summary.type_name, summary.fields
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::RecordingOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            language: Language::Go,
            package: "models".to_string(),
            tables: vec![TableSummary {
                table: "users".to_string(),
                type_name: "UsersData".to_string(),
                fields: 3,
            }],
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let report = report(GenerationResult::Written(WrittenResult {
            path: PathBuf::from("models.go"),
            write: WriteResult::Appended,
        }));

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.text(),
            "Language: go\nPackage: models\n\nStructs (1):\n  - users -> UsersData (3 fields)\n\nAppended to: models.go"
        );
    }

    #[test]
    fn test_render_preview() {
        let report = report(GenerationResult::Preview(PreviewResult {
            path: PathBuf::from("models.go"),
            content: "package models\n\n".to_string(),
        }));

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[0], "── models.go ──");
        assert_eq!(out.lines[1], "package models");
        assert_eq!(out.lines[2], "── Summary ──");
    }
}
