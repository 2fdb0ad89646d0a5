//! Tables command report.

use super::output::{Output, Report};

/// Tables available in a schema source.
#[derive(Debug)]
pub struct TablesReport {
    /// Human-readable source (schema file path or connection target).
    pub source: String,
    pub tables: Vec<String>,
}

impl Report for TablesReport {
    fn render(&self, out: &mut dyn Output) {
        if self.tables.is_empty() {
            out.empty(&format!("No tables found in {}", self.source));
            return;
        }

        out.section(&format!("Tables in {} ({})", self.source, self.tables.len()));
        for (i, table) in self.tables.iter().enumerate() {
            out.numbered_item(i + 1, table);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::RecordingOutput;

    #[test]
    fn test_render_tables() {
        let report = TablesReport {
            source: "schema.toml".to_string(),
            tables: vec!["users".to_string(), "orders".to_string()],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.text(),
            "Tables in schema.toml (2):\n  1. users\n  2. orders"
        );
    }

    #[test]
    fn test_render_no_tables() {
        let report = TablesReport {
            source: "$DATABASE_URL".to_string(),
            tables: Vec::new(),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.text(), "No tables found in $DATABASE_URL");
    }
}
