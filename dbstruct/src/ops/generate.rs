//! Generate operation - struct definitions from table descriptions.

use std::path::Path;

use dbstruct_codegen::{LanguageSupport, StructEmitter};
use dbstruct_core::{OutputFile, WriteMode};
use dbstruct_schema::{Language, TableMap};
use eyre::{Context, Result};
use tracing::info;

use crate::{
    reports::{GenerateReport, GenerationResult, PreviewResult, TableSummary, WrittenResult},
    source::SchemaSource,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    pub language: Language,
    /// Package or module name in the file header.
    pub package: &'a str,
    /// Attach serialization tags.
    pub with_tags: bool,
    pub output: &'a Path,
    pub mode: WriteMode,
    /// Whether to preview without writing the file.
    pub dry_run: bool,
}

/// Pick the tables to generate.
///
/// Tables named on the command line win, then the configured list. With
/// neither, every table the source lists is used, in listing order.
pub async fn select_tables<S: SchemaSource>(
    source: &S,
    requested: &[String],
    configured: &[String],
) -> Result<Vec<String>> {
    if !requested.is_empty() {
        return Ok(requested.to_vec());
    }
    if !configured.is_empty() {
        return Ok(configured.to_vec());
    }
    source.list_tables().await
}

/// Execute the generate operation.
pub async fn generate<S: SchemaSource>(
    source: &S,
    tables: &[String],
    opts: GenerateOptions<'_>,
) -> Result<GenerateReport> {
    let descriptors = source.collect(tables).await?;
    let emitter = StructEmitter::new(opts.language);

    let content = emitter
        .emit_all(&descriptors, opts.package, opts.with_tags)
        .wrap_err("Failed to generate structs")?;
    let summaries = summarize(opts.language, &descriptors);

    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewResult {
            path: opts.output.to_path_buf(),
            content,
        })
    } else {
        let write = OutputFile::new(opts.output, content)
            .mode(opts.mode)
            .write()
            .wrap_err_with(|| format!("Failed to write {}", opts.output.display()))?;
        info!(path = %opts.output.display(), ?write, "wrote structs");

        GenerationResult::Written(WrittenResult {
            path: opts.output.to_path_buf(),
            write,
        })
    };

    Ok(GenerateReport {
        language: opts.language,
        package: opts.package.to_string(),
        tables: summaries,
        result,
    })
}

fn summarize(language: Language, descriptors: &TableMap) -> Vec<TableSummary> {
    let naming = LanguageSupport::get(language).naming;
    descriptors
        .iter()
        .map(|(table, columns)| TableSummary {
            table: table.clone(),
            type_name: naming.type_name(table),
            fields: columns.len(),
        })
        .collect()
}
