use std::path::PathBuf;

use clap::Args;
use dbstruct_core::WriteMode;
use dbstruct_schema::{Language, validate_identifier};
use eyre::{Result, bail};

use super::SourceArgs;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Table to generate (repeatable, keeps the given order; defaults to all tables)
    #[arg(short, long = "table", value_name = "TABLE")]
    pub tables: Vec<String>,

    /// Output file (overrides dbstruct.toml setting)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Package or module name (overrides dbstruct.toml setting)
    #[arg(short, long)]
    pub package: Option<String>,

    /// Target language (overrides dbstruct.toml setting)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Omit serialization tags
    #[arg(long)]
    pub no_tags: bool,

    /// Replace the output file instead of appending to it
    #[arg(long)]
    pub overwrite: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub async fn run(&self) -> Result<()> {
        let config_file = self.source.load_config();
        let config = config_file.config();

        // CLI flags win over dbstruct.toml
        let mut output_config = config.output.clone();
        if let Some(language) = self.language {
            output_config.language = language;
        }
        if let Some(package) = &self.package {
            if let Some(reason) = validate_identifier(package) {
                bail!("Invalid package name `{}`: {}", package, reason);
            }
            output_config.package = package.clone();
        }
        if let Some(path) = &self.output {
            output_config.path = Some(path.clone());
        }
        let mode = if self.overwrite {
            WriteMode::Overwrite
        } else {
            output_config.mode
        };
        let output = output_config.resolved_path();

        let source = self.source.open(config).await?;
        let tables = ops::select_tables(&source, &self.tables, &output_config.tables).await?;

        let report = ops::generate(
            &source,
            &tables,
            GenerateOptions {
                language: output_config.language,
                package: &output_config.package,
                with_tags: output_config.tags && !self.no_tags,
                output: &output,
                mode,
                dry_run: self.dry_run,
            },
        )
        .await?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
