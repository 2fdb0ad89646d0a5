use clap::Args;
use dbstruct_schema::Language;
use eyre::Result;

use super::SourceArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct DescribeCommand {
    /// Table to describe
    pub table: String,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Target language for resolved types (overrides dbstruct.toml setting)
    #[arg(short, long)]
    pub language: Option<Language>,
}

impl DescribeCommand {
    pub async fn run(&self) -> Result<()> {
        let config_file = self.source.load_config();
        let config = config_file.config();
        let language = self.language.unwrap_or(config.output.language);

        let source = self.source.open(config).await?;
        let report = ops::describe(&source, &self.table, language).await?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
