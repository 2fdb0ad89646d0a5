use clap::Args;
use eyre::Result;

use super::SourceArgs;
use crate::{
    reports::{Report, TablesReport, TerminalOutput},
    source::SchemaSource,
};

#[derive(Args)]
pub struct TablesCommand {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl TablesCommand {
    pub async fn run(&self) -> Result<()> {
        let config_file = self.source.load_config();
        let config = config_file.config();

        let source = self.source.open(config).await?;
        let report = TablesReport {
            source: self.source.label(config),
            tables: source.list_tables().await?,
        };
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
