mod commands;
mod logging;
mod ops;
mod reports;
mod source;

use clap::Parser;
use eyre::Result;

use crate::commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.verbose);

    cli.run().await
}
