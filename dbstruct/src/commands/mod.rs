mod completions;
mod describe;
mod generate;
mod tables;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use dbstruct_schema::{Config, ConfigFile, config::CONFIG_FILE};
use describe::DescribeCommand;
use eyre::Result;
use generate::GenerateCommand;
use tables::TablesCommand;

use crate::source::{FileSource, MySqlSource, Source, describe_target};

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for dbstruct_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "dbstruct")]
#[command(version)]
#[command(about = "Generate struct definitions from MySQL table schemas")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run().await,
            Commands::Tables(cmd) => cmd.run().await,
            Commands::Describe(cmd) => cmd.run().await,
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate structs for tables and write them to a file
    Generate(GenerateCommand),

    /// List the tables of the database or schema file
    Tables(TablesCommand),

    /// Show a table's columns and the types they map to
    Describe(DescribeCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Where configuration and table descriptions are read from.
#[derive(Args)]
pub struct SourceArgs {
    /// Path to dbstruct.toml (defaults to ./dbstruct.toml, optional)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Read tables from an offline schema file instead of the database
    #[arg(long, value_name = "FILE")]
    pub schema: Option<PathBuf>,
}

impl SourceArgs {
    /// Load dbstruct.toml, falling back to defaults when it does not exist.
    pub fn load_config(&self) -> ConfigFile {
        ConfigFile::open_or_default(&self.config).unwrap_or_exit()
    }

    /// Open the schema file if one was given, otherwise connect to the database.
    pub async fn open(&self, config: &Config) -> Result<Source> {
        match &self.schema {
            Some(path) => Ok(Source::File(FileSource::open(path).unwrap_or_exit())),
            None => Ok(Source::MySql(MySqlSource::connect(&config.database).await?)),
        }
    }

    /// Human-readable name of the source.
    pub fn label(&self, config: &Config) -> String {
        match &self.schema {
            Some(path) => path.display().to_string(),
            None => describe_target(&config.database.target()),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "dbstruct", "-vv", "generate", "--schema", "schema.toml", "-t", "users", "-t",
            "orders", "--language", "rust", "--no-tags",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Generate(cmd) => {
                assert_eq!(cmd.tables, vec!["users", "orders"]);
                assert_eq!(cmd.language, Some(dbstruct_schema::Language::Rust));
                assert!(cmd.no_tags);
                assert_eq!(cmd.source.config, PathBuf::from(CONFIG_FILE));
                assert_eq!(cmd.source.schema, Some(PathBuf::from("schema.toml")));
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_parse_describe() {
        let cli = Cli::try_parse_from(["dbstruct", "describe", "users", "-c", "db.toml"]).unwrap();
        match cli.command {
            Commands::Describe(cmd) => {
                assert_eq!(cmd.table, "users");
                assert_eq!(cmd.source.config, PathBuf::from("db.toml"));
                assert_eq!(cmd.language, None);
            }
            _ => panic!("expected describe"),
        }
    }
}
