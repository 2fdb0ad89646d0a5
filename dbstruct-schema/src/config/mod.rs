//! Configuration file (`dbstruct.toml`) types and parsing.

mod database;
mod output;

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    str::FromStr,
};

pub use database::{ConnectionParts, ConnectionTarget, DEFAULT_ENV, DatabaseConfig};
pub use output::OutputConfig;
use serde::Deserialize;

use crate::{Error, Result, SourceContext, error::validate_identifier};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "dbstruct.toml";

/// Root of dbstruct.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, CONFIG_FILE)
    }
}

impl Config {
    /// Parse a config from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

/// Parse and validate a config.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_config(&config, &ctx)?;
    Ok(config)
}

fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    let db = &config.database;

    if db.form_count() > 1 {
        return Err(ctx.validation_error(
            "use only one of `url`, `env`, or host/port/user/password/name",
            Some("[database]"),
        ));
    }
    if matches!(db.target(), ConnectionTarget::Parts(ref parts) if parts.database.is_empty()) {
        return Err(ctx.validation_error(
            "`name` is required when connecting with discrete fields",
            Some("[database]"),
        ));
    }
    if db.timeout == 0 {
        return Err(ctx.validation_error("`timeout` must be greater than zero", Some("timeout")));
    }

    let package = &config.output.package;
    if let Some(reason) = validate_identifier(package) {
        return Err(ctx.invalid_identifier_error(package, "package", reason));
    }

    let mut seen = HashSet::new();
    for table in &config.output.tables {
        if table.trim().is_empty() {
            return Err(ctx.validation_error("table names cannot be empty", Some("tables")));
        }
        if !seen.insert(table.as_str()) {
            return Err(ctx.validation_error(
                format!("table '{}' is listed more than once", table),
                Some(format!("\"{}\"", table).as_str()),
            ));
        }
    }

    Ok(())
}

/// A dbstruct.toml file with both raw content and parsed config.
#[derive(Debug)]
pub struct ConfigFile {
    path: PathBuf,
    content: String,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content =
            std::fs::read_to_string(&path).map_err(|e| Error::io(path.clone(), e))?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Open the file if it exists, otherwise fall back to defaults.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self {
                path: path.to_path_buf(),
                content: String::new(),
                config: Config::default(),
            })
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
