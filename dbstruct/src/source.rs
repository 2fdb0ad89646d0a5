//! Where column descriptors come from.

use std::{path::Path, str::FromStr};

use dbstruct_schema::{
    ColumnDescriptor, SchemaFile, TableMap,
    config::{ConnectionTarget, DatabaseConfig},
};
use eyre::{Context, Result, eyre};
use sqlx::{
    MySqlPool, Row,
    mysql::{MySqlConnectOptions, MySqlPoolOptions, MySqlRow},
};
use tracing::{debug, info};

/// A provider of table listings and per-table column descriptors.
pub trait SchemaSource {
    /// Table names in listing order.
    async fn list_tables(&self) -> Result<Vec<String>>;

    /// Column descriptors of a table in declaration order.
    async fn describe(&self, table: &str) -> Result<Vec<ColumnDescriptor>>;

    /// Describe each table, keeping the given order.
    async fn collect(&self, tables: &[String]) -> Result<TableMap> {
        let mut map = TableMap::with_capacity(tables.len());
        for table in tables {
            let columns = self.describe(table).await?;
            debug!(table = %table, columns = columns.len(), "described table");
            map.insert(table.clone(), columns);
        }
        Ok(map)
    }
}

/// A live MySQL database.
pub struct MySqlSource {
    pool: MySqlPool,
}

impl MySqlSource {
    /// Connect using the `[database]` section.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let target = config.target();
        let options = connect_options(&target)?;

        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(config.timeout())
            .connect_with(options)
            .await
            .wrap_err("Failed to connect to database")?;

        info!(database = %describe_target(&target), "connected to database");
        Ok(Self { pool })
    }
}

impl SchemaSource for MySqlSource {
    async fn list_tables(&self) -> Result<Vec<String>> {
        let rows = sqlx::raw_sql("SHOW TABLES")
            .fetch_all(&self.pool)
            .await
            .wrap_err("Failed to list tables")?;

        rows.iter()
            .map(|row| text_column(row, 0).wrap_err("Failed to decode table name"))
            .collect()
    }

    async fn describe(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let sql = format!("DESCRIBE `{}`", table.replace('`', "``"));
        let rows = sqlx::raw_sql(&sql)
            .fetch_all(&self.pool)
            .await
            .wrap_err_with(|| format!("Failed to describe table `{}`", table))?;

        rows.iter()
            .map(|row| {
                describe_row(row)
                    .wrap_err_with(|| format!("Failed to decode description of `{}`", table))
            })
            .collect()
    }
}

fn describe_row(row: &MySqlRow) -> sqlx::Result<ColumnDescriptor> {
    Ok(ColumnDescriptor::from_describe_row(
        text_column(row, 0)?,
        text_column(row, 1)?,
        &text_column(row, 2)?,
        text_column(row, 3)?,
        optional_text_column(row, 4)?,
        text_column(row, 5)?,
    ))
}

fn text_column(row: &MySqlRow, index: usize) -> sqlx::Result<String> {
    Ok(optional_text_column(row, index)?.unwrap_or_default())
}

// Servers report some DESCRIBE columns as binary strings
fn optional_text_column(row: &MySqlRow, index: usize) -> sqlx::Result<Option<String>> {
    match row.try_get::<Option<String>, _>(index) {
        Ok(value) => Ok(value),
        Err(_) => row
            .try_get::<Option<Vec<u8>>, _>(index)
            .map(|bytes| bytes.map(|b| String::from_utf8_lossy(&b).into_owned())),
    }
}

fn connect_options(target: &ConnectionTarget) -> Result<MySqlConnectOptions> {
    match target {
        ConnectionTarget::Url(url) => parse_url(url),
        ConnectionTarget::Env(var) => {
            let url = std::env::var(var)
                .wrap_err_with(|| format!("Environment variable {} is not set", var))?;
            parse_url(&url)
        }
        ConnectionTarget::Parts(parts) => {
            let options = MySqlConnectOptions::new()
                .host(&parts.host)
                .port(parts.port)
                .username(&parts.user)
                .database(&parts.database);
            Ok(match &parts.password {
                Some(password) => options.password(password),
                None => options,
            })
        }
    }
}

fn parse_url(url: &str) -> Result<MySqlConnectOptions> {
    MySqlConnectOptions::from_str(url).wrap_err("Invalid database url")
}

/// Connection target without credentials, for logs and reports.
pub fn describe_target(target: &ConnectionTarget) -> String {
    match target {
        ConnectionTarget::Url(_) => "url".to_string(),
        ConnectionTarget::Env(var) => format!("${}", var),
        ConnectionTarget::Parts(parts) => format!(
            "{}@{}:{}/{}",
            parts.user, parts.host, parts.port, parts.database
        ),
    }
}

/// An offline schema file.
pub struct FileSource {
    schema: SchemaFile,
}

impl FileSource {
    pub fn open(path: impl AsRef<Path>) -> dbstruct_schema::Result<Self> {
        Ok(Self::new(SchemaFile::from_file(path)?))
    }

    pub fn new(schema: SchemaFile) -> Self {
        Self { schema }
    }
}

impl SchemaSource for FileSource {
    async fn list_tables(&self) -> Result<Vec<String>> {
        Ok(self.schema.table_names())
    }

    async fn describe(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        self.schema
            .table(table)
            .map(|entry| entry.descriptors())
            .ok_or_else(|| eyre!("Table `{}` not found in schema file", table))
    }
}

/// The source selected on the command line.
pub enum Source {
    MySql(MySqlSource),
    File(FileSource),
}

impl SchemaSource for Source {
    async fn list_tables(&self) -> Result<Vec<String>> {
        match self {
            Source::MySql(source) => source.list_tables().await,
            Source::File(source) => source.list_tables().await,
        }
    }

    async fn describe(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        match self {
            Source::MySql(source) => source.describe(table).await,
            Source::File(source) => source.describe(table).await,
        }
    }
}
