use std::time::Duration;

use serde::Deserialize;

/// Default environment variable holding the connection string.
pub const DEFAULT_ENV: &str = "DATABASE_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// `[database]` section of dbstruct.toml.
///
/// A connection is given either as a full `url`, as an `env` variable
/// name holding the url, or as discrete `host`/`port`/`user`/`password`/`name`
/// fields. With none of them, the url is read from `DATABASE_URL`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub env: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    /// Database (schema) name
    pub name: Option<String>,
    /// Connect timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            env: None,
            host: None,
            port: None,
            user: None,
            password: None,
            name: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Where the connection settings come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionTarget {
    /// A literal connection url
    Url(String),
    /// An environment variable holding the url
    Env(String),
    /// Discrete connection fields
    Parts(ConnectionParts),
}

/// Discrete connection fields with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionParts {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub database: String,
}

impl DatabaseConfig {
    fn has_parts(&self) -> bool {
        self.host.is_some()
            || self.port.is_some()
            || self.user.is_some()
            || self.password.is_some()
            || self.name.is_some()
    }

    /// Number of connection forms configured (url, env, parts).
    pub(crate) fn form_count(&self) -> usize {
        [self.url.is_some(), self.env.is_some(), self.has_parts()]
            .into_iter()
            .filter(|set| *set)
            .count()
    }

    /// Resolve the connection target.
    ///
    /// Assumes the section was validated; discrete fields without a
    /// database name fall back to an empty name.
    pub fn target(&self) -> ConnectionTarget {
        if let Some(url) = &self.url {
            return ConnectionTarget::Url(url.clone());
        }
        if let Some(env) = &self.env {
            return ConnectionTarget::Env(env.clone());
        }
        if self.has_parts() {
            return ConnectionTarget::Parts(ConnectionParts {
                host: self.host.clone().unwrap_or_else(|| "localhost".to_string()),
                port: self.port.unwrap_or(3306),
                user: self.user.clone().unwrap_or_else(|| "root".to_string()),
                password: self.password.clone(),
                database: self.name.clone().unwrap_or_default(),
            });
        }
        ConnectionTarget::Env(DEFAULT_ENV.to_string())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> DatabaseConfig {
        toml::from_str(content).expect("Failed to parse TOML")
    }

    #[test]
    fn test_url_target() {
        let db = parse(r#"url = "mysql://root@localhost/shop""#);
        assert_eq!(
            db.target(),
            ConnectionTarget::Url("mysql://root@localhost/shop".to_string())
        );
        assert_eq!(db.form_count(), 1);
    }

    #[test]
    fn test_default_env_target() {
        let db = parse("");
        assert_eq!(db.target(), ConnectionTarget::Env("DATABASE_URL".to_string()));
        assert_eq!(db.form_count(), 0);
        assert_eq!(db.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_parts_target_with_defaults() {
        let db = parse(
            r#"
            name = "shop"
            password = "secret"
            timeout = 3
            "#,
        );

        assert_eq!(
            db.target(),
            ConnectionTarget::Parts(ConnectionParts {
                host: "localhost".to_string(),
                port: 3306,
                user: "root".to_string(),
                password: Some("secret".to_string()),
                database: "shop".to_string(),
            })
        );
        assert_eq!(db.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_mixed_forms_are_counted() {
        let db = parse(
            r#"
            url = "mysql://localhost/shop"
            host = "db.internal"
            "#,
        );
        assert_eq!(db.form_count(), 2);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<DatabaseConfig, _> = toml::from_str(r#"hostname = "x""#);
        assert!(result.is_err());
    }
}
