//! Classification of MySQL column type declarations.
//!
//! This is the language-agnostic half of type resolution: a raw declaration
//! such as `"int(10) unsigned"` is reduced to a [`TypeCategory`]. Target
//! languages turn categories into type names.

use std::fmt;

/// Width of an integer column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

impl IntWidth {
    /// Number of bits.
    pub fn bits(&self) -> u8 {
        match self {
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
        }
    }
}

/// Base type category of a column, before nullability is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    Text,
    Integer { width: IntWidth, unsigned: bool },
    Float,
    Timestamp,
    Bytes,
    Boolean,
    /// Anything not recognized. Resolves to the language's untyped value.
    Unknown,
}

impl TypeCategory {
    /// Classify a raw declaration like `"decimal(10,2)"` or `"bigint unsigned"`.
    ///
    /// Never fails: unrecognized shapes classify as [`TypeCategory::Unknown`].
    pub fn parse(raw: &str) -> Self {
        let (token, unsigned) = clean_type(raw);
        Self::from_token(&token, unsigned)
    }

    /// Classify a cleaned (uppercase, unsigned-stripped, unparenthesized) type token.
    pub fn from_token(token: &str, unsigned: bool) -> Self {
        let int = |width| TypeCategory::Integer { width, unsigned };

        match token {
            "VARCHAR" | "TEXT" | "CHAR" | "ENUM" | "SET" | "LONGTEXT" | "MEDIUMTEXT"
            | "TINYTEXT" => TypeCategory::Text,
            "BIGINT" => int(IntWidth::W64),
            "INT" | "MEDIUMINT" => int(IntWidth::W32),
            "SMALLINT" => int(IntWidth::W16),
            "TINYINT" => int(IntWidth::W8),
            "FLOAT" | "DOUBLE" | "DECIMAL" => TypeCategory::Float,
            "DATE" | "DATETIME" | "TIMESTAMP" | "TIME" | "YEAR" => TypeCategory::Timestamp,
            "BLOB" | "LONGBLOB" | "MEDIUMBLOB" | "TINYBLOB" | "BINARY" | "VARBINARY" => {
                TypeCategory::Bytes
            }
            "BIT" | "BOOL" | "BOOLEAN" => TypeCategory::Boolean,
            _ => TypeCategory::Unknown,
        }
    }

    /// Short human-readable name, used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeCategory::Text => "text",
            TypeCategory::Integer { .. } => "integer",
            TypeCategory::Float => "float",
            TypeCategory::Timestamp => "timestamp",
            TypeCategory::Bytes => "bytes",
            TypeCategory::Boolean => "boolean",
            TypeCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeCategory::Integer { width, unsigned } => {
                let sign = if *unsigned { "unsigned " } else { "" };
                write!(f, "{}{}-bit integer", sign, width.bits())
            }
            other => f.write_str(other.as_str()),
        }
    }
}

/// Reduce a raw declaration to its matchable token.
///
/// Uppercases, removes every `UNSIGNED` marker and truncates at the first
/// `(` (unless it is the first character). Returns the token and whether
/// an unsigned marker was seen. Cleaning a cleaned token is a no-op.
pub fn clean_type(raw: &str) -> (String, bool) {
    let upper = raw.to_uppercase();
    let unsigned = upper.contains("UNSIGNED");
    let mut token = upper.replace("UNSIGNED", "").trim().to_string();

    if let Some(pos) = token.find('(').filter(|&pos| pos > 0) {
        token.truncate(pos);
        token = token.trim_end().to_string();
    }

    (token, unsigned)
}
