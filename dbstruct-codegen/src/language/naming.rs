//! Naming conventions for different programming languages.

use dbstruct_core::{to_camel_case, to_pascal_case, to_snake_case};

/// Suffix appended to the PascalCase table name to form the struct name.
pub const TYPE_SUFFIX: &str = "Data";

/// Language-specific naming conventions.
///
/// Defines how to transform table and column names, and how to handle
/// reserved words.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform table name to type name (e.g., "order_items" -> "OrderItems")
    pub table_to_type: fn(&str) -> String,
    /// Transform column name to field name
    pub column_to_field: fn(&str) -> String,
    /// Transform column name to serialization tag (e.g., "user_name" -> "userName")
    pub column_to_tag: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "r#type" in Rust)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Struct name for a table (e.g., "settings" -> "SettingsData").
    pub fn type_name(&self, table: &str) -> String {
        let transformed = (self.table_to_type)(table);
        self.safe_name(&format!("{}{}", transformed, TYPE_SUFFIX))
    }

    /// Transform and make safe for use as a field name.
    pub fn field_name(&self, column: &str) -> String {
        let transformed = (self.column_to_field)(column);
        self.safe_name(&transformed)
    }

    /// Serialization key for a column. Tags are strings, so no escaping.
    pub fn tag_name(&self, column: &str) -> String {
        (self.column_to_tag)(column)
    }
}

fn escape_rust_reserved(name: &str) -> String {
    match name {
        // Not allowed as raw identifiers
        "self" | "Self" | "super" | "crate" => format!("{}_", name),
        _ => format!("r#{}", name),
    }
}

fn escape_with_underscore(name: &str) -> String {
    format!("{}_", name)
}

/// Go naming conventions.
pub const GO_NAMING: NamingConvention = NamingConvention {
    table_to_type: to_pascal_case,
    column_to_field: to_pascal_case, // exported fields
    column_to_tag: to_camel_case,
    reserved_words: &[
        "break",
        "case",
        "chan",
        "const",
        "continue",
        "default",
        "defer",
        "else",
        "fallthrough",
        "for",
        "func",
        "go",
        "goto",
        "if",
        "import",
        "interface",
        "map",
        "package",
        "range",
        "return",
        "select",
        "struct",
        "switch",
        "type",
        "var",
    ],
    escape_reserved: escape_with_underscore,
};

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    table_to_type: to_pascal_case,
    column_to_field: to_snake_case,
    column_to_tag: to_camel_case,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
        "final", "gen", "macro", "override", "priv", "try", "typeof", "unsized", "virtual",
        "yield",
    ],
    escape_reserved: escape_rust_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_naming() {
        assert_eq!(GO_NAMING.type_name("settings"), "SettingsData");
        assert_eq!(GO_NAMING.type_name("order_items"), "OrderItemsData");
        assert_eq!(GO_NAMING.field_name("user_name"), "UserName");
        assert_eq!(GO_NAMING.field_name("id"), "Id");
        assert_eq!(GO_NAMING.tag_name("user_name"), "userName");
    }

    #[test]
    fn test_go_fields_never_hit_keywords() {
        // PascalCase output cannot collide with Go's lowercase keywords.
        for keyword in GO_NAMING.reserved_words {
            assert!(!GO_NAMING.is_reserved(&GO_NAMING.field_name(keyword)));
        }
    }

    #[test]
    fn test_rust_naming() {
        assert_eq!(RUST_NAMING.type_name("settings"), "SettingsData");
        assert_eq!(RUST_NAMING.field_name("user_name"), "user_name");
        assert_eq!(RUST_NAMING.field_name("createdAt"), "created_at");
        assert_eq!(RUST_NAMING.tag_name("user_name"), "userName");
    }

    #[test]
    fn test_rust_reserved_words() {
        assert!(RUST_NAMING.is_reserved("type"));
        assert!(RUST_NAMING.is_reserved("match"));
        assert!(!RUST_NAMING.is_reserved("hello"));
        assert_eq!(RUST_NAMING.field_name("type"), "r#type");
        assert_eq!(RUST_NAMING.field_name("self"), "self_");
    }

    #[test]
    fn test_tag_is_not_escaped() {
        assert_eq!(RUST_NAMING.tag_name("type"), "type");
    }
}
