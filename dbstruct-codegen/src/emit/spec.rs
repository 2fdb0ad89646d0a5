//! Intermediate values between column descriptors and rendered text.

use crate::language::Widths;

/// One field of a generated struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    /// Declared field identifier
    pub name: String,
    /// Resolved language type
    pub ty: String,
    /// Serialization name, present only when tags are enabled
    pub tag: Option<String>,
}

/// A struct declaration ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructSpec {
    pub type_name: String,
    pub rows: Vec<FieldRow>,
}

impl StructSpec {
    /// Whether any field carries a serialization tag.
    pub fn is_tagged(&self) -> bool {
        self.rows.iter().any(|row| row.tag.is_some())
    }

    /// Column widths across all rows, counted in characters.
    pub fn widths(&self) -> Widths {
        self.rows.iter().fold(Widths::default(), |acc, row| Widths {
            name: acc.name.max(row.name.chars().count()),
            ty: acc.ty.max(row.ty.chars().count()),
            tag: acc
                .tag
                .max(row.tag.as_deref().map_or(0, |t| t.chars().count())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, ty: &str, tag: Option<&str>) -> FieldRow {
        FieldRow {
            name: name.to_string(),
            ty: ty.to_string(),
            tag: tag.map(str::to_string),
        }
    }

    #[test]
    fn test_widths() {
        let spec = StructSpec {
            type_name: "UsersData".to_string(),
            rows: vec![
                row("Id", "uint64", Some("id")),
                row("UserName", "*string", Some("userName")),
            ],
        };
        assert_eq!(
            spec.widths(),
            Widths {
                name: 8,
                ty: 7,
                tag: 8
            }
        );
    }

    #[test]
    fn test_is_tagged() {
        let mut spec = StructSpec {
            type_name: "TData".to_string(),
            rows: vec![row("a", "string", None), row("b", "string", None)],
        };
        assert!(!spec.is_tagged());

        spec.rows[1].tag = Some("b".to_string());
        assert!(spec.is_tagged());
    }

    #[test]
    fn test_widths_count_characters() {
        let spec = StructSpec {
            type_name: "TData".to_string(),
            rows: vec![row("Größe", "string", None)],
        };
        assert_eq!(spec.widths().name, 5);
        assert_eq!(spec.widths().tag, 0);
    }
}
