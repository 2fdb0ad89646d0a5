//! Indentation units.

/// One level of indentation in generated source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Indent {
    /// Four spaces, used for struct fields in every target.
    #[default]
    FourSpaces,
    /// A tab, as `gofmt` indents import blocks.
    Tab,
}

impl Indent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Indent::FourSpaces => "    ",
            Indent::Tab => "\t",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units() {
        assert_eq!(Indent::FourSpaces.as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
        assert_eq!(Indent::default(), Indent::FourSpaces);
    }
}
