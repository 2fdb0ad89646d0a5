//! Line-oriented source text builder.

use super::Indent;

/// Consuming builder for indented source lines.
///
/// ```
/// use dbstruct_codegen::builder::{CodeBuilder, Indent};
///
/// let code = CodeBuilder::new(Indent::Tab)
///     .line("package models")
///     .blank()
///     .block("import (", ")", |b| b.line("\"time\""))
///     .finish();
///
/// assert_eq!(code, "package models\n\nimport (\n\t\"time\"\n)\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    unit: Indent,
    depth: usize,
    out: String,
}

impl CodeBuilder {
    pub fn new(unit: Indent) -> Self {
        Self {
            unit,
            depth: 0,
            out: String::new(),
        }
    }

    /// Append one line at the current depth.
    pub fn line(mut self, text: &str) -> Self {
        for _ in 0..self.depth {
            self.out.push_str(self.unit.as_str());
        }
        self.out.push_str(text);
        self.out.push('\n');
        self
    }

    /// Append an empty line. Empty lines are never indented.
    pub fn blank(mut self) -> Self {
        self.out.push('\n');
        self
    }

    /// Append `open`, then whatever `body` adds one level deeper, then `close`.
    ///
    /// ```
    /// use dbstruct_codegen::builder::{CodeBuilder, Indent};
    ///
    /// let code = CodeBuilder::new(Indent::FourSpaces)
    ///     .block("pub struct UsersData {", "}", |b| b.line("pub id: u64,"))
    ///     .finish_trimmed();
    ///
    /// assert_eq!(code, "pub struct UsersData {\n    pub id: u64,\n}");
    /// ```
    pub fn block<F>(mut self, open: &str, close: &str, body: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        self = self.line(open);
        self.depth += 1;
        let mut inner = body(self);
        inner.depth = inner.depth.saturating_sub(1);
        inner.line(close)
    }

    /// Append lines for every item, in order.
    pub fn each<T, I, F>(self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        items.into_iter().fold(self, f)
    }

    pub fn finish(self) -> String {
        self.out
    }

    /// Like [`finish`](Self::finish), without the newline ending the last line.
    pub fn finish_trimmed(mut self) -> String {
        if self.out.ends_with('\n') {
            self.out.pop();
        }
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_and_blank() {
        let code = CodeBuilder::new(Indent::Tab)
            .line("package models")
            .blank()
            .line("import \"time\"")
            .finish();
        assert_eq!(code, "package models\n\nimport \"time\"\n");
    }

    #[test]
    fn test_nested_blocks() {
        let code = CodeBuilder::new(Indent::FourSpaces)
            .block("a {", "}", |b| b.block("b {", "}", |b| b.line("c")))
            .line("d")
            .finish();
        assert_eq!(code, "a {\n    b {\n        c\n    }\n}\nd\n");
    }

    #[test]
    fn test_blank_inside_block_is_not_indented() {
        let code = CodeBuilder::new(Indent::Tab)
            .block("(", ")", |b| b.blank())
            .finish();
        assert_eq!(code, "(\n\n)\n");
    }

    #[test]
    fn test_each_keeps_order() {
        let code = CodeBuilder::new(Indent::Tab)
            .each(["\"fmt\"", "\"time\""], |b, import| b.line(import))
            .finish();
        assert_eq!(code, "\"fmt\"\n\"time\"\n");
    }

    #[test]
    fn test_finish_trimmed() {
        let code = CodeBuilder::new(Indent::Tab).line("a").line("b").finish_trimmed();
        assert_eq!(code, "a\nb");
        assert_eq!(CodeBuilder::new(Indent::Tab).finish_trimmed(), "");
    }
}
