//! Import collection utilities.

use std::collections::BTreeSet;

/// Tracks imported modules and deduplicates them.
///
/// Iteration is sorted, matching how `gofmt` orders an import block.
///
/// ```
/// use dbstruct_codegen::builder::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add_module("time");
/// imports.add_module("database/sql");
/// imports.add_module("time");
///
/// let modules: Vec<&str> = imports.iter().collect();
/// assert_eq!(modules, vec!["database/sql", "time"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    modules: BTreeSet<String>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module import.
    pub fn add_module(&mut self, module: &str) {
        self.modules.insert(module.to_string());
    }

    /// Check if a module is already imported.
    pub fn has_module(&self, module: &str) -> bool {
        self.modules.contains(module)
    }

    /// Iterate over all modules in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(String::as_str)
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup() {
        let mut imports = ImportCollector::new();
        imports.add_module("time");
        imports.add_module("time");

        assert_eq!(imports.len(), 1);
        assert!(imports.has_module("time"));
        assert!(!imports.has_module("fmt"));
    }

    #[test]
    fn test_empty() {
        let imports = ImportCollector::new();
        assert!(imports.is_empty());
        assert_eq!(imports.iter().count(), 0);
    }
}
