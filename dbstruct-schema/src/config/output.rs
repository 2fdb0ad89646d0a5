use std::path::PathBuf;

use dbstruct_core::WriteMode;
use serde::Deserialize;

use crate::Language;

/// `[output]` section of dbstruct.toml.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// File the generated structs are written to
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Package (Go) or module (Rust) name in the file header
    #[serde(default = "default_package")]
    pub package: String,
    #[serde(default)]
    pub language: Language,
    /// Attach serialization tags to fields
    #[serde(default = "default_tags")]
    pub tags: bool,
    #[serde(default)]
    pub mode: WriteMode,
    /// Tables to generate, in order. Empty means every table.
    #[serde(default)]
    pub tables: Vec<String>,
}

fn default_package() -> String {
    "models".to_string()
}

fn default_tags() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            package: default_package(),
            language: Language::default(),
            tags: default_tags(),
            mode: WriteMode::default(),
            tables: Vec::new(),
        }
    }
}

impl OutputConfig {
    /// Output path, defaulting to `<package>.<ext>` for the language.
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            PathBuf::from(format!("{}.{}", self.package, self.language.extension()))
        })
    }
}
