//! Language-specific abstractions.
//!
//! This module provides traits and types for language-specific code generation:
//! - [`TypeMapper`] - Trait for mapping column types to language types
//! - [`StructLayout`] - Trait for the textual shape of a struct
//! - [`NamingConvention`] - Language-specific naming rules
//! - [`LanguageSupport`] - The three above, bundled per [`Language`]

mod naming;
mod traits;

use dbstruct_schema::Language;
pub use naming::{GO_NAMING, NamingConvention, RUST_NAMING, TYPE_SUFFIX};
pub use traits::{StructLayout, TypeMapper, Widths};

use crate::mappers::{GoLayout, GoTypeMapper, RustLayout, RustTypeMapper};

/// Everything needed to render structs for one target language.
#[derive(Clone, Copy)]
pub struct LanguageSupport {
    pub language: Language,
    pub mapper: &'static dyn TypeMapper,
    pub naming: &'static NamingConvention,
    pub layout: &'static dyn StructLayout,
}

impl LanguageSupport {
    pub fn get(language: Language) -> Self {
        match language {
            Language::Go => Self {
                language,
                mapper: &GoTypeMapper,
                naming: &GO_NAMING,
                layout: &GoLayout,
            },
            Language::Rust => Self {
                language,
                mapper: &RustTypeMapper,
                naming: &RUST_NAMING,
                layout: &RustLayout,
            },
        }
    }
}

impl std::fmt::Debug for LanguageSupport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageSupport")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}
