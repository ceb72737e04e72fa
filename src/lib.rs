//! # Bit-Packed Resource Key Generation (reskey)
//!
//! Code-generation stage of a resource/theming pipeline: turns a catalog of
//! categorized design-resource definitions (colors, dimensions, literal
//! values, text, localized text) into compact integer identifiers and two
//! textual lookup artifacts.
//!
//! ## Packed ID layout (u32)
//!
//! ```text
//! ┌──────────────┬───────────────┬────────────────┐
//! │ (unused)     │ category code │ resource index │
//! │ bits [31:12] │ 4 bits [11:8] │ 8 bits [7:0]   │
//! └──────────────┴───────────────┴────────────────┘
//! ```
//!
//! Language-scoped IDs shift the language code past both fields, keeping the
//! localized-text address space disjoint from every category space.
//!
//! ## Artifacts
//!
//! - **keys** — one export per category binding constant names to packed IDs:
//!   `export let Value = {BAZ:513,FOO_BAR:512};`
//! - **data** — packed ID to converted value, plus the combined language
//!   block: `data[2] = {'512':1.5,'513':2};`
//! - **languages** — lowercase language name to sequential code:
//!   `let languages = {"english":0,"french":1};`
//!
//! IDs derive from declaration order in the catalog; reordering the catalog
//! reassigns them. The key listing is sorted alphabetically for browsing,
//! but sorting never touches the IDs.
//!
//! # Usage in build.rs
//!
//! ```ignore
//! // build.rs
//! fn main() {
//!     println!("cargo:rerun-if-changed=resources.toml");
//!     reskey::generate(
//!         "resources.toml",
//!         "gen/keys.js",
//!         "gen/data.js",
//!         "gen/languages.js",
//!     )
//!     .expect("Failed to generate resource keys");
//! }
//! ```

mod catalog;
mod categories;
mod generator;
mod layout;
mod name;
mod value;

pub use catalog::{Catalog, CatalogError, LanguageDef, ResourceDef};
pub use categories::{data_categories, Category, ALL_CATEGORIES};
pub use generator::{CodeGenerator, KeyCodeEntry, LanguageVocabulary};
pub use layout::{
    category_of, category_scoped_id, index_of, language_index_of, language_of,
    language_scoped_id, FullId, CATEGORY_BITS, LANGUAGE_SHIFT, MAX_CATEGORIES, MAX_LANGUAGES,
    MAX_RESOURCES, RESOURCE_BITS,
};
pub use name::constant_name;
pub use value::{convert, ResourceValue};

use std::path::Path;

/// Main entry point for build-script integration.
///
/// Reads and validates the catalog, runs one generation pass, and writes the
/// three artifacts. All I/O lives here; the generator core stays pure.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read, parsed, or validated, or
/// if an output file cannot be written.
pub fn generate(
    catalog_path: impl AsRef<Path>,
    keys_path: impl AsRef<Path>,
    data_path: impl AsRef<Path>,
    languages_path: impl AsRef<Path>,
) -> Result<(), GenerateError> {
    let catalog = Catalog::from_file(catalog_path)?;
    let generator = CodeGenerator::new(&catalog);

    write_artifact(keys_path.as_ref(), &generator.keys_output())?;
    write_artifact(data_path.as_ref(), &generator.data_output())?;
    write_artifact(languages_path.as_ref(), &generator.language_tag_output())?;

    Ok(())
}

fn write_artifact(path: &Path, content: &str) -> Result<(), GenerateError> {
    let stamped = format!("{}{}\n", banner(), content);
    std::fs::write(path, stamped).map_err(|e| {
        GenerateError::Io(format!("Failed to write {}: {}", path.display(), e))
    })
}

fn banner() -> String {
    format!(
        "// Generated by reskey {} at {}. Do not edit.\n",
        env!("CARGO_PKG_VERSION"),
        chrono::Utc::now().to_rfc3339()
    )
}

/// Errors from the [`generate`] entry point.
#[derive(Debug)]
pub enum GenerateError {
    /// Catalog could not be read, parsed, or validated.
    Catalog(CatalogError),
    /// Output could not be written.
    Io(String),
}

impl From<CatalogError> for GenerateError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Catalog(err) => write!(f, "Catalog error: {}", err),
            Self::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Catalog(err) => Some(err),
            Self::Io(_) => None,
        }
    }
}
