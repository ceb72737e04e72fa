//! TOML catalog parser for the resource catalog.
//!
//! The catalog is the external input to a generation run: per non-language
//! category an ordered list of `{name, value}` definitions, plus an ordered
//! list of language definitions. Declaration order matters — packed IDs are
//! derived from it — so everything is kept in `Vec`s as written.
//!
//! Validation happens here, upstream of the generator core: duplicate
//! constant names and over-budget categories are rejected at the door, and
//! the core never re-checks them.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::categories::{data_categories, Category};
use crate::layout::{MAX_LANGUAGES, MAX_RESOURCES};
use crate::name::constant_name;

/// A single `{name, value}` resource definition, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceDef {
    pub name: String,
    pub value: String,
}

/// A language and its ordered value sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageDef {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

/// Raw TOML structure.
#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    resources: RawResources,
    #[serde(default)]
    languages: Vec<LanguageDef>,
}

#[derive(Debug, Default, Deserialize)]
struct RawResources {
    #[serde(default)]
    color: Vec<ResourceDef>,
    #[serde(default)]
    dimension: Vec<ResourceDef>,
    #[serde(default)]
    value: Vec<ResourceDef>,
    #[serde(default)]
    text: Vec<ResourceDef>,
}

/// Parsed and validated resource catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    // Indexed by category code; Language content lives in `languages`.
    resources: [Vec<ResourceDef>; 4],
    languages: Vec<LanguageDef>,
}

impl Catalog {
    /// Parse from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            CatalogError::Io(format!("Failed to read {}: {}", path.as_ref().display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog =
            toml::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let catalog = Self {
            resources: [
                raw.resources.color,
                raw.resources.dimension,
                raw.resources.value,
                raw.resources.text,
            ],
            languages: raw.languages,
        };

        catalog.validate()?;
        Ok(catalog)
    }

    /// Ordered definitions for a non-language category.
    ///
    /// Returns an empty slice for [`Category::Language`]; its content is
    /// reached through [`Catalog::languages`] instead.
    pub fn resources(&self, category: Category) -> &[ResourceDef] {
        match category {
            Category::Language => &[],
            other => &self.resources[other.code() as usize],
        }
    }

    /// Ordered language definitions.
    pub fn languages(&self) -> &[LanguageDef] {
        &self.languages
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for category in data_categories() {
            let defs = self.resources(category);

            if defs.len() > MAX_RESOURCES as usize {
                return Err(CatalogError::Validation(format!(
                    "Category '{}' holds {} resources, exceeding the {}-slot index budget",
                    category.catalog_key(),
                    defs.len(),
                    MAX_RESOURCES
                )));
            }

            let mut seen: HashSet<String> = HashSet::new();
            for def in defs {
                if def.name.is_empty() {
                    return Err(CatalogError::Validation(format!(
                        "Category '{}' contains a resource with an empty name",
                        category.catalog_key()
                    )));
                }
                let constant = constant_name(&def.name);
                if !seen.insert(constant.clone()) {
                    return Err(CatalogError::Validation(format!(
                        "Duplicate constant name '{}' in category '{}' (from resource '{}')",
                        constant,
                        category.catalog_key(),
                        def.name
                    )));
                }
            }
        }

        if self.languages.len() > MAX_LANGUAGES as usize {
            return Err(CatalogError::Validation(format!(
                "{} language definitions exceed the {}-code budget",
                self.languages.len(),
                MAX_LANGUAGES
            )));
        }

        for language in &self.languages {
            if language.name.is_empty() {
                return Err(CatalogError::Validation(
                    "Language with an empty name".into(),
                ));
            }
            if language.values.len() > MAX_RESOURCES as usize {
                return Err(CatalogError::Validation(format!(
                    "Language '{}' holds {} values, exceeding the {}-slot index budget",
                    language.name,
                    language.values.len(),
                    MAX_RESOURCES
                )));
            }
        }

        Ok(())
    }
}

/// Errors during catalog parsing.
#[derive(Debug)]
pub enum CatalogError {
    /// IO error
    Io(String),
    /// TOML parse error
    Parse(String),
    /// Validation error
    Validation(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}
