//! Key-code table construction and output emission.
//!
//! One [`CodeGenerator`] owns one generation run: it materializes the
//! key-code tables and the language vocabulary at construction, then the
//! emitters render them as text. Nothing is shared or mutated across runs.
//!
//! Packed IDs are fixed from declaration order at construction time. The
//! alphabetical key listing is purely presentational — a stable index sort
//! over the entries, never a reassignment of IDs — so sorted display order
//! and numeric ID order are deliberately decoupled.

use crate::catalog::Catalog;
use crate::categories::{data_categories, Category};
use crate::layout::{category_scoped_id, language_scoped_id, FullId};
use crate::name::constant_name;
use crate::value::{convert, json_string, ResourceValue};

/// One resource within a non-language category.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyCodeEntry {
    /// Normalized constant name.
    pub name: String,
    /// Zero-based position in the category's declaration order.
    pub id: u32,
    /// Packed identifier, computed from `id` before any sorting.
    pub full_id: FullId,
    /// Converted value.
    pub value: ResourceValue,
}

#[derive(Debug, Clone)]
struct CategoryTable {
    category: Category,
    /// Declaration order; `entries[i].id == i`.
    entries: Vec<KeyCodeEntry>,
    /// Indices into `entries`, sorted by constant name.
    sorted: Vec<usize>,
}

#[derive(Debug, Clone)]
struct LanguageBlock {
    name: String,
    /// `(packed id, raw value)` pairs — language values are never converted.
    values: Vec<(FullId, String)>,
}

/// First-encounter-order assignment of sequential codes to language names.
///
/// The sole authority for language codes in a run: every component that
/// needs one reads it from here. Immutable once the generator is built.
#[derive(Debug, Clone, Default)]
pub struct LanguageVocabulary {
    codes: Vec<(String, u32)>,
}

impl LanguageVocabulary {
    /// Return the code for a language name, assigning the next sequential
    /// code on first encounter. Names are case-normalized to lowercase, and
    /// a repeated name yields the same code both times.
    fn intern(&mut self, name: &str) -> u32 {
        let key = name.to_lowercase();
        if let Some(code) = self.lookup(&key) {
            return code;
        }
        let code = self.codes.len() as u32;
        self.codes.push((key, code));
        code
    }

    fn lookup(&self, key: &str) -> Option<u32> {
        self.codes
            .iter()
            .find(|(name, _)| name == key)
            .map(|&(_, code)| code)
    }

    /// Code for a language name, if it appeared in this run.
    pub fn code_of(&self, name: &str) -> Option<u32> {
        self.lookup(&name.to_lowercase())
    }

    /// `(lowercase name, code)` pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.codes.iter().map(|(name, code)| (name.as_str(), *code))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// One generation run over a validated catalog.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    tables: Vec<CategoryTable>,
    languages: Vec<LanguageBlock>,
    vocabulary: LanguageVocabulary,
}

impl CodeGenerator {
    pub fn new(catalog: &Catalog) -> Self {
        let tables = data_categories()
            .map(|category| build_table(catalog, category))
            .collect();

        let mut vocabulary = LanguageVocabulary::default();
        let languages = catalog
            .languages()
            .iter()
            .map(|language| {
                let code = vocabulary.intern(&language.name);
                let values = language
                    .values
                    .iter()
                    .enumerate()
                    .map(|(index, value)| {
                        (language_scoped_id(code, index as u32), value.clone())
                    })
                    .collect();
                LanguageBlock {
                    name: language.name.clone(),
                    values,
                }
            })
            .collect();

        Self {
            tables,
            languages,
            vocabulary,
        }
    }

    /// A category's entries in declaration (ID) order.
    ///
    /// Empty for [`Category::Language`]; language content is reached through
    /// the data emitter and [`CodeGenerator::vocabulary`].
    pub fn entries(&self, category: Category) -> &[KeyCodeEntry] {
        self.tables
            .iter()
            .find(|t| t.category == category)
            .map(|t| t.entries.as_slice())
            .unwrap_or(&[])
    }

    /// A category's entries sorted by constant name.
    pub fn sorted_entries(&self, category: Category) -> Vec<&KeyCodeEntry> {
        self.tables
            .iter()
            .find(|t| t.category == category)
            .map(|t| t.sorted.iter().map(|&i| &t.entries[i]).collect())
            .unwrap_or_default()
    }

    /// The run's language vocabulary.
    pub fn vocabulary(&self) -> &LanguageVocabulary {
        &self.vocabulary
    }

    /// Render the keys table: one export per non-language category, entries
    /// sorted by constant name.
    pub fn keys_output(&self) -> String {
        let mut output = Vec::new();

        for table in &self.tables {
            let properties: Vec<String> = table
                .sorted
                .iter()
                .map(|&i| {
                    let entry = &table.entries[i];
                    format!("{}:{}", entry.name, entry.full_id)
                })
                .collect();
            output.push(format!(
                "export let {} = {{{}}};",
                table.category.label(),
                properties.join(",")
            ));
        }

        output.join("\n")
    }

    /// Render the data table: per-category assignments in ID order, then the
    /// combined language block.
    pub fn data_output(&self) -> String {
        let mut output = Vec::new();

        for table in &self.tables {
            let properties: Vec<String> = table
                .entries
                .iter()
                .map(|entry| format!("'{}':{}", entry.full_id, entry.value.to_literal()))
                .collect();
            output.push(format!("// {}", table.category.label()));
            output.push(format!(
                "data[{}] = {{{}}};",
                table.category.code(),
                properties.join(",")
            ));
        }

        output.extend(self.language_data());

        output.join("\n")
    }

    /// Render the standalone language-name-to-code vocabulary literal.
    pub fn language_tag_output(&self) -> String {
        let properties: Vec<String> = self
            .vocabulary
            .iter()
            .map(|(name, code)| format!("{}:{}", json_string(name), code))
            .collect();
        format!("let languages = {{{}}};", properties.join(","))
    }

    fn language_data(&self) -> Vec<String> {
        let mut output = Vec::new();
        let mut properties = Vec::new();

        for block in &self.languages {
            output.push(format!("// {}: {}", Category::Language.label(), block.name));
            for (id, value) in &block.values {
                properties.push(format!("'{}':{}", id, json_string(value)));
            }
        }

        output.push(format!(
            "data[{}] = {{{}}}",
            Category::Language.code(),
            properties.join(",")
        ));

        output
    }
}

fn build_table(catalog: &Catalog, category: Category) -> CategoryTable {
    let entries: Vec<KeyCodeEntry> = catalog
        .resources(category)
        .iter()
        .enumerate()
        .map(|(index, def)| KeyCodeEntry {
            name: constant_name(&def.name),
            id: index as u32,
            full_id: category_scoped_id(category.code(), index as u32),
            value: convert(&def.value, category),
        })
        .collect();

    let mut sorted: Vec<usize> = (0..entries.len()).collect();
    sorted.sort_by(|&a, &b| entries[a].name.cmp(&entries[b].name));

    CategoryTable {
        category,
        entries,
        sorted,
    }
}
