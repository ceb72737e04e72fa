//! The fixed resource taxonomy.
//!
//! Categories are an ordered enumeration; a category's code is its position
//! in that order and is shared with every downstream consumer of the packed
//! IDs. [`Category::Language`] is distinguished: its content is keyed by
//! language rather than by flat name/value pairs, and it is excluded from the
//! flat keys/data tables.

use crate::layout::MAX_CATEGORIES;

/// A taxonomic bucket of resource kinds, identified by its ordinal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Color,
    Dimension,
    Value,
    Text,
    Language,
}

/// All categories, in taxonomy (code) order.
pub const ALL_CATEGORIES: [Category; 5] = [
    Category::Color,
    Category::Dimension,
    Category::Value,
    Category::Text,
    Category::Language,
];

/// Static assertion: every category code must fit in CATEGORY_BITS.
const _: () = {
    assert!(
        ALL_CATEGORIES.len() <= MAX_CATEGORIES as usize,
        "taxonomy exceeds CATEGORY_BITS"
    );
};

impl Category {
    /// The category's code — its zero-based position in the taxonomy.
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Human-readable label, used as the emitted export/comment name.
    pub const fn label(self) -> &'static str {
        match self {
            Category::Color => "Color",
            Category::Dimension => "Dimension",
            Category::Value => "Value",
            Category::Text => "Text",
            Category::Language => "Language",
        }
    }

    /// The key naming this category in the catalog file.
    pub const fn catalog_key(self) -> &'static str {
        match self {
            Category::Color => "color",
            Category::Dimension => "dimension",
            Category::Value => "value",
            Category::Text => "text",
            Category::Language => "language",
        }
    }

    #[inline]
    pub const fn is_language(self) -> bool {
        matches!(self, Category::Language)
    }
}

/// The non-language categories, in taxonomy order.
pub fn data_categories() -> impl Iterator<Item = Category> {
    ALL_CATEGORIES.into_iter().filter(|c| !c.is_language())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_taxonomy_order() {
        assert_eq!(Category::Color.code(), 0);
        assert_eq!(Category::Dimension.code(), 1);
        assert_eq!(Category::Value.code(), 2);
        assert_eq!(Category::Text.code(), 3);
        assert_eq!(Category::Language.code(), 4);

        for (position, category) in ALL_CATEGORIES.iter().enumerate() {
            assert_eq!(category.code() as usize, position);
        }
    }

    #[test]
    fn data_categories_exclude_language() {
        let data: Vec<_> = data_categories().collect();
        assert_eq!(
            data,
            [
                Category::Color,
                Category::Dimension,
                Category::Value,
                Category::Text
            ]
        );
        assert!(data.iter().all(|c| !c.is_language()));
    }

    #[test]
    fn labels_are_valid_export_names() {
        for category in ALL_CATEGORIES {
            let label = category.label();
            assert!(!label.is_empty());
            assert!(label.chars().next().unwrap().is_ascii_alphabetic());
            assert!(label.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        }
    }
}
