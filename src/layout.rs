//! Identifier layout — fixed bit allocation for packed resource IDs.
//!
//! A packed ID is self-describing: the coarse selector (category or language
//! code) sits above the resource index, so a consumer can recover both by
//! unshifting, with no secondary lookup.
//!
//! ## Category-scoped ID layout (u32)
//!
//! ```text
//! ┌──────────────┬───────────────┬────────────────┐
//! │ (unused)     │ category code │ resource index │
//! │ bits [31:12] │ 4 bits [11:8] │ 8 bits [7:0]   │
//! └──────────────┴───────────────┴────────────────┘
//! ```
//!
//! ## Language-scoped ID layout (u32)
//!
//! Language codes are shifted past *both* fields above, so every
//! language-scoped ID lives in an address space disjoint from (and
//! numerically above) every category-scoped ID.
//!
//! ```text
//! ┌───────────────────────┬────────────────┐
//! │ language code         │ value index    │
//! │ bits [31:12]          │ 12 bits [11:0] │
//! └───────────────────────┴────────────────┘
//! ```

/// Packed identifier — category or language code plus position index.
pub type FullId = u32;

/// Bits reserved for a resource's position within its category
/// (or a value's position within its language).
pub const RESOURCE_BITS: u32 = 8;

/// Bits reserved for the category code.
pub const CATEGORY_BITS: u32 = 4;

/// Shift applied to a language code: past the index bits *and* the
/// category bits, placing language-scoped IDs above all category spaces.
pub const LANGUAGE_SHIFT: u32 = RESOURCE_BITS + CATEGORY_BITS;

/// Maximum number of resources one category (or language) may hold.
pub const MAX_RESOURCES: u32 = 1 << RESOURCE_BITS;

/// Maximum number of category codes.
pub const MAX_CATEGORIES: u32 = 1 << CATEGORY_BITS;

/// Maximum number of language codes before the ID type overflows.
pub const MAX_LANGUAGES: u32 = 1 << (FullId::BITS - LANGUAGE_SHIFT);

/// Static assertion: the category-scoped layout must fit the ID type.
const _: () = {
    assert!(
        RESOURCE_BITS + CATEGORY_BITS < FullId::BITS,
        "packed layout must leave room for at least one language code bit"
    );
};

/// Pack a category-scoped identifier.
///
/// `index` is the resource's zero-based position in its category's
/// *declaration order*, fixed before any sorting.
///
/// Out-of-range inputs silently corrupt higher-order bits in release
/// builds; this is a documented precondition, caught only in debug builds.
#[inline]
pub const fn category_scoped_id(category_code: u32, index: u32) -> FullId {
    debug_assert!(index < MAX_RESOURCES, "resource index exceeds RESOURCE_BITS");
    debug_assert!(
        category_code < MAX_CATEGORIES,
        "category code exceeds CATEGORY_BITS"
    );
    (category_code << RESOURCE_BITS) + index
}

/// Pack a language-scoped identifier.
///
/// `language_code` must come from the run's [`LanguageVocabulary`]; `index`
/// is the value's zero-based position within its language's value sequence.
///
/// [`LanguageVocabulary`]: crate::LanguageVocabulary
#[inline]
pub const fn language_scoped_id(language_code: u32, index: u32) -> FullId {
    debug_assert!(index < MAX_RESOURCES, "value index exceeds RESOURCE_BITS");
    debug_assert!(
        language_code < MAX_LANGUAGES,
        "language code exceeds the bits above LANGUAGE_SHIFT"
    );
    (language_code << LANGUAGE_SHIFT) + index
}

/// Extract the category code from a category-scoped ID.
#[inline]
pub const fn category_of(id: FullId) -> u32 {
    id >> RESOURCE_BITS
}

/// Extract the position index from a category-scoped ID.
#[inline]
pub const fn index_of(id: FullId) -> u32 {
    id & (MAX_RESOURCES - 1)
}

/// Extract the language code from a language-scoped ID.
#[inline]
pub const fn language_of(id: FullId) -> u32 {
    id >> LANGUAGE_SHIFT
}

/// Extract the value index from a language-scoped ID.
#[inline]
pub const fn language_index_of(id: FullId) -> u32 {
    id & ((1 << LANGUAGE_SHIFT) - 1)
}
