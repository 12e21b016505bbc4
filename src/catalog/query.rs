//! Read-only queries over a loaded catalog
//!
//! All operations are pure and never fail: absent tags and unknown
//! categories simply count as zero.

use super::Catalog;
use super::categories::{CATEGORIES, Category};

/// Query view over a catalog and its category configuration
#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    catalog: &'a Catalog,
    categories: &'a [Category],
}

impl<'a> Query<'a> {
    /// Query `catalog` with the built-in categories
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            categories: CATEGORIES,
        }
    }

    /// Query `catalog` with a custom category configuration
    #[must_use]
    pub const fn with_categories(catalog: &'a Catalog, categories: &'a [Category]) -> Self {
        Self {
            catalog,
            categories,
        }
    }

    /// The underlying catalog
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// The category configuration
    #[must_use]
    pub const fn categories(&self) -> &'a [Category] {
        self.categories
    }

    /// Entries for `tag`; empty when the tag is absent
    #[must_use]
    pub fn entries_for_tag(&self, tag: &str) -> &'a [String] {
        self.catalog.get(tag).unwrap_or(&[])
    }

    /// Every tag in catalog order
    pub fn all_tags(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.catalog.groups().map(|g| g.tag.as_str())
    }

    /// Number of entries for `tag`
    #[must_use]
    pub fn count_for_tag(&self, tag: &str) -> usize {
        self.entries_for_tag(tag).len()
    }

    /// Sum of tag counts for a category; unknown categories count zero
    #[must_use]
    pub fn count_for_category(&self, name: &str) -> usize {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map_or(0, |category| self.count_in(category))
    }

    /// Sum of tag counts for `category`
    #[must_use]
    pub fn count_in(&self, category: &Category) -> usize {
        category.tags.iter().map(|tag| self.count_for_tag(tag)).sum()
    }

    /// Tags of `category` present in the catalog, with their counts
    #[must_use]
    pub fn present_tags(&self, category: &Category) -> Vec<(&'static str, usize)> {
        category
            .tags
            .iter()
            .filter(|tag| self.catalog.contains(tag))
            .map(|&tag| (tag, self.count_for_tag(tag)))
            .collect()
    }

    /// Number of entries across every tag
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.all_tags().map(|tag| self.count_for_tag(tag)).sum()
    }
}

/// Human-readable tag name: first character upper-cased
///
/// ```
/// assert_eq!(kaomoji::catalog::display_name("joy"), "Joy");
/// ```
#[must_use]
pub fn display_name(tag: &str) -> String {
    let mut chars = tag.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
