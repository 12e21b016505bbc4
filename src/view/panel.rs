//! Filter panel model: the "All" control plus categories and their tags
//!
//! Built once per catalog load; only expansion and the active mark change
//! afterwards.

use crate::catalog::{Query, display_name};

/// Identifies a control in the filter panel
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControlId {
    /// The "All" control
    All,
    /// A category header
    Category(&'static str),
    /// A tag control
    Tag(String),
}

/// A tag control inside a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagControl {
    /// Tag key
    pub tag: String,
    /// Capitalized tag name
    pub label: String,
    /// Entry count
    pub badge: usize,
}

/// A category header and its tag controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryControl {
    /// Category name
    pub name: &'static str,
    /// Sum of its tags' counts
    pub badge: usize,
    /// Whether the tag controls are shown
    pub expanded: bool,
    /// Tags of this category present in the catalog
    pub tags: Vec<TagControl>,
}

/// A visible row of the panel, flattened for navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
    /// Control this row represents
    pub id: ControlId,
    /// Text label
    pub label: String,
    /// Count badge
    pub badge: usize,
    /// Nesting depth (0 for All and categories)
    pub depth: usize,
}

/// The whole filter panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPanel {
    /// Badge of the "All" control
    pub total: usize,
    /// Category groups in configured order
    pub categories: Vec<CategoryControl>,
}

impl FilterPanel {
    /// Build the panel from the current catalog
    #[must_use]
    pub fn build(query: &Query<'_>) -> Self {
        let categories = query
            .categories()
            .iter()
            .map(|category| CategoryControl {
                name: category.name,
                badge: query.count_in(category),
                expanded: true,
                tags: query
                    .present_tags(category)
                    .into_iter()
                    .map(|(tag, badge)| TagControl {
                        tag: tag.to_string(),
                        label: display_name(tag),
                        badge,
                    })
                    .collect(),
            })
            .collect();

        Self {
            total: query.total_count(),
            categories,
        }
    }

    /// Expand or collapse a category; returns false for unknown names
    pub fn toggle(&mut self, name: &str) -> bool {
        if let Some(category) = self.categories.iter_mut().find(|c| c.name == name) {
            category.expanded = !category.expanded;
            true
        } else {
            false
        }
    }

    /// Whether a tag control is rendered for `tag`
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.tags.iter().any(|t| t.tag == tag))
    }

    /// Visible rows, top to bottom
    #[must_use]
    pub fn rows(&self) -> Vec<PanelRow> {
        let mut rows = vec![PanelRow {
            id: ControlId::All,
            label: "All".to_string(),
            badge: self.total,
            depth: 0,
        }];

        for category in &self.categories {
            rows.push(PanelRow {
                id: ControlId::Category(category.name),
                label: category.name.to_string(),
                badge: category.badge,
                depth: 0,
            });
            if category.expanded {
                rows.extend(category.tags.iter().map(|t| PanelRow {
                    id: ControlId::Tag(t.tag.clone()),
                    label: t.label.clone(),
                    badge: t.badge,
                    depth: 1,
                }));
            }
        }

        rows
    }
}
