//! Declarative rendering of the results area
//!
//! [`render_results`] is a pure function of the catalog and the selection;
//! the terminal adapter reconciles its output onto the screen.

use super::Selection;
use crate::catalog::{Query, display_name};

/// One titled group of kaomoji
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    /// Tag the section shows
    pub tag: String,
    /// Title: display name and entry count, e.g. `Joy (3)`
    pub title: String,
    /// Kaomoji in catalog order
    pub entries: Vec<String>,
}

/// A node of the results area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultNode {
    /// A titled grid of kaomoji
    Section(SectionView),
    /// Placeholder for a tag with nothing to show
    NoResults {
        /// The requested tag
        tag: String,
        /// Message to display
        message: String,
    },
}

/// Everything the results area displays
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsView {
    /// Nodes, top to bottom
    pub nodes: Vec<ResultNode>,
}

impl ResultsView {
    /// Sections only, skipping placeholders
    pub fn sections(&self) -> impl Iterator<Item = &SectionView> {
        self.nodes.iter().filter_map(|node| match node {
            ResultNode::Section(section) => Some(section),
            ResultNode::NoResults { .. } => None,
        })
    }

    /// Total number of grid entries
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.sections().map(|s| s.entries.len()).sum()
    }
}

/// Section title for a tag with `count` entries
#[must_use]
pub fn section_title(tag: &str, count: usize) -> String {
    format!("{} ({count})", display_name(tag))
}

/// Placeholder message for a tag without entries
#[must_use]
pub fn no_results_message(tag: &str) -> String {
    format!("No kaomoji found for \"{tag}\"")
}

fn section(query: &Query<'_>, tag: &str) -> SectionView {
    let entries = query.entries_for_tag(tag);
    SectionView {
        tag: tag.to_string(),
        title: section_title(tag, entries.len()),
        entries: entries.to_vec(),
    }
}

/// Render the results area for `selection`
#[must_use]
pub fn render_results(query: &Query<'_>, selection: &Selection) -> ResultsView {
    let nodes = match selection {
        Selection::All => query
            .all_tags()
            .filter(|tag| query.count_for_tag(tag) > 0)
            .map(|tag| ResultNode::Section(section(query, tag)))
            .collect(),
        Selection::Tag(tag) if query.count_for_tag(tag) == 0 => vec![ResultNode::NoResults {
            tag: tag.clone(),
            message: no_results_message(tag),
        }],
        Selection::Tag(tag) => vec![ResultNode::Section(section(query, tag))],
    };
    ResultsView { nodes }
}
