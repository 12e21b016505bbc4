//! Kaomoji catalog: tag → entries mapping and its loader
//!
//! The catalog is read once at startup from a JSON document of the form
//! `{ "<tag>": ["<kaomoji>", ...], ... }` and is read-only afterwards.
//! Tag order follows the document; tags with an empty list are dropped so that
//! every tag present in a [`Catalog`] has at least one entry.
//!
//! # Examples
//!
//! ```
//! use kaomoji::catalog::{self, CatalogSource};
//!
//! let catalog = catalog::load_or_empty(&CatalogSource::Embedded);
//! assert!(catalog.len() > 0);
//! ```

mod categories;
mod error;
pub mod query;

pub use categories::{CATEGORIES, Category};
pub use error::CatalogError;
pub use query::{Query, display_name};

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Catalog document shipped inside the binary
pub const EMBEDDED_CATALOG: &str = include_str!("../../data/kaomoji.json");

/// One tag and its ordered kaomoji
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagGroup {
    /// Tag name as it appears in the data source
    pub tag: String,
    /// Kaomoji for this tag, never empty
    pub entries: Vec<String>,
}

/// Ordered mapping from tag to kaomoji
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    groups: Vec<TagGroup>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries for `tag`, or `None` when the tag is absent
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&[String]> {
        self.index
            .get(tag)
            .map(|&idx| self.groups[idx].entries.as_slice())
    }

    /// Whether `tag` is present
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.index.contains_key(tag)
    }

    /// Tag groups in load order
    pub fn groups(&self) -> impl Iterator<Item = &TagGroup> {
        self.groups.iter()
    }

    /// Number of tags
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the catalog has no tags
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Insert or replace a tag, keeping the position of its first occurrence.
    /// An empty list removes the tag.
    fn insert(&mut self, tag: String, entries: Vec<String>) {
        match (self.index.get(&tag).copied(), entries.is_empty()) {
            (Some(idx), false) => self.groups[idx].entries = entries,
            (Some(idx), true) => {
                self.groups.remove(idx);
                self.reindex();
            }
            (None, false) => {
                self.index.insert(tag.clone(), self.groups.len());
                self.groups.push(TagGroup { tag, entries });
            }
            (None, true) => {}
        }
    }

    fn reindex(&mut self) {
        self.index = self
            .groups
            .iter()
            .enumerate()
            .map(|(idx, group)| (group.tag.clone(), idx))
            .collect();
    }
}

impl FromIterator<(String, Vec<String>)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (tag, entries) in iter {
            catalog.insert(tag, entries);
        }
        catalog
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping tag names to arrays of strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Catalog, A::Error> {
                let mut catalog = Catalog::new();
                while let Some((tag, entries)) = map.next_entry::<String, Vec<String>>()? {
                    catalog.insert(tag, entries);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// Where the catalog document comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    /// The document compiled into the binary
    #[default]
    Embedded,
    /// A JSON file on disk
    File(PathBuf),
}

impl CatalogSource {
    /// Use `path` when given, the embedded document otherwise
    #[must_use]
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Embedded, Self::File)
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => f.write_str("<embedded>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse a catalog document
///
/// # Errors
///
/// Returns `CatalogError::Parse` if `document` is not a JSON object whose
/// values are arrays of strings.
pub fn parse(document: &str) -> Result<Catalog, CatalogError> {
    Ok(serde_json::from_str(document)?)
}

/// Read and parse the catalog from `source`
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be read and
/// `CatalogError::Parse` if its content is malformed.
pub fn load(source: &CatalogSource) -> Result<Catalog, CatalogError> {
    match source {
        CatalogSource::Embedded => parse(EMBEDDED_CATALOG),
        CatalogSource::File(path) => {
            let document = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
                path: path.clone(),
                source,
            })?;
            parse(&document)
        }
    }
}

/// Load the catalog, degrading to an empty one on failure
///
/// The error is logged; every query against the returned catalog then yields
/// empty results instead of failing.
#[must_use]
pub fn load_or_empty(source: &CatalogSource) -> Catalog {
    match load(source) {
        Ok(catalog) => {
            tracing::info!(%source, tags = catalog.len(), "catalog loaded");
            catalog
        }
        Err(e) => {
            tracing::error!(%source, error = %e, "error loading kaomoji data, continuing with an empty catalog");
            Catalog::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_preserves_document_order() {
        let catalog = parse(r#"{"sad": ["(T_T)"], "joy": ["(^_^)", "(^o^)"], "cool": ["(⌐■_■)"]}"#)
            .unwrap();

        let tags: Vec<&str> = catalog.groups().map(|g| g.tag.as_str()).collect();
        assert_eq!(tags, vec!["sad", "joy", "cool"]);
        assert_eq!(catalog.get("joy"), Some(&["(^_^)".to_string(), "(^o^)".to_string()][..]));
    }

    #[test]
    fn test_parse_drops_empty_tags() {
        let catalog = parse(r#"{"joy": ["(^_^)"], "love": []}"#).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.contains("love"));
        assert!(catalog.get("love").is_none());
    }

    #[test]
    fn test_parse_duplicate_tag_keeps_first_position() {
        let catalog = parse(r#"{"joy": ["a"], "sad": ["b"], "joy": ["c", "d"]}"#).unwrap();
        let tags: Vec<&str> = catalog.groups().map(|g| g.tag.as_str()).collect();
        assert_eq!(tags, vec!["joy", "sad"]);
        assert_eq!(catalog.get("joy").map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_parse_duplicate_empty_tag_removes_it() {
        let catalog = parse(r#"{"joy": ["a"], "sad": ["b"], "joy": []}"#).unwrap();
        assert!(!catalog.contains("joy"));
        assert_eq!(catalog.get("sad").map(<[String]>::len), Some(1));
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(matches!(parse(r#"["(^_^)"]"#), Err(CatalogError::Parse(_))));
        assert!(matches!(parse(r#"{"joy": "(^_^)"}"#), Err(CatalogError::Parse(_))));
        assert!(matches!(parse(r#"{"joy": [1, 2]}"#), Err(CatalogError::Parse(_))));
        assert!(matches!(parse("not json"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_embedded_catalog_is_valid() {
        let catalog = load(&CatalogSource::Embedded).unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.groups().all(|g| !g.entries.is_empty()));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"shy": ["(*/_\\)"]}"#).unwrap();

        let catalog = load(&CatalogSource::File(file.path().to_path_buf())).unwrap();
        assert_eq!(catalog.get("shy"), Some(&["(*/_\\)".to_string()][..]));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = CatalogSource::File(dir.path().join("missing.json"));
        assert!(matches!(load(&source), Err(CatalogError::Io { .. })));
    }

    #[test]
    fn test_load_or_empty_degrades() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ broken").unwrap();

        let catalog = load_or_empty(&CatalogSource::File(file.path().to_path_buf()));
        assert!(catalog.is_empty());
        assert!(catalog.get("joy").is_none());
    }

    #[test]
    fn test_from_iterator() {
        let catalog: Catalog = vec![
            ("joy".to_string(), vec!["(^_^)".to_string()]),
            ("empty".to_string(), Vec::new()),
        ]
        .into_iter()
        .collect();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_source_from_path() {
        assert_eq!(CatalogSource::from_path(None), CatalogSource::Embedded);
        assert_eq!(
            CatalogSource::from_path(Some(PathBuf::from("k.json"))),
            CatalogSource::File(PathBuf::from("k.json"))
        );
        assert_eq!(CatalogSource::Embedded.to_string(), "<embedded>");
    }
}
