//! Testing utilities for kaomoji
//!
//! Helpers for building catalogs inline.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::Catalog;

/// Build a catalog from `(tag, entries)` pairs, in order
///
/// Pairs with no entries are dropped, the same as when loading a document.
#[must_use]
pub fn catalog_from(pairs: &[(&str, &[&str])]) -> Catalog {
    pairs
        .iter()
        .map(|(tag, entries)| {
            (
                (*tag).to_string(),
                entries.iter().map(|e| (*e).to_string()).collect(),
            )
        })
        .collect()
}

/// Small catalog touching every category
#[must_use]
pub fn sample_catalog() -> Catalog {
    catalog_from(&[
        ("joy", &["(^_^)", "(^o^)", "＼(^o^)／"]),
        ("happy", &["(◕‿◕)", "(´▽`)"]),
        ("love", &["(♡˙︶˙♡)"]),
        ("sad", &["(T_T)", "(╥_╥)"]),
        ("shy", &["(⁄ ⁄•⁄ω⁄•⁄ ⁄)"]),
        ("cool", &["(⌐■_■)"]),
        ("animal", &["(=^･ω･^=)", "ʕ•ᴥ•ʔ"]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_from_keeps_order() {
        let catalog = catalog_from(&[("sad", &["(T_T)"]), ("joy", &["(^_^)"])]);
        let tags: Vec<&str> = catalog.groups().map(|g| g.tag.as_str()).collect();
        assert_eq!(tags, vec!["sad", "joy"]);
    }

    #[test]
    fn test_catalog_from_drops_empty() {
        let catalog = catalog_from(&[("joy", &["(^_^)"]), ("love", &[])]);
        assert!(!catalog.contains("love"));
    }
}
