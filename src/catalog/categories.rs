//! Fixed category grouping shown in the filter panel

/// A named group of tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Display name
    pub name: &'static str,
    /// Constituent tags, in display order
    pub tags: &'static [&'static str],
}

/// Categories in display order; independent of the data source.
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "Positivity",
        tags: &["joy", "happy", "love", "excitement", "celebration", "greeting"],
    },
    Category {
        name: "Negativity",
        tags: &["sad", "anger", "apology", "confusion"],
    },
    Category {
        name: "Expressions",
        tags: &["surprise", "shy", "sleepy", "cool"],
    },
    Category {
        name: "Themes",
        tags: &["animal", "food", "music"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order() {
        let names: Vec<&str> = CATEGORIES.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Positivity", "Negativity", "Expressions", "Themes"]);
    }
}
