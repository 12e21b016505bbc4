//! Tags command - categories and tags with their counts

use crate::{
    KaomojiError,
    catalog::{Catalog, Query},
    output,
    ui::OutputWriter,
    view::FilterPanel,
};

type Result<T> = std::result::Result<T, KaomojiError>;

/// Execute the tags command
///
/// Prints each category with its total, the tags it has in the catalog
/// indented beneath it, and finally the overall total. The listing matches
/// the browser's filter panel.
///
/// # Errors
/// Never fails today; returns `Result` to match the other commands
pub fn execute(catalog: &Catalog, output: &dyn OutputWriter, quiet: bool) -> Result<()> {
    let query = Query::new(catalog);
    let panel = FilterPanel::build(&query);

    if panel.total == 0 {
        output.info("No kaomoji loaded.");
    }

    for category in &panel.categories {
        output.write(&output::category_heading(category.name, category.badge, quiet));
        for tag in &category.tags {
            output.write(&output::tag_with_count(&tag.tag, tag.badge, quiet));
        }
    }

    if !quiet {
        output.write(&output::category_heading("All", panel.total, quiet));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_catalog;
    use crate::ui::MessageLevel;
    use crate::ui::mock::BufferWriter;

    #[test]
    fn test_tags_lists_categories_then_total() {
        let catalog = sample_catalog();
        let output = BufferWriter::new();

        execute(&catalog, &output, false).unwrap();

        let lines = output.lines(MessageLevel::Normal);
        assert!(lines[0].contains("Positivity"));
        assert!(lines[0].ends_with("(6)"));
        assert_eq!(lines[1], "  joy (3)");
        assert_eq!(lines[2], "  happy (2)");
        assert_eq!(lines[3], "  love (1)");
        assert!(lines.iter().any(|l| l == "  sad (2)"));
        let last = lines.last().unwrap();
        assert!(last.contains("All"));
        assert!(last.ends_with("(12)"));
    }

    #[test]
    fn test_tags_quiet_prints_names_only() {
        let catalog = sample_catalog();
        let output = BufferWriter::new();

        execute(&catalog, &output, true).unwrap();

        let lines = output.lines(MessageLevel::Normal);
        assert_eq!(
            lines,
            vec![
                "Positivity", "joy", "happy", "love", "Negativity", "sad", "Expressions", "shy",
                "cool", "Themes", "animal",
            ]
        );
    }

    #[test]
    fn test_tags_on_empty_catalog() {
        let output = BufferWriter::new();

        execute(&Catalog::new(), &output, false).unwrap();

        assert_eq!(output.lines(MessageLevel::Info), vec!["No kaomoji loaded.".to_string()]);
        assert!(output.lines(MessageLevel::Normal).last().unwrap().ends_with("(0)"));
    }
}
