//! Show command - print kaomoji grouped by tag

use crate::{
    KaomojiError,
    catalog::{Catalog, Query},
    output,
    ui::OutputWriter,
    view::{ResultNode, Selection, render_results},
};

type Result<T> = std::result::Result<T, KaomojiError>;

/// Execute the show command
///
/// Prints the same sections the browser shows for `tag` (or for every tag
/// when `tag` is `None`). An unknown or empty tag prints the no-results
/// message instead of failing.
///
/// # Errors
/// Never fails today; returns `Result` to match the other commands
pub fn execute(catalog: &Catalog, tag: Option<&str>, output: &dyn OutputWriter, quiet: bool) -> Result<()> {
    let selection = tag.map_or(Selection::All, |tag| Selection::Tag(tag.to_string()));
    let results = render_results(&Query::new(catalog), &selection);

    if results.nodes.is_empty() {
        output.info("No kaomoji loaded.");
        return Ok(());
    }

    for (position, node) in results.nodes.iter().enumerate() {
        match node {
            ResultNode::Section(section) => {
                if !quiet {
                    if position > 0 {
                        output.write("");
                    }
                    output.write(&output::section_heading(&section.title));
                }
                for (index, entry) in section.entries.iter().enumerate() {
                    output.write(&output::entry_line(index, entry, quiet));
                }
            }
            ResultNode::NoResults { message, .. } => output.warning(message),
        }
    }
    Ok(())
}
