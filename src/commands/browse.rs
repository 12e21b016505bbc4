//! Browse command - interactive kaomoji browser

use crate::{
    KaomojiError,
    catalog::Catalog,
    clipboard::ClipboardService,
    ui::{Frontend, OutputWriter},
    view::{ViewController, WidthThreshold},
};
use std::time::Instant;

type Result<T> = std::result::Result<T, KaomojiError>;

/// Options for a browse session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseOptions {
    /// Tag to select before the first draw
    pub start_tag: Option<String>,
    /// Terminal width at or below which the compact layout is used
    pub compact_width: u16,
}

/// Execute the browse command
///
/// Runs `frontend` over a fresh view of `catalog`. Text that could not reach
/// the clipboard during the session is printed after the terminal is
/// restored so it can still be copied by hand.
///
/// # Errors
/// Returns an error if the frontend cannot be started or driven
pub fn execute(
    catalog: &Catalog,
    frontend: &mut dyn Frontend,
    clipboard: &mut ClipboardService,
    options: &BrowseOptions,
    output: &dyn OutputWriter,
) -> Result<()> {
    let mut view = ViewController::new(catalog).with_detector(WidthThreshold(options.compact_width));
    if let Some(tag) = &options.start_tag {
        view.select_tag(tag, Instant::now());
    }

    let summary = frontend.run(&mut view, clipboard)?;
    tracing::info!(copies = summary.copies, "browse session ended");

    if let Some(text) = summary.pending_manual_copy {
        output.warning("The last copy did not reach the clipboard; copy it by hand:");
        output.write(&text);
    }
    Ok(())
}
