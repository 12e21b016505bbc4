//! Copy command - put a kaomoji on the clipboard

use crate::{
    KaomojiError,
    catalog::{Catalog, Query},
    cli::CopyTarget,
    clipboard::{ClipboardService, CopyOutcome},
    ui::OutputWriter,
};

type Result<T> = std::result::Result<T, KaomojiError>;

/// Resolve what to copy
///
/// # Errors
/// Returns `KaomojiError::InvalidInput` if the tag has no entry at the index
pub fn resolve(catalog: &Catalog, target: &CopyTarget) -> Result<String> {
    match target {
        CopyTarget::Text(text) => Ok(text.clone()),
        CopyTarget::Entry { tag, index } => {
            let entries = Query::new(catalog).entries_for_tag(tag);
            entries.get(*index).cloned().ok_or_else(|| {
                if entries.is_empty() {
                    KaomojiError::InvalidInput(format!("Tag '{tag}' has no kaomoji"))
                } else {
                    KaomojiError::InvalidInput(format!(
                        "Index {index} is out of range for tag '{tag}' ({} entries)",
                        entries.len()
                    ))
                }
            })
        }
    }
}

/// Execute the copy command
///
/// Runs the clipboard chain. When nothing reached the clipboard the text is
/// printed so it can be copied by hand; that is not an error.
///
/// # Errors
/// Returns an error if the target cannot be resolved
pub fn execute(
    catalog: &Catalog,
    target: &CopyTarget,
    clipboard: &mut ClipboardService,
    output: &dyn OutputWriter,
) -> Result<()> {
    let text = resolve(catalog, target)?;
    let report = clipboard.copy(&text);

    match report.outcome {
        CopyOutcome::Succeeded => output.success(&format!("Copied {text}")),
        CopyOutcome::SucceededViaFallback => {
            let via = report.strategy.as_deref().unwrap_or("fallback");
            output.success(&format!("Copied {text} via {via}"));
        }
        CopyOutcome::RequiresManualCopy => {
            for failure in &report.failures {
                output.info(&format!("{}: {}", failure.strategy, failure.failure));
            }
            output.warning("No clipboard available; copy it by hand:");
            output.write(&text);
        }
    }
    Ok(())
}
