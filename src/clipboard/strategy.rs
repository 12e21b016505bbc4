//! Copy strategy seam and failure taxonomy

use thiserror::Error;

/// Why a single copy strategy did not put the text on the clipboard
///
/// None of these are fatal; the service moves on to the next strategy and
/// ends with the manual-copy prompt when every strategy failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardFailure {
    /// The mechanism is not usable here (no session, capability missing)
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The mechanism ran but reported failure
    #[error("Copy command failed: {0}")]
    CommandFailed(String),

    /// The mechanism could not be run at all
    #[error("Copy command could not run: {0}")]
    CommandThrew(String),
}

/// Which capability a strategy uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// The platform clipboard API
    Native,
    /// An external copy tool
    Legacy,
}

/// One way of putting text on the system clipboard
pub trait CopyStrategy {
    /// Short name used in logs and reports
    fn name(&self) -> &str;

    /// Capability this strategy uses
    fn kind(&self) -> StrategyKind;

    /// Copy `text` to the clipboard
    ///
    /// # Errors
    ///
    /// Returns the `ClipboardFailure` describing why this strategy could not
    /// copy the text.
    fn copy(&mut self, text: &str) -> Result<(), ClipboardFailure>;
}
