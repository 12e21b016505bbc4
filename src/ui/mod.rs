//! UI abstraction layer
//!
//! The browse session is driven through the [`Frontend`] trait: a frontend
//! owns the input loop, feeds [`ViewEvent`](crate::view::ViewEvent)s to the
//! view controller, and presents its state. The one-shot commands print
//! through [`OutputWriter`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   commands::browse                      │
//! └────────────────┬────────────────────────┘
//!                  │ Frontend::run
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │   ViewController  ◀── ViewEvent         │
//! │   ClipboardService                      │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ RatatuiFront- │  │ ScriptedFrontend  │
//! │ end (terminal)│  │ (tests)           │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Output Messages
//!
//! ```
//! use kaomoji::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.success("Copied (^_^)");
//! output.info("3 tags");
//! ```

mod error;

pub mod output;
pub mod ratatui_adapter;

#[cfg(test)]
pub mod mock;

pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StdoutWriter};
pub use ratatui_adapter::RatatuiFrontend;

use crate::clipboard::{ClipboardService, CopyReport};
use crate::view::ViewController;

/// What happened during an interactive session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseSummary {
    /// Number of copy attempts
    pub copies: usize,
    /// Text of the last copy that could not reach the clipboard, unless a
    /// later copy succeeded
    pub pending_manual_copy: Option<String>,
}

impl BrowseSummary {
    /// Account for one copy attempt
    pub fn record(&mut self, report: &CopyReport, manual_text: Option<&str>) {
        self.copies += 1;
        self.pending_manual_copy = if report.outcome.is_copied() {
            None
        } else {
            manual_text.map(str::to_string)
        };
    }
}

/// An interactive presentation of the view controller
pub trait Frontend {
    /// Run until the user quits
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the frontend cannot be set up or driven.
    fn run(
        &mut self,
        view: &mut ViewController<'_>,
        clipboard: &mut ClipboardService,
    ) -> Result<BrowseSummary>;
}
