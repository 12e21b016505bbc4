//! Clipboard service with an ordered fallback chain
//!
//! Copying walks a list of [`CopyStrategy`] implementations in order and stops
//! at the first one that succeeds:
//!
//! 1. [`NativeClipboard`]: the system clipboard via `arboard`, only inside a
//!    graphical session
//! 2. [`CommandClipboard`]: external copy tools (`wl-copy`, `xclip`, ...) fed
//!    from a scratch file that is removed on every exit path
//!
//! A native success reports [`CopyOutcome::Succeeded`] and a tool success
//! reports [`CopyOutcome::SucceededViaFallback`], wherever they sit in the
//! chain. When every strategy fails the outcome is
//! [`CopyOutcome::RequiresManualCopy`] and the caller shows a
//! [`ManualCopyPrompt`]. Failures never propagate as errors.
//!
//! # Examples
//!
//! ```
//! use kaomoji::clipboard::{ClipboardService, CopyOutcome};
//!
//! // No strategies: nothing can be copied automatically
//! let mut service = ClipboardService::new(Vec::new());
//! let report = service.copy("(^_^)");
//! assert_eq!(report.outcome, CopyOutcome::RequiresManualCopy);
//! ```

mod command;
mod feedback;
mod native;
mod strategy;

#[cfg(test)]
pub mod mock;

pub use command::{ClipboardCommand, CommandClipboard, default_commands};
pub use feedback::{
    COPIED_LABEL, CopyFeedback, FEEDBACK_DURATION, MANUAL_COPY_TIMEOUT, ManualCopyPrompt,
};
pub use native::{NativeClipboard, has_graphical_session};
pub use strategy::{ClipboardFailure, CopyStrategy, StrategyKind};

use crate::config::ClipboardSettings;
use std::fmt;

/// Result of a copy attempt as seen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The native clipboard copied the text
    Succeeded,
    /// An external copy tool copied the text
    SucceededViaFallback,
    /// Nothing worked; the text must be copied by hand
    RequiresManualCopy,
}

impl CopyOutcome {
    /// Whether the text reached the clipboard
    #[must_use]
    pub const fn is_copied(self) -> bool {
        matches!(self, Self::Succeeded | Self::SucceededViaFallback)
    }
}

impl fmt::Display for CopyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Succeeded => "copied",
            Self::SucceededViaFallback => "copied via fallback",
            Self::RequiresManualCopy => "manual copy required",
        };
        f.write_str(text)
    }
}

/// A failure recorded while walking the chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyFailure {
    /// Name of the strategy that failed
    pub strategy: String,
    /// What went wrong
    pub failure: ClipboardFailure,
}

/// Everything that happened during one copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyReport {
    /// Final outcome
    pub outcome: CopyOutcome,
    /// Strategy that copied the text, if any
    pub strategy: Option<String>,
    /// Failures of the strategies tried before it
    pub failures: Vec<StrategyFailure>,
}

/// Drives the copy strategies in order
pub struct ClipboardService {
    strategies: Vec<Box<dyn CopyStrategy>>,
}

/// Whether natively copied text stays available after this process exits
const fn native_outlives_process() -> bool {
    cfg!(any(target_os = "macos", target_os = "windows"))
}

impl ClipboardService {
    /// Service over an explicit strategy chain
    #[must_use]
    pub fn new(strategies: Vec<Box<dyn CopyStrategy>>) -> Self {
        Self { strategies }
    }

    /// Service built from configuration: native first (unless disabled),
    /// then the configured or platform-default copy tools
    #[must_use]
    pub fn from_settings(settings: &ClipboardSettings) -> Self {
        Self::build(settings, true)
    }

    /// Service for a process that exits right after copying
    ///
    /// On X11 and Wayland the native clipboard is served by the process that
    /// set it, so the text is gone once we exit. The copy tools keep serving it
    /// from their own process, so they go ahead of native there.
    #[must_use]
    pub fn one_shot_from_settings(settings: &ClipboardSettings) -> Self {
        Self::build(settings, native_outlives_process())
    }

    fn build(settings: &ClipboardSettings, native_first: bool) -> Self {
        let native = settings
            .native
            .then(|| Box::new(NativeClipboard::new()) as Box<dyn CopyStrategy>);
        let commands = settings
            .commands
            .clone()
            .unwrap_or_else(default_commands)
            .into_iter()
            .map(|command| Box::new(CommandClipboard::new(command)) as Box<dyn CopyStrategy>);

        let strategies: Vec<Box<dyn CopyStrategy>> = if native_first {
            native.into_iter().chain(commands).collect()
        } else {
            commands.chain(native).collect()
        };
        Self::new(strategies)
    }

    /// Names of the strategies, in order
    #[must_use]
    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Copy `text`, falling back through the chain
    pub fn copy(&mut self, text: &str) -> CopyReport {
        let mut failures = Vec::new();

        for strategy in &mut self.strategies {
            match strategy.copy(text) {
                Ok(()) => {
                    let outcome = match strategy.kind() {
                        StrategyKind::Native => CopyOutcome::Succeeded,
                        StrategyKind::Legacy => CopyOutcome::SucceededViaFallback,
                    };
                    tracing::debug!(strategy = strategy.name(), %outcome, "copied to clipboard");
                    return CopyReport {
                        outcome,
                        strategy: Some(strategy.name().to_string()),
                        failures,
                    };
                }
                Err(failure) => {
                    tracing::warn!(strategy = strategy.name(), %failure, "clipboard strategy failed");
                    failures.push(StrategyFailure {
                        strategy: strategy.name().to_string(),
                        failure,
                    });
                }
            }
        }

        tracing::warn!(tried = failures.len(), "every clipboard strategy failed, manual copy required");
        CopyReport {
            outcome: CopyOutcome::RequiresManualCopy,
            strategy: None,
            failures,
        }
    }
}
