//! System clipboard through `arboard`

use super::strategy::{ClipboardFailure, CopyStrategy, StrategyKind};

/// Whether a graphical session is reachable from this process
///
/// On Linux and the BSDs the clipboard lives in the X11 or Wayland server, so
/// a terminal without `DISPLAY`/`WAYLAND_DISPLAY` (ssh, console) has none.
#[must_use]
pub fn has_graphical_session() -> bool {
    if cfg!(any(target_os = "macos", target_os = "windows")) {
        return true;
    }
    ["WAYLAND_DISPLAY", "DISPLAY"]
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|v| !v.is_empty()))
}

/// Native clipboard strategy
///
/// The `arboard` handle is opened lazily and kept for the rest of the session,
/// since on X11 the copied text is served by the process that owns it.
pub struct NativeClipboard {
    clipboard: Option<arboard::Clipboard>,
    trusted: bool,
}

impl NativeClipboard {
    /// Native strategy gated on the current graphical session
    #[must_use]
    pub fn new() -> Self {
        Self::with_trusted_context(has_graphical_session())
    }

    /// Native strategy with an explicit trusted-context flag
    #[must_use]
    pub const fn with_trusted_context(trusted: bool) -> Self {
        Self {
            clipboard: None,
            trusted,
        }
    }
}

impl Default for NativeClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl CopyStrategy for NativeClipboard {
    fn name(&self) -> &str {
        "native"
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Native
    }

    fn copy(&mut self, text: &str) -> Result<(), ClipboardFailure> {
        if !self.trusted {
            return Err(ClipboardFailure::Unavailable(
                "no graphical session".to_string(),
            ));
        }

        let mut clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()
                .map_err(|e| ClipboardFailure::Unavailable(e.to_string()))?,
        };

        match clipboard.set_text(text) {
            Ok(()) => {
                self.clipboard = Some(clipboard);
                Ok(())
            }
            // The handle is dropped and reopened on the next attempt
            Err(e) => Err(ClipboardFailure::CommandFailed(e.to_string())),
        }
    }
}
