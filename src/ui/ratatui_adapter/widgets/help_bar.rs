//! Help bar widget for displaying keybind hints

use crate::ui::ratatui_adapter::state::{FocusPane, Mode};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "TAB", "/")
    pub key: &'static str,
    /// Action description (e.g., "focus", "tag")
    pub action: &'static str,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Hints for the current mode and focused pane
#[must_use]
pub fn hints_for(mode: Mode, focus: FocusPane) -> Vec<KeyHint> {
    match mode {
        Mode::Help => vec![KeyHint::new("any key", "close help")],
        Mode::TagPrompt => vec![
            KeyHint::new("Enter", "select"),
            KeyHint::new("TAB", "complete"),
            KeyHint::new("ESC", "cancel"),
        ],
        Mode::Normal => {
            let activate = match focus {
                FocusPane::Filters => KeyHint::new("Enter", "filter"),
                FocusPane::Results => KeyHint::new("Enter", "copy"),
            };
            vec![
                KeyHint::new("↑↓←→", "move"),
                activate,
                KeyHint::new("TAB", "switch pane"),
                KeyHint::new("/", "tag"),
                KeyHint::new("a", "all"),
                KeyHint::new("?", "help"),
                KeyHint::new("q", "quit"),
            ]
        }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    /// Hints to display
    hints: &'a [KeyHint],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key, self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
