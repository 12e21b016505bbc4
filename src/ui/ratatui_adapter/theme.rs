//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used throughout the application.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the cursor row or cell
    pub selection_bg: Color,
    /// Foreground color for the cursor row or cell
    pub selection_fg: Color,
    /// Color for the active filter control
    pub active: Color,
    /// Color for count badges
    pub badge: Color,
    /// Color for the cursor indicator and key names
    pub cursor: Color,
    /// Color for section titles
    pub title: Color,
    /// Color for the copied label
    pub copied: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for warning messages
    pub warning: Color,
    /// Color for info messages
    pub info: Color,
    /// Color for borders
    pub border: Color,
    /// Color for the focused pane's border
    pub focused_border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            active: Color::Magenta,
            badge: Color::DarkGray,
            cursor: Color::Cyan,
            title: Color::Yellow,
            copied: Color::Green,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            focused_border: Color::Cyan,
            dimmed: Color::DarkGray,
        }
    }

    /// Style for the item under the cursor
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unselected items
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the active filter control
    #[must_use]
    pub fn active_style(&self) -> Style {
        Style::default()
            .fg(self.active)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for count badges
    #[must_use]
    pub fn badge_style(&self) -> Style {
        Style::default().fg(self.badge)
    }

    /// Style for the cursor indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for section titles in the results grid
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a cell showing the copied label
    #[must_use]
    pub fn copied_style(&self) -> Style {
        Style::default()
            .fg(self.copied)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC)
    }

    /// Style for success messages
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for warning messages
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for info messages
    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Border style for a pane, brighter when it has focus
    #[must_use]
    pub fn pane_border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focused_border)
        } else {
            self.border_style()
        }
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }
}
