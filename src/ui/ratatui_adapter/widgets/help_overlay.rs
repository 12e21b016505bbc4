//! Help overlay widget for displaying the full keybind reference

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn heading(&self, text: &'static str) -> Line<'static> {
        Line::styled(
            text,
            self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
        )
    }

    fn help_line(&self, key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {key:<14}"), Style::default().fg(self.theme.cursor)),
            Span::raw(desc),
        ])
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        vec![
            Line::default(),
            self.heading("  Navigation"),
            Line::default(),
            self.help_line("TAB", "Switch between filters and kaomoji"),
            self.help_line("↑/↓  k/j", "Move up/down"),
            self.help_line("←/→  h/l", "Move left/right"),
            self.help_line("Home/End", "Jump to first/last"),
            Line::default(),
            self.heading("  Actions"),
            Line::default(),
            self.help_line("Enter/Space", "Apply filter, fold category, copy kaomoji"),
            self.help_line("/", "Filter by tag name"),
            self.help_line("a", "Show all kaomoji"),
            self.help_line("Mouse click", "Apply filter or copy kaomoji"),
            self.help_line("?/F1", "Toggle this help"),
            self.help_line("q/ESC/Ctrl+C", "Quit (ESC closes overlays first)"),
            Line::default(),
            Line::styled("  Press any key to close", self.theme.dimmed_style()),
            Line::default(),
        ]
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(70, 70, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}
