//! Status bar widget for displaying messages

use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::state::StatusMessage;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget: latest message on the left, filter summary on the right
pub struct StatusBar<'a> {
    message: Option<&'a StatusMessage>,
    summary: &'a str,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(message: Option<&'a StatusMessage>, summary: &'a str, theme: &'a Theme) -> Self {
        Self {
            message,
            summary,
            theme,
        }
    }

    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Warning => self.theme.warning_style(),
            MessageLevel::Info => self.theme.info_style(),
            MessageLevel::Normal => self.theme.normal_style(),
        }
    }

    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let summary_width = u16::try_from(Line::raw(self.summary).width()).unwrap_or(u16::MAX);
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(summary_width)]).areas(inner);

        if let Some(msg) = self.message {
            let style = self.style_for_level(msg.level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.as_str(), style),
            ]);
            Paragraph::new(line).render(left, buf);
        }

        Paragraph::new(Line::styled(self.summary, self.theme.dimmed_style()))
            .alignment(Alignment::Right)
            .render(right, buf);
    }
}
