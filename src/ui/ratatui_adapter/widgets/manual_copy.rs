//! Manual-copy overlay shown when no clipboard strategy worked

use crate::clipboard::ManualCopyPrompt;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use std::time::Instant;

/// Centered modal displaying the text to copy by hand
pub struct ManualCopyOverlay<'a> {
    prompt: &'a ManualCopyPrompt,
    now: Instant,
    theme: &'a Theme,
}

impl<'a> ManualCopyOverlay<'a> {
    /// Create the overlay for `prompt` as of `now`
    #[must_use]
    pub const fn new(prompt: &'a ManualCopyPrompt, now: Instant, theme: &'a Theme) -> Self {
        Self { prompt, now, theme }
    }

    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }
}

impl Widget for ManualCopyOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text_width = u16::try_from(Line::raw(self.prompt.text.as_str()).width())
            .unwrap_or(u16::MAX);
        let width = text_width
            .saturating_add(8)
            .clamp(36, 70)
            .min(area.width.saturating_sub(2));
        let modal_area = Self::centered_rect(width, 8, area);

        Clear.render(modal_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.warning_style().add_modifier(Modifier::BOLD))
            .title(" Clipboard unavailable ")
            .title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Prompt
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Text
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Help
        ])
        .split(inner);

        Paragraph::new("Select and copy:")
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        Paragraph::new(self.prompt.text.as_str())
            .alignment(Alignment::Center)
            .style(self.theme.selected_style())
            .render(chunks[2], buf);

        let remaining = self.prompt.remaining(self.now).as_secs();
        Paragraph::new(format!("Esc/Enter to close · closes in {remaining}s"))
            .alignment(Alignment::Center)
            .style(self.theme.dimmed_style())
            .render(chunks[4], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_shows_text() {
        let now = Instant::now();
        let prompt = ManualCopyPrompt::open("(ノಠ益ಠ)ノ彡┻━┻", now);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);

        ManualCopyOverlay::new(&prompt, now, &theme).render(area, &mut buf);

        let content: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(content.contains("Select and copy:"));
        assert!(content.contains("closes in 10s"));
    }
}
