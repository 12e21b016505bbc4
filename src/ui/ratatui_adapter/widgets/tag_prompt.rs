//! Tag prompt: type a tag name to filter by it
//!
//! Any name is accepted; unknown tags show the no-results placeholder.
//! TAB completes to the first known tag matching the typed prefix.

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const MAX_SUGGESTIONS: usize = 6;

/// State for the tag prompt
#[derive(Debug, Clone, Default)]
pub struct TagPromptState {
    /// Current input buffer
    pub buffer: String,
    /// Cursor position (character index, not byte)
    pub cursor: usize,
    /// Known tags, in catalog order
    pub tags: Vec<String>,
    /// Known tags starting with the buffer
    pub suggestions: Vec<String>,
}

impl TagPromptState {
    /// Create a prompt completing against `tags`
    #[must_use]
    pub fn new(tags: Vec<String>) -> Self {
        let mut state = Self {
            tags,
            ..Self::default()
        };
        state.update_suggestions();
        state
    }

    fn byte_index(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    fn update_suggestions(&mut self) {
        let prefix = self.buffer.trim().to_lowercase();
        self.suggestions = self
            .tags
            .iter()
            .filter(|tag| tag.to_lowercase().starts_with(&prefix))
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect();
    }

    /// Insert a character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.byte_index();
        self.buffer.insert(byte_idx, c);
        self.cursor += 1;
        self.update_suggestions();
    }

    /// Delete character before cursor (backspace)
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.byte_index();
            self.buffer.remove(byte_idx);
            self.update_suggestions();
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete(&mut self) {
        let byte_idx = self.byte_index();
        if byte_idx < self.buffer.len() {
            self.buffer.remove(byte_idx);
            self.update_suggestions();
        }
    }

    /// Move cursor left
    pub const fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
        }
    }

    /// Replace the input with the first suggestion (TAB)
    pub fn complete(&mut self) {
        if let Some(first) = self.suggestions.first().cloned() {
            self.cursor = first.chars().count();
            self.buffer = first;
            self.update_suggestions();
        }
    }

    /// The tag to select, if anything was typed
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        let value = self.buffer.trim();
        (!value.is_empty()).then_some(value)
    }
}

/// Tag prompt overlay widget
pub struct TagPrompt<'a> {
    state: &'a TagPromptState,
    theme: &'a Theme,
}

impl<'a> TagPrompt<'a> {
    /// Create the prompt widget
    #[must_use]
    pub const fn new(state: &'a TagPromptState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }
}

impl Widget for TagPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = 5 + u16::try_from(self.state.suggestions.len()).unwrap_or(0);
        let modal_area = Self::centered_rect(44.min(area.width), height, area);

        Clear.render(modal_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Filter by tag ")
            .title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Input
            Constraint::Min(0),    // Suggestions
            Constraint::Length(1), // Help
        ])
        .split(inner);

        let byte_idx = self.state.byte_index();
        let (before, after) = self.state.buffer.split_at(byte_idx);
        let mut after_chars = after.chars();
        let at_cursor = after_chars.next().map_or_else(|| " ".to_string(), String::from);

        let input = Line::from(vec![
            Span::styled("> ", self.theme.cursor_style()),
            Span::raw(before),
            Span::styled(at_cursor, self.theme.selected_style()),
            Span::raw(after_chars.as_str()),
        ]);
        Paragraph::new(input).render(chunks[0], buf);

        let suggestions: Vec<Line> = self
            .state
            .suggestions
            .iter()
            .map(|tag| Line::styled(format!("  {tag}"), self.theme.dimmed_style()))
            .collect();
        Paragraph::new(suggestions).render(chunks[1], buf);

        Paragraph::new("Enter select · TAB complete · ESC cancel")
            .style(self.theme.dimmed_style())
            .render(chunks[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags() -> Vec<String> {
        ["joy", "happy", "shy", "sleepy", "sad"]
            .iter()
            .map(|t| (*t).to_string())
            .collect()
    }

    #[test]
    fn test_basic_input() {
        let mut state = TagPromptState::new(tags());
        assert_eq!(state.suggestions.len(), 5);
        assert!(state.value().is_none());

        state.insert_char('s');
        state.insert_char('h');
        assert_eq!(state.buffer, "sh");
        assert_eq!(state.suggestions, vec!["shy"]);
        assert_eq!(state.value(), Some("sh"));
    }

    #[test]
    fn test_cursor_editing() {
        let mut state = TagPromptState::new(tags());
        for c in "jy".chars() {
            state.insert_char(c);
        }
        state.cursor_left();
        state.insert_char('o');
        assert_eq!(state.buffer, "joy");

        state.backspace();
        assert_eq!(state.buffer, "jy");
        state.delete();
        assert_eq!(state.buffer, "j");
        state.cursor_right();
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_complete() {
        let mut state = TagPromptState::new(tags());
        state.insert_char('s');
        state.complete();
        assert_eq!(state.buffer, "shy");
        assert_eq!(state.cursor, 3);
    }

    #[test]
    fn test_complete_without_match_keeps_input() {
        let mut state = TagPromptState::new(tags());
        for c in "dragon".chars() {
            state.insert_char(c);
        }
        state.complete();
        assert_eq!(state.value(), Some("dragon"));
    }
}
