//! Application state for the ratatui TUI
//!
//! Holds what only the terminal surface cares about: focus, cursors,
//! scroll offsets, the current mode, and status messages. Selection state
//! and copy feedback live in the view controller.

use crate::clipboard::{CopyOutcome, CopyReport};
use crate::ui::BrowseSummary;
use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::widgets::{GridLayout, Move, TagPromptState};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// How long a status message stays visible
pub const MESSAGE_TTL: Duration = Duration::from_secs(5);

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
    /// Tag prompt is open
    TagPrompt,
}

/// Pane receiving navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// Filter panel
    #[default]
    Filters,
    /// Kaomoji grid
    Results,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level (success, error, warning, info)
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub const fn new(level: MessageLevel, text: String, now: Instant) -> Self {
        Self {
            level,
            text,
            created_at: now,
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= ttl
    }
}

/// Application state for the browser
#[derive(Debug)]
pub struct AppState {
    /// Current UI mode
    pub mode: Mode,
    /// Focused pane
    pub focus: FocusPane,
    /// Cursor row in the filter panel
    pub panel_cursor: usize,
    /// Cursor cell in the results grid
    pub grid_cursor: usize,
    /// First visible grid line
    pub grid_scroll: usize,
    /// Grid layout from the last draw
    pub grid: GridLayout,
    /// Filter panel area from the last draw (inside borders)
    pub panel_area: Rect,
    /// Grid area from the last draw (inside borders)
    pub grid_area: Rect,
    /// Tag prompt state while the prompt is open
    pub prompt: Option<TagPromptState>,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Whether the loop should exit
    pub should_exit: bool,
    /// Session totals reported on exit
    pub summary: BrowseSummary,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create the initial state
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: Mode::Normal,
            focus: FocusPane::Filters,
            panel_cursor: 0,
            grid_cursor: 0,
            grid_scroll: 0,
            grid: GridLayout::default(),
            panel_area: Rect::default(),
            grid_area: Rect::default(),
            prompt: None,
            messages: Vec::new(),
            message_ttl: MESSAGE_TTL,
            should_exit: false,
            summary: BrowseSummary::default(),
        }
    }

    /// Switch focus to the other pane
    pub const fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Filters => FocusPane::Results,
            FocusPane::Results => FocusPane::Filters,
        };
    }

    /// Move the panel cursor up
    pub const fn panel_up(&mut self) {
        self.panel_cursor = self.panel_cursor.saturating_sub(1);
    }

    /// Move the panel cursor down within `rows`
    pub const fn panel_down(&mut self, rows: usize) {
        if self.panel_cursor + 1 < rows {
            self.panel_cursor += 1;
        }
    }

    /// Keep the panel cursor within `rows` (after a category folds)
    pub fn clamp_panel_cursor(&mut self, rows: usize) {
        self.panel_cursor = self.panel_cursor.min(rows.saturating_sub(1));
    }

    /// Move the grid cursor; returns false when there is no cell that way
    pub fn grid_move(&mut self, direction: Move) -> bool {
        match self.grid.neighbor(self.grid_cursor, direction) {
            Some(next) => {
                self.grid_cursor = next;
                true
            }
            None => false,
        }
    }

    /// Jump to the first cell
    pub const fn grid_home(&mut self) {
        self.grid_cursor = 0;
    }

    /// Jump to the last cell
    pub fn grid_end(&mut self) {
        self.grid_cursor = self.grid.cells.len().saturating_sub(1);
    }

    /// Reset the grid after the results changed
    pub const fn reset_grid(&mut self) {
        self.grid_cursor = 0;
        self.grid_scroll = 0;
    }

    /// Install the layout of the latest draw and keep the cursor in view
    pub fn update_grid(&mut self, grid: GridLayout, height: usize) {
        self.grid = grid;
        self.grid_cursor = self.grid_cursor.min(self.grid.cells.len().saturating_sub(1));
        self.grid_scroll = if self.grid.is_empty() {
            0
        } else {
            self.grid.scroll_for(self.grid_cursor, self.grid_scroll, height)
        };
    }

    /// Open the tag prompt
    pub fn open_prompt(&mut self, tags: Vec<String>) {
        self.prompt = Some(TagPromptState::new(tags));
        self.mode = Mode::TagPrompt;
    }

    /// Close the tag prompt
    pub fn close_prompt(&mut self) {
        self.prompt = None;
        self.mode = Mode::Normal;
    }

    /// Add a status message
    pub fn push_message(&mut self, level: MessageLevel, text: impl Into<String>, now: Instant) {
        self.messages.push(StatusMessage::new(level, text.into(), now));
    }

    /// Drop expired messages
    pub fn expire_messages(&mut self, now: Instant) {
        let ttl = self.message_ttl;
        self.messages.retain(|m| !m.is_expired(ttl, now));
    }

    /// Most recent unexpired message
    #[must_use]
    pub fn latest_message(&self, now: Instant) -> Option<&StatusMessage> {
        self.messages
            .iter()
            .rev()
            .find(|m| !m.is_expired(self.message_ttl, now))
    }

    /// Report a copy in the status bar and the session summary
    pub fn record_copy(
        &mut self,
        text: &str,
        report: &CopyReport,
        manual_text: Option<&str>,
        now: Instant,
    ) {
        self.summary.record(report, manual_text);
        match report.outcome {
            CopyOutcome::Succeeded => {
                self.push_message(MessageLevel::Success, format!("Copied {text}"), now);
            }
            CopyOutcome::SucceededViaFallback => {
                let via = report.strategy.as_deref().unwrap_or("fallback");
                self.push_message(MessageLevel::Success, format!("Copied {text} via {via}"), now);
            }
            CopyOutcome::RequiresManualCopy => {
                self.push_message(
                    MessageLevel::Warning,
                    "No clipboard available, copy it by hand",
                    now,
                );
            }
        }
    }
}
