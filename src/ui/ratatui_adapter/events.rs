//! Event handling for the ratatui TUI
//!
//! Translates keyboard and mouse events into cursor movement on
//! [`AppState`] and [`ViewEvent`]s for the view controller.

use super::state::{AppState, FocusPane, Mode};
use super::widgets::{Move, scroll_offset};
use crate::view::{ControlId, PanelRow, ViewEvent};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Forward to the view controller
    View(ViewEvent),
    /// Open the tag prompt
    OpenPrompt,
    /// Leave the browser
    Quit,
    /// No action taken
    Ignored,
}

/// View state the handlers need to read
#[derive(Debug, Clone, Copy)]
pub struct KeyContext<'a> {
    /// Visible filter panel rows
    pub rows: &'a [PanelRow],
    /// Whether the manual-copy prompt is showing
    pub manual_copy_open: bool,
}

fn activate_row(row: &PanelRow) -> EventResult {
    EventResult::View(match &row.id {
        ControlId::All => ViewEvent::SelectAll,
        ControlId::Category(name) => ViewEvent::ToggleCategory((*name).to_string()),
        ControlId::Tag(tag) => ViewEvent::TagSelected(tag.clone()),
    })
}

fn activate(state: &AppState, ctx: &KeyContext<'_>) -> EventResult {
    match state.focus {
        FocusPane::Filters => ctx
            .rows
            .get(state.panel_cursor)
            .map_or(EventResult::Ignored, activate_row),
        FocusPane::Results => state
            .grid
            .cells
            .get(state.grid_cursor)
            .map_or(EventResult::Ignored, |cell| {
                EventResult::View(ViewEvent::EntryClicked(cell.entry.clone()))
            }),
    }
}

fn move_cursor(state: &mut AppState, ctx: &KeyContext<'_>, direction: Move) -> EventResult {
    match (state.focus, direction) {
        (FocusPane::Filters, Move::Up) => state.panel_up(),
        (FocusPane::Filters, Move::Down) => state.panel_down(ctx.rows.len()),
        (FocusPane::Filters, Move::Right) if !state.grid.is_empty() => {
            state.focus = FocusPane::Results;
        }
        (FocusPane::Filters, _) => return EventResult::Ignored,
        (FocusPane::Results, Move::Left)
            if state.grid.cells.get(state.grid_cursor).is_none_or(|c| c.column == 0) =>
        {
            state.focus = FocusPane::Filters;
        }
        (FocusPane::Results, direction) => {
            if !state.grid_move(direction) {
                return EventResult::Ignored;
            }
        }
    }
    EventResult::Continue
}

/// Handle events in normal mode
fn handle_normal_mode(state: &mut AppState, ctx: &KeyContext<'_>, key: KeyEvent) -> EventResult {
    if ctx.manual_copy_open {
        return match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Quit,
            (KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' '), _) => {
                EventResult::View(ViewEvent::DismissManualCopy)
            }
            _ => EventResult::Ignored,
        };
    }

    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q') | KeyCode::Esc, _) => {
            EventResult::Quit
        }

        // Focus
        (KeyCode::Tab | KeyCode::BackTab, _) => {
            state.toggle_focus();
            EventResult::Continue
        }

        // Overlays
        (KeyCode::F(1) | KeyCode::Char('?'), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }
        (KeyCode::Char('/'), _) => EventResult::OpenPrompt,

        // Filters
        (KeyCode::Char('a'), _) => EventResult::View(ViewEvent::SelectAll),

        // Navigation
        (KeyCode::Up | KeyCode::Char('k'), _) => move_cursor(state, ctx, Move::Up),
        (KeyCode::Down | KeyCode::Char('j'), _) => move_cursor(state, ctx, Move::Down),
        (KeyCode::Left | KeyCode::Char('h'), _) => move_cursor(state, ctx, Move::Left),
        (KeyCode::Right | KeyCode::Char('l'), _) => move_cursor(state, ctx, Move::Right),
        (KeyCode::Home, _) => {
            match state.focus {
                FocusPane::Filters => state.panel_cursor = 0,
                FocusPane::Results => state.grid_home(),
            }
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            match state.focus {
                FocusPane::Filters => state.panel_cursor = ctx.rows.len().saturating_sub(1),
                FocusPane::Results => state.grid_end(),
            }
            EventResult::Continue
        }

        // Activate
        (KeyCode::Enter | KeyCode::Char(' '), _) => activate(state, ctx),

        _ => EventResult::Ignored,
    }
}

/// Handle events in help mode
fn handle_help_mode(state: &mut AppState) -> EventResult {
    // Any key closes help
    state.mode = Mode::Normal;
    EventResult::Continue
}

/// Handle events while the tag prompt is open
fn handle_prompt_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    let Some(prompt) = state.prompt.as_mut() else {
        state.mode = Mode::Normal;
        return EventResult::Continue;
    };

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Quit,
        (KeyCode::Esc, _) => {
            state.close_prompt();
            EventResult::Continue
        }
        (KeyCode::Enter, _) => {
            let tag = prompt.value().map(str::to_string);
            state.close_prompt();
            tag.map_or(EventResult::Continue, |tag| {
                EventResult::View(ViewEvent::TagSelected(tag))
            })
        }
        (KeyCode::Tab, _) => {
            prompt.complete();
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            prompt.backspace();
            EventResult::Continue
        }
        (KeyCode::Delete, _) => {
            prompt.delete();
            EventResult::Continue
        }
        (KeyCode::Left, _) => {
            prompt.cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            prompt.cursor_right();
            EventResult::Continue
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            prompt.insert_char(c);
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Handle a key press
pub fn handle_key(state: &mut AppState, ctx: &KeyContext<'_>, key: KeyEvent) -> EventResult {
    match state.mode {
        Mode::Normal => handle_normal_mode(state, ctx, key),
        Mode::Help => handle_help_mode(state),
        Mode::TagPrompt => handle_prompt_mode(state, key),
    }
}

/// Handle mouse events
pub fn handle_mouse(state: &mut AppState, ctx: &KeyContext<'_>, mouse: MouseEvent) -> EventResult {
    if state.mode != Mode::Normal || ctx.manual_copy_open {
        return EventResult::Ignored;
    }

    let position = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if state.panel_area.contains(position) => {
            // The panel only scrolls with its cursor while it has focus
            let cursor = match state.focus {
                FocusPane::Filters => state.panel_cursor,
                FocusPane::Results => 0,
            };
            let start = scroll_offset(cursor, usize::from(state.panel_area.height));
            let index = start + usize::from(mouse.row - state.panel_area.y);
            let Some(row) = ctx.rows.get(index) else {
                return EventResult::Ignored;
            };
            state.focus = FocusPane::Filters;
            state.panel_cursor = index;
            activate_row(row)
        }
        MouseEventKind::Down(MouseButton::Left) if state.grid_area.contains(position) => {
            let line = state.grid_scroll + usize::from(mouse.row - state.grid_area.y);
            let Some(index) = state.grid.hit(mouse.column - state.grid_area.x, line) else {
                return EventResult::Ignored;
            };
            state.focus = FocusPane::Results;
            state.grid_cursor = index;
            activate(state, ctx)
        }
        MouseEventKind::ScrollUp => move_cursor(state, ctx, Move::Up),
        MouseEventKind::ScrollDown => move_cursor(state, ctx, Move::Down),
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(
    state: &mut AppState,
    ctx: &KeyContext<'_>,
    timeout: Duration,
) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, ctx, key),
        Event::Mouse(mouse) => handle_mouse(state, ctx, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
