//! Ratatui frontend: terminal setup, draw, and the event loop

use super::events::{EventResult, KeyContext, poll_and_handle};
use super::state::{AppState, FocusPane, Mode};
use super::theme::Theme;
use super::widgets::{
    FilterList, GridLayout, HelpBar, HelpOverlay, KaomojiGrid, ManualCopyOverlay, StatusBar,
    TagPrompt, hints_for,
};
use crate::catalog::display_name;
use crate::clipboard::ClipboardService;
use crate::ui::error::Result;
use crate::ui::{BrowseSummary, Frontend};
use crate::view::{Selection, ViewController, ViewEvent, Viewport};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    text::Span,
    widgets::{Block, Borders},
};
use std::io::{self, IsTerminal, Stdout};
use std::time::{Duration, Instant};

const PANEL_WIDTH: u16 = 30;

/// Restores the terminal when dropped, including on error paths
struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    /// Run `enable`; from then on `restore` runs on drop
    fn engage(enable: fn() -> io::Result<()>, restore: fn() -> io::Result<()>) -> io::Result<Self> {
        enable()?;
        Ok(Self { restore })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = (self.restore)() {
            tracing::error!(error = %e, "failed to restore terminal");
        }
    }
}

/// Interactive terminal frontend
pub struct RatatuiFrontend {
    theme: Theme,
    tick_rate: Duration,
}

impl Default for RatatuiFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiFrontend {
    /// Create a frontend with the default theme
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            tick_rate: Duration::from_millis(50),
        }
    }

    /// Setup terminal for TUI
    ///
    /// The guard is live as soon as raw mode is on, so a failure in the
    /// remaining steps still restores the terminal.
    fn setup_terminal() -> Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
        let guard = TerminalGuard::engage(enable_raw_mode, Self::cleanup_terminal)?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok((terminal, guard))
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> io::Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Right-hand status text: current filter and entry count
    fn filter_summary(view: &ViewController<'_>) -> String {
        let label = match view.selection() {
            Selection::All => "All".to_string(),
            Selection::Tag(tag) => display_name(tag),
        };
        let layout = if view.is_compact() { " · compact" } else { "" };
        format!("{label} · {} kaomoji{layout}", view.results().entry_count())
    }

    fn pane_block<'b>(&self, title: &'b str, focused: bool) -> Block<'b> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.pane_border_style(focused))
            .title(Span::styled(title, self.theme.pane_border_style(focused)))
    }

    /// Wide layout puts the panel beside the grid; compact stacks them
    fn split_body(body: Rect, compact: bool) -> (Rect, Rect) {
        let [panel, grid] = if compact {
            Layout::vertical([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(body)
        } else {
            Layout::horizontal([Constraint::Length(PANEL_WIDTH), Constraint::Min(10)]).areas(body)
        };
        (panel, grid)
    }

    /// Render the UI
    fn render(
        &self,
        frame: &mut Frame,
        view: &mut ViewController<'_>,
        state: &mut AppState,
        now: Instant,
    ) {
        let area = frame.area();
        view.set_viewport(Viewport::new(area.width, area.height));

        let [body, status, help] = Layout::vertical([
            Constraint::Min(5),    // Panel + grid
            Constraint::Length(3), // Status bar
            Constraint::Length(1), // Help bar
        ])
        .areas(area);
        let (panel_area, grid_area) = Self::split_body(body, view.is_compact());

        // Filter panel
        let rows = view.panel().rows();
        state.clamp_panel_cursor(rows.len());
        let panel_block = self.pane_block(" Filters ", state.focus == FocusPane::Filters);
        state.panel_area = panel_block.inner(panel_area);
        let panel = FilterList::new(view.panel(), &rows, &self.theme)
            .active(view.active_control())
            .cursor((state.focus == FocusPane::Filters).then_some(state.panel_cursor))
            .block(panel_block);
        frame.render_widget(panel, panel_area);

        // Results grid
        let grid_block = self.pane_block(" Kaomoji ", state.focus == FocusPane::Results);
        state.grid_area = grid_block.inner(grid_area);
        state.update_grid(
            GridLayout::compute(view.results(), state.grid_area.width),
            usize::from(state.grid_area.height),
        );
        let labels: Vec<&str> = state
            .grid
            .cells
            .iter()
            .map(|cell| view.entry_label(&cell.entry, &cell.text, now))
            .collect();
        let grid = KaomojiGrid::new(&state.grid, &labels, &self.theme)
            .cursor((state.focus == FocusPane::Results).then_some(state.grid_cursor))
            .scroll(state.grid_scroll)
            .block(grid_block);
        frame.render_widget(grid, grid_area);

        // Status and help bars
        let summary = Self::filter_summary(view);
        frame.render_widget(
            StatusBar::new(state.latest_message(now), &summary, &self.theme),
            status,
        );
        let hints = hints_for(state.mode, state.focus);
        frame.render_widget(HelpBar::new(&hints, &self.theme), help);
    }

    /// Render overlays (manual copy, tag prompt, help)
    fn render_overlays(&self, frame: &mut Frame, view: &ViewController<'_>, state: &AppState, now: Instant) {
        if let Some(prompt) = view.manual_copy() {
            frame.render_widget(ManualCopyOverlay::new(prompt, now, &self.theme), frame.area());
        }

        match state.mode {
            Mode::Help => frame.render_widget(HelpOverlay::new(&self.theme), frame.area()),
            Mode::TagPrompt => {
                if let Some(prompt) = &state.prompt {
                    frame.render_widget(TagPrompt::new(prompt, &self.theme), frame.area());
                }
            }
            Mode::Normal => {}
        }
    }

    /// Apply a view event and update the status bar
    fn dispatch(
        view: &mut ViewController<'_>,
        clipboard: &mut ClipboardService,
        state: &mut AppState,
        event: ViewEvent,
    ) {
        let now = Instant::now();
        let selection_changed = matches!(event, ViewEvent::SelectAll | ViewEvent::TagSelected(_));
        let copied_text = match &event {
            ViewEvent::EntryClicked(entry) => view.entry(entry),
            _ => None,
        };

        let report = view.dispatch(event, clipboard, now);

        if selection_changed {
            state.reset_grid();
        }
        if let (Some(report), Some(text)) = (report, copied_text) {
            let manual = view.manual_copy().map(|p| p.text.as_str());
            state.record_copy(text, &report, manual, now);
        }
    }

    /// Run the event loop
    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        view: &mut ViewController<'_>,
        clipboard: &mut ClipboardService,
    ) -> Result<BrowseSummary> {
        let mut state = AppState::new();

        while !state.should_exit {
            let now = Instant::now();
            let tick = view.tick(now);
            if tick.scroll_results {
                state.focus = FocusPane::Results;
                state.reset_grid();
            }
            state.expire_messages(now);

            terminal.draw(|frame| {
                self.render(frame, view, &mut state, now);
                self.render_overlays(frame, view, &state, now);
            })?;

            let rows = view.panel().rows();
            let ctx = KeyContext {
                rows: &rows,
                manual_copy_open: view.manual_copy().is_some(),
            };

            match poll_and_handle(&mut state, &ctx, self.tick_rate)? {
                EventResult::Quit => state.should_exit = true,
                EventResult::OpenPrompt => {
                    let tags = view.query().all_tags().map(str::to_string).collect();
                    state.open_prompt(tags);
                }
                EventResult::View(event) => Self::dispatch(view, clipboard, &mut state, event),
                EventResult::Continue | EventResult::Ignored => {}
            }
        }

        Ok(state.summary)
    }
}

impl Frontend for RatatuiFrontend {
    fn run(
        &mut self,
        view: &mut ViewController<'_>,
        clipboard: &mut ClipboardService,
    ) -> Result<BrowseSummary> {
        if !io::stdout().is_terminal() {
            return Err(crate::ui::UiError::NotATerminal);
        }

        let (mut terminal, _guard) = Self::setup_terminal()?;
        tracing::info!("browse session started");

        let summary = self.run_loop(&mut terminal, view, clipboard)?;
        tracing::info!(copies = summary.copies, "browse session ended");
        Ok(summary)
    }
}
