//! View controller: selection state, rendering, and event dispatch
//!
//! The controller owns the only mutable UI state of a session: the active
//! filter, which panel control is marked active, the rendered results,
//! per-entry copy feedback, the manual-copy prompt, and the pending
//! scroll-into-view. It never touches the terminal; the adapter in
//! `ui::ratatui_adapter` reads its state and feeds it [`ViewEvent`]s.
//!
//! ```text
//!            select_all()               select_tag(t)
//!   ┌──────────────────────┐   ┌───────────────────────────┐
//!   ▼                      │   │                           ▼
//! ┌─────┐  select_tag(t)  ┌┴───┴──────┐  select_tag(u)  ┌──────────┐
//! │ All │ ──────────────▶ │  Tag(t)   │ ──────────────▶ │  Tag(u)  │
//! └─────┘                 └───────────┘                 └──────────┘
//! ```
//!
//! # Examples
//!
//! ```
//! use kaomoji::catalog::{self, CatalogSource};
//! use kaomoji::view::{Selection, ViewController};
//! use std::time::Instant;
//!
//! let catalog = catalog::load_or_empty(&CatalogSource::Embedded);
//! let mut view = ViewController::new(&catalog);
//! assert_eq!(view.selection(), &Selection::All);
//!
//! view.select_tag("joy", Instant::now());
//! assert_eq!(view.results().nodes.len(), 1);
//! ```

mod panel;
mod render;
mod viewport;

pub use panel::{CategoryControl, ControlId, FilterPanel, PanelRow, TagControl};
pub use render::{
    ResultNode, ResultsView, SectionView, no_results_message, render_results, section_title,
};
pub use viewport::{SCROLL_SETTLE_DELAY, Viewport, ViewportDetector, WidthThreshold};

use crate::catalog::{Catalog, Query};
use crate::clipboard::{ClipboardService, CopyFeedback, CopyOutcome, CopyReport, ManualCopyPrompt};
use crate::config::DEFAULT_COMPACT_WIDTH;
use std::time::Instant;

/// The active filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Every tag
    #[default]
    All,
    /// A single tag
    Tag(String),
}

/// Identifies one rendered kaomoji cell
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryId {
    /// Tag of the section holding the entry
    pub tag: String,
    /// Position within the tag's entries
    pub index: usize,
}

impl EntryId {
    /// Create an entry id
    #[must_use]
    pub fn new(tag: impl Into<String>, index: usize) -> Self {
        Self {
            tag: tag.into(),
            index,
        }
    }
}

/// Input to the view controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// The "All" control was activated
    SelectAll,
    /// A tag was chosen
    TagSelected(String),
    /// A kaomoji cell was activated
    EntryClicked(EntryId),
    /// A category header was activated
    ToggleCategory(String),
    /// The manual-copy prompt was closed
    DismissManualCopy,
}

/// What changed during a timer tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tick {
    /// The results should be scrolled into view now
    pub scroll_results: bool,
    /// Some timed state reverted and needs a redraw
    pub changed: bool,
}

/// Selection state machine over a loaded catalog
pub struct ViewController<'a> {
    query: Query<'a>,
    panel: FilterPanel,
    selection: Selection,
    active: Option<ControlId>,
    results: ResultsView,
    feedback: CopyFeedback<EntryId>,
    manual_copy: Option<ManualCopyPrompt>,
    pending_scroll: Option<Instant>,
    viewport: Viewport,
    detector: Box<dyn ViewportDetector>,
}

impl<'a> ViewController<'a> {
    /// Controller over `catalog` with the built-in categories
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_query(Query::new(catalog))
    }

    /// Controller over an explicit query configuration
    ///
    /// The filter panel is built here, once, and the initial `All` selection
    /// is rendered.
    #[must_use]
    pub fn with_query(query: Query<'a>) -> Self {
        let panel = FilterPanel::build(&query);
        let results = render_results(&query, &Selection::All);
        Self {
            query,
            panel,
            selection: Selection::All,
            active: Some(ControlId::All),
            results,
            feedback: CopyFeedback::new(),
            manual_copy: None,
            pending_scroll: None,
            viewport: Viewport::default(),
            detector: Box::new(WidthThreshold(DEFAULT_COMPACT_WIDTH)),
        }
    }

    /// Replace the compact viewport detector
    #[must_use]
    pub fn with_detector(mut self, detector: impl ViewportDetector + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    /// Query layer backing this view
    #[must_use]
    pub const fn query(&self) -> &Query<'a> {
        &self.query
    }

    /// Current selection
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Filter panel
    #[must_use]
    pub const fn panel(&self) -> &FilterPanel {
        &self.panel
    }

    /// Rendered results for the current selection
    #[must_use]
    pub const fn results(&self) -> &ResultsView {
        &self.results
    }

    /// The control marked active, if one is rendered for the selection
    #[must_use]
    pub const fn active_control(&self) -> Option<&ControlId> {
        self.active.as_ref()
    }

    /// Whether `control` is the active one
    #[must_use]
    pub fn is_active(&self, control: &ControlId) -> bool {
        self.active.as_ref() == Some(control)
    }

    /// Open manual-copy prompt, if any
    #[must_use]
    pub const fn manual_copy(&self) -> Option<&ManualCopyPrompt> {
        self.manual_copy.as_ref()
    }

    /// Whether the current viewport uses the compact layout
    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.detector.is_compact(self.viewport)
    }

    /// Record the size of the drawing area
    pub const fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Show every tag
    pub fn select_all(&mut self, now: Instant) {
        self.transition(Selection::All, now);
    }

    /// Show a single tag; unknown or empty tags render a placeholder
    pub fn select_tag(&mut self, tag: &str, now: Instant) {
        self.transition(Selection::Tag(tag.to_string()), now);
    }

    fn transition(&mut self, selection: Selection, now: Instant) {
        tracing::debug!(?selection, "filter changed");
        self.active = match &selection {
            Selection::All => Some(ControlId::All),
            Selection::Tag(tag) if self.panel.has_tag(tag) => Some(ControlId::Tag(tag.clone())),
            Selection::Tag(_) => None,
        };
        self.results = render_results(&self.query, &selection);
        self.selection = selection;

        if self.is_compact() {
            self.pending_scroll = Some(now + SCROLL_SETTLE_DELAY);
        }
    }

    /// Expand or collapse a category in the filter panel
    pub fn toggle_category(&mut self, name: &str) -> bool {
        self.panel.toggle(name)
    }

    /// Kaomoji text for `entry`
    #[must_use]
    pub fn entry(&self, entry: &EntryId) -> Option<&'a str> {
        self.query
            .entries_for_tag(&entry.tag)
            .get(entry.index)
            .map(String::as_str)
    }

    /// Label a cell shows: the kaomoji, or the copied label while its
    /// feedback runs
    #[must_use]
    pub fn entry_label<'l>(&self, entry: &EntryId, original: &'l str, now: Instant) -> &'l str {
        self.feedback.label(entry, original, now)
    }

    /// Copy an entry through `clipboard`
    ///
    /// Starts the copied feedback on the cell whatever the outcome and opens
    /// the manual-copy prompt when nothing reached the clipboard. Returns
    /// `None` when `entry` does not exist.
    pub fn copy_entry(
        &mut self,
        entry: &EntryId,
        clipboard: &mut ClipboardService,
        now: Instant,
    ) -> Option<CopyReport> {
        let text = self.entry(entry)?;
        let report = clipboard.copy(text);

        if report.outcome == CopyOutcome::RequiresManualCopy {
            self.manual_copy = Some(ManualCopyPrompt::open(text, now));
        }
        self.feedback.start(entry.clone(), now);

        Some(report)
    }

    /// Close the manual-copy prompt
    pub fn dismiss_manual_copy(&mut self) {
        self.manual_copy = None;
    }

    /// Apply one event; returns the copy report for entry clicks
    pub fn dispatch(
        &mut self,
        event: ViewEvent,
        clipboard: &mut ClipboardService,
        now: Instant,
    ) -> Option<CopyReport> {
        match event {
            ViewEvent::SelectAll => self.select_all(now),
            ViewEvent::TagSelected(tag) => self.select_tag(&tag, now),
            ViewEvent::EntryClicked(entry) => return self.copy_entry(&entry, clipboard, now),
            ViewEvent::ToggleCategory(name) => {
                self.toggle_category(&name);
            }
            ViewEvent::DismissManualCopy => self.dismiss_manual_copy(),
        }
        None
    }

    /// Expire timers: copied labels, the manual-copy prompt, and the pending
    /// scroll
    pub fn tick(&mut self, now: Instant) -> Tick {
        let mut tick = Tick {
            changed: self.feedback.expire(now) > 0,
            ..Tick::default()
        };

        if self.manual_copy.as_ref().is_some_and(|p| p.is_expired(now)) {
            self.manual_copy = None;
            tick.changed = true;
        }

        if self.pending_scroll.is_some_and(|due| now >= due) {
            self.pending_scroll = None;
            tick.scroll_results = true;
        }

        tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::mock::ScriptedStrategy;
    use crate::clipboard::{COPIED_LABEL, ClipboardFailure, FEEDBACK_DURATION, MANUAL_COPY_TIMEOUT};
    use crate::testing::{catalog_from, sample_catalog};
    use std::time::Duration;

    fn working_clipboard() -> ClipboardService {
        ClipboardService::new(vec![Box::new(ScriptedStrategy::succeeding("native").native())])
    }

    fn broken_clipboard() -> ClipboardService {
        ClipboardService::new(vec![
            Box::new(ScriptedStrategy::failing(
                "native",
                ClipboardFailure::Unavailable("no session".into()),
            )),
            Box::new(ScriptedStrategy::failing(
                "xclip",
                ClipboardFailure::CommandThrew("not found".into()),
            )),
        ])
    }

    #[test]
    fn test_initial_state() {
        let catalog = sample_catalog();
        let view = ViewController::new(&catalog);

        assert_eq!(view.selection(), &Selection::All);
        assert!(view.is_active(&ControlId::All));
        assert_eq!(view.results().entry_count(), view.query().total_count());
    }

    #[test]
    fn test_select_tag_marks_single_control() {
        let catalog = sample_catalog();
        let mut view = ViewController::new(&catalog);
        view.select_tag("joy", Instant::now());

        assert_eq!(view.selection(), &Selection::Tag("joy".into()));
        assert!(view.is_active(&ControlId::Tag("joy".into())));
        assert!(!view.is_active(&ControlId::All));

        let active: Vec<_> = view
            .panel()
            .rows()
            .into_iter()
            .filter(|row| view.is_active(&row.id))
            .collect();
        assert_eq!(active.len(), 1);
    }

    #[test]
    fn test_round_trip_restores_initial_render() {
        let catalog = sample_catalog();
        let mut view = ViewController::new(&catalog);
        let initial = view.results().clone();

        let now = Instant::now();
        view.select_all(now);
        assert_eq!(view.results(), &initial);
        view.select_tag("sad", now);
        assert_ne!(view.results(), &initial);
        view.select_all(now);
        assert_eq!(view.results(), &initial);
        assert!(view.is_active(&ControlId::All));
    }

    #[test]
    fn test_unknown_tag_renders_placeholder() {
        let catalog = sample_catalog();
        let mut view = ViewController::new(&catalog);
        view.select_tag("dragon", Instant::now());

        assert!(matches!(view.results().nodes[0], ResultNode::NoResults { .. }));
        assert_eq!(view.results().entry_count(), 0);
        assert!(view.active_control().is_none());
    }

    #[test]
    fn test_zero_entry_tag_excluded_from_all() {
        let catalog = catalog_from(&[("joy", &["(^_^)"]), ("love", &[])]);
        let view = ViewController::new(&catalog);

        assert_eq!(view.query().count_for_tag("love"), 0);
        assert!(view.results().sections().all(|s| s.tag != "love"));
    }

    #[test]
    fn test_copy_feedback_reverts() {
        let catalog = catalog_from(&[("happy", &["(^_^)"])]);
        let mut view = ViewController::new(&catalog);
        let mut clipboard = working_clipboard();
        let entry = EntryId::new("happy", 0);
        let t0 = Instant::now();

        let report = view.copy_entry(&entry, &mut clipboard, t0).unwrap();
        assert_eq!(report.outcome, CopyOutcome::Succeeded);
        assert_eq!(view.entry_label(&entry, "(^_^)", t0), COPIED_LABEL);
        assert!(view.manual_copy().is_none());

        let later = t0 + FEEDBACK_DURATION;
        assert!(view.tick(later).changed);
        assert_eq!(view.entry_label(&entry, "(^_^)", later), "(^_^)");
    }

    #[test]
    fn test_failed_copy_opens_manual_prompt() {
        let catalog = catalog_from(&[("happy", &["(^_^)"])]);
        let mut view = ViewController::new(&catalog);
        let mut clipboard = broken_clipboard();
        let entry = EntryId::new("happy", 0);
        let t0 = Instant::now();

        let report = view
            .dispatch(ViewEvent::EntryClicked(entry.clone()), &mut clipboard, t0)
            .unwrap();
        assert_eq!(report.outcome, CopyOutcome::RequiresManualCopy);
        assert_eq!(view.manual_copy().map(|p| p.text.as_str()), Some("(^_^)"));
        assert_eq!(view.entry_label(&entry, "(^_^)", t0), COPIED_LABEL);

        view.tick(t0 + Duration::from_secs(5));
        assert!(view.manual_copy().is_some());
        assert!(view.tick(t0 + MANUAL_COPY_TIMEOUT).changed);
        assert!(view.manual_copy().is_none());
    }

    #[test]
    fn test_dismiss_manual_prompt() {
        let catalog = catalog_from(&[("happy", &["(^_^)"])]);
        let mut view = ViewController::new(&catalog);
        let mut clipboard = broken_clipboard();
        let now = Instant::now();

        view.copy_entry(&EntryId::new("happy", 0), &mut clipboard, now);
        view.dispatch(ViewEvent::DismissManualCopy, &mut clipboard, now);
        assert!(view.manual_copy().is_none());
    }

    #[test]
    fn test_copy_unknown_entry() {
        let catalog = catalog_from(&[("happy", &["(^_^)"])]);
        let mut view = ViewController::new(&catalog);
        let mut clipboard = working_clipboard();

        assert!(view
            .copy_entry(&EntryId::new("happy", 5), &mut clipboard, Instant::now())
            .is_none());
    }

    #[test]
    fn test_compact_viewport_schedules_scroll() {
        let catalog = sample_catalog();
        let mut view = ViewController::new(&catalog).with_detector(WidthThreshold(100));
        view.set_viewport(Viewport::new(80, 30));
        let t0 = Instant::now();

        view.select_tag("joy", t0);
        assert!(!view.tick(t0).scroll_results);
        assert!(view.tick(t0 + SCROLL_SETTLE_DELAY).scroll_results);
        // Fires once
        assert!(!view.tick(t0 + SCROLL_SETTLE_DELAY * 2).scroll_results);
    }

    #[test]
    fn test_wide_viewport_does_not_scroll() {
        let catalog = sample_catalog();
        let mut view = ViewController::new(&catalog);
        view.set_viewport(Viewport::new(160, 40));
        let t0 = Instant::now();

        view.select_tag("joy", t0);
        assert!(!view.tick(t0 + Duration::from_secs(1)).scroll_results);
    }

    #[test]
    fn test_toggle_category_event() {
        let catalog = sample_catalog();
        let mut view = ViewController::new(&catalog);
        let mut clipboard = working_clipboard();
        let rows_before = view.panel().rows().len();

        view.dispatch(
            ViewEvent::ToggleCategory("Positivity".into()),
            &mut clipboard,
            Instant::now(),
        );
        assert!(view.panel().rows().len() < rows_before);
        assert_eq!(view.selection(), &Selection::All);
    }
}
