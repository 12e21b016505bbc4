//! Mock frontend and output writer for testing

use super::error::Result;
use super::output::{MessageLevel, OutputWriter};
use super::{BrowseSummary, Frontend};
use crate::clipboard::ClipboardService;
use crate::view::{ViewController, ViewEvent};
use std::sync::Mutex;
use std::time::Instant;

/// Frontend that replays a fixed list of view events, then exits
///
/// Useful for testing the browse command without a terminal.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFrontend {
    events: Vec<ViewEvent>,
    /// Results count observed when the script started
    pub initial_entries: Option<usize>,
}

impl ScriptedFrontend {
    /// Create a frontend that will dispatch `events` in order
    #[must_use]
    pub fn new(events: Vec<ViewEvent>) -> Self {
        Self {
            events,
            initial_entries: None,
        }
    }
}

impl Frontend for ScriptedFrontend {
    fn run(
        &mut self,
        view: &mut ViewController<'_>,
        clipboard: &mut ClipboardService,
    ) -> Result<BrowseSummary> {
        self.initial_entries = Some(view.results().entry_count());

        let mut summary = BrowseSummary::default();
        for event in self.events.drain(..) {
            if let Some(report) = view.dispatch(event, clipboard, Instant::now()) {
                summary.record(&report, view.manual_copy().map(|p| p.text.as_str()));
            }
        }
        Ok(summary)
    }
}

/// Writer that records every message
#[derive(Debug, Default)]
pub struct BufferWriter {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl BufferWriter {
    /// Create an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// Text of messages at `level`
    #[must_use]
    pub fn lines(&self, level: MessageLevel) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, text)| text)
            .collect()
    }

    fn push(&self, level: MessageLevel, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

impl OutputWriter for BufferWriter {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::mock::ScriptedStrategy;
    use crate::testing::sample_catalog;
    use crate::view::EntryId;

    #[test]
    fn test_scripted_frontend_dispatches_events() {
        let catalog = sample_catalog();
        let mut view = ViewController::new(&catalog);
        let strategy = ScriptedStrategy::succeeding("native").native();
        let copied = strategy.copied();
        let mut clipboard = ClipboardService::new(vec![Box::new(strategy)]);

        let mut frontend = ScriptedFrontend::new(vec![
            ViewEvent::TagSelected("sad".into()),
            ViewEvent::EntryClicked(EntryId::new("sad", 1)),
        ]);
        let summary = frontend.run(&mut view, &mut clipboard).unwrap();

        assert_eq!(summary.copies, 1);
        assert!(summary.pending_manual_copy.is_none());
        assert_eq!(*copied.borrow(), vec!["(╥_╥)".to_string()]);
        assert_eq!(frontend.initial_entries, Some(catalog_total(&view)));
    }

    fn catalog_total(view: &ViewController<'_>) -> usize {
        view.query().total_count()
    }

    #[test]
    fn test_buffer_writer_records_levels() {
        let writer = BufferWriter::new();
        writer.write("(^_^)");
        writer.warning("careful");

        assert_eq!(writer.lines(MessageLevel::Normal), vec!["(^_^)"]);
        assert_eq!(writer.lines(MessageLevel::Warning), vec!["careful"]);
        assert_eq!(writer.messages().len(), 2);
    }
}
