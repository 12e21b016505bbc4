//! Scripted copy strategy for testing

use super::strategy::{ClipboardFailure, CopyStrategy, StrategyKind};
use std::cell::RefCell;
use std::rc::Rc;

/// Strategy that returns a predetermined result and records copied text
///
/// Useful for exercising the fallback chain without touching the system
/// clipboard.
#[derive(Debug, Clone)]
pub struct ScriptedStrategy {
    name: String,
    kind: StrategyKind,
    result: Result<(), ClipboardFailure>,
    copied: Rc<RefCell<Vec<String>>>,
}

impl ScriptedStrategy {
    /// A strategy that always succeeds
    #[must_use]
    pub fn succeeding(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: StrategyKind::Legacy,
            result: Ok(()),
            copied: Rc::default(),
        }
    }

    /// A strategy that always fails with `failure`
    #[must_use]
    pub fn failing(name: &str, failure: ClipboardFailure) -> Self {
        Self {
            name: name.to_string(),
            kind: StrategyKind::Legacy,
            result: Err(failure),
            copied: Rc::default(),
        }
    }

    /// Report this strategy as the native clipboard
    #[must_use]
    pub fn native(mut self) -> Self {
        self.kind = StrategyKind::Native;
        self
    }

    /// Shared handle to the texts this strategy copied
    #[must_use]
    pub fn copied(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.copied)
    }
}

impl CopyStrategy for ScriptedStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> StrategyKind {
        self.kind
    }

    fn copy(&mut self, text: &str) -> Result<(), ClipboardFailure> {
        if self.result.is_ok() {
            self.copied.borrow_mut().push(text.to_string());
        }
        self.result.clone()
    }
}
