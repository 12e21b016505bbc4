//! Transient copy acknowledgements
//!
//! Both timers are deadlines checked against an explicit `now`, so the event
//! loop expires them on its tick and tests can move time forward.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Label shown on an element right after it was copied
pub const COPIED_LABEL: &str = "Copied!";

/// How long the copied label stays
pub const FEEDBACK_DURATION: Duration = Duration::from_millis(1500);

/// How long the manual-copy prompt stays when not dismissed
pub const MANUAL_COPY_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-element "Copied!" label swaps
#[derive(Debug, Clone)]
pub struct CopyFeedback<K> {
    started: HashMap<K, Instant>,
    duration: Duration,
}

impl<K: Eq + Hash> CopyFeedback<K> {
    /// Feedback with the standard duration
    #[must_use]
    pub fn new() -> Self {
        Self::with_duration(FEEDBACK_DURATION)
    }

    /// Feedback with a custom duration
    #[must_use]
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            started: HashMap::new(),
            duration,
        }
    }

    /// Show the copied label on `element`, restarting its timer if running
    pub fn start(&mut self, element: K, now: Instant) {
        self.started.insert(element, now);
    }

    /// Whether `element` currently shows the copied label
    #[must_use]
    pub fn is_active(&self, element: &K, now: Instant) -> bool {
        self.started
            .get(element)
            .is_some_and(|&at| now.saturating_duration_since(at) < self.duration)
    }

    /// Label to display for `element`
    #[must_use]
    pub fn label<'a>(&self, element: &K, original: &'a str, now: Instant) -> &'a str {
        if self.is_active(element, now) {
            COPIED_LABEL
        } else {
            original
        }
    }

    /// Drop finished timers, returning how many reverted
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.started.len();
        let duration = self.duration;
        self.started
            .retain(|_, at| now.saturating_duration_since(*at) < duration);
        before - self.started.len()
    }

    /// Number of elements currently showing feedback
    #[must_use]
    pub fn len(&self) -> usize {
        self.started.len()
    }

    /// Whether no element shows feedback
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.started.is_empty()
    }
}

impl<K: Eq + Hash> Default for CopyFeedback<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Overlay presenting text the user must copy by hand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualCopyPrompt {
    /// Text to copy
    pub text: String,
    opened_at: Instant,
    timeout: Duration,
}

impl ManualCopyPrompt {
    /// Open the prompt for `text`
    #[must_use]
    pub fn open(text: impl Into<String>, now: Instant) -> Self {
        Self {
            text: text.into(),
            opened_at: now,
            timeout: MANUAL_COPY_TIMEOUT,
        }
    }

    /// Whether the prompt dismisses itself at `now`
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.opened_at) >= self.timeout
    }

    /// Time left before auto-dismissal
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.timeout
            .saturating_sub(now.saturating_duration_since(self.opened_at))
    }
}
