//! Compact viewport detection
//!
//! On narrow terminals the filter panel is stacked above the results, so
//! after a filter change the results have to be brought into view.

use std::time::Duration;

/// Delay before scrolling, so the new layout settles first
pub const SCROLL_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Size of the drawing area in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Columns
    pub width: u16,
    /// Rows
    pub height: u16,
}

impl Viewport {
    /// Create a viewport
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Decides whether a viewport gets the compact layout
pub trait ViewportDetector {
    /// Whether `viewport` is compact
    fn is_compact(&self, viewport: Viewport) -> bool;
}

/// Compact when the width is at or below a threshold
///
/// A zero-width viewport has not been measured yet and is never compact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthThreshold(pub u16);

impl ViewportDetector for WidthThreshold {
    fn is_compact(&self, viewport: Viewport) -> bool {
        viewport.width > 0 && viewport.width <= self.0
    }
}
