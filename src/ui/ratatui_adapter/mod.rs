//! Ratatui terminal frontend for browsing kaomoji
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           RatatuiFrontend                   │
//! │  (implements Frontend trait)                │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │    View    │ │  Ratatui  │ │ Crossterm │
//! │ controller │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! The view controller owns selection and copy feedback. This module only
//! turns it into cells on screen and turns keys and clicks back into
//! [`ViewEvent`](crate::view::ViewEvent)s.
//!
//! # Features
//!
//! - **Filter panel** with collapsible categories and per-tag counts
//! - **Kaomoji grid** grouped into titled sections
//! - **Mouse support** for clicking controls and cells
//! - **Tag prompt** (`/`) with TAB completion
//! - **Status bar** for messages
//! - **Help overlay** (F1)

mod app;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use app::RatatuiFrontend;
pub use state::{AppState, FocusPane, Mode, StatusMessage};
pub use theme::Theme;
