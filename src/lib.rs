//! Kaomoji - browse categorized kaomoji by tag and copy them
//!
//! This library loads a tag → kaomoji catalog, derives per-tag and
//! per-category counts, drives the browser's selection state, and copies
//! entries through a clipboard fallback chain.
//!
//! ```
//! use kaomoji::catalog::{Query, parse};
//! use kaomoji::view::ViewController;
//!
//! let catalog = parse(r#"{"joy": ["(^_^)", "(^o^)"], "sad": ["(T_T)"]}"#).unwrap();
//! assert_eq!(Query::new(&catalog).total_count(), 3);
//!
//! let view = ViewController::new(&catalog);
//! assert_eq!(view.results().entry_count(), 3);
//! ```

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod completions;
pub mod config;
pub mod logging;
pub mod output;
pub mod ui;
pub mod view;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum KaomojiError {
    /// Catalog could not be loaded
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
