//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal could not be set up, drawn, or restored
    #[error("Terminal error: {0}")]
    TerminalError(#[from] std::io::Error),

    /// The session needs an interactive terminal
    #[error("Not running in an interactive terminal")]
    NotATerminal,
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
