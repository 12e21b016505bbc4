//! Output abstraction layer
//!
//! The one-shot commands write through [`OutputWriter`] so their output can
//! be captured in tests; the interactive browser keeps its own status bar.

use colored::Colorize;

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use kaomoji::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.write("(^_^)");
/// output.success("Copied!");
/// output.warning("Clipboard unavailable");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr
///
/// In quiet mode only plain `write` output and errors are printed, so the
/// result can be piped.
///
/// # Examples
///
/// ```
/// use kaomoji::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new().quiet(true);
/// output.write("(^_^)");
/// output.success("not shown");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self { quiet: false }
    }

    /// Suppress decorated messages
    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "⚠".yellow(), message);
        }
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.dimmed());
        }
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
}
