//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for kaomoji using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive terminal browser (default)
//! - **tags**: Print categories and tags with counts
//! - **show**: Print the kaomoji of one tag, or all of them
//! - **copy**: Copy a kaomoji to the clipboard
//! - **completions**: Print a shell completion script
//!
//! # Examples
//!
//! ```
//! use kaomoji::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from_args(["kaomoji", "show", "joy"]);
//! assert!(matches!(cli.get_command(), Commands::Show { tag: Some(_) }));
//! ```

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::ffi::OsString;
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "kaomoji")]
#[command(about = "Browse kaomoji by tag and copy them to the clipboard", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog JSON file (overrides config)
    #[arg(long = "data", value_name = "FILE", global = true)]
    pub data: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive browser (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Start filtered by this tag
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tag: Option<String>,
    },

    /// List categories and tags with their counts
    #[command(visible_alias = "t")]
    Tags,

    /// Print the kaomoji of a tag (all tags when omitted)
    #[command(visible_alias = "s")]
    Show {
        /// Tag to show
        #[arg(value_name = "TAG")]
        tag: Option<String>,
    },

    /// Copy a kaomoji to the clipboard
    #[command(visible_alias = "c")]
    Copy {
        /// Text to copy
        #[arg(value_name = "TEXT", required_unless_present = "tag", conflicts_with = "tag")]
        text: Option<String>,

        /// Copy an entry of this tag instead
        #[arg(short = 't', long = "tag", value_name = "TAG", requires = "index")]
        tag: Option<String>,

        /// Position of the entry within the tag (0-based)
        #[arg(short = 'i', long = "index", value_name = "N", requires = "tag")]
        index: Option<usize>,
    },

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// What `copy` should put on the clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyTarget {
    /// Literal text
    Text(String),
    /// The `index`-th entry of `tag`
    Entry {
        /// Tag to look in
        tag: String,
        /// 0-based position
        index: usize,
    },
}

impl Commands {
    /// Helper method to get the copy target from the copy command
    #[must_use]
    pub fn get_copy_target(&self) -> Option<CopyTarget> {
        match self {
            Self::Copy {
                text: Some(text), ..
            } => Some(CopyTarget::Text(text.clone())),
            Self::Copy {
                tag: Some(tag),
                index: Some(index),
                ..
            } => Some(CopyTarget::Entry {
                tag: tag.clone(),
                index: *index,
            }),
            _ => None,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse from an explicit argument list
    #[must_use]
    pub fn parse_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::parse_from(args)
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse { tag: None })
    }
}
