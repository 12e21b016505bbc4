//! Clipboard through external copy tools
//!
//! The text is staged in a scratch file which becomes the tool's stdin. The
//! scratch file is a `tempfile::NamedTempFile`, so it is unlinked when the copy
//! returns, whether the tool succeeded, failed, or could not be started.

use super::strategy::{ClipboardFailure, CopyStrategy, StrategyKind};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

/// An external program that copies its stdin to the clipboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardCommand {
    /// Program name or path
    pub program: String,
    /// Arguments passed to the program
    #[serde(default)]
    pub args: Vec<String>,
}

impl ClipboardCommand {
    /// Create a command from a program and its arguments
    #[must_use]
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Copy tools to try for this platform, in order
#[must_use]
pub fn default_commands() -> Vec<ClipboardCommand> {
    if cfg!(target_os = "macos") {
        return vec![ClipboardCommand::new("pbcopy", &[])];
    }
    if cfg!(target_os = "windows") {
        return vec![ClipboardCommand::new("clip.exe", &[])];
    }

    let mut commands = Vec::new();
    if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        commands.push(ClipboardCommand::new("wl-copy", &[]));
    }
    commands.push(ClipboardCommand::new("xclip", &["-selection", "clipboard"]));
    commands.push(ClipboardCommand::new("xsel", &["--clipboard", "--input"]));
    // WSL
    commands.push(ClipboardCommand::new("clip.exe", &[]));
    commands
}

/// Legacy copy strategy running one external tool
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    command: ClipboardCommand,
    scratch_dir: Option<PathBuf>,
}

impl CommandClipboard {
    /// Strategy for `command`, staging text in the system temp directory
    #[must_use]
    pub const fn new(command: ClipboardCommand) -> Self {
        Self {
            command,
            scratch_dir: None,
        }
    }

    /// Stage scratch files in `dir` instead of the system temp directory
    #[must_use]
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = Some(dir.into());
        self
    }

    fn stage(&self, text: &str) -> std::io::Result<NamedTempFile> {
        let mut scratch = match &self.scratch_dir {
            Some(dir) => NamedTempFile::new_in(dir)?,
            None => NamedTempFile::new()?,
        };
        scratch.write_all(text.as_bytes())?;
        scratch.flush()?;
        Ok(scratch)
    }
}

impl CopyStrategy for CommandClipboard {
    fn name(&self) -> &str {
        &self.command.program
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Legacy
    }

    fn copy(&mut self, text: &str) -> Result<(), ClipboardFailure> {
        let threw = |e: std::io::Error| {
            ClipboardFailure::CommandThrew(format!("{}: {e}", self.command.program))
        };

        let scratch = self.stage(text).map_err(threw)?;
        let stdin = scratch.reopen().map_err(threw)?;

        let status = Command::new(&self.command.program)
            .args(&self.command.args)
            .stdin(Stdio::from(stdin))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(threw)?;

        if status.success() {
            Ok(())
        } else {
            Err(ClipboardFailure::CommandFailed(format!(
                "{} exited with {status}",
                self.command.program
            )))
        }
    }
}
