//! Tracing subscriber setup
//!
//! The interactive browser owns the terminal, so it logs to a file; the
//! one-shot commands log to stderr. `RUST_LOG` overrides the default filter.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log records are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// Append to a file
    File(PathBuf),
}

impl LogTarget {
    /// Filter used when `RUST_LOG` is unset
    #[must_use]
    pub const fn default_directive(&self) -> &'static str {
        match self {
            Self::Stderr => "kaomoji=warn",
            Self::File(_) => "kaomoji=info",
        }
    }
}

fn default_filter(target: &LogTarget) -> EnvFilter {
    EnvFilter::new(target.default_directive())
}

/// `RUST_LOG` when set and valid, otherwise the target's default
fn env_filter(target: &LogTarget) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(target))
}

/// Install the global subscriber
///
/// A second call is a no-op.
///
/// # Errors
///
/// Returns an I/O error if the log file or its directory cannot be created.
pub fn init(target: &LogTarget) -> io::Result<()> {
    let filter = env_filter(target);

    let installed = match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .with(filter)
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .with(filter)
                .try_init()
        }
    };

    if installed.is_ok() {
        tracing::debug!(?target, "logging initialized");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(LogTarget::Stderr.default_directive(), "kaomoji=warn");
        assert_eq!(
            LogTarget::File(PathBuf::from("k.log")).default_directive(),
            "kaomoji=info"
        );
    }

    #[test]
    fn test_filter_falls_back_to_default_directive() {
        assert_eq!(default_filter(&LogTarget::Stderr).to_string(), "kaomoji=warn");
        if std::env::var_os("RUST_LOG").is_none() {
            let target = LogTarget::File(PathBuf::from("kaomoji.log"));
            assert_eq!(env_filter(&target).to_string(), "kaomoji=info");
        }
    }

    #[test]
    fn test_file_target_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("kaomoji.log");

        init(&LogTarget::File(path.clone())).unwrap();
        assert!(path.exists());
    }
}
