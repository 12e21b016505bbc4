//! Shell completion scripts
//!
//! Completions are static: subcommands, flags and shells come from the clap
//! command definition.

use crate::cli::Cli;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

/// Write the completion script for `shell` to `buf`
pub fn generate<W: Write>(shell: Shell, buf: &mut W) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_bash_mentions_subcommands() {
        let mut buf = Vec::new();
        generate(Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();

        assert!(script.contains("kaomoji"));
        assert!(script.contains("browse"));
        assert!(script.contains("copy"));
    }

    #[test]
    fn test_generate_fish() {
        let mut buf = Vec::new();
        generate(Shell::Fish, &mut buf);
        assert!(!buf.is_empty());
    }
}
