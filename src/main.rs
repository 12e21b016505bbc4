//! Kaomoji CLI application entry point
//!
//! Loads configuration and the catalog, then runs the requested command.
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command)
//! kaomoji
//! kaomoji browse --tag joy
//!
//! # List categories and tags with counts
//! kaomoji tags
//!
//! # Print kaomoji
//! kaomoji show sad
//! kaomoji -q show        # bare entries, one per line
//!
//! # Copy to the clipboard
//! kaomoji copy '(^_^)'
//! kaomoji copy --tag joy --index 2
//!
//! # Use another catalog file
//! kaomoji --data my-kaomoji.json tags
//! ```
//!
//! # Configuration
//!
//! A default configuration is written on first run to the user's config
//! directory (`~/.config/kaomoji/config.toml` on Linux).

use kaomoji::{
    KaomojiError,
    catalog::{self, CatalogSource},
    cli::{Cli, Commands},
    clipboard::ClipboardService,
    commands::{self, browse::BrowseOptions},
    completions,
    config::KaomojiConfig,
    logging::{self, LogTarget},
    ui::{OutputWriter, RatatuiFrontend, StdoutWriter},
};

type Result<T> = std::result::Result<T, KaomojiError>;

/// Pick the log destination for `command`
///
/// The browser owns the terminal, so its logs go to a file.
fn log_target(command: &Commands) -> LogTarget {
    match (command, KaomojiConfig::log_path()) {
        (Commands::Browse { .. }, Some(path)) => LogTarget::File(path),
        _ => LogTarget::Stderr,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let command = cli.get_command();

    if let Commands::Completions { shell } = &command {
        completions::generate(*shell, &mut std::io::stdout());
        return Ok(());
    }

    let config = KaomojiConfig::load()?.with_data_file(cli.data.clone());
    let quiet = cli.quiet || config.quiet;
    let output = StdoutWriter::new().quiet(quiet);

    if let Err(e) = logging::init(&log_target(&command)) {
        output.warning(&format!("Logging disabled: {e}"));
    }

    let catalog = catalog::load_or_empty(&CatalogSource::from_path(config.data_file.clone()));

    match &command {
        Commands::Browse { tag } => {
            let mut clipboard = ClipboardService::from_settings(&config.clipboard);
            let options = BrowseOptions {
                start_tag: tag.clone(),
                compact_width: config.compact_width,
            };
            let mut frontend = RatatuiFrontend::new();
            commands::browse(&catalog, &mut frontend, &mut clipboard, &options, &output)?;
        }
        Commands::Tags => commands::tags(&catalog, &output, quiet)?,
        Commands::Show { tag } => commands::show(&catalog, tag.as_deref(), &output, quiet)?,
        Commands::Copy { .. } => {
            let target = command
                .get_copy_target()
                .ok_or_else(|| KaomojiError::InvalidInput("Nothing to copy".into()))?;
            let mut clipboard = ClipboardService::one_shot_from_settings(&config.clipboard);
            commands::copy(&catalog, &target, &mut clipboard, &output)?;
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}
