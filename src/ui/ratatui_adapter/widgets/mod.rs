//! Ratatui widgets for the kaomoji browser

mod filter_list;
mod help_bar;
mod help_overlay;
mod kaomoji_grid;
mod manual_copy;
mod status_bar;
mod tag_prompt;

pub use filter_list::{FilterList, scroll_offset};
pub use help_bar::{HelpBar, KeyHint, hints_for};
pub use help_overlay::HelpOverlay;
pub use kaomoji_grid::{GridCell, GridLayout, GridLine, KaomojiGrid, Move};
pub use manual_copy::ManualCopyOverlay;
pub use status_bar::StatusBar;
pub use tag_prompt::{TagPrompt, TagPromptState};
