//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs against the loaded catalog, printing through an
//! [`OutputWriter`](crate::ui::OutputWriter).

pub mod browse;
pub mod copy;
pub mod show;
pub mod tags;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use copy::execute as copy;
pub use show::execute as show;
pub use tags::execute as tags;
