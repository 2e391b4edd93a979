//! CLI commands

mod completions;
mod status;
mod sync;

pub use completions::CompletionsCommand;
pub use status::StatusCommand;
pub use sync::SyncCommand;
