//! CLI command handlers.
//!
//! Handlers write to a caller-supplied writer so they can be tested without
//! capturing stdout; `main.rs` only parses arguments and layers the config.

mod projects;
mod show;
mod stats;

pub use projects::run_projects;
pub use show::run_show;
pub use stats::run_stats;

use clap::ValueEnum;

/// Output format of the non-interactive commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, human-readable text
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Check if color output should be used (respects `NO_COLOR`).
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var_os("NO_COLOR").is_none()
}
