//! Configuration module for solovina.
//!
//! Configuration comes from a `.solovina.yaml` file (discovered in the
//! current directory, the repository root, `~/.config/solovina/` or the home
//! directory), a named preset, and command-line overrides layered on top.
//!
//! ```yaml
//! carousel:
//!   dwell_secs: 8
//!   autoplay: true
//! tui:
//!   theme: light
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    ConfigPreset, DEFAULT_DWELL_SECS, DEFAULT_SWIPE_THRESHOLD, DEFAULT_TICK_RATE_MS,
    DEFAULT_WIDE_MIN_WIDTH, MAX_DWELL_SECS, MIN_DWELL_SECS,
};
pub use file::{
    CONFIG_FILE_NAMES, ConfigFileError, config_search_dirs, discover_config_file, generate_example_config,
    load_config_file, load_or_default,
};
pub use types::{AppConfig, AppConfigBuilder, CarouselConfig, DataConfig, TuiConfig, TuiPreferences};
pub use validation::{ConfigError, THEME_NAMES, Validatable};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.solovina.yaml`.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
