//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::{AppConfig, CarouselConfig, TuiConfig};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".solovina.yaml",
    ".solovina.yml",
    "solovina.yaml",
    "solovina.yml",
];

/// Directories searched for a config file, in order.
///
/// 1. Current directory
/// 2. Git repository root (if in a repo)
/// 3. User config directory (~/.config/solovina/)
/// 4. Home directory
#[must_use]
pub fn config_search_dirs() -> Vec<PathBuf> {
    search_dirs_from(std::env::current_dir().ok().as_deref())
}

fn search_dirs_from(cwd: Option<&Path>) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = Vec::new();
    let candidates = [
        cwd.map(Path::to_path_buf),
        cwd.and_then(find_git_root),
        dirs::config_dir().map(|p| p.join("solovina")),
        dirs::home_dir(),
    ];
    for dir in candidates.into_iter().flatten() {
        if !found.contains(&dir) {
            found.push(dir);
        }
    }
    found
}

/// Discover a config file: the explicit path if it exists, otherwise the
/// first match in [`config_search_dirs`].
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path
        && path.exists()
    {
        return Some(path.to_path_buf());
    }

    config_search_dirs()
        .iter()
        .find_map(|dir| find_config_in_dir(dir))
}

fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values of `other` that differ from the defaults are applied, so
    /// an override built from CLI flags leaves file settings alone unless a
    /// flag was actually given.
    pub fn merge(&mut self, other: &Self) {
        let carousel = CarouselConfig::default();
        if other.carousel.dwell_secs != carousel.dwell_secs {
            self.carousel.dwell_secs = other.carousel.dwell_secs;
        }
        if other.carousel.autoplay != carousel.autoplay {
            self.carousel.autoplay = other.carousel.autoplay;
        }
        if other.carousel.swipe_threshold != carousel.swipe_threshold {
            self.carousel.swipe_threshold = other.carousel.swipe_threshold;
        }
        if other.carousel.wide_min_width != carousel.wide_min_width {
            self.carousel.wide_min_width = other.carousel.wide_min_width;
        }

        let tui = TuiConfig::default();
        if other.tui.theme != tui.theme {
            self.tui.theme.clone_from(&other.tui.theme);
        }
        if other.tui.tick_rate_ms != tui.tick_rate_ms {
            self.tui.tick_rate_ms = other.tui.tick_rate_ms;
        }
        if !other.tui.mouse_enabled {
            self.tui.mouse_enabled = false;
        }
        if !other.tui.animations {
            self.tui.animations = false;
        }

        if other.data.catalog.is_some() {
            self.data.catalog.clone_from(&other.data.catalog);
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_example_config() -> String {
    r"# solovina configuration
#
# Place this file at:
#   - .solovina.yaml in the current directory or repository root
#   - ~/.config/solovina/solovina.yaml for a global config
#
# Command-line flags always override file settings.

carousel:
  # Seconds each project stays on screen during autoplay (0.5-3600)
  dwell_secs: 5.0
  # Start with autoplay running (toggle with Space)
  autoplay: true
  # Horizontal mouse drag, in columns, that counts as a swipe
  swipe_threshold: 6
  # Terminal width from which neighbor cards are shown
  wide_min_width: 100

tui:
  # Theme: dark, light, high-contrast (cycle with t)
  theme: dark
  # Redraw interval in milliseconds (10-1000)
  tick_rate_ms: 50
  mouse_enabled: true
  # Letter-by-letter intro and animated counters
  animations: true

data:
  # YAML or JSON catalog; the built-in catalog is used when omitted
  # catalog: ./catalog.yaml
"
    .to_string()
}
