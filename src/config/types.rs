//! Configuration types for solovina.

use super::defaults::{
    DEFAULT_DWELL_SECS, DEFAULT_SWIPE_THRESHOLD, DEFAULT_TICK_RATE_MS, DEFAULT_WIDE_MIN_WIDTH,
    MAX_DWELL_SECS, MIN_DWELL_SECS,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI flags are layered over the file configuration with
/// [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Carousel behavior (autoplay, dwell interval, swipe threshold)
    pub carousel: CarouselConfig,
    /// TUI-specific configuration
    pub tui: TuiConfig,
    /// Data sources
    pub data: DataConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn dwell_secs(mut self, secs: f64) -> Self {
        self.config.carousel.dwell_secs = secs;
        self
    }

    pub fn autoplay(mut self, enabled: bool) -> Self {
        self.config.carousel.autoplay = enabled;
        self
    }

    pub fn swipe_threshold(mut self, columns: u16) -> Self {
        self.config.carousel.swipe_threshold = columns;
        self
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.config.tui.theme = theme.into();
        self
    }

    pub fn mouse(mut self, enabled: bool) -> Self {
        self.config.tui.mouse_enabled = enabled;
        self
    }

    pub fn animations(mut self, enabled: bool) -> Self {
        self.config.tui.animations = enabled;
        self
    }

    pub fn catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data.catalog = Some(path.into());
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section types
// ============================================================================

/// Carousel behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CarouselConfig {
    /// Seconds each project stays active before autoplay advances
    #[schemars(range(min = 0.5, max = 3600.0))]
    pub dwell_secs: f64,
    /// Start with autoplay enabled
    pub autoplay: bool,
    /// Horizontal drag distance (terminal columns) that counts as a swipe
    #[schemars(range(min = 1))]
    pub swipe_threshold: u16,
    /// Minimum width (columns) for showing neighbor cards next to the active one
    pub wide_min_width: u16,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            dwell_secs: DEFAULT_DWELL_SECS,
            autoplay: true,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            wide_min_width: DEFAULT_WIDE_MIN_WIDTH,
        }
    }
}

impl CarouselConfig {
    /// Dwell interval as a `Duration`, clamped to the accepted range.
    ///
    /// NaN falls back to the default interval.
    #[must_use]
    pub fn dwell(&self) -> Duration {
        let secs = if self.dwell_secs.is_nan() {
            DEFAULT_DWELL_SECS
        } else {
            self.dwell_secs.clamp(MIN_DWELL_SECS, MAX_DWELL_SECS)
        };
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::from_secs(5))
    }
}

/// TUI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Event poll interval in milliseconds (drives autoplay and animations)
    #[schemars(range(min = 10, max = 1000))]
    pub tick_rate_ms: u64,
    /// Enable mouse support (clicks and swipes)
    pub mouse_enabled: bool,
    /// Play intro and counter animations
    pub animations: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            mouse_enabled: true,
            animations: true,
        }
    }
}

/// Data sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DataConfig {
    /// Catalog file (YAML or JSON); the built-in catalog is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

// ============================================================================
// Persisted TUI preferences
// ============================================================================

/// TUI preferences persisted between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiPreferences {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

impl TuiPreferences {
    /// Get the path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("solovina").join("preferences.json"))
    }

    /// Load preferences from disk, or return `None` if there are none.
    #[must_use]
    pub fn load() -> Option<Self> {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
    }

    /// Save preferences to disk.
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(self)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            std::fs::write(path, json)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.carousel.dwell(), Duration::from_secs(5));
        assert!(config.carousel.autoplay);
        assert_eq!(config.tui.theme, "dark");
        assert!(config.data.catalog.is_none());
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .dwell_secs(2.5)
            .autoplay(false)
            .theme("light")
            .catalog("my.yaml")
            .build();
        assert_eq!(config.carousel.dwell(), Duration::from_millis(2500));
        assert!(!config.carousel.autoplay);
        assert_eq!(config.tui.theme, "light");
        assert_eq!(config.data.catalog, Some(PathBuf::from("my.yaml")));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("carousel:\n  dwell_secs: 8\n").unwrap();
        assert_eq!(config.carousel.dwell_secs, 8.0);
        assert!(config.carousel.autoplay);
        assert_eq!(config.tui, TuiConfig::default());
    }

    #[test]
    fn test_negative_dwell_clamps_to_minimum() {
        let config = AppConfig::builder().dwell_secs(-1.0).build();
        assert_eq!(config.carousel.dwell(), Duration::from_millis(500));
    }

    #[test]
    fn test_unrepresentable_dwell_clamps_to_maximum() {
        for secs in [f64::INFINITY, 1e30] {
            let config = AppConfig::builder().dwell_secs(secs).build();
            assert_eq!(config.carousel.dwell(), Duration::from_secs(3600));
        }
    }

    #[test]
    fn test_nan_dwell_uses_default() {
        let config = AppConfig::builder().dwell_secs(f64::NAN).build();
        assert_eq!(config.carousel.dwell(), Duration::from_secs(5));
    }
}
