//! Configuration validation for solovina.

use super::defaults::{MAX_DWELL_SECS, MIN_DWELL_SECS};
use super::types::{AppConfig, CarouselConfig, DataConfig, TuiConfig};

/// Theme names understood by the TUI.
pub const THEME_NAMES: &[&str] = &["dark", "light", "high-contrast"];

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = self.carousel.validate();
        errors.extend(self.tui.validate());
        errors.extend(self.data.validate());
        errors
    }
}

impl Validatable for CarouselConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !self.dwell_secs.is_finite() || !(MIN_DWELL_SECS..=MAX_DWELL_SECS).contains(&self.dwell_secs) {
            errors.push(ConfigError::new(
                "carousel.dwell_secs",
                format!(
                    "Dwell must be between {MIN_DWELL_SECS} and {MAX_DWELL_SECS} seconds, got {}",
                    self.dwell_secs
                ),
            ));
        }
        if self.swipe_threshold == 0 {
            errors.push(ConfigError::new(
                "carousel.swipe_threshold",
                "Swipe threshold must be at least 1 column",
            ));
        }
        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !THEME_NAMES.contains(&self.theme.as_str()) {
            errors.push(ConfigError::new(
                "tui.theme",
                format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    THEME_NAMES.join(", ")
                ),
            ));
        }
        if !(10..=1000).contains(&self.tick_rate_ms) {
            errors.push(ConfigError::new(
                "tui.tick_rate_ms",
                format!(
                    "Tick rate must be between 10 and 1000 ms, got {}",
                    self.tick_rate_ms
                ),
            ));
        }
        errors
    }
}

impl Validatable for DataConfig {
    fn validate(&self) -> Vec<ConfigError> {
        match &self.catalog {
            Some(path) if !path.exists() => vec![ConfigError::new(
                "data.catalog",
                format!("Catalog file does not exist: {}", path.display()),
            )],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_invalid_values_are_reported_per_field() {
        let config = AppConfig::builder()
            .dwell_secs(0.1)
            .swipe_threshold(0)
            .theme("neon")
            .catalog("/no/such/catalog.yaml")
            .build();
        let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "carousel.dwell_secs",
                "carousel.swipe_threshold",
                "tui.theme",
                "data.catalog"
            ]
        );
    }

    #[test]
    fn test_nan_dwell_rejected() {
        let config = AppConfig::builder().dwell_secs(f64::NAN).build();
        assert!(!config.carousel.is_valid());
    }

    #[test]
    fn test_tick_rate_bounds() {
        let mut tui = TuiConfig::default();
        tui.tick_rate_ms = 5;
        assert_eq!(tui.validate().len(), 1);
        tui.tick_rate_ms = 1000;
        assert!(tui.is_valid());
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::new("tui.theme", "bad");
        assert_eq!(err.to_string(), "tui.theme: bad");
    }
}
