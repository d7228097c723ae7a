//! Default configurations and presets for solovina.

use super::types::{AppConfig, CarouselConfig, TuiConfig};

/// Seconds an item stays active under autoplay.
pub const DEFAULT_DWELL_SECS: f64 = 5.0;

/// Accepted range for the dwell interval, in seconds.
pub const MIN_DWELL_SECS: f64 = 0.5;
pub const MAX_DWELL_SECS: f64 = 3600.0;

/// Drag distance in terminal columns that counts as a swipe.
///
/// A terminal column is roughly eight pixels wide, so six columns match a
/// 50 pixel swipe on a pointer device.
pub const DEFAULT_SWIPE_THRESHOLD: u16 = 6;

/// Event poll interval in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 50;

/// Terminal width from which neighbor cards are shown.
pub const DEFAULT_WIDE_MIN_WIDTH: u16 = 100;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Interactive defaults
    Default,
    /// Unattended display: faster autoplay, no mouse, no intro
    Kiosk,
    /// Manual browsing: autoplay off
    Manual,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Kiosk => "kiosk",
            Self::Manual => "manual",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "kiosk" | "display" => Some(Self::Kiosk),
            "manual" => Some(Self::Manual),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Autoplay every 5 seconds with mouse and keyboard navigation",
            Self::Kiosk => "Unattended display: 8 second autoplay, no mouse, no intro animation",
            Self::Manual => "Autoplay disabled; navigate with arrows, clicks and swipes",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Kiosk, Self::Manual]
    }
}

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Kiosk => Self {
                carousel: CarouselConfig {
                    dwell_secs: 8.0,
                    autoplay: true,
                    ..CarouselConfig::default()
                },
                tui: TuiConfig {
                    mouse_enabled: false,
                    animations: false,
                    ..TuiConfig::default()
                },
                ..Self::default()
            },
            ConfigPreset::Manual => Self {
                carousel: CarouselConfig {
                    autoplay: false,
                    ..CarouselConfig::default()
                },
                ..Self::default()
            },
        }
    }
}
