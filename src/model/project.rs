//! Localization project entries shown in the carousel.

use crate::error::CatalogErrorKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle of a localization project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    InProgress,
    Released,
    Waiting,
    Someday,
    Official,
}

impl ProjectStatus {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InProgress => "in-progress",
            Self::Released => "released",
            Self::Waiting => "waiting",
            Self::Someday => "someday",
            Self::Official => "official",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A `#rrggbb` accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccentColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl AccentColor {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend towards `other`; `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn mix(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

/// Color at position `t` in `[0, 1]` along evenly spaced stops.
#[must_use]
pub fn gradient_at(stops: &[AccentColor], t: f64) -> Option<AccentColor> {
    match stops {
        [] => None,
        [only] => Some(*only),
        _ => {
            let span = (stops.len() - 1) as f64;
            let pos = t.clamp(0.0, 1.0) * span;
            let i = (pos.floor() as usize).min(stops.len() - 2);
            Some(stops[i].mix(stops[i + 1], pos - i as f64))
        }
    }
}

impl FromStr for AccentColor {
    type Err = CatalogErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CatalogErrorKind::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl TryFrom<String> for AccentColor {
    type Error = CatalogErrorKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AccentColor> for String {
    fn from(color: AccentColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// One localization project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub status: ProjectStatus,
    pub status_label: String,
    #[serde(default)]
    pub official: bool,
    pub color: AccentColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_label: Option<String>,
    #[serde(default)]
    pub download_disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_label: Option<String>,
}

/// Where a project can be downloaded or bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadLink<'a> {
    pub label: &'a str,
    pub url: &'a str,
    pub enabled: bool,
}

/// Label used when a project has a download URL but no label.
pub const DEFAULT_DOWNLOAD_LABEL: &str = "Завантажити";

impl Project {
    /// Short line above the title: "Official" for official localizations,
    /// otherwise the status label.
    #[must_use]
    pub fn status_line(&self) -> &str {
        if self.official {
            "Official"
        } else {
            &self.status_label
        }
    }

    /// Text of the badge on the active card.
    #[must_use]
    pub fn badge_text(&self) -> &str {
        if self.official {
            "OFFICIAL"
        } else {
            self.badge_label.as_deref().unwrap_or(&self.status_label)
        }
    }

    /// Download link, if the project has one.
    ///
    /// A placeholder URL (`#`) or `download_disabled` yields a disabled link.
    #[must_use]
    pub fn download(&self) -> Option<DownloadLink<'_>> {
        let url = self.download_url.as_deref()?;
        Some(DownloadLink {
            label: self
                .download_label
                .as_deref()
                .unwrap_or(DEFAULT_DOWNLOAD_LABEL),
            url,
            enabled: !self.download_disabled && url != "#",
        })
    }

    /// Name lines; titles may carry explicit line breaks.
    pub fn title_lines(&self) -> impl Iterator<Item = &str> {
        self.name.lines().map(str::trim).filter(|l| !l.is_empty())
    }

    /// Stops of the `"#a -> #b -> #c"` gradient; malformed stops are skipped.
    #[must_use]
    pub fn gradient_stops(&self) -> Vec<AccentColor> {
        self.gradient
            .as_deref()
            .map(|g| g.split("->").filter_map(|s| s.trim().parse().ok()).collect())
            .unwrap_or_default()
    }
}
