//! Centralized theme and color scheme for the TUI.
//!
//! The active theme is global and switchable at runtime; views read it
//! through [`colors`] and the [`Styles`] presets.

use crate::model::{AccentColor, Project};
use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Semantic colors for the showcase UI.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Brand
    pub primary: Color,
    pub accent: Color,
    pub official: Color,
    pub like: Color,

    // UI elements
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,

    // Status
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Text on colored badges
    pub badge_fg_dark: Color,
    pub badge_fg_light: Color,

    /// Use project accent colors; off for the high-contrast scheme
    pub project_colors: bool,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Dark theme (default), close to the site's palette.
    pub const fn dark() -> Self {
        Self {
            primary: Color::Rgb(139, 195, 74),
            accent: Color::Rgb(139, 195, 74),
            official: Color::Rgb(34, 197, 94),
            like: Color::Rgb(239, 68, 68),

            muted: Color::DarkGray,
            border: Color::Rgb(60, 60, 70),
            border_focused: Color::Rgb(139, 195, 74),
            background: Color::Reset,
            background_alt: Color::Rgb(24, 24, 30),
            text: Color::Rgb(240, 240, 240),
            text_muted: Color::Rgb(160, 160, 168),
            selection: Color::Rgb(50, 50, 62),

            success: Color::Rgb(34, 197, 94),
            warning: Color::Rgb(234, 179, 8),
            error: Color::Rgb(239, 68, 68),

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,

            project_colors: true,
        }
    }

    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(85, 139, 47),
            accent: Color::Rgb(85, 139, 47),
            official: Color::Rgb(22, 130, 60),
            like: Color::Rgb(200, 30, 30),

            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(190, 190, 190),
            border_focused: Color::Rgb(85, 139, 47),
            background: Color::Reset,
            background_alt: Color::Rgb(240, 240, 240),
            text: Color::Rgb(20, 20, 20),
            text_muted: Color::Rgb(90, 90, 90),
            selection: Color::Rgb(220, 220, 230),

            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 140, 0),
            error: Color::Rgb(200, 0, 0),

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,

            project_colors: true,
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            primary: Color::White,
            accent: Color::Yellow,
            official: Color::Green,
            like: Color::Red,

            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::Yellow,
            background: Color::Black,
            background_alt: Color::Black,
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::Blue,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,

            project_colors: false,
        }
    }

    /// Terminal color for a project's accent.
    #[must_use]
    pub fn project_accent(&self, color: AccentColor) -> Color {
        if self.project_colors {
            Color::Rgb(color.r, color.g, color.b)
        } else {
            self.accent
        }
    }

    /// Foreground that stays readable on a badge filled with `color`.
    #[must_use]
    pub fn badge_fg_on(&self, color: AccentColor) -> Color {
        if !self.project_colors {
            return self.badge_fg_dark;
        }
        let luminance =
            0.2126 * f64::from(color.r) + 0.7152 * f64::from(color.g) + 0.0722 * f64::from(color.b);
        if luminance > 140.0 {
            self.badge_fg_dark
        } else {
            self.badge_fg_light
        }
    }

    /// Fallback palette for chart series.
    pub const fn chart_palette(&self) -> [Color; 5] {
        [
            self.primary,
            self.success,
            self.warning,
            self.like,
            self.text_muted,
        ]
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// A named color scheme.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            colors: ColorScheme::dark(),
            name: "dark",
        }
    }

    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Next theme in the rotation dark -> light -> high-contrast -> dark.
    #[must_use]
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Advance to the next theme and return its name.
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Colors of the current theme.
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn section_title() -> Style {
        Style::default().fg(colors().text).bold()
    }

    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    pub fn nav_active() -> Style {
        let scheme = colors();
        Style::default()
            .fg(scheme.badge_fg_dark)
            .bg(scheme.primary)
            .bold()
    }

    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent).bold()
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn warning() -> Style {
        Style::default().fg(colors().warning)
    }

    /// Inactive carousel cards.
    pub fn dimmed() -> Style {
        Style::default()
            .fg(colors().muted)
            .add_modifier(Modifier::DIM)
    }
}

/// Badge for a project card: green "OFFICIAL" or the status on its accent.
pub fn project_badge(project: &Project) -> Span<'static> {
    let scheme = colors();
    let (bg, fg) = if project.official {
        (scheme.official, scheme.badge_fg_dark)
    } else {
        (
            scheme.project_accent(project.color),
            scheme.badge_fg_on(project.color),
        )
    };
    Span::styled(
        format!(" {} ", project.badge_text()),
        Style::default().fg(fg).bg(bg).bold(),
    )
}

/// Render `[key] desc` pairs as footer spans.
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled(format!(" {desc}"), Styles::shortcut_desc()));
    }
    spans
}
