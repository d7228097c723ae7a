//! Named constants for TUI layout and text.

/// Minimum terminal size.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;

pub(crate) const BRAND: &str = "Солов'їна";

pub(crate) const HERO_LINE_1: &str = "СОЛОВ'ЇНА";
pub(crate) const HERO_LINE_2: &str = "КОМАНДА";
pub(crate) const HERO_SUBTITLE: &str = "Живі, працюємо!";
pub(crate) const HERO_CTA: &str = "Наші проєкти";

pub(crate) const PROJECTS_TITLE: &str = "Ігри, над якими ми працюємо";
pub(crate) const STATS_TITLE: &str = "Статистика";
pub(crate) const STATS_SUBTITLE: &str = "Наш прогрес у цифрах та графіках";

/// Rows reserved for the navigation bar.
pub(crate) const NAV_HEIGHT: u16 = 3;
/// Rows of the colored cover on a project card.
pub(crate) const CARD_COVER_HEIGHT: u16 = 3;
/// Height of the featured-project block on the statistics page.
pub(crate) const FEATURED_HEIGHT: u16 = 8;
