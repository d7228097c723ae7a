//! Application state for the showcase TUI.

use super::theme::{Theme, set_theme, toggle_theme};
use crate::carousel::{Carousel, NavCommand, Release, SwipeTracker};
use crate::catalog::Catalog;
use crate::config::{AppConfig, TuiPreferences};
use crate::error::Result;
use crate::model::{Project, ProgressTable};
use ratatui::layout::{Position, Rect};
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Top-level sections, in navigation-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Projects,
    Stats,
}

impl Section {
    pub const ALL: [Self; 3] = [Self::Hero, Self::Projects, Self::Stats];

    pub const fn title(self) -> &'static str {
        match self {
            Self::Hero => "Головна",
            Self::Projects => "Проєкти",
            Self::Stats => "Статистика",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Hero => 0,
            Self::Projects => 1,
            Self::Stats => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Hero => Self::Projects,
            Self::Projects => Self::Stats,
            Self::Stats => Self::Hero,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Hero => Self::Stats,
            Self::Projects => Self::Hero,
            Self::Stats => Self::Projects,
        }
    }
}

/// How the statistics page presents the progress table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsView {
    #[default]
    Chart,
    Table,
}

impl StatsView {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Chart => Self::Table,
            Self::Table => Self::Chart,
        }
    }
}

/// Clickable element recorded while rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Section(Section),
    Card(usize),
    Dot(usize),
    Cta,
}

/// Screen regions of the last frame that react to clicks.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Target under the given cell; later (topmost) regions win.
    pub fn at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// State of the interactive showcase.
pub struct App {
    pub catalog: Catalog,
    /// Progress series derived from the catalog
    pub progress: ProgressTable,
    pub carousel: Carousel<Project>,
    pub section: Section,
    pub stats_view: StatsView,
    pub liked: HashSet<String>,
    pub swipe: SwipeTracker,
    pub show_help: bool,
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub mouse_enabled: bool,
    pub animations: bool,
    /// Terminal width from which neighbor cards are drawn
    pub wide_min_width: u16,
    /// Start of the intro animation
    pub started: Instant,
    /// First time the statistics page was shown
    pub stats_opened: Option<Instant>,
    pub(crate) hits: HitMap,
    persist_theme: bool,
}

impl App {
    /// Build the app over a validated catalog.
    pub fn new(catalog: Catalog, config: &AppConfig, now: Instant) -> Result<Self> {
        let mut carousel = Carousel::new(catalog.projects.clone())?
            .with_dwell(config.carousel.dwell());
        carousel.set_autoplay(config.carousel.autoplay, now);
        tracing::info!(
            "Showcase started with {} projects (autoplay: {})",
            carousel.len(),
            config.carousel.autoplay
        );
        Ok(Self {
            progress: catalog.progress_table(),
            catalog,
            carousel,
            section: Section::Hero,
            stats_view: StatsView::default(),
            liked: HashSet::new(),
            swipe: SwipeTracker::new(config.carousel.swipe_threshold),
            show_help: false,
            should_quit: false,
            status_message: None,
            mouse_enabled: config.tui.mouse_enabled,
            animations: config.tui.animations,
            wide_min_width: config.carousel.wide_min_width,
            started: now,
            stats_opened: None,
            hits: HitMap::default(),
            persist_theme: false,
        })
    }

    /// Save theme changes to the preferences file.
    #[must_use]
    pub fn with_theme_persistence(mut self, enabled: bool) -> Self {
        self.persist_theme = enabled;
        self
    }

    /// Apply the saved theme, falling back to the configured one.
    pub fn load_theme(configured: &str) {
        let name = TuiPreferences::load().map_or_else(|| configured.to_string(), |p| p.theme);
        set_theme(Theme::from_name(&name));
    }

    pub fn select_section(&mut self, section: Section, now: Instant) {
        if section == Section::Stats && self.stats_opened.is_none() {
            self.stats_opened = Some(now);
        }
        if section != self.section {
            tracing::debug!("section -> {:?}", section);
        }
        self.section = section;
    }

    pub fn next_section(&mut self, now: Instant) {
        self.select_section(self.section.next(), now);
    }

    pub fn prev_section(&mut self, now: Instant) {
        self.select_section(self.section.prev(), now);
    }

    pub fn navigate(&mut self, command: NavCommand, now: Instant) {
        self.carousel.apply(command, now);
    }

    pub fn toggle_autoplay(&mut self, now: Instant) {
        let enabled = self.carousel.toggle_autoplay(now);
        self.set_status_message(if enabled {
            "Автопрогравання увімкнено"
        } else {
            "Автопрогравання на паузі"
        });
    }

    /// Like or unlike the active project.
    pub fn toggle_like(&mut self) {
        let id = self.carousel.current_item().id.clone();
        if !self.liked.remove(&id) {
            self.liked.insert(id);
        }
    }

    pub fn is_liked(&self, project_id: &str) -> bool {
        self.liked.contains(project_id)
    }

    pub fn cycle_theme(&mut self) {
        let name = toggle_theme();
        if self.persist_theme
            && let Err(e) = (TuiPreferences {
                theme: name.to_string(),
            })
            .save()
        {
            tracing::warn!("Failed to save theme preference: {e}");
        }
        self.set_status_message(format!("Тема: {name}"));
    }

    pub fn toggle_stats_view(&mut self) {
        self.stats_view = self.stats_view.toggled();
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    /// Advance timers; returns the new index when autoplay moved.
    pub fn on_tick(&mut self, now: Instant) -> Option<usize> {
        self.carousel.tick_at(now)
    }

    /// Act on a finished pointer gesture.
    pub fn handle_release(&mut self, release: Release, now: Instant) {
        match release {
            Release::Swipe(command) => {
                if self.section == Section::Projects {
                    self.navigate(command, now);
                }
            }
            Release::Tap { column, row } => self.click(column, row, now),
        }
    }

    /// Activate whatever was drawn under the given cell.
    pub fn click(&mut self, column: u16, row: u16, now: Instant) {
        match self.hits.at(column, row) {
            Some(HitTarget::Section(section)) => self.select_section(section, now),
            Some(HitTarget::Card(index)) if index != self.carousel.current() => {
                self.navigate(NavCommand::GoTo(index), now);
            }
            Some(HitTarget::Dot(index)) => self.navigate(NavCommand::GoTo(index), now),
            Some(HitTarget::Cta) => self.select_section(Section::Projects, now),
            Some(HitTarget::Card(_)) | None => {}
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        self.hits.at(column, row)
    }

    /// Time into the intro animation; saturated when animations are off.
    pub fn hero_elapsed(&self, now: Instant) -> Duration {
        if self.animations {
            now.saturating_duration_since(self.started)
        } else {
            Duration::MAX
        }
    }

    /// Time into the statistics count-up.
    pub fn stats_elapsed(&self, now: Instant) -> Duration {
        match self.stats_opened {
            Some(opened) if self.animations => now.saturating_duration_since(opened),
            Some(_) => Duration::MAX,
            None => Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;

    fn app(now: Instant) -> App {
        App::new(builtin().unwrap(), &AppConfig::default(), now).unwrap()
    }

    #[test]
    fn test_section_cycle() {
        for section in Section::ALL {
            assert_eq!(section.next().prev(), section);
            assert_eq!(Section::from_index(section.index()), Some(section));
        }
        assert_eq!(Section::from_index(3), None);
    }

    #[test]
    fn test_new_app_starts_on_hero_with_autoplay() {
        let now = Instant::now();
        let app = app(now);
        assert_eq!(app.section, Section::Hero);
        assert!(app.carousel.autoplay_enabled());
        assert_eq!(app.carousel.current(), 0);
    }

    #[test]
    fn test_stats_opened_once() {
        let now = Instant::now();
        let mut app = app(now);
        assert_eq!(app.stats_elapsed(now), Duration::ZERO);
        app.select_section(Section::Stats, now);
        let later = now + Duration::from_secs(1);
        app.select_section(Section::Hero, later);
        app.select_section(Section::Stats, later);
        assert_eq!(app.stats_elapsed(later), Duration::from_secs(1));
    }

    #[test]
    fn test_like_toggle() {
        let mut app = app(Instant::now());
        app.toggle_like();
        assert!(app.is_liked("persona5"));
        app.toggle_like();
        assert!(!app.is_liked("persona5"));
    }

    #[test]
    fn test_click_dispatch() {
        let now = Instant::now();
        let mut app = app(now);
        app.hits.push(Rect::new(0, 0, 10, 1), HitTarget::Section(Section::Stats));
        app.hits.push(Rect::new(0, 5, 2, 1), HitTarget::Dot(3));
        app.hits.push(Rect::new(20, 5, 5, 5), HitTarget::Card(0));

        app.click(4, 0, now);
        assert_eq!(app.section, Section::Stats);

        app.click(1, 5, now);
        assert_eq!(app.carousel.current(), 3);

        app.click(22, 7, now);
        assert_eq!(app.carousel.current(), 0);

        app.click(50, 50, now);
        assert_eq!(app.carousel.current(), 0);
    }

    #[test]
    fn test_swipe_only_moves_carousel_on_projects() {
        let now = Instant::now();
        let mut app = app(now);
        app.handle_release(Release::Swipe(NavCommand::Next), now);
        assert_eq!(app.carousel.current(), 0);
        app.select_section(Section::Projects, now);
        app.handle_release(Release::Swipe(NavCommand::Next), now);
        assert_eq!(app.carousel.current(), 1);
    }

    #[test]
    fn test_animations_disabled_saturates() {
        let now = Instant::now();
        let config = AppConfig::builder().animations(false).build();
        let app = App::new(builtin().unwrap(), &config, now).unwrap();
        assert_eq!(app.hero_elapsed(now), Duration::MAX);
    }
}
