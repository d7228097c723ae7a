//! Render smoke tests for the showcase TUI using ratatui's `TestBackend`.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use solovina::catalog::builtin;
use solovina::config::AppConfig;
use solovina::tui::{App, HitTarget, Section, StatsView, render};
use std::time::{Duration, Instant};

fn app(now: Instant) -> App {
    let config = AppConfig::builder().animations(false).build();
    App::new(builtin().unwrap(), &config, now).unwrap()
}

fn draw(app: &mut App, width: u16, height: u16, now: Instant) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| render(frame, app, now)).unwrap();
    terminal.backend().buffer().clone()
}

fn text(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// First cell whose hit target satisfies `pred`.
fn find_target(
    app: &App,
    width: u16,
    height: u16,
    pred: impl Fn(HitTarget) -> bool,
) -> Option<(u16, u16)> {
    (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .find(|&(x, y)| app.hit_test(x, y).is_some_and(&pred))
}

#[test]
fn test_hero_shows_title_and_call_to_action() {
    let now = Instant::now();
    let mut app = app(now);
    let screen = text(&draw(&mut app, 100, 30, now));
    assert!(screen.contains("СОЛОВ'ЇНА"));
    assert!(screen.contains("КОМАНДА"));
    assert!(screen.contains("Наші проєкти"));

    let (x, y) = find_target(&app, 100, 30, |t| t == HitTarget::Cta).unwrap();
    app.click(x, y, now);
    assert_eq!(app.section, Section::Projects);
}

#[test]
fn test_hero_letters_start_hidden() {
    let now = Instant::now();
    let config = AppConfig::default();
    let mut app = App::new(builtin().unwrap(), &config, now).unwrap();
    let screen = text(&draw(&mut app, 100, 30, now));
    assert!(!screen.contains("СОЛОВ'ЇНА"));

    let later = now + Duration::from_secs(3);
    let screen = text(&draw(&mut app, 100, 30, later));
    assert!(screen.contains("СОЛОВ'ЇНА"));
}

#[test]
fn test_nav_bar_click_switches_section() {
    let now = Instant::now();
    let mut app = app(now);
    draw(&mut app, 100, 30, now);

    let (x, y) = find_target(&app, 100, 30, |t| t == HitTarget::Section(Section::Stats)).unwrap();
    app.click(x, y, now);
    assert_eq!(app.section, Section::Stats);
    assert_eq!(app.stats_opened, Some(now));
}

#[test]
fn test_projects_wide_view_shows_neighbors() {
    let now = Instant::now();
    let mut app = app(now);
    app.select_section(Section::Projects, now);
    let screen = text(&draw(&mut app, 120, 36, now));

    // neighbor titles may wrap, so only their first word is checked
    let first_word = |index: usize| {
        app.catalog.projects[index]
            .name
            .split_whitespace()
            .next()
            .unwrap()
            .to_string()
    };
    let last = app.catalog.projects.len() - 1;
    assert!(screen.contains("Persona 5 Royal"));
    assert!(screen.contains(&first_word(1)));
    assert!(screen.contains(&first_word(last)));

    let (x, y) = find_target(&app, 120, 36, |t| t == HitTarget::Card(1)).unwrap();
    app.click(x, y, now);
    assert_eq!(app.carousel.current(), 1);
}

#[test]
fn test_projects_narrow_view_shows_only_active_card() {
    let now = Instant::now();
    let mut app = app(now);
    app.select_section(Section::Projects, now);
    draw(&mut app, 80, 36, now);

    assert!(find_target(&app, 80, 36, |t| t == HitTarget::Card(0)).is_some());
    assert!(find_target(&app, 80, 36, |t| t == HitTarget::Card(1)).is_none());
}

#[test]
fn test_dot_click_jumps_to_project() {
    let now = Instant::now();
    let mut app = app(now);
    app.select_section(Section::Projects, now);
    draw(&mut app, 120, 36, now);

    let (x, y) = find_target(&app, 120, 36, |t| t == HitTarget::Dot(3)).unwrap();
    app.click(x, y, now);
    assert_eq!(app.carousel.current(), 3);
}

#[test]
fn test_stats_chart_and_table() {
    let now = Instant::now();
    let mut app = app(now);
    app.select_section(Section::Stats, now);

    let screen = text(&draw(&mut app, 120, 40, now));
    assert!(screen.contains("Статистика"));
    assert!(screen.contains("Прогрес у часі"));
    assert!(screen.contains("28 412"));

    app.toggle_stats_view();
    assert_eq!(app.stats_view, StatsView::Table);
    let screen = text(&draw(&mut app, 120, 40, now));
    assert!(screen.contains("Прогрес за місяцями"));
    assert!(screen.contains("100%"));
}

#[test]
fn test_help_overlay() {
    let now = Instant::now();
    let mut app = app(now);
    app.show_help = true;
    let screen = text(&draw(&mut app, 100, 30, now));
    assert!(screen.contains("Довідка"));
}

#[test]
fn test_small_terminal_shows_warning_and_no_targets() {
    let now = Instant::now();
    let mut app = app(now);
    let screen = text(&draw(&mut app, 40, 10, now));
    assert!(screen.contains("Термінал замалий"));
    assert!(find_target(&app, 40, 10, |_| true).is_none());
}
