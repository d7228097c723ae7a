//! Terminal setup, the main loop and top-level layout.

use super::app::{App, HitTarget, Section};
use super::constants::{BRAND, NAV_HEIGHT};
use super::events::{Event, EventHandler, handle_key_event, handle_mouse_event};
use super::theme::{Styles, colors, render_footer_hints};
use super::views;
use super::widgets::{check_terminal_size, display_width, render_size_warning};
use crate::error::{Result, ShowcaseError};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use std::io::stdout;
use std::time::Instant;

/// Run the interactive showcase until the user quits.
///
/// The terminal is restored even when the loop fails.
pub fn run_tui(app: &mut App, tick_rate_ms: u64) -> Result<()> {
    let terminal_err =
        |message: &'static str| move |e: std::io::Error| ShowcaseError::terminal(message, e);

    enable_raw_mode().map_err(terminal_err("failed to enable raw mode"))?;
    let mut out = stdout();
    let entered = if app.mouse_enabled {
        execute!(out, EnterAlternateScreen, EnableMouseCapture)
    } else {
        execute!(out, EnterAlternateScreen)
    };
    entered.map_err(terminal_err("failed to enter alternate screen"))?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(out)).map_err(terminal_err("failed to open terminal"))?;

    let result = event_loop(&mut terminal, app, &EventHandler::new(tick_rate_ms));

    disable_raw_mode().map_err(terminal_err("failed to disable raw mode"))?;
    let left = if app.mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
    };
    left.map_err(terminal_err("failed to leave alternate screen"))?;
    terminal
        .show_cursor()
        .map_err(terminal_err("failed to show cursor"))?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        let now = Instant::now();
        terminal
            .draw(|frame| render(frame, app, now))
            .map_err(|e| ShowcaseError::terminal("failed to draw frame", e))?;

        let event = events
            .next()
            .map_err(|e| ShowcaseError::terminal("failed to read event", e))?;
        let now = Instant::now();
        match event {
            Event::Key(key) => handle_key_event(app, key, now),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse, now),
            Event::Resize(_, _) => {}
            Event::Tick => {}
        }
        app.on_tick(now);

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Draw one frame at time `now`, recording clickable regions into `app`.
pub fn render(frame: &mut Frame, app: &mut App, now: Instant) {
    let area = frame.area();
    app.hits.clear();

    if let Err(required) = check_terminal_size(area.width, area.height) {
        render_size_warning(frame, area, required);
        return;
    }

    let [nav, body, footer] = Layout::vertical([
        Constraint::Length(NAV_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_nav(frame, nav, app);
    match app.section {
        Section::Hero => views::hero::render(frame, body, app, now),
        Section::Projects => views::projects::render(frame, body, app, now),
        Section::Stats => views::stats::render(frame, body, app, now),
    }
    render_footer(frame, footer, app);

    if app.show_help {
        views::render_help(frame, area, app);
    }
}

/// Brand on the left, one tab per section; tab cells are recorded for clicks.
fn render_nav(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row = Rect::new(inner.x, inner.y + inner.height.saturating_sub(1) / 2, inner.width, 1);
    let brand = format!(" {BRAND} ");
    let mut spans = vec![Span::styled(brand.clone(), Styles::header_title()), Span::raw("  ")];
    let mut x = row.x + display_width(&brand) + 2;

    for (i, section) in Section::ALL.into_iter().enumerate() {
        let label = format!(" {} {} ", i + 1, section.title());
        let width = display_width(&label);
        let style = if section == app.section {
            Styles::nav_active()
        } else {
            Styles::text_muted()
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));

        let visible = width.min(row.right().saturating_sub(x));
        app.hits
            .push(Rect::new(x, row.y, visible, 1), HitTarget::Section(section));
        x = x.saturating_add(width + 1);
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), row);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints: &[(&str, &str)] = match app.section {
        Section::Hero => &[("Enter", "проєкти"), ("Tab", "розділ"), ("?", "довідка"), ("q", "вийти")],
        Section::Projects => &[
            ("←/→", "гортати"),
            ("Space", "пауза"),
            ("f", "вподобати"),
            ("Tab", "розділ"),
            ("t", "тема"),
            ("?", "довідка"),
        ],
        Section::Stats => &[("v", "вигляд"), ("Tab", "розділ"), ("t", "тема"), ("?", "довідка")],
    };
    let mut spans = render_footer_hints(hints);
    if let Some(message) = &app.status_message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(colors().accent).italic(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
