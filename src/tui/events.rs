//! Event polling and dispatch for the TUI.

use super::app::{App, Section};
use crate::carousel::{NavCommand, command_for_key};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use std::time::{Duration, Instant};

/// Application event
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Poll timeout; drives autoplay and animations
    Tick,
    Resize(u16, u16),
}

/// Event handler
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub const fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Wait up to one tick for the next event.
    pub fn next(&self) -> std::io::Result<Event> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Mouse(mouse) => Ok(Event::Mouse(mouse)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TICK_RATE_MS)
    }
}

/// Handle key events and update app state
pub fn handle_key_event(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    app.clear_status_message();

    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?' | 'q') | KeyCode::Enter
        ) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Tab => app.next_section(now),
        KeyCode::BackTab => app.prev_section(now),
        KeyCode::Char(c @ '1'..='3') => {
            let index = usize::from(c as u8 - b'1');
            if let Some(section) = Section::from_index(index) {
                app.select_section(section, now);
            }
        }
        KeyCode::Char('t') => app.cycle_theme(),
        code => match app.section {
            Section::Hero => handle_hero_key(app, code, now),
            Section::Projects => handle_projects_key(app, code, now),
            Section::Stats => handle_stats_key(app, code),
        },
    }
}

fn handle_hero_key(app: &mut App, code: KeyCode, now: Instant) {
    if matches!(code, KeyCode::Enter | KeyCode::Down | KeyCode::Char('j')) {
        app.select_section(Section::Projects, now);
    }
}

fn handle_projects_key(app: &mut App, code: KeyCode, now: Instant) {
    if let Some(command) = command_for_key(code) {
        app.navigate(command, now);
        return;
    }
    match code {
        KeyCode::Char('f') => app.toggle_like(),
        KeyCode::Char(' ') => app.toggle_autoplay(now),
        KeyCode::Home => app.navigate(NavCommand::GoTo(0), now),
        KeyCode::End => {
            let last = app.carousel.len() - 1;
            app.navigate(NavCommand::GoTo(last), now);
        }
        _ => {}
    }
}

fn handle_stats_key(app: &mut App, code: KeyCode) {
    if matches!(code, KeyCode::Char('v') | KeyCode::Enter) {
        app.toggle_stats_view();
    }
}

/// Handle mouse events: clicks, swipes and wheel scrolling between sections.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, now: Instant) {
    if !app.mouse_enabled {
        return;
    }

    if app.show_help {
        if matches!(mouse.kind, MouseEventKind::Down(_)) {
            app.show_help = false;
        }
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollDown => app.next_section(now),
        MouseEventKind::ScrollUp => app.prev_section(now),
        MouseEventKind::Down(MouseButton::Left)
        | MouseEventKind::Drag(MouseButton::Left)
        | MouseEventKind::Up(MouseButton::Left) => {
            if let Some(release) = app.swipe.handle_mouse(mouse) {
                app.handle_release(release, now);
            }
        }
        _ => {}
    }
}
