//! Per-section views and overlays.

pub(crate) mod hero;
pub(crate) mod projects;
pub(crate) mod stats;

use super::app::App;
use super::theme::{Styles, colors};
use super::widgets::render_popup;
use ratatui::prelude::*;

const HELP_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "наступний / попередній розділ"),
    ("1 2 3", "Головна, Проєкти, Статистика"),
    ("← →  h l", "попередній / наступний проєкт"),
    ("Home End", "перший / останній проєкт"),
    ("Space", "пауза автопрогравання"),
    ("f", "вподобати проєкт"),
    ("v", "графік або таблиця"),
    ("t", "змінити тему"),
    ("миша", "клік по картці, крапці, розділу; свайп"),
    ("q Esc", "вийти"),
];

pub(crate) fn render_help(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line<'static>> = HELP_KEYS
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{key:>16}  "), Styles::shortcut_key()),
                Span::styled((*desc).to_string(), Styles::text()),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!(
            "Проєктів: {}   Інтервал: {:.1} с",
            app.carousel.len(),
            app.carousel.dwell().as_secs_f64()
        ),
        Styles::text_muted(),
    ));
    render_popup(
        frame,
        area,
        "Довідка",
        lines,
        (64, 16),
        colors().border_focused,
    );
}
