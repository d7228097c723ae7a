//! Intro banner: the group name revealed letter by letter.

use crate::tui::animation::{CTA_DELAY, LetterPhase, SUBTITLE_DELAY, is_visible, letter_phase};
use crate::tui::app::{App, HitTarget};
use crate::tui::constants::{HERO_CTA, HERO_LINE_1, HERO_LINE_2, HERO_SUBTITLE};
use crate::tui::theme::{Styles, colors};
use crate::tui::widgets::display_width;
use ratatui::{prelude::*, widgets::Paragraph};
use std::time::{Duration, Instant};

/// Title line with letters revealed up to `elapsed`. Letters are numbered
/// from `first_index` so the second line continues the first one's stagger.
fn title_line(text: &str, first_index: usize, elapsed: Duration) -> Line<'static> {
    let scheme = colors();
    let spans: Vec<Span<'static>> = text
        .chars()
        .enumerate()
        .map(|(i, ch)| match letter_phase(elapsed, first_index + i) {
            LetterPhase::Hidden => Span::raw(" "),
            LetterPhase::Appearing => Span::styled(
                ch.to_string(),
                Style::default().fg(scheme.primary).add_modifier(Modifier::DIM),
            ),
            LetterPhase::Shown => {
                Span::styled(ch.to_string(), Style::default().fg(scheme.primary).bold())
            }
        })
        .collect();
    Line::from(spans).alignment(Alignment::Center)
}

pub fn render(frame: &mut Frame, area: Rect, app: &mut App, now: Instant) {
    let elapsed = app.hero_elapsed(now);
    let line_1_len = HERO_LINE_1.chars().count();

    let [_, title, _, subtitle, _, cta, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .areas(area);

    let title_lines = vec![
        title_line(HERO_LINE_1, 0, elapsed),
        Line::from(""),
        title_line(HERO_LINE_2, line_1_len, elapsed),
    ];
    frame.render_widget(Paragraph::new(title_lines), title);

    if is_visible(elapsed, SUBTITLE_DELAY) {
        frame.render_widget(
            Paragraph::new(Line::styled(HERO_SUBTITLE, Styles::text_muted()).centered()),
            subtitle,
        );
    }

    if is_visible(elapsed, CTA_DELAY) {
        let label = format!("{HERO_CTA} ▼");
        let lines = vec![
            Line::styled(label.clone(), Styles::shortcut_key()).centered(),
            Line::styled("Enter", Styles::shortcut_desc()).centered(),
        ];
        frame.render_widget(Paragraph::new(lines), cta);

        let width = display_width(&label).min(cta.width);
        let hit = Rect::new(cta.x + (cta.width - width) / 2, cta.y, width, cta.height);
        app.hits.push(hit, HitTarget::Cta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_title_hidden_before_delay() {
        let line = title_line(HERO_LINE_1, 0, Duration::from_millis(100));
        assert_eq!(visible_text(&line).trim(), "");
    }

    #[test]
    fn test_title_partially_revealed() {
        // letters 0..=3 have started by 450 ms
        let line = title_line(HERO_LINE_1, 0, Duration::from_millis(450));
        assert_eq!(visible_text(&line).trim_end(), "СОЛО");
    }

    #[test]
    fn test_second_line_waits_for_first() {
        let first_len = HERO_LINE_1.chars().count();
        let before = Duration::from_millis(300 + 50 * first_len as u64 - 1);
        let line = title_line(HERO_LINE_2, first_len, before);
        assert_eq!(visible_text(&line).trim(), "");
        let line = title_line(HERO_LINE_2, first_len, Duration::MAX);
        assert_eq!(visible_text(&line), HERO_LINE_2);
    }
}
