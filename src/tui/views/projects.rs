//! Project carousel page.

use crate::carousel::Slot;
use crate::tui::app::{App, HitTarget};
use crate::tui::constants::PROJECTS_TITLE;
use crate::tui::theme::{Styles, colors};
use crate::tui::widgets::{DotIndicator, ProjectCard};
use ratatui::{
    prelude::*,
    widgets::{LineGauge, Paragraph},
};
use std::time::Instant;

/// Split the card row between the visible slots: the active card gets the
/// larger share, neighbors keep their side.
fn card_areas(area: Rect, slots: &[Slot]) -> Vec<Rect> {
    let constraints: Vec<Constraint> = slots
        .iter()
        .map(|slot| {
            if slot.is_active() {
                Constraint::Fill(2)
            } else {
                Constraint::Fill(1)
            }
        })
        .collect();
    Layout::horizontal(constraints)
        .spacing(1)
        .split(area)
        .to_vec()
}

pub fn render(frame: &mut Frame, area: Rect, app: &mut App, now: Instant) {
    let scheme = colors();
    let [header, cards, dots, progress] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(6),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled(PROJECTS_TITLE, Styles::section_title()).centered()),
        header,
    );

    let wide = area.width >= app.wide_min_width;
    let slots = app.carousel.visible_window(wide);
    let card_row = if wide {
        cards
    } else {
        cards.inner(Margin::new(cards.width / 8, 0))
    };
    for (slot, rect) in slots.iter().zip(card_areas(card_row, &slots)) {
        let index = app.carousel.state().index_at(slot.offset);
        let project = &app.carousel.items()[index];
        let card = ProjectCard::new(project)
            .active(slot.is_active())
            .liked(app.is_liked(&project.id));
        frame.render_widget(card, rect);
        app.hits.push(rect, HitTarget::Card(index));
    }

    let active_color = scheme.project_accent(app.carousel.current_item().color);
    let indicator = DotIndicator::new(app.carousel.len(), app.carousel.current())
        .active_color(active_color);
    for (index, rect) in indicator.positions(dots).into_iter().enumerate() {
        app.hits.push(rect, HitTarget::Dot(index));
    }
    frame.render_widget(indicator, dots);

    let label = if app.carousel.autoplay_enabled() {
        "▶ Авто"
    } else {
        "⏸ Пауза"
    };
    let gauge = LineGauge::default()
        .ratio(app.carousel.progress_at(now).clamp(0.0, 1.0))
        .label(Span::styled(label, Styles::text_muted()))
        .filled_style(Style::default().fg(active_color))
        .unfilled_style(Style::default().fg(scheme.muted));
    let bar = progress.inner(Margin::new(progress.width / 6, 0));
    frame.render_widget(gauge, bar);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::CarouselState;

    #[test]
    fn test_card_areas_favor_active() {
        let state = CarouselState::new(5).unwrap();
        let slots = state.visible_window(true);
        let areas = card_areas(Rect::new(0, 0, 102, 10), &slots);
        assert_eq!(areas.len(), 3);
        assert!(areas[1].width > areas[0].width);
        assert_eq!(areas[0].width, areas[2].width);
    }

    #[test]
    fn test_single_slot_takes_full_row() {
        let state = CarouselState::new(5).unwrap();
        let slots = state.visible_window(false);
        let areas = card_areas(Rect::new(0, 0, 40, 10), &slots);
        assert_eq!(areas, vec![Rect::new(0, 0, 40, 10)]);
    }
}
