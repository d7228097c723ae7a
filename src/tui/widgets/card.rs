//! Project card drawn inside the carousel.

use crate::model::{AccentColor, Project, gradient_at};
use crate::tui::constants::CARD_COVER_HEIGHT;
use crate::tui::theme::{Styles, colors, project_badge};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

/// A project card. The active card shows the full details, neighbors only
/// their badge and title, dimmed.
pub struct ProjectCard<'a> {
    project: &'a Project,
    active: bool,
    liked: bool,
}

impl<'a> ProjectCard<'a> {
    pub const fn new(project: &'a Project) -> Self {
        Self {
            project,
            active: false,
            liked: false,
        }
    }

    #[must_use]
    pub const fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    #[must_use]
    pub const fn liked(mut self, liked: bool) -> Self {
        self.liked = liked;
        self
    }

    fn cover_height(inner: Rect) -> u16 {
        match inner.height {
            h if h >= 10 => CARD_COVER_HEIGHT,
            h if h >= 6 => 1,
            _ => 0,
        }
    }

    fn render_cover(&self, area: Rect, buf: &mut Buffer) {
        let scheme = colors();
        let stops = self.project.gradient_stops();
        let span = f64::from(area.width.saturating_sub(1).max(1));
        for (i, x) in (area.left()..area.right()).enumerate() {
            let color = if scheme.project_colors {
                let base = gradient_at(&stops, i as f64 / span).unwrap_or(self.project.color);
                let shade = if self.active {
                    base
                } else {
                    base.mix(AccentColor::new(0, 0, 0), 0.5)
                };
                Color::Rgb(shade.r, shade.g, shade.b)
            } else {
                scheme.background_alt
            };
            for y in area.top()..area.bottom() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(' ').set_bg(color);
                }
            }
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let scheme = colors();
        let accent = scheme.project_accent(self.project.color);
        let mut lines = vec![Line::from(project_badge(self.project)), Line::from("")];

        let title_style = if self.active {
            Style::default().fg(scheme.text).bold()
        } else {
            Styles::dimmed()
        };
        lines.extend(
            self.project
                .title_lines()
                .map(|l| Line::styled(l.to_string(), title_style)),
        );

        if !self.active {
            return lines;
        }

        lines.push(Line::styled(
            self.project.status_line().to_string(),
            Style::default().fg(accent),
        ));
        lines.push(Line::from(""));

        if let Some(link) = self.project.download() {
            if link.enabled {
                lines.push(Line::from(vec![
                    Span::styled(format!("⬇ {}", link.label), Style::default().fg(accent).bold()),
                    Span::raw("  "),
                    Span::styled(
                        link.url.to_string(),
                        Style::default().fg(scheme.text_muted).underlined(),
                    ),
                ]));
            } else {
                lines.push(Line::styled(
                    format!("⬇ {} (недоступно)", link.label),
                    Styles::dimmed(),
                ));
            }
        }

        let like = if self.liked {
            Span::styled("♥ Подобається", Style::default().fg(scheme.like).bold())
        } else {
            Span::styled("♡ Вподобати", Styles::text_muted())
        };
        lines.push(Line::from(vec![
            like,
            Span::styled(" [f]", Styles::shortcut_key()),
        ]));
        lines
    }
}

impl Widget for ProjectCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let scheme = colors();
        let border_style = if self.active {
            Style::default().fg(scheme.project_accent(self.project.color))
        } else {
            Styles::dimmed()
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let [cover, body] = Layout::vertical([
            Constraint::Length(Self::cover_height(inner)),
            Constraint::Min(0),
        ])
        .areas(inner);
        self.render_cover(cover, buf);

        let body = body.inner(Margin::new(1, u16::from(body.height > 2)));
        Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(body, buf);
    }
}
