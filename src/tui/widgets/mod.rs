//! Reusable widgets and layout helpers for the TUI.

mod card;
mod dots;

pub use card::ProjectCard;
pub use dots::DotIndicator;

use super::constants::{MIN_HEIGHT, MIN_WIDTH};
use crate::tui::theme::colors;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Render an empty state placeholder.
pub fn render_empty_state(frame: &mut Frame, area: Rect, message: &str, hint: Option<&str>) {
    let scheme = colors();
    let mut lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(scheme.text_muted)),
    ];
    if let Some(h) = hint {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            h.to_string(),
            Style::default().fg(scheme.text_muted).italic(),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(scheme.border)),
        )
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Render a popup overlay centered in `area`.
pub fn render_popup(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    content: Vec<Line<'static>>,
    (width, height): (u16, u16),
    border_color: Color,
) {
    let popup_area = centered_rect(width, height, area);
    frame.render_widget(Clear, popup_area);

    let popup = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .title_style(Style::default().fg(border_color).bold())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(popup, popup_area);
}

/// A `width` x `height` rectangle centered in `r`, clipped to it.
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}

/// Display width of `s` in terminal columns.
pub fn display_width(s: &str) -> u16 {
    u16::try_from(UnicodeWidthStr::width(s)).unwrap_or(u16::MAX)
}

/// Truncate a string with an ellipsis, using Unicode display width.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut out: String = s
        .chars()
        .take_while(|ch| {
            let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
            if width + w > budget {
                return false;
            }
            width += w;
            true
        })
        .collect();
    if max_width > 0 {
        out.push('…');
    }
    out
}

// ============================================================================
// Minimum Size Check
// ============================================================================

/// Check if terminal meets minimum size requirements.
pub fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Render a "terminal too small" message.
pub fn render_size_warning(frame: &mut Frame, area: Rect, required: (u16, u16)) {
    let scheme = colors();
    let lines = vec![
        Line::styled("Термінал замалий", Style::default().fg(scheme.warning).bold()),
        Line::from(""),
        Line::from(vec![
            Span::raw("Зараз: "),
            Span::styled(
                format!("{}x{}", area.width, area.height),
                Style::default().fg(scheme.text),
            ),
        ]),
        Line::from(vec![
            Span::raw("Потрібно: "),
            Span::styled(
                format!("{}x{}", required.0, required.1),
                Style::default().fg(scheme.accent),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.warning)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_clips() {
        let area = Rect::new(10, 5, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(15, 8, 10, 4));
        assert_eq!(centered_rect(50, 50, area), area);
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Florence", 20), "Florence");
        assert_eq!(truncate_str("Kingdom Hearts III", 8), "Kingdom…");
        assert_eq!(truncate_str("СОЛОВ'ЇНА", 4), "СОЛ…");
        assert_eq!(truncate_str("abc", 0), "");
    }

    #[test]
    fn test_terminal_size_check() {
        assert!(check_terminal_size(MIN_WIDTH, MIN_HEIGHT).is_ok());
        assert_eq!(
            check_terminal_size(MIN_WIDTH - 1, MIN_HEIGHT),
            Err((MIN_WIDTH, MIN_HEIGHT))
        );
    }
}
