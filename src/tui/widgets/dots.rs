//! Position indicator under the carousel.

use crate::tui::theme::colors;
use ratatui::{prelude::*, widgets::Widget};

const DOT: &str = "●";
const ACTIVE_DOT: &str = "━━━";
const GAP: u16 = 1;

/// One dot per item; the active one is drawn wide in its own color.
pub struct DotIndicator {
    count: usize,
    active: usize,
    active_color: Color,
    inactive_color: Color,
}

impl DotIndicator {
    pub fn new(count: usize, active: usize) -> Self {
        let scheme = colors();
        Self {
            count,
            active,
            active_color: scheme.primary,
            inactive_color: scheme.muted,
        }
    }

    #[must_use]
    pub fn active_color(mut self, color: Color) -> Self {
        self.active_color = color;
        self
    }

    fn dot_width(&self, index: usize) -> u16 {
        if index == self.active { 3 } else { 1 }
    }

    /// Cells covered by each dot when rendered into `area`, in item order.
    ///
    /// Dots that do not fit are omitted.
    pub fn positions(&self, area: Rect) -> Vec<Rect> {
        if area.height == 0 || self.count == 0 {
            return Vec::new();
        }
        let total: u16 = (0..self.count)
            .map(|i| self.dot_width(i))
            .fold(0u16, u16::saturating_add)
            .saturating_add(GAP.saturating_mul(u16::try_from(self.count - 1).unwrap_or(u16::MAX)));
        let mut x = area.x + area.width.saturating_sub(total) / 2;
        let right = area.right();
        let mut rects = Vec::with_capacity(self.count);
        for i in 0..self.count {
            let width = self.dot_width(i);
            if x.saturating_add(width) > right {
                break;
            }
            rects.push(Rect::new(x, area.y, width, 1));
            x = x.saturating_add(width + GAP);
        }
        rects
    }
}

impl Widget for DotIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, rect) in self.positions(area).into_iter().enumerate() {
            let (symbol, style) = if i == self.active {
                (ACTIVE_DOT, Style::default().fg(self.active_color).bold())
            } else {
                (DOT, Style::default().fg(self.inactive_color))
            };
            buf.set_string(rect.x, rect.y, symbol, style);
        }
    }
}
