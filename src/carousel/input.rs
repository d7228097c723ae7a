//! Keyboard and drag bindings for the carousel.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

/// Default horizontal travel a drag must exceed to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: u16 = 50;

/// A navigation request produced by user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Prev,
    Next,
    GoTo(usize),
}

/// Map a key to a navigation command.
///
/// Left and right arrows (or `h` / `l`) move to the previous and next item.
#[must_use]
pub const fn command_for_key(code: KeyCode) -> Option<NavCommand> {
    match code {
        KeyCode::Left | KeyCode::Char('h') => Some(NavCommand::Prev),
        KeyCode::Right | KeyCode::Char('l') => Some(NavCommand::Next),
        _ => None,
    }
}

/// Result of releasing the pointer after a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// The drag went past the threshold
    Swipe(NavCommand),
    /// The pointer came up without travelling past the threshold
    Tap { column: u16, row: u16 },
}

/// Turns press / drag / release sequences into swipes.
///
/// Dragging to the left past the threshold requests the next item, dragging
/// to the right requests the previous one.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: u16,
    start: Option<u16>,
    last: Option<u16>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold: threshold.max(1),
            start: None,
            last: None,
        }
    }

    #[must_use]
    pub const fn threshold(&self) -> u16 {
        self.threshold
    }

    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    pub fn press(&mut self, x: u16) {
        self.start = Some(x);
        self.last = Some(x);
    }

    pub fn drag(&mut self, x: u16) {
        if self.start.is_none() {
            // drag without a prior press, e.g. the press landed before focus
            self.start = Some(x);
        }
        self.last = Some(x);
    }

    /// Finish the gesture at column `x`.
    ///
    /// Returns `None` when no press was being tracked.
    pub fn release(&mut self, x: u16, row: u16) -> Option<Release> {
        let start = self.start.take()?;
        self.last = None;
        let delta = i32::from(x) - i32::from(start);
        let threshold = i32::from(self.threshold);
        let release = if delta < -threshold {
            Release::Swipe(NavCommand::Next)
        } else if delta > threshold {
            Release::Swipe(NavCommand::Prev)
        } else {
            Release::Tap { column: x, row }
        };
        Some(release)
    }

    pub fn cancel(&mut self) {
        self.start = None;
        self.last = None;
    }

    /// Current horizontal travel of an ongoing drag.
    #[must_use]
    pub fn offset(&self) -> i32 {
        match (self.start, self.last) {
            (Some(start), Some(last)) => i32::from(last) - i32::from(start),
            _ => 0,
        }
    }

    /// Feed a raw mouse event; returns a release outcome on left-button up.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Release> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press(mouse.column);
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.drag(mouse.column);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => self.release(mouse.column, mouse.row),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row: 10,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(command_for_key(KeyCode::Left), Some(NavCommand::Prev));
        assert_eq!(command_for_key(KeyCode::Right), Some(NavCommand::Next));
        assert_eq!(command_for_key(KeyCode::Up), None);
    }

    #[test]
    fn test_vim_keys_pair_up() {
        assert_eq!(command_for_key(KeyCode::Char('h')), Some(NavCommand::Prev));
        assert_eq!(command_for_key(KeyCode::Char('l')), Some(NavCommand::Next));
        assert_eq!(command_for_key(KeyCode::Char('f')), None);
    }

    #[test]
    fn test_swipe_left_is_next() {
        let mut tracker = SwipeTracker::default();
        tracker.press(100);
        tracker.drag(70);
        assert_eq!(tracker.offset(), -30);
        assert_eq!(
            tracker.release(40, 0),
            Some(Release::Swipe(NavCommand::Next))
        );
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_swipe_right_is_prev() {
        let mut tracker = SwipeTracker::new(5);
        tracker.press(10);
        assert_eq!(
            tracker.release(16, 0),
            Some(Release::Swipe(NavCommand::Prev))
        );
    }

    #[test]
    fn test_threshold_must_be_exceeded() {
        let mut tracker = SwipeTracker::new(50);
        tracker.press(100);
        assert_eq!(
            tracker.release(50, 3),
            Some(Release::Tap { column: 50, row: 3 })
        );
    }

    #[test]
    fn test_release_without_press() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.release(10, 0), None);
    }

    #[test]
    fn test_cancel_discards_gesture() {
        let mut tracker = SwipeTracker::new(2);
        tracker.press(10);
        tracker.cancel();
        assert_eq!(tracker.release(0, 0), None);
    }

    #[test]
    fn test_handle_mouse_sequence() {
        let mut tracker = SwipeTracker::new(4);
        assert_eq!(
            tracker.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 30)),
            None
        );
        assert_eq!(
            tracker.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 24)),
            None
        );
        assert_eq!(
            tracker.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 20)),
            Some(Release::Swipe(NavCommand::Next))
        );
    }
}
