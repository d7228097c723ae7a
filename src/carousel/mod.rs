//! Carousel widget state.
//!
//! [`Carousel`] cycles through a fixed, non-empty list of items. It supports
//! manual navigation (previous, next, jump), an optional autoplay that
//! advances after a fixed dwell interval, and keyboard / drag bindings via
//! [`input`]. Rendering is left to the caller: the carousel only exposes
//! the current index, the last navigation direction and the autoplay
//! progress.
//!
//! Time is passed in explicitly (`*_at(now)` methods) so the autoplay
//! behavior is deterministic; the plain methods use [`Instant::now`].
//!
//! ```
//! use solovina::carousel::{Carousel, Direction};
//!
//! let mut carousel = Carousel::new(vec!["a", "b", "c", "d", "e"]).unwrap();
//! assert_eq!(carousel.next(), 1);
//! assert_eq!(carousel.direction(), Some(Direction::Forward));
//! assert_eq!(carousel.go_to(4), 4);
//! assert_eq!(carousel.next(), 0);
//! ```

pub mod input;
mod state;
mod timer;

pub use input::{NavCommand, Release, SwipeTracker, command_for_key};
pub use state::{CarouselState, Direction, Slot};
pub use timer::{DwellTimer, TimerHandle};

use std::time::{Duration, Instant};

/// Dwell interval used when none is configured.
pub const DEFAULT_DWELL: Duration = Duration::from_secs(5);

/// Errors raised when constructing a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CarouselError {
    #[error("a carousel needs at least one item")]
    Empty,
}

/// Carousel over an ordered, immutable list of items.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    state: CarouselState,
    timer: DwellTimer,
    autoplay: bool,
}

impl<T> Carousel<T> {
    /// Create a carousel positioned on the first item, autoplay off.
    pub fn new(items: Vec<T>) -> Result<Self, CarouselError> {
        let state = CarouselState::new(items.len())?;
        Ok(Self {
            items,
            state,
            timer: DwellTimer::new(DEFAULT_DWELL),
            autoplay: false,
        })
    }

    /// Replace the dwell interval.
    #[must_use]
    pub fn with_dwell(mut self, dwell: Duration) -> Self {
        self.timer.set_interval(dwell);
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Always `false`: construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn current(&self) -> usize {
        self.state.current()
    }

    pub fn current_item(&self) -> &T {
        &self.items[self.state.current()]
    }

    pub fn direction(&self) -> Option<Direction> {
        self.state.direction()
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn dwell(&self) -> Duration {
        self.timer.interval()
    }

    /// See [`CarouselState::visible_window`].
    pub fn visible_window(&self, wide: bool) -> Vec<Slot> {
        self.state.visible_window(wide)
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn next(&mut self) -> usize {
        self.next_at(Instant::now())
    }

    pub fn prev(&mut self) -> usize {
        self.prev_at(Instant::now())
    }

    pub fn go_to(&mut self, index: usize) -> usize {
        self.go_to_at(index, Instant::now())
    }

    /// Advance one item and restart the dwell interval at `now`.
    pub fn next_at(&mut self, now: Instant) -> usize {
        let index = self.state.next();
        self.restart_timer(now);
        tracing::debug!(index, "carousel next");
        index
    }

    /// Retreat one item and restart the dwell interval at `now`.
    pub fn prev_at(&mut self, now: Instant) -> usize {
        let index = self.state.prev();
        self.restart_timer(now);
        tracing::debug!(index, "carousel prev");
        index
    }

    /// Jump to `index` and restart the dwell interval at `now`.
    pub fn go_to_at(&mut self, index: usize, now: Instant) -> usize {
        let index = self.state.go_to(index);
        self.restart_timer(now);
        tracing::debug!(index, "carousel go_to");
        index
    }

    /// Apply a navigation command, returning the new index.
    pub fn apply(&mut self, command: NavCommand, now: Instant) -> usize {
        match command {
            NavCommand::Prev => self.prev_at(now),
            NavCommand::Next => self.next_at(now),
            NavCommand::GoTo(index) => self.go_to_at(index, now),
        }
    }

    // ------------------------------------------------------------------
    // Autoplay
    // ------------------------------------------------------------------

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay
    }

    /// Turn autoplay on or off. Enabling starts a fresh interval at `now`.
    pub fn set_autoplay(&mut self, enabled: bool, now: Instant) {
        self.autoplay = enabled;
        if enabled {
            self.timer.schedule(now);
        } else {
            self.timer.cancel();
        }
        tracing::debug!(enabled, "carousel autoplay");
    }

    /// Flip autoplay, returning the new setting.
    pub fn toggle_autoplay(&mut self, now: Instant) -> bool {
        self.set_autoplay(!self.autoplay, now);
        self.autoplay
    }

    /// Elapsed fraction of the current dwell interval, `0.0` when autoplay
    /// is off.
    pub fn progress_at(&self, now: Instant) -> f64 {
        if self.autoplay {
            self.timer.progress(now)
        } else {
            0.0
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress_at(Instant::now())
    }

    /// Handle of the pending autoplay interval.
    pub fn pending_timer(&self) -> Option<TimerHandle> {
        self.timer.pending()
    }

    /// Drive autoplay. Advances and returns the new index when the dwell
    /// interval has elapsed; the next interval starts at `now`.
    ///
    /// At most one item is advanced per call, however late the tick is.
    pub fn tick_at(&mut self, now: Instant) -> Option<usize> {
        if !self.autoplay {
            return None;
        }
        let handle = self.timer.pending()?;
        if !self.timer.fire(handle, now) {
            return None;
        }
        let index = self.state.next();
        self.timer.schedule(now);
        tracing::debug!(index, "carousel autoplay advance");
        Some(index)
    }

    pub fn tick(&mut self) -> Option<usize> {
        self.tick_at(Instant::now())
    }

    fn restart_timer(&mut self, now: Instant) {
        if self.autoplay {
            self.timer.schedule(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(n: usize) -> Carousel<usize> {
        Carousel::new((0..n).collect()).unwrap()
    }

    #[test]
    fn test_empty_items_rejected() {
        let result = Carousel::<u8>::new(Vec::new());
        assert_eq!(result.unwrap_err(), CarouselError::Empty);
    }

    #[test]
    fn test_current_item_follows_index() {
        let mut c = Carousel::new(vec!["persona5", "kh2", "kh3"]).unwrap();
        assert_eq!(*c.current_item(), "persona5");
        c.prev();
        assert_eq!(*c.current_item(), "kh3");
    }

    #[test]
    fn test_autoplay_advances_after_dwell() {
        let t0 = Instant::now();
        let mut c = carousel(3).with_dwell(Duration::from_secs(5));
        c.set_autoplay(true, t0);

        assert_eq!(c.tick_at(t0 + Duration::from_secs(4)), None);
        assert_eq!(c.tick_at(t0 + Duration::from_secs(5)), Some(1));
        assert_eq!(c.direction(), Some(Direction::Forward));
        assert_eq!(c.progress_at(t0 + Duration::from_secs(5)), 0.0);
    }

    #[test]
    fn test_manual_navigation_restarts_interval() {
        let t0 = Instant::now();
        let mut c = carousel(4);
        c.set_autoplay(true, t0);
        let before = c.pending_timer();

        let t3 = t0 + Duration::from_secs(3);
        c.next_at(t3);
        assert_ne!(c.pending_timer(), before);
        assert_eq!(c.progress_at(t3), 0.0);

        // the original deadline (t0 + 5s) no longer fires
        assert_eq!(c.tick_at(t0 + Duration::from_secs(6)), None);
        assert_eq!(c.current(), 1);
        assert_eq!(c.tick_at(t3 + Duration::from_secs(5)), Some(2));
    }

    #[test]
    fn test_late_tick_advances_once() {
        let t0 = Instant::now();
        let mut c = carousel(5);
        c.set_autoplay(true, t0);
        assert_eq!(c.tick_at(t0 + Duration::from_secs(30)), Some(1));
        assert_eq!(c.tick_at(t0 + Duration::from_secs(30)), None);
    }

    #[test]
    fn test_autoplay_off_never_advances() {
        let t0 = Instant::now();
        let mut c = carousel(3);
        assert_eq!(c.tick_at(t0 + Duration::from_secs(60)), None);
        assert_eq!(c.progress_at(t0 + Duration::from_secs(2)), 0.0);
        c.next_at(t0);
        assert_eq!(c.pending_timer(), None);
    }

    #[test]
    fn test_toggle_autoplay() {
        let t0 = Instant::now();
        let mut c = carousel(2);
        assert!(c.toggle_autoplay(t0));
        assert!(c.pending_timer().is_some());
        assert!(!c.toggle_autoplay(t0));
        assert!(c.pending_timer().is_none());
    }

    #[test]
    fn test_apply_commands() {
        let t0 = Instant::now();
        let mut c = carousel(5);
        assert_eq!(c.apply(NavCommand::Next, t0), 1);
        assert_eq!(c.apply(NavCommand::GoTo(3), t0), 3);
        assert_eq!(c.apply(NavCommand::Prev, t0), 2);
    }

    #[test]
    fn test_progress_increases_within_interval() {
        let t0 = Instant::now();
        let mut c = carousel(2);
        c.set_autoplay(true, t0);
        let mut last = -1.0;
        for ms in (0..5000).step_by(250) {
            let p = c.progress_at(t0 + Duration::from_millis(ms));
            assert!(p > last);
            last = p;
        }
        assert!(last < 1.0);
    }
}
