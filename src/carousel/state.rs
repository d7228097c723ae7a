//! Index and direction bookkeeping for the carousel.

use super::CarouselError;
use std::num::NonZeroUsize;

/// Last navigation direction, used to pick the slide-in side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards lower indices (−1)
    Backward,
    /// Towards higher indices (+1)
    Forward,
}

impl Direction {
    /// Signed step, `-1` or `+1`.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

/// A position in the rendered window around the active item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Offset from the active item (`0` is the active one)
    pub offset: isize,
    /// Item index this slot shows
    pub index: usize,
}

impl Slot {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.offset == 0
    }
}

/// Current index and direction over a fixed, non-empty sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    len: NonZeroUsize,
    current: usize,
    direction: Option<Direction>,
}

impl CarouselState {
    /// Create the state for `len` items, starting at index 0.
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        let len = NonZeroUsize::new(len).ok_or(CarouselError::Empty)?;
        Ok(Self {
            len,
            current: 0,
            direction: None,
        })
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len.get()
    }

    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Direction of the last navigation, `None` before the first one.
    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Advance one position, wrapping to 0 after the last item.
    pub fn next(&mut self) -> usize {
        self.direction = Some(Direction::Forward);
        self.current = (self.current + 1) % self.len();
        self.current
    }

    /// Retreat one position, wrapping to the last item before 0.
    pub fn prev(&mut self) -> usize {
        self.direction = Some(Direction::Backward);
        self.current = (self.current + self.len() - 1) % self.len();
        self.current
    }

    /// Jump to `index`, normalized modulo the length.
    ///
    /// Direction is forward when the target lies after the current index and
    /// backward otherwise (including a jump to the current index).
    pub fn go_to(&mut self, index: usize) -> usize {
        let target = index % self.len();
        self.direction = Some(if target > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        });
        self.current = target;
        self.current
    }

    /// Index of the item `offset` positions away from the active one.
    #[must_use]
    pub fn index_at(&self, offset: isize) -> usize {
        let len = self.len() as isize;
        (self.current as isize + offset).rem_euclid(len) as usize
    }

    /// Slots to render: the active item and its neighbors when `wide`,
    /// otherwise only the active item.
    ///
    /// Neighbors are only included while they are distinct items, so a
    /// single-item carousel never shows the same item three times.
    #[must_use]
    pub fn visible_window(&self, wide: bool) -> Vec<Slot> {
        let offsets: &[isize] = match (wide, self.len()) {
            (false, _) | (true, 1) => &[0],
            (true, 2) => &[0, 1],
            (true, _) => &[-1, 0, 1],
        };
        offsets
            .iter()
            .map(|&offset| Slot {
                offset,
                index: self.index_at(offset),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_rejected() {
        assert_eq!(CarouselState::new(0), Err(CarouselError::Empty));
    }

    #[test]
    fn test_initial_state() {
        let state = CarouselState::new(3).unwrap();
        assert_eq!(state.current(), 0);
        assert_eq!(state.direction(), None);
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn test_walkthrough_five_items() {
        let mut state = CarouselState::new(5).unwrap();
        assert_eq!(state.next(), 1);
        assert_eq!(state.direction(), Some(Direction::Forward));
        assert_eq!(state.prev(), 0);
        assert_eq!(state.direction(), Some(Direction::Backward));
        assert_eq!(state.go_to(4), 4);
        assert_eq!(state.direction(), Some(Direction::Forward));
        assert_eq!(state.next(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut state = CarouselState::new(4).unwrap();
        assert_eq!(state.prev(), 3);
    }

    #[test]
    fn test_go_to_normalizes_out_of_range() {
        let mut state = CarouselState::new(4).unwrap();
        assert_eq!(state.go_to(6), 2);
    }

    #[test]
    fn test_go_to_backward_and_same_index() {
        let mut state = CarouselState::new(5).unwrap();
        state.go_to(3);
        assert_eq!(state.go_to(1), 1);
        assert_eq!(state.direction(), Some(Direction::Backward));
        assert_eq!(state.go_to(1), 1);
        assert_eq!(state.direction(), Some(Direction::Backward));
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut state = CarouselState::new(1).unwrap();
        assert_eq!(state.next(), 0);
        assert_eq!(state.prev(), 0);
    }

    #[test]
    fn test_index_at_wraps_both_ways() {
        let state = CarouselState::new(3).unwrap();
        assert_eq!(state.index_at(-1), 2);
        assert_eq!(state.index_at(1), 1);
        assert_eq!(state.index_at(-4), 2);
    }

    #[test]
    fn test_visible_window() {
        let mut state = CarouselState::new(5).unwrap();
        state.go_to(0);
        let window = state.visible_window(true);
        let indices: Vec<usize> = window.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![4, 0, 1]);
        assert!(window[1].is_active());

        let narrow = state.visible_window(false);
        assert_eq!(narrow, vec![Slot { offset: 0, index: 0 }]);
    }

    #[test]
    fn test_visible_window_small_sequences() {
        assert_eq!(CarouselState::new(1).unwrap().visible_window(true).len(), 1);
        let two = CarouselState::new(2).unwrap().visible_window(true);
        assert_eq!(
            two,
            vec![Slot { offset: 0, index: 0 }, Slot { offset: 1, index: 1 }]
        );
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Forward.sign(), 1);
        assert_eq!(Direction::Backward.sign(), -1);
    }
}
