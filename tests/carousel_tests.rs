//! Integration tests for the carousel state machine.

use solovina::carousel::{Carousel, CarouselError, Direction, NavCommand, Release, SwipeTracker};
use std::time::{Duration, Instant};

fn five() -> Carousel<&'static str> {
    Carousel::new(vec!["a", "b", "c", "d", "e"]).unwrap()
}

#[test]
fn test_walkthrough_of_five_items() {
    let mut c = five();
    assert_eq!(c.current(), 0);
    assert_eq!(c.direction(), None);

    assert_eq!(c.next(), 1);
    assert_eq!(c.direction(), Some(Direction::Forward));
    assert_eq!(c.prev(), 0);
    assert_eq!(c.direction(), Some(Direction::Backward));
    assert_eq!(c.go_to(4), 4);
    assert_eq!(c.direction(), Some(Direction::Forward));
    assert_eq!(c.next(), 0);
    assert_eq!(c.direction(), Some(Direction::Forward));
    assert_eq!(*c.current_item(), "a");
}

#[test]
fn test_empty_list_is_rejected() {
    let err = Carousel::<u8>::new(Vec::new()).unwrap_err();
    assert_eq!(err, CarouselError::Empty);
}

#[test]
fn test_single_item_wraps_onto_itself() {
    let mut c = Carousel::new(vec!["only"]).unwrap();
    assert_eq!(c.next(), 0);
    assert_eq!(c.prev(), 0);
    assert_eq!(c.go_to(7), 0);
    assert_eq!(c.visible_window(true).len(), 1);
}

#[test]
fn test_autoplay_cycle() {
    let start = Instant::now();
    let dwell = Duration::from_secs(5);
    let mut c = five().with_dwell(dwell);
    c.set_autoplay(true, start);

    assert_eq!(c.progress_at(start), 0.0);
    let mid = c.progress_at(start + Duration::from_millis(2500));
    assert!((mid - 0.5).abs() < 1e-9);
    assert_eq!(c.tick_at(start + Duration::from_millis(4999)), None);

    let fired = start + dwell;
    assert_eq!(c.tick_at(fired), Some(1));
    assert_eq!(c.direction(), Some(Direction::Forward));
    assert_eq!(c.progress_at(fired), 0.0);

    // a very late tick still advances only once
    assert_eq!(c.tick_at(fired + dwell * 10), Some(2));
}

#[test]
fn test_manual_navigation_restarts_interval() {
    let start = Instant::now();
    let mut c = five().with_dwell(Duration::from_secs(5));
    c.set_autoplay(true, start);
    let stale = c.pending_timer().unwrap();

    let clicked = start + Duration::from_secs(4);
    c.apply(NavCommand::GoTo(3), clicked);
    let fresh = c.pending_timer().unwrap();
    assert_ne!(stale, fresh);
    assert_eq!(c.progress_at(clicked), 0.0);

    // the original deadline passes without an advance
    assert_eq!(c.tick_at(start + Duration::from_secs(5)), None);
    assert_eq!(c.tick_at(clicked + Duration::from_secs(5)), Some(4));
}

#[test]
fn test_paused_carousel_never_advances() {
    let start = Instant::now();
    let mut c = five();
    c.set_autoplay(true, start);
    assert!(!c.toggle_autoplay(start));
    assert_eq!(c.tick_at(start + Duration::from_secs(60)), None);
    assert_eq!(c.progress_at(start + Duration::from_secs(3)), 0.0);
    assert!(c.pending_timer().is_none());
}

#[test]
fn test_swipe_gestures_map_to_navigation() {
    let mut tracker = SwipeTracker::new(50);
    tracker.press(200);
    tracker.drag(120);
    assert_eq!(tracker.offset(), -80);
    assert_eq!(tracker.release(120, 3), Some(Release::Swipe(NavCommand::Next)));

    tracker.press(100);
    assert_eq!(tracker.release(160, 3), Some(Release::Swipe(NavCommand::Prev)));

    tracker.press(100);
    assert_eq!(
        tracker.release(150, 3),
        Some(Release::Tap { column: 150, row: 3 })
    );

    assert_eq!(tracker.release(10, 0), None);
}
