//! Timing of the intro reveal and the statistics count-up.
//!
//! All functions take the time elapsed since the animation started, so the
//! views stay pure functions of `(state, now)`.

use std::time::Duration;

/// Delay before the first title letter appears.
pub const LETTER_DELAY: Duration = Duration::from_millis(300);
/// Gap between consecutive letters.
pub const LETTER_STAGGER: Duration = Duration::from_millis(50);
/// Time a letter spends faded in before it is drawn at full weight.
pub const LETTER_SETTLE: Duration = Duration::from_millis(150);
pub const SUBTITLE_DELAY: Duration = Duration::from_millis(1200);
pub const CTA_DELAY: Duration = Duration::from_millis(1600);
/// Length of the counter count-up.
pub const COUNT_UP: Duration = Duration::from_millis(1500);

/// Visibility of one title letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterPhase {
    Hidden,
    Appearing,
    Shown,
}

/// Phase of the letter at position `index` of the whole title.
///
/// Letters are numbered across both title lines, so the second line picks up
/// where the first one ends.
pub fn letter_phase(elapsed: Duration, index: usize) -> LetterPhase {
    let steps = u32::try_from(index).unwrap_or(u32::MAX);
    let delay = LETTER_DELAY.saturating_add(LETTER_STAGGER.saturating_mul(steps));
    match elapsed.checked_sub(delay) {
        None => LetterPhase::Hidden,
        Some(age) if age < LETTER_SETTLE => LetterPhase::Appearing,
        Some(_) => LetterPhase::Shown,
    }
}

/// Whether an element with the given delay is visible.
pub fn is_visible(elapsed: Duration, delay: Duration) -> bool {
    elapsed >= delay
}

/// Cubic ease-out on `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Fraction of an animation of length `duration` completed after `elapsed`.
pub fn fraction(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// Counter value shown after `elapsed` of a count-up towards `value`.
pub fn count_up(value: u64, elapsed: Duration) -> u64 {
    let eased = ease_out_cubic(fraction(elapsed, COUNT_UP));
    (eased * value as f64).round() as u64
}

/// Format with spaces between thousands groups, e.g. `47 353`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
