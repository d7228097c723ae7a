//! Single-slot cancellable dwell timer.
//!
//! The timer holds at most one pending deadline. Every call to
//! [`DwellTimer::schedule`] replaces the pending slot and hands out a new
//! [`TimerHandle`]; firing a handle that is no longer the pending one does
//! nothing, so a tick computed before a manual navigation can never advance
//! the carousel afterwards.

use std::time::{Duration, Instant};

/// Shortest interval the timer accepts.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Identifies one scheduling of a [`DwellTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    generation: u64,
}

impl TimerHandle {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    handle: TimerHandle,
    started: Instant,
}

/// A cancellable timer measuring one dwell interval at a time.
#[derive(Debug, Clone)]
pub struct DwellTimer {
    interval: Duration,
    slot: Option<Scheduled>,
    generation: u64,
}

impl DwellTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            slot: None,
            generation: 0,
        }
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the interval length. A pending interval keeps its start time.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.max(MIN_INTERVAL);
    }

    /// Start a fresh interval at `now`, cancelling any pending one.
    pub fn schedule(&mut self, now: Instant) -> TimerHandle {
        self.generation += 1;
        let handle = TimerHandle {
            generation: self.generation,
        };
        self.slot = Some(Scheduled {
            handle,
            started: now,
        });
        handle
    }

    /// Cancel the pending interval, returning its handle.
    pub fn cancel(&mut self) -> Option<TimerHandle> {
        self.slot.take().map(|s| s.handle)
    }

    /// Handle of the pending interval, if any.
    #[must_use]
    pub fn pending(&self) -> Option<TimerHandle> {
        self.slot.map(|s| s.handle)
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.slot.is_some()
    }

    /// Elapsed fraction of the pending interval, in `[0, 1]`.
    ///
    /// Returns `0.0` when nothing is scheduled.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f64 {
        self.slot.map_or(0.0, |s| {
            let elapsed = now.saturating_duration_since(s.started);
            (elapsed.as_secs_f64() / self.interval.as_secs_f64()).min(1.0)
        })
    }

    /// Time left until the pending interval completes.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.slot.map(|s| {
            let elapsed = now.saturating_duration_since(s.started);
            self.interval.saturating_sub(elapsed)
        })
    }

    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.remaining(now).is_some_and(|r| r.is_zero())
    }

    /// Consume the pending slot if `handle` is still current and due.
    ///
    /// Returns `false` for stale handles and for intervals that have not
    /// elapsed yet; the slot is left untouched in both cases.
    pub fn fire(&mut self, handle: TimerHandle, now: Instant) -> bool {
        match self.slot {
            Some(s) if s.handle == handle && self.is_due(now) => {
                self.slot = None;
                true
            }
            _ => false,
        }
    }
}
