//! Wall-clock budget and search limits for playing agents.
//!
//! A deadline is armed once per top-level move request; the search polls it
//! at bounded intervals (once before descending into each child) and unwinds
//! cleanly when it fires. Expiry is the expected termination signal for an
//! iteration, never an error.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Limits that control when an agent should stop searching.
///
/// Agents respect both the depth and the time limit, stopping at whichever
/// comes first. The time limit takes precedence: when it fires, the agent
/// must return the best action found so far.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies
    pub depth: u8,
    /// Wall-clock budget for this move (None = let the agent decide)
    pub move_time: Option<Duration>,
    /// Clock used to check whether search should stop
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Limits with only a depth constraint.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }

    /// Limits with both depth and time constraints.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Limits with only a time constraint.
    pub fn time(move_time: Duration) -> Self {
        Self {
            depth: u8::MAX,
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Check if search should stop due to the time limit.
    #[inline]
    pub fn should_stop(&self) -> bool {
        self.time_control.is_stopped()
    }

    /// Start the clock. Call this when search begins.
    pub fn start(&self) {
        self.time_control.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Deadline tracker shared by every level of one search call.
///
/// Cheaply cloneable; `is_stopped()` is a single atomic load, so callers can
/// consult it freely. The actual clock read happens in `check_time()`, which
/// the search invokes once per child expansion and never inside the
/// evaluation function. Once the deadline has been observed the stop flag
/// stays latched for the rest of the call.
#[derive(Debug, Clone)]
pub struct TimeControl {
    /// Shared stop flag
    stopped: Arc<AtomicBool>,
    /// Instant the search started
    start_time: Arc<RwLock<Option<Instant>>>,
    /// Budget for this search (None = infinite)
    time_limit: Option<Duration>,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(RwLock::new(None)),
            time_limit,
        }
    }

    /// Start the clock. Should be called when search begins.
    pub fn start(&self) {
        *self.start_time.write().unwrap() = Some(Instant::now());
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Force stop the search immediately.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    /// Check if search should stop, without reading the clock.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Read the clock and latch the stop flag if the deadline has passed.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }
        if let Some(limit) = self.time_limit {
            if let Some(start) = *self.start_time.read().unwrap() {
                if start.elapsed() >= limit {
                    self.stop();
                    return true;
                }
            }
        }
        false
    }

    /// Time since the search started.
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .read()
            .unwrap()
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Remaining budget (None if no limit or not started).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        let elapsed = self.elapsed();
        if elapsed >= limit {
            Some(Duration::ZERO)
        } else {
            Some(limit - elapsed)
        }
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
