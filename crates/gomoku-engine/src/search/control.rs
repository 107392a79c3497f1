//! Search control: wall-clock budget.

use std::time::{Duration, Instant};

/// Slack reserved out of every budget for the granularity of the
/// per-node time check.
pub const SAFETY_MARGIN: Duration = Duration::from_millis(1000);

/// Decides when a search must stop.
///
/// The clock starts at construction. The hard limit is the configured budget
/// minus [`SAFETY_MARGIN`]; iterative deepening stops starting new depths
/// once half of it is spent.
#[derive(Debug, Clone)]
pub struct SearchControl {
    start: Instant,
    hard_limit: Duration,
}

impl SearchControl {
    /// Start the clock for a search with the given total budget.
    pub fn new(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            hard_limit: budget.saturating_sub(SAFETY_MARGIN),
        }
    }

    /// Check whether the search must abort immediately.
    ///
    /// Called at the entry of every recursive frame.
    #[inline]
    pub fn should_stop(&self) -> bool {
        self.elapsed() > self.hard_limit
    }

    /// Check whether iterative deepening should stop after a completed depth.
    pub fn should_stop_iterating(&self) -> bool {
        self.elapsed() > self.hard_limit / 2
    }

    /// Elapsed time since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// The margin-adjusted budget.
    pub fn hard_limit(&self) -> Duration {
        self.hard_limit
    }
}
