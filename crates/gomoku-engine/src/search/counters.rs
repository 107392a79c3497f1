//! Progress statistics.

use std::sync::atomic::{AtomicU64, Ordering};

/// Advisory search statistics.
///
/// Updated with relaxed atomics so another thread can poll them for progress
/// display. Values read together carry no consistency guarantee.
#[derive(Debug, Default)]
pub struct Counters {
    all_candidates: AtomicU64,
    finished_candidates: AtomicU64,
    evaluated_leaves: AtomicU64,
}

/// A point-in-time copy of [`Counters`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterSnapshot {
    /// Root candidates of the current search.
    pub all_candidates: u64,
    /// Root candidates evaluated so far, summed over depths.
    pub finished_candidates: u64,
    /// Leaves scored by the heuristic.
    pub evaluated_leaves: u64,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&self) {
        self.all_candidates.store(0, Ordering::Relaxed);
        self.finished_candidates.store(0, Ordering::Relaxed);
        self.evaluated_leaves.store(0, Ordering::Relaxed);
    }

    pub(crate) fn set_all_candidates(&self, count: usize) {
        self.all_candidates.store(count as u64, Ordering::Relaxed);
    }

    pub(crate) fn finish_candidate(&self) {
        self.finished_candidates.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn count_leaf(&self) {
        self.evaluated_leaves.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            all_candidates: self.all_candidates.load(Ordering::Relaxed),
            finished_candidates: self.finished_candidates.load(Ordering::Relaxed),
            evaluated_leaves: self.evaluated_leaves.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::{CounterSnapshot, Counters};

    #[test]
    fn increments_and_reset() {
        let counters = Counters::new();
        counters.set_all_candidates(5);
        counters.finish_candidate();
        counters.count_leaf();
        counters.count_leaf();
        assert_eq!(
            counters.snapshot(),
            CounterSnapshot {
                all_candidates: 5,
                finished_candidates: 1,
                evaluated_leaves: 2,
            }
        );
        counters.reset();
        assert_eq!(counters.snapshot(), CounterSnapshot::default());
    }

    #[test]
    fn readable_from_another_thread() {
        let counters = Arc::new(Counters::new());
        for _ in 0..10 {
            counters.count_leaf();
        }
        let reader = Arc::clone(&counters);
        let seen = thread::spawn(move || reader.snapshot().evaluated_leaves)
            .join()
            .unwrap();
        assert_eq!(seen, 10);
    }
}
