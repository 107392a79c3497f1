//! Search values: heuristic scores plus proven-result sentinels.

use std::fmt;

/// A search value from the maximizing side's point of view.
///
/// Variant order gives the total order `Loss < Heuristic(_) < Win`, so no
/// heuristic magnitude can collide with a proven result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    /// Proven loss for the maximizing side.
    Loss,
    /// Heuristic evaluation; higher favors the maximizing side.
    Heuristic(i32),
    /// Proven win for the maximizing side.
    Win,
}

impl Score {
    /// Neutral heuristic score, used for moves chosen without searching.
    pub const ZERO: Score = Score::Heuristic(0);
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Loss => write!(f, "loss"),
            Score::Heuristic(value) => write!(f, "{value}"),
            Score::Win => write!(f, "win"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Score;

    #[test]
    fn sentinels_bound_every_heuristic() {
        for value in [i32::MIN, -1, 0, 1, i32::MAX] {
            assert!(Score::Loss < Score::Heuristic(value));
            assert!(Score::Heuristic(value) < Score::Win);
        }
    }

    #[test]
    fn heuristics_order_by_value() {
        assert!(Score::Heuristic(10) < Score::Heuristic(20));
        assert_eq!(Score::Heuristic(5).max(Score::Heuristic(-5)), Score::Heuristic(5));
    }

    #[test]
    fn display() {
        assert_eq!(Score::Win.to_string(), "win");
        assert_eq!(Score::Loss.to_string(), "loss");
        assert_eq!(Score::Heuristic(-40).to_string(), "-40");
    }
}
