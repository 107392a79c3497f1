//! Search configuration.

use std::time::Duration;

/// Shallowest iterative-deepening depth; every search starts here.
pub const MIN_SEARCH_DEPTH: u8 = 4;

/// Knobs for one search call. Immutable while a search runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum ply for iterative deepening (even, at least 4).
    pub search_depth: u8,
    /// Maximum forced-win lookahead for the root pre-scan.
    pub combo_depth: u8,
    /// Wall-clock budget, including the safety margin.
    pub time_budget: Duration,
    /// Maximum candidates kept for quiet positions.
    pub branch_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_depth: 6,
            combo_depth: 9,
            time_budget: Duration::from_millis(10_000),
            branch_limit: 12,
        }
    }
}

impl SearchConfig {
    pub fn with_search_depth(mut self, depth: u8) -> Self {
        self.search_depth = depth;
        self
    }

    pub fn with_combo_depth(mut self, depth: u8) -> Self {
        self.combo_depth = depth;
        self
    }

    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    pub fn with_branch_limit(mut self, limit: usize) -> Self {
        self.branch_limit = limit;
        self
    }

    /// Check the invariants the search relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth < MIN_SEARCH_DEPTH || self.search_depth % 2 != 0 {
            return Err(ConfigError::InvalidSearchDepth {
                depth: self.search_depth,
            });
        }
        if self.combo_depth == 0 {
            return Err(ConfigError::ZeroComboDepth);
        }
        if self.time_budget.is_zero() {
            return Err(ConfigError::ZeroTimeBudget);
        }
        if self.branch_limit == 0 {
            return Err(ConfigError::ZeroBranchLimit);
        }
        Ok(())
    }
}

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("search depth must be even and at least 4, got {depth}")]
    InvalidSearchDepth { depth: u8 },
    #[error("combo depth must be positive")]
    ZeroComboDepth,
    #[error("time budget must be positive")]
    ZeroTimeBudget,
    #[error("branch limit must be positive")]
    ZeroBranchLimit,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{ConfigError, SearchConfig};

    #[test]
    fn default_is_valid() {
        SearchConfig::default().validate().unwrap();
    }

    #[test]
    fn odd_depth_rejected() {
        let config = SearchConfig::default().with_search_depth(7);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidSearchDepth { depth: 7 })
        );
    }

    #[test]
    fn shallow_depth_rejected() {
        let config = SearchConfig::default().with_search_depth(2);
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_values_rejected() {
        let base = SearchConfig::default();
        assert_eq!(
            base.with_combo_depth(0).validate(),
            Err(ConfigError::ZeroComboDepth)
        );
        assert_eq!(
            base.with_time_budget(Duration::ZERO).validate(),
            Err(ConfigError::ZeroTimeBudget)
        );
        assert_eq!(
            base.with_branch_limit(0).validate(),
            Err(ConfigError::ZeroBranchLimit)
        );
    }

    #[test]
    fn error_display() {
        let err = ConfigError::InvalidSearchDepth { depth: 3 };
        assert_eq!(err.to_string(), "search depth must be even and at least 4, got 3");
    }
}
