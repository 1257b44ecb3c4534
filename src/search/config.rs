//! Search configuration

use std::time::Duration;

use crate::error::{GomokuError, Result};

/// Options recognized by the search engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Search depth in plies, at least 1
    pub depth_limit: i8,
    /// Prune with alpha-beta; the chosen move is the same either way
    pub use_alpha_beta: bool,
    /// Candidate moves are empty cells within this Chebyshev distance of a
    /// stone. 0 scans every empty cell on the board.
    pub neighborhood_radius: u8,
    /// Wall-clock budget; enables iterative deepening
    pub time_limit: Option<Duration>,
    /// Node budget; enables iterative deepening
    pub node_budget: Option<u64>,
    /// Split root moves across the rayon thread pool
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_limit: 3,
            use_alpha_beta: true,
            neighborhood_radius: 2,
            time_limit: None,
            node_budget: None,
            parallel: false,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(depth_limit: i8) -> Self {
        Self {
            depth_limit,
            ..Self::default()
        }
    }

    pub fn alpha_beta(mut self, enabled: bool) -> Self {
        self.use_alpha_beta = enabled;
        self
    }

    pub fn radius(mut self, radius: u8) -> Self {
        self.neighborhood_radius = radius;
        self
    }

    pub fn time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn node_budget(mut self, nodes: u64) -> Self {
        self.node_budget = Some(nodes);
        self
    }

    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// True when a budget may cut the search short
    #[inline]
    pub fn is_budgeted(&self) -> bool {
        self.time_limit.is_some() || self.node_budget.is_some()
    }

    pub fn validate(&self) -> Result<()> {
        if self.depth_limit < 1 {
            return Err(GomokuError::InvalidDepth(self.depth_limit));
        }
        Ok(())
    }
}
