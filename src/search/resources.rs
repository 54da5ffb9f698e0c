//! Search budgets and the tracker that enforces them.
//!
//! Chain captures make the branching factor uneven, so a fixed depth alone does not bound the
//! work. Searches therefore also count visited nodes and may carry a wall-clock deadline. A
//! tripped budget surfaces as [`EngineError::LimitExceeded`]; iterative deepening turns that
//! into "keep the last completed depth".

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The deadline is only sampled every this many nodes.
const CLOCK_CHECK_INTERVAL: u64 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Per-invocation search budgets.
pub struct SearchLimits {
    /// Deepest iterative-deepening iteration, in plies.
    pub max_depth: u32,
    /// Nodes for the whole search, summed over every iterative-deepening depth. With `parallel`,
    /// each root subtree of a depth may spend what was left when that depth began, and the depth
    /// fails once the subtrees together overrun the budget.
    pub max_nodes: u64,
    /// Optional wall-clock budget for the whole search.
    pub time_budget_ms: Option<u64>,
    /// Search root moves on the rayon pool.
    pub parallel: bool,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_depth: 6,
            max_nodes: 5_000_000,
            time_budget_ms: None,
            parallel: false,
        }
    }
}

impl SearchLimits {
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_max_nodes(mut self, nodes: u64) -> Self {
        self.max_nodes = nodes;
        self
    }

    pub fn with_time_budget(mut self, budget: Option<Duration>) -> Self {
        self.time_budget_ms = budget.map(|d| d.as_millis() as u64);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[inline]
    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget_ms.map(Duration::from_millis)
    }

    /// A tracker for one search (or one root subtree) that began at `started`.
    pub fn tracker(&self, started: Instant) -> ResourceTracker {
        ResourceTracker::new(self.max_nodes, started, self.time_budget())
    }
}

#[derive(Debug, Clone)]
/// Counts nodes during a search and checks them against the budgets.
pub struct ResourceTracker {
    max_nodes: u64,
    started: Instant,
    budget: Option<Duration>,
    nodes: u64,
}

impl ResourceTracker {
    #[inline]
    pub fn new(max_nodes: u64, started: Instant, budget: Option<Duration>) -> Self {
        Self {
            max_nodes,
            started,
            budget,
            nodes: 0,
        }
    }

    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Count `delta` visited nodes at `stage`.
    #[inline]
    pub fn bump_nodes(&mut self, stage: &'static str, delta: u64) -> Result<(), EngineError> {
        let before = self.nodes;
        self.nodes = self.nodes.saturating_add(delta);

        if self.nodes > self.max_nodes {
            return Err(EngineError::LimitExceeded {
                stage,
                metric: "nodes",
                limit: self.max_nodes,
                observed: self.nodes,
            });
        }

        if let Some(budget) = self.budget {
            if before / CLOCK_CHECK_INTERVAL != self.nodes / CLOCK_CHECK_INTERVAL {
                self.check_clock(stage, budget)?;
            }
        }
        Ok(())
    }

    /// Fails once the wall-clock budget is spent; a no-op without a budget.
    pub fn check_time(&self, stage: &'static str) -> Result<(), EngineError> {
        match self.budget {
            Some(budget) => self.check_clock(stage, budget),
            None => Ok(()),
        }
    }

    fn check_clock(&self, stage: &'static str, budget: Duration) -> Result<(), EngineError> {
        let elapsed = self.started.elapsed();
        if elapsed < budget {
            return Ok(());
        }
        Err(EngineError::LimitExceeded {
            stage,
            metric: "time_ms",
            limit: budget.as_millis() as u64,
            observed: elapsed.as_millis() as u64,
        })
    }

    /// Nodes still available under the node budget.
    #[inline]
    pub fn remaining_nodes(&self) -> u64 {
        self.max_nodes.saturating_sub(self.nodes)
    }

    /// A tracker for one sub-search that may spend the nodes this one has left.
    pub fn child(&self) -> ResourceTracker {
        ResourceTracker::new(self.remaining_nodes(), self.started, self.budget)
    }

    /// Fold the node count of a finished sub-search into this tracker; fails if the combined count
    /// overruns the node budget.
    pub fn absorb(
        &mut self,
        stage: &'static str,
        other: &ResourceTracker,
    ) -> Result<(), EngineError> {
        self.nodes = self.nodes.saturating_add(other.nodes);
        if self.nodes > self.max_nodes {
            return Err(EngineError::LimitExceeded {
                stage,
                metric: "nodes",
                limit: self.max_nodes,
                observed: self.nodes,
            });
        }
        Ok(())
    }
}
