// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-strategy run metrics and the comparison report.
//!
//! A [`StrategyRun`] records what one strategy produced and how long it
//! took; a [`ComparisonReport`] collects the runs for one item set so the
//! greedy heuristic can be compared against the exhaustive optimum.

use allocation_planner::Allocation;
use std::time::Duration;

/// Outcome of running a single strategy.
#[derive(Debug, Clone, serde::Serialize)]
pub struct StrategyRun {
    /// Strategy name as configured.
    pub strategy: String,
    /// Wall-clock time spent in the strategy.
    pub elapsed: Duration,
    /// The allocation, when the strategy succeeded.
    pub allocation: Option<Allocation>,
    /// The error message, when it failed.
    pub error: Option<String>,
}

impl StrategyRun {
    /// Records a successful run.
    pub fn succeeded(strategy: String, elapsed: Duration, allocation: Allocation) -> Self {
        Self {
            strategy,
            elapsed,
            allocation: Some(allocation),
            error: None,
        }
    }

    /// Records a failed run.
    pub fn failed(strategy: String, elapsed: Duration, error: String) -> Self {
        Self {
            strategy,
            elapsed,
            allocation: None,
            error: Some(error),
        }
    }

    /// Returns `true` if the strategy produced an allocation.
    pub fn is_success(&self) -> bool {
        self.allocation.is_some()
    }

    /// Number of groups (trips), when the strategy succeeded.
    pub fn num_groups(&self) -> Option<usize> {
        self.allocation.as_ref().map(Allocation::num_groups)
    }

    /// Elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Returns a one-line summary suitable for CLI output.
    pub fn summary(&self) -> String {
        match (&self.allocation, &self.error) {
            (Some(a), _) => format!(
                "{}: {} trips in {:.3}ms",
                self.strategy,
                a.num_groups(),
                self.elapsed_ms(),
            ),
            (None, Some(e)) => format!("{}: failed after {:.3}ms: {e}", self.strategy, self.elapsed_ms()),
            (None, None) => format!("{}: no result", self.strategy),
        }
    }
}

/// Results of running several strategies on the same items.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ComparisonReport {
    /// Name of the item set.
    pub items_name: String,
    /// Number of items allocated.
    pub num_items: usize,
    /// Capacity used for every run.
    pub capacity: u64,
    /// `⌈total weight / capacity⌉`.
    pub lower_bound: u64,
    /// One entry per strategy, in run order.
    pub runs: Vec<StrategyRun>,
}

impl ComparisonReport {
    /// Returns the run for a strategy name.
    pub fn run(&self, strategy: &str) -> Option<&StrategyRun> {
        self.runs.iter().find(|r| r.strategy == strategy)
    }

    /// The successful run with the fewest groups; ties go to the faster run,
    /// then to the earlier one.
    pub fn best(&self) -> Option<&StrategyRun> {
        self.runs
            .iter()
            .filter_map(|r| r.num_groups().map(|groups| (groups, r)))
            .reduce(|best, candidate| {
                let better = (candidate.0, candidate.1.elapsed) < (best.0, best.1.elapsed);
                if better {
                    candidate
                } else {
                    best
                }
            })
            .map(|(_, r)| r)
    }

    /// Number of runs that produced an allocation.
    pub fn num_succeeded(&self) -> usize {
        self.runs.iter().filter(|r| r.is_success()).count()
    }

    /// Returns a human-readable summary.
    pub fn summary(&self) -> String {
        let best = self
            .best()
            .map(|r| r.strategy.as_str())
            .unwrap_or("none");
        format!(
            "Comparison '{}': {} items, capacity {}, lower bound {} trips, \
             {}/{} strategies succeeded, best: {}",
            self.items_name,
            self.num_items,
            self.capacity,
            self.lower_bound,
            self.num_succeeded(),
            self.runs.len(),
            best,
        )
    }
}
