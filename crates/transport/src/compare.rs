// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Running strategies and timing them.
//!
//! ```text
//! TransportConfig ──load_items──► ItemSet<Validated>
//!        │                              │
//!        └──create_strategies──► run_strategy (× n) ──► ComparisonReport
//! ```
//!
//! A failing strategy does not abort the comparison: its error is recorded
//! in the report next to the strategies that succeeded.

use crate::{ComparisonReport, StrategyRun, TransportConfig, TransportError};
use allocation_planner::{AllocationStrategy, Capacity};
use item_ir::{set::Validated, ItemSet};
use std::time::Instant;

/// Runs one strategy and records its outcome and wall-clock time.
pub fn run_strategy(
    strategy: &dyn AllocationStrategy,
    items: &ItemSet<Validated>,
    capacity: Capacity,
) -> StrategyRun {
    let start = Instant::now();
    let result = strategy.allocate(items, capacity);
    let elapsed = start.elapsed();

    match result {
        Ok(allocation) => {
            tracing::info!("{}", allocation.summary());
            StrategyRun::succeeded(strategy.name().to_string(), elapsed, allocation)
        }
        Err(e) => {
            tracing::warn!("strategy '{}' failed: {e}", strategy.name());
            StrategyRun::failed(strategy.name().to_string(), elapsed, e.to_string())
        }
    }
}

/// Runs every strategy on the same items and collects the results.
pub fn compare_strategies(
    items: &ItemSet<Validated>,
    capacity: Capacity,
    strategies: &[Box<dyn AllocationStrategy>],
) -> ComparisonReport {
    tracing::info!("{}", items.summary());

    let runs = strategies
        .iter()
        .map(|strategy| run_strategy(strategy.as_ref(), items, capacity))
        .collect();

    let report = ComparisonReport {
        items_name: items.name.clone(),
        num_items: items.len(),
        capacity: capacity.as_units(),
        lower_bound: capacity.min_groups(items.total_weight()),
        runs,
    };
    tracing::info!("{}", report.summary());
    report
}

/// Loads the configured items and compares the configured strategies.
pub fn compare_from_config(config: &TransportConfig) -> Result<ComparisonReport, TransportError> {
    let capacity = config.parse_capacity()?;
    let strategies = config.create_strategies()?;
    let items = config.load_items()?;
    Ok(compare_strategies(&items, capacity, &strategies))
}
