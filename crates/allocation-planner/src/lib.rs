// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # allocation-planner
//!
//! Splits a validated [`ItemSet`](item_ir::ItemSet) into groups whose total
//! weight stays within a [`Capacity`], using pluggable strategies.
//!
//! # Strategies
//!
//! | Strategy | Groups | Cost |
//! |---|---|---|
//! | [`GreedyAllocator`] | Heuristic, may use extra groups | O(n log n) |
//! | [`ExhaustiveAllocator`] | Minimal | O(Bell(n) · n) |
//! | [`AutoAllocator`] | Exhaustive for small inputs, greedy otherwise | Either |
//!
//! Both fail with [`PlannerError::ItemExceedsCapacity`] when a single item
//! is heavier than the capacity, and return an empty [`Allocation`] for an
//! empty item set.
//!
//! # Trait-Based Extensibility
//!
//! All strategies implement [`AllocationStrategy`]:
//!
//! ```ignore
//! struct OnePerGroup;
//! impl AllocationStrategy for OnePerGroup {
//!     fn name(&self) -> &str { "one-per-group" }
//!     fn allocate(&self, items: &ItemSet<Validated>, capacity: Capacity)
//!         -> Result<Allocation, PlannerError> { /* ... */ }
//! }
//! ```
//!
//! # Example
//! ```
//! use allocation_planner::{AllocationStrategy, Capacity, ExhaustiveAllocator, GreedyAllocator};
//! use item_ir::ItemSet;
//!
//! let herd = ItemSet::from_pairs("herd", [("A", 6), ("B", 5), ("C", 5), ("D", 4)])
//!     .validate()
//!     .unwrap();
//! let capacity = Capacity::new(10);
//!
//! let greedy = GreedyAllocator::new().allocate(&herd, capacity).unwrap();
//! let optimal = ExhaustiveAllocator::new().allocate(&herd, capacity).unwrap();
//! assert!(optimal.num_groups() <= greedy.num_groups());
//! println!("{}", optimal.summary());
//! ```

pub(crate) mod allocation;
mod capacity;
mod error;
pub mod strategy;

pub use allocation::{Allocation, ItemGroup};
pub use capacity::Capacity;
pub use error::PlannerError;
pub use strategy::exhaustive::ExhaustiveAllocator;
pub use strategy::greedy::GreedyAllocator;
pub use strategy::AllocationStrategy;

use item_ir::{set::Validated, ItemSet};

/// Largest item count [`auto_allocate`] searches exhaustively by default.
/// Bell(10) = 115 975 partitions.
pub const DEFAULT_MAX_EXHAUSTIVE_ITEMS: usize = 10;

/// Picks a strategy from the input size and runs it.
///
/// - Up to `max_exhaustive_items` items: [`ExhaustiveAllocator`], which is
///   still cheap at that size and gives the optimum.
/// - Otherwise: [`GreedyAllocator`].
pub fn auto_allocate(
    items: &ItemSet<Validated>,
    capacity: Capacity,
    max_exhaustive_items: usize,
) -> Result<Allocation, PlannerError> {
    if items.len() <= max_exhaustive_items {
        tracing::info!(
            "{} items (limit {max_exhaustive_items}) → using exhaustive strategy",
            items.len(),
        );
        ExhaustiveAllocator::new().allocate(items, capacity)
    } else {
        tracing::info!(
            "{} items (limit {max_exhaustive_items}) → using greedy strategy",
            items.len(),
        );
        GreedyAllocator::new().allocate(items, capacity)
    }
}

/// [`auto_allocate`] behind the [`AllocationStrategy`] trait, so it can be
/// selected by name like the other strategies.
#[derive(Debug, Clone)]
pub struct AutoAllocator {
    max_exhaustive_items: usize,
}

impl AutoAllocator {
    /// Creates an allocator that searches exhaustively up to
    /// `max_exhaustive_items` items and falls back to greedy above that.
    pub fn new(max_exhaustive_items: usize) -> Self {
        Self {
            max_exhaustive_items,
        }
    }
}

impl Default for AutoAllocator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_EXHAUSTIVE_ITEMS)
    }
}

impl AllocationStrategy for AutoAllocator {
    fn name(&self) -> &str {
        "auto"
    }

    fn allocate(
        &self,
        items: &ItemSet<Validated>,
        capacity: Capacity,
    ) -> Result<Allocation, PlannerError> {
        auto_allocate(items, capacity, self.max_exhaustive_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn herd(n: usize) -> ItemSet<Validated> {
        ItemSet::from_pairs("herd", (0..n).map(|i| (format!("cow{i}"), (i % 4 + 1) as u64)))
            .validate()
            .unwrap()
    }

    #[test]
    fn test_auto_small_uses_exhaustive() {
        let a = auto_allocate(&herd(5), Capacity::new(10), DEFAULT_MAX_EXHAUSTIVE_ITEMS).unwrap();
        assert_eq!(a.strategy_name, "exhaustive");
    }

    #[test]
    fn test_auto_large_uses_greedy() {
        let a = auto_allocate(&herd(40), Capacity::new(10), DEFAULT_MAX_EXHAUSTIVE_ITEMS).unwrap();
        assert_eq!(a.strategy_name, "greedy");
        assert_eq!(a.total_items(), 40);
    }

    #[test]
    fn test_auto_threshold_is_inclusive() {
        let a = auto_allocate(&herd(3), Capacity::new(10), 3).unwrap();
        assert_eq!(a.strategy_name, "exhaustive");
        let a = auto_allocate(&herd(4), Capacity::new(10), 3).unwrap();
        assert_eq!(a.strategy_name, "greedy");
    }

    #[test]
    fn test_auto_allocator_trait() {
        let auto = AutoAllocator::default();
        assert_eq!(auto.name(), "auto");
        let a = auto.allocate(&herd(6), Capacity::new(10)).unwrap();
        assert_eq!(a.strategy_name, "exhaustive");
    }
}
