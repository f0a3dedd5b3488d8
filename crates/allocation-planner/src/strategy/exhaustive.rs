// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Exhaustive allocation strategy.
//!
//! Walks every partition of the item set (Bell(n) of them) and keeps the
//! feasible one with the fewest groups. The result is optimal.
//!
//! # Search order
//!
//! Partitions come from [`set_partitions::partitions`], which starts with
//! the single-group partition. A partition is only checked against the
//! capacity if it has strictly fewer groups than the best found so far, so
//! among partitions with the minimal group count the **first** one
//! enumerated wins.
//!
//! The search stops as soon as the best reaches `⌈total / capacity⌉`;
//! nothing later can use fewer groups, so this never changes the result.
//! Group sums use checked addition: a group whose weight overflows `u64`
//! never fits.
//!
//! # Cost
//!
//! Exponential: Bell(10) = 115 975, Bell(15) ≈ 1.4 × 10⁹. Use
//! [`ExhaustiveAllocator::with_step_limit`] to bound the work.

use crate::allocation::AllocationBuilder;
use crate::strategy::{ensure_items_fit, AllocationStrategy};
use crate::{Allocation, Capacity, PlannerError};
use item_ir::{checked_total_weight, set::Validated, ItemSet};
use set_partitions::{partitions, Partition};

/// Brute-force optimal allocation over all set partitions.
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveAllocator {
    /// Maximum number of partitions to examine, if bounded.
    step_limit: Option<u64>,
}

impl ExhaustiveAllocator {
    /// Creates an unbounded exhaustive allocator.
    pub fn new() -> Self {
        Self { step_limit: None }
    }

    /// Creates an allocator that gives up with
    /// [`PlannerError::SearchLimitExceeded`] rather than examine more than
    /// `limit` partitions.
    pub fn with_step_limit(limit: u64) -> Self {
        Self {
            step_limit: Some(limit),
        }
    }

    /// Returns the configured step limit.
    pub fn step_limit(&self) -> Option<u64> {
        self.step_limit
    }
}

impl AllocationStrategy for ExhaustiveAllocator {
    fn name(&self) -> &str {
        "exhaustive"
    }

    fn allocate(
        &self,
        items: &ItemSet<Validated>,
        capacity: Capacity,
    ) -> Result<Allocation, PlannerError> {
        ensure_items_fit(items, capacity)?;

        let mut builder = AllocationBuilder::new(self.name(), capacity);
        if items.is_empty() {
            return Ok(builder.build());
        }

        let lower_bound = capacity.min_groups(items.total_weight());
        let mut best: Option<Partition<'_, _>> = None;
        let mut examined: u64 = 0;

        for partition in partitions(items.items()) {
            if let Some(limit) = self.step_limit {
                if examined >= limit {
                    return Err(PlannerError::SearchLimitExceeded {
                        limit,
                        best_groups: best.as_ref().map(Vec::len),
                    });
                }
            }
            examined += 1;

            if best.as_ref().is_some_and(|b| partition.len() >= b.len()) {
                continue;
            }

            let feasible = partition.iter().all(|group| {
                checked_total_weight(group.iter().copied()).is_some_and(|w| capacity.fits(w))
            });
            if feasible {
                let groups = partition.len();
                best = Some(partition);
                if (groups as u64) <= lower_bound {
                    break;
                }
            }
        }

        let best = best.ok_or(PlannerError::NoFeasibleAllocation {
            capacity: capacity.as_units(),
        })?;

        tracing::debug!(
            examined,
            groups = best.len(),
            lower_bound,
            "exhaustive search finished"
        );

        for group in best {
            builder.add_group(group);
        }

        let allocation = builder.build();
        allocation.validate(items)?;
        Ok(allocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use item_ir::Item;

    fn items(pairs: &[(&str, u64)]) -> ItemSet<Validated> {
        ItemSet::from_pairs("test", pairs.iter().copied())
            .validate()
            .unwrap()
    }

    fn allocate(pairs: &[(&str, u64)], capacity: u64) -> Result<Allocation, PlannerError> {
        ExhaustiveAllocator::new().allocate(&items(pairs), Capacity::new(capacity))
    }

    #[test]
    fn test_exhaustive_all_fit() {
        let a = allocate(&[("A", 2), ("B", 2), ("C", 2), ("D", 2), ("E", 2)], 10).unwrap();
        assert_eq!(a.num_groups(), 1);
        assert_eq!(a.groups[0].item_ids, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_exhaustive_two_full_groups() {
        let a = allocate(&[("A", 6), ("B", 5), ("C", 5), ("D", 4)], 10).unwrap();
        assert_eq!(a.num_groups(), 2);
        assert_eq!(a.groups[0].item_ids, vec!["A", "D"]);
        assert_eq!(a.groups[1].item_ids, vec!["B", "C"]);
        assert!(a.groups.iter().all(|g| g.total_weight == 10));
    }

    #[test]
    fn test_exhaustive_beats_greedy() {
        let a = allocate(
            &[("A", 5), ("B", 4), ("C", 3), ("D", 3), ("E", 3), ("F", 2)],
            10,
        )
        .unwrap();
        assert_eq!(a.num_groups(), 2);
    }

    #[test]
    fn test_exhaustive_item_exceeds_capacity() {
        let result = allocate(&[("A", 15)], 10);
        assert!(matches!(
            result,
            Err(PlannerError::ItemExceedsCapacity { weight: 15, capacity: 10, .. })
        ));
    }

    #[test]
    fn test_exhaustive_empty() {
        let a = allocate(&[], 10).unwrap();
        assert!(a.is_empty());
        assert_eq!(a.strategy_name, "exhaustive");
    }

    #[test]
    fn test_exhaustive_tie_break_simple() {
        // {A,B}{C}, {A,C}{B} and {A}{B,C} all use two groups; {A,B}{C} comes first.
        let a = allocate(&[("A", 1), ("B", 1), ("C", 1)], 2).unwrap();
        assert_eq!(a.groups[0].item_ids, vec!["A", "B"]);
        assert_eq!(a.groups[1].item_ids, vec!["C"]);
    }

    #[test]
    fn test_exhaustive_tie_break_first_minimal_wins() {
        // Optimum (3 groups) is above the lower bound (2), so the whole
        // space is searched and ties must go to the first minimal partition.
        let pairs = [("A", 6), ("B", 6), ("C", 3), ("D", 3), ("E", 2)];
        let set = items(&pairs);
        let capacity = Capacity::new(10);

        let feasible: Vec<Partition<'_, Item>> = partitions(set.items())
            .filter(|p| {
                p.iter().all(|g| {
                    checked_total_weight(g.iter().copied()).is_some_and(|w| capacity.fits(w))
                })
            })
            .collect();
        let min_groups = feasible.iter().map(Vec::len).min().unwrap();
        let expected = feasible.iter().find(|p| p.len() == min_groups).unwrap();
        let expected_ids: Vec<Vec<String>> = expected
            .iter()
            .map(|g| g.iter().map(|i| i.id.clone()).collect())
            .collect();

        let a = ExhaustiveAllocator::new().allocate(&set, capacity).unwrap();
        assert_eq!(min_groups, 3);
        assert_eq!(a.num_groups(), 3);
        let got: Vec<Vec<String>> = a.groups.iter().map(|g| g.item_ids.clone()).collect();
        assert_eq!(got, expected_ids);
    }

    #[test]
    fn test_exhaustive_step_limit_exceeded() {
        // The optimum is above the lower bound, so all 52 partitions are needed.
        let set = items(&[("A", 6), ("B", 6), ("C", 3), ("D", 3), ("E", 2)]);
        let result = ExhaustiveAllocator::with_step_limit(10).allocate(&set, Capacity::new(10));
        assert!(matches!(
            result,
            Err(PlannerError::SearchLimitExceeded { limit: 10, .. })
        ));

        let a = ExhaustiveAllocator::with_step_limit(52)
            .allocate(&set, Capacity::new(10))
            .unwrap();
        assert_eq!(a.num_groups(), 3);
    }

    #[test]
    fn test_exhaustive_step_limit_not_reached_on_early_exit() {
        // The first partition already meets the lower bound.
        let a = ExhaustiveAllocator::with_step_limit(1)
            .allocate(&items(&[("A", 2), ("B", 2)]), Capacity::new(10))
            .unwrap();
        assert_eq!(a.num_groups(), 1);
    }

    #[test]
    fn test_exhaustive_weights_near_u64_max() {
        // Together the two items overflow u64, so they can never share a group.
        let half = u64::MAX / 2 + 1;
        let a = allocate(&[("A", half), ("B", half)], u64::MAX).unwrap();
        assert_eq!(a.num_groups(), 2);
        assert_eq!(a.groups[0].item_ids, vec!["A"]);
        assert_eq!(a.groups[1].item_ids, vec!["B"]);
    }

    #[test]
    fn test_step_limit_accessor() {
        assert_eq!(ExhaustiveAllocator::new().step_limit(), None);
        assert_eq!(ExhaustiveAllocator::with_step_limit(7).step_limit(), Some(7));
    }
}
