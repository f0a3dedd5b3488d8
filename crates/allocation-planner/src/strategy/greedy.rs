// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Greedy allocation strategy.
//!
//! Items are taken heaviest first. A group keeps taking the next item in
//! that order while it fits and closes at the first one that does not;
//! the next group starts from that item.
//!
//! ```text
//! weights 6 5 5 4, capacity 10
//! group 0: 6          (5 does not fit)
//! group 1: 5 5
//! group 2: 4
//! ```
//!
//! Runs in O(n log n) and never exceeds the capacity, but may use more
//! groups than necessary: the example above packs into two groups
//! (`6 4`, `5 5`).

use crate::allocation::AllocationBuilder;
use crate::strategy::{ensure_items_fit, AllocationStrategy};
use crate::{Allocation, Capacity, PlannerError};
use item_ir::{set::Validated, Item, ItemSet};

/// Greedy heaviest-first allocation.
#[derive(Debug, Clone, Default)]
pub struct GreedyAllocator;

impl GreedyAllocator {
    pub fn new() -> Self {
        Self
    }
}

impl AllocationStrategy for GreedyAllocator {
    fn name(&self) -> &str {
        "greedy"
    }

    fn allocate(
        &self,
        items: &ItemSet<Validated>,
        capacity: Capacity,
    ) -> Result<Allocation, PlannerError> {
        ensure_items_fit(items, capacity)?;

        // Stable sort: equal weights keep load order.
        let mut sorted: Vec<&Item> = items.iter().collect();
        sorted.sort_by(|a, b| b.weight.cmp(&a.weight));

        let mut builder = AllocationBuilder::new(self.name(), capacity);
        let mut remaining = sorted.as_slice();

        while !remaining.is_empty() {
            let mut load: u64 = 0;
            let taken = remaining
                .iter()
                .take_while(|item| match load.checked_add(item.weight) {
                    Some(next) if capacity.fits(next) => {
                        load = next;
                        true
                    }
                    _ => false,
                })
                .count();

            let (group, rest) = remaining.split_at(taken);
            tracing::debug!(items = group.len(), weight = load, "greedy group closed");
            builder.add_group(group.iter().copied());
            remaining = rest;
        }

        let allocation = builder.build();
        allocation.validate(items)?;
        Ok(allocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(pairs: &[(&str, u64)]) -> ItemSet<Validated> {
        ItemSet::from_pairs("test", pairs.iter().copied())
            .validate()
            .unwrap()
    }

    fn allocate(pairs: &[(&str, u64)], capacity: u64) -> Result<Allocation, PlannerError> {
        GreedyAllocator::new().allocate(&items(pairs), Capacity::new(capacity))
    }

    #[test]
    fn test_greedy_all_fit() {
        let a = allocate(&[("A", 2), ("B", 2), ("C", 2), ("D", 2), ("E", 2)], 10).unwrap();
        assert_eq!(a.num_groups(), 1);
        assert_eq!(a.groups[0].item_ids, vec!["A", "B", "C", "D", "E"]);
        assert_eq!(a.groups[0].total_weight, 10);
    }

    #[test]
    fn test_greedy_closes_group_at_first_misfit() {
        // 5 does not fit after 6, so the group closes even though 4 would.
        let a = allocate(&[("A", 6), ("B", 5), ("C", 5), ("D", 4)], 10).unwrap();
        let groups: Vec<Vec<String>> = a.groups.iter().map(|g| g.item_ids.clone()).collect();
        assert_eq!(groups, vec![vec!["A"], vec!["B", "C"], vec!["D"]]);
        assert_eq!(a.num_groups(), 3);
    }

    #[test]
    fn test_greedy_suboptimal() {
        let a = allocate(
            &[("A", 5), ("B", 4), ("C", 3), ("D", 3), ("E", 3), ("F", 2)],
            10,
        )
        .unwrap();
        assert_eq!(
            a.sorted_groups(),
            vec![vec!["A", "B"], vec!["C", "D", "E"], vec!["F"]]
        );
    }

    #[test]
    fn test_greedy_heaviest_first() {
        let a = allocate(&[("light", 1), ("heavy", 9), ("mid", 5)], 10).unwrap();
        assert_eq!(a.groups[0].item_ids, vec!["heavy"]);
        assert_eq!(a.groups[1].item_ids, vec!["mid", "light"]);
    }

    #[test]
    fn test_greedy_ties_keep_load_order() {
        let a = allocate(&[("x", 6), ("y", 6), ("z", 6)], 10).unwrap();
        let order: Vec<_> = a.groups.iter().map(|g| g.item_ids[0].as_str()).collect();
        assert_eq!(order, ["x", "y", "z"]);
    }

    #[test]
    fn test_greedy_item_exceeds_capacity() {
        let result = allocate(&[("A", 15)], 10);
        assert!(matches!(
            result,
            Err(PlannerError::ItemExceedsCapacity { ref item, weight: 15, capacity: 10 }) if item == "A"
        ));
    }

    #[test]
    fn test_greedy_empty() {
        let a = allocate(&[], 10).unwrap();
        assert!(a.is_empty());
        assert_eq!(a.strategy_name, "greedy");
    }

    #[test]
    fn test_greedy_exact_capacity_items() {
        let a = allocate(&[("A", 10), ("B", 10)], 10).unwrap();
        assert_eq!(a.num_groups(), 2);
        assert_eq!(a.peak_weight, 10);
    }

    #[test]
    fn test_greedy_weights_near_u64_max() {
        let half = u64::MAX / 2 + 1;
        let a = allocate(&[("A", half), ("B", half)], u64::MAX).unwrap();
        assert_eq!(a.num_groups(), 2);
        assert_eq!(a.peak_weight, half);
    }

    #[test]
    fn test_greedy_does_not_touch_input() {
        let set = items(&[("A", 1), ("B", 9), ("C", 5)]);
        let before = set.items().to_vec();
        GreedyAllocator::new().allocate(&set, Capacity::new(10)).unwrap();
        assert_eq!(set.items(), before.as_slice());
    }
}
