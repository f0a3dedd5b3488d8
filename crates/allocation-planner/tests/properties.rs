// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Property tests: invariants that must hold for any input.

use allocation_planner::{
    Allocation, AllocationStrategy, Capacity, ExhaustiveAllocator, GreedyAllocator, PlannerError,
};
use item_ir::{set::Validated, ItemSet};
use proptest::prelude::*;
use std::collections::HashSet;

fn item_set(weights: &[u64]) -> ItemSet<Validated> {
    ItemSet::from_pairs(
        "prop",
        weights.iter().enumerate().map(|(i, &w)| (format!("item{i}"), w)),
    )
    .validate()
    .unwrap()
}

/// Every item appears exactly once and no group is overloaded.
fn assert_partition(allocation: &Allocation, items: &ItemSet<Validated>, capacity: Capacity) {
    let mut seen = HashSet::new();
    for group in &allocation.groups {
        assert!(!group.item_ids.is_empty());
        assert!(capacity.fits(group.total_weight));
        for id in &group.item_ids {
            assert!(seen.insert(id.clone()), "'{id}' allocated twice");
        }
    }
    let expected: HashSet<String> = items.iter().map(|i| i.id.clone()).collect();
    assert_eq!(seen, expected);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn greedy_is_a_valid_partition(
        weights in prop::collection::vec(1u64..=10, 0..12),
        capacity in 10u64..=20,
    ) {
        let items = item_set(&weights);
        let capacity = Capacity::new(capacity);
        let a = GreedyAllocator::new().allocate(&items, capacity).unwrap();
        assert_partition(&a, &items, capacity);
    }

    #[test]
    fn exhaustive_is_a_valid_partition(
        weights in prop::collection::vec(1u64..=10, 0..7),
        capacity in 10u64..=20,
    ) {
        let items = item_set(&weights);
        let capacity = Capacity::new(capacity);
        let a = ExhaustiveAllocator::new().allocate(&items, capacity).unwrap();
        assert_partition(&a, &items, capacity);
    }

    #[test]
    fn exhaustive_never_worse_than_greedy(
        weights in prop::collection::vec(1u64..=10, 0..7),
        capacity in 10u64..=15,
    ) {
        let items = item_set(&weights);
        let capacity = Capacity::new(capacity);
        let greedy = GreedyAllocator::new().allocate(&items, capacity).unwrap();
        let exhaustive = ExhaustiveAllocator::new().allocate(&items, capacity).unwrap();
        prop_assert!(exhaustive.num_groups() <= greedy.num_groups());
        prop_assert!((exhaustive.num_groups() as u64) >= capacity.min_groups(items.total_weight()));
    }

    #[test]
    fn oversized_item_is_rejected_by_both(
        weights in prop::collection::vec(1u64..=10, 0..6),
        heavy in 11u64..=50,
        position in 0usize..6,
    ) {
        let mut weights = weights;
        let position = position.min(weights.len());
        weights.insert(position, heavy);
        let items = item_set(&weights);
        let capacity = Capacity::new(10);

        let greedy = GreedyAllocator::new().allocate(&items, capacity);
        let exhaustive = ExhaustiveAllocator::new().allocate(&items, capacity);
        let is_oversized = |r: &Result<Allocation, PlannerError>| {
            matches!(r, Err(PlannerError::ItemExceedsCapacity { .. }))
        };
        prop_assert!(is_oversized(&greedy));
        prop_assert!(is_oversized(&exhaustive));
    }
}
