// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Allocation: the output of an allocation strategy.
//!
//! An allocation is an ordered sequence of [`ItemGroup`]s. Every item of
//! the input appears in exactly one group and no group carries more than
//! the capacity. [`Allocation::validate`] checks both against the item set
//! the allocation was computed for.

use crate::{Capacity, PlannerError};
use item_ir::{set::Validated, Item, ItemSet};
use std::collections::HashSet;

/// One group (trip) of items carried together.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ItemGroup {
    /// Index of this group in the allocation.
    pub group_index: usize,
    /// Identifiers of the items in this group.
    pub item_ids: Vec<String>,
    /// Sum of the member weights.
    pub total_weight: u64,
}

impl ItemGroup {
    /// Returns the number of items in this group.
    pub fn num_items(&self) -> usize {
        self.item_ids.len()
    }

    /// Returns `true` if the group holds the given identifier.
    pub fn contains(&self, id: &str) -> bool {
        self.item_ids.iter().any(|i| i == id)
    }
}

/// The complete allocation produced by a [`crate::AllocationStrategy`].
#[derive(Debug, Clone, serde::Serialize)]
pub struct Allocation {
    /// Strategy name that produced this allocation.
    pub strategy_name: String,
    /// Ordered list of groups.
    pub groups: Vec<ItemGroup>,
    /// The capacity used for allocation.
    pub capacity: u64,
    /// Heaviest group total.
    pub peak_weight: u64,
}

impl Allocation {
    /// Returns the number of groups.
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// Returns the number of items across all groups.
    pub fn total_items(&self) -> usize {
        self.groups.iter().map(|g| g.num_items()).sum()
    }

    /// Returns `true` if no items were allocated.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns each group's identifiers, sorted, for order-insensitive
    /// comparison.
    pub fn sorted_groups(&self) -> Vec<Vec<&str>> {
        self.groups
            .iter()
            .map(|g| {
                let mut ids: Vec<&str> = g.item_ids.iter().map(String::as_str).collect();
                ids.sort_unstable();
                ids
            })
            .collect()
    }

    /// Validates the allocation against the items it was computed for.
    ///
    /// Checks:
    /// - Group indices are consecutive starting from 0.
    /// - No empty groups.
    /// - Every identifier is known and appears exactly once.
    /// - Recorded totals match the member weights.
    /// - No group exceeds the capacity.
    /// - No item is left out.
    pub fn validate(&self, items: &ItemSet<Validated>) -> Result<(), PlannerError> {
        let invalid = |detail: String| PlannerError::InvalidAllocation {
            strategy: self.strategy_name.clone(),
            detail,
        };

        let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());

        for (expected_idx, group) in self.groups.iter().enumerate() {
            if group.group_index != expected_idx {
                return Err(invalid(format!(
                    "expected group index {expected_idx}, got {}",
                    group.group_index,
                )));
            }

            if group.item_ids.is_empty() {
                return Err(invalid(format!("group {} is empty", group.group_index)));
            }

            let mut weight: u64 = 0;
            for id in &group.item_ids {
                let item_weight = items.weight_of(id).ok_or_else(|| {
                    invalid(format!("unknown item '{id}' in group {}", group.group_index))
                })?;
                if !seen.insert(id.as_str()) {
                    return Err(invalid(format!("item '{id}' allocated more than once")));
                }
                weight = weight.checked_add(item_weight).ok_or_else(|| {
                    invalid(format!("group {} weight overflows u64", group.group_index))
                })?;
            }

            if weight != group.total_weight {
                return Err(invalid(format!(
                    "group {} records weight {} but its items weigh {weight}",
                    group.group_index, group.total_weight,
                )));
            }

            if group.total_weight > self.capacity {
                return Err(invalid(format!(
                    "group {} weighs {} but capacity is {}",
                    group.group_index, group.total_weight, self.capacity,
                )));
            }
        }

        if let Some(missing) = items.iter().find(|item| !seen.contains(item.id.as_str())) {
            return Err(invalid(format!("item '{}' was not allocated", missing.id)));
        }

        Ok(())
    }

    /// Returns a human-readable summary of the allocation.
    pub fn summary(&self) -> String {
        let sizes: Vec<usize> = self.groups.iter().map(|g| g.num_items()).collect();
        let fill = if self.groups.is_empty() || self.capacity == 0 {
            0.0
        } else {
            let carried: f64 = self.groups.iter().map(|g| g.total_weight as f64).sum();
            carried / (self.capacity as f64 * self.groups.len() as f64) * 100.0
        };

        format!(
            "Allocation '{}': {} groups, {} items, peak {}/{} ({:.0}% avg fill), group sizes: {:?}",
            self.strategy_name,
            self.num_groups(),
            self.total_items(),
            self.peak_weight,
            self.capacity,
            fill,
            sizes,
        )
    }
}

/// Builder for constructing an `Allocation` group by group.
///
/// Used internally by strategy implementations.
pub(crate) struct AllocationBuilder {
    strategy_name: String,
    capacity: u64,
    groups: Vec<ItemGroup>,
    peak_weight: u64,
}

impl AllocationBuilder {
    /// Creates a new builder.
    pub fn new(strategy_name: &str, capacity: Capacity) -> Self {
        Self {
            strategy_name: strategy_name.to_string(),
            capacity: capacity.as_units(),
            groups: Vec::new(),
            peak_weight: 0,
        }
    }

    /// Appends a group holding the given items. Strategies only add groups
    /// that fit, so the recorded total saturates rather than overflows.
    pub fn add_group<'a, I>(&mut self, members: I)
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let mut item_ids = Vec::new();
        let mut total_weight: u64 = 0;
        for item in members {
            item_ids.push(item.id.clone());
            total_weight = total_weight.saturating_add(item.weight);
        }

        self.peak_weight = self.peak_weight.max(total_weight);
        self.groups.push(ItemGroup {
            group_index: self.groups.len(),
            item_ids,
            total_weight,
        });
    }

    /// Consumes the builder and returns the finished allocation.
    pub fn build(self) -> Allocation {
        Allocation {
            strategy_name: self.strategy_name,
            groups: self.groups,
            capacity: self.capacity,
            peak_weight: self.peak_weight,
        }
    }
}
