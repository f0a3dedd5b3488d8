// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`AllocationStrategy`] trait and strategy implementations.

pub mod exhaustive;
pub mod greedy;

use crate::{Allocation, Capacity, PlannerError};
use item_ir::{set::Validated, ItemSet};

/// Trait for allocation strategies.
///
/// Each strategy takes a validated item set and a capacity and produces an
/// [`Allocation`] in which no group exceeds the capacity.
///
/// Strategies are purely algorithmic, with no I/O, and never mutate the
/// item set they are given.
pub trait AllocationStrategy: Send + Sync {
    /// Human-readable name of this strategy.
    fn name(&self) -> &str;

    /// Produces an allocation for the given items and capacity.
    fn allocate(
        &self,
        items: &ItemSet<Validated>,
        capacity: Capacity,
    ) -> Result<Allocation, PlannerError>;
}

/// Fails with [`PlannerError::ItemExceedsCapacity`] for the first item that
/// cannot fit in a group on its own.
pub(crate) fn ensure_items_fit(
    items: &ItemSet<Validated>,
    capacity: Capacity,
) -> Result<(), PlannerError> {
    match items.iter().find(|item| !capacity.fits(item.weight)) {
        Some(item) => Err(PlannerError::ItemExceedsCapacity {
            item: item.id.clone(),
            weight: item.weight,
            capacity: capacity.as_units(),
        }),
        None => Ok(()),
    }
}
