// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the allocation planner.

/// Errors that can occur while allocating items to groups.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// A single item is heavier than the capacity, so no allocation exists.
    #[error("item '{item}' weighs {weight}, which exceeds the capacity of {capacity}")]
    ItemExceedsCapacity {
        item: String,
        weight: u64,
        capacity: u64,
    },

    /// The exhaustive search found no partition within capacity.
    #[error("no feasible allocation within a capacity of {capacity}")]
    NoFeasibleAllocation { capacity: u64 },

    /// The exhaustive search hit its step budget before proving optimality.
    #[error("search limit of {limit} partitions exceeded (best so far: {best_groups:?} groups)")]
    SearchLimitExceeded {
        limit: u64,
        best_groups: Option<usize>,
    },

    /// The capacity string could not be parsed or is zero.
    #[error("invalid capacity: {0}")]
    InvalidCapacity(String),

    /// A strategy produced an allocation that breaks an invariant.
    #[error("strategy '{strategy}' produced an invalid allocation: {detail}")]
    InvalidAllocation { strategy: String, detail: String },
}
