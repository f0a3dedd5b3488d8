// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the transport harness.

/// Errors that can occur while configuring or running a comparison.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The item file could not be loaded.
    #[error("item error: {0}")]
    Items(#[from] item_ir::ItemError),

    /// A strategy failed in a way that aborts the run.
    #[error("planner error: {0}")]
    Planner(#[from] allocation_planner::PlannerError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
