// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # transport
//!
//! Runs allocation strategies against an item file and reports how many
//! trips each needed and how long it took.
//!
//! - [`TransportConfig`] — TOML-backed configuration (item file, capacity,
//!   strategies, exhaustive step limit).
//! - [`run_strategy`] / [`compare_strategies`] — time one or several
//!   strategies on the same items.
//! - [`ComparisonReport`] — per-strategy [`StrategyRun`]s plus the lower
//!   bound on trips.
//!
//! # Example
//! ```
//! use allocation_planner::{AllocationStrategy, Capacity, ExhaustiveAllocator, GreedyAllocator};
//! use item_ir::ItemSet;
//! use transport::compare_strategies;
//!
//! let herd = ItemSet::from_pairs("herd", [("A", 6), ("B", 5), ("C", 5), ("D", 4)])
//!     .validate()
//!     .unwrap();
//! let strategies: Vec<Box<dyn AllocationStrategy>> =
//!     vec![Box::new(GreedyAllocator::new()), Box::new(ExhaustiveAllocator::new())];
//!
//! let report = compare_strategies(&herd, Capacity::new(10), &strategies);
//! println!("{}", report.summary());
//! ```

mod compare;
mod config;
mod error;
mod metrics;

pub use compare::{compare_from_config, compare_strategies, run_strategy};
pub use config::TransportConfig;
pub use error::TransportError;
pub use metrics::{ComparisonReport, StrategyRun};
