// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Transport configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! items_path = "./data/cows.txt"
//! capacity = 10
//! strategies = ["greedy", "exhaustive"]
//! exhaustive_step_limit = 1000000
//! max_exhaustive_items = 10
//! ```

use crate::TransportError;
use allocation_planner::{
    AllocationStrategy, AutoAllocator, Capacity, ExhaustiveAllocator, GreedyAllocator,
    DEFAULT_MAX_EXHAUSTIVE_ITEMS,
};
use item_ir::{set::Validated, ItemLoader, ItemSet};
use std::path::{Path, PathBuf};

/// Configuration for a transport run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TransportConfig {
    /// Path to the `identifier,weight` item file.
    pub items_path: PathBuf,
    /// Per-group weight limit.
    #[serde(default = "default_capacity")]
    pub capacity: u64,
    /// Strategy names: `"greedy"`, `"exhaustive"`, `"auto"`.
    #[serde(default = "default_strategies")]
    pub strategies: Vec<String>,
    /// Maximum partitions the exhaustive strategy may examine.
    pub exhaustive_step_limit: Option<u64>,
    /// Largest item count the `auto` strategy searches exhaustively.
    #[serde(default = "default_max_exhaustive_items")]
    pub max_exhaustive_items: usize,
}

fn default_capacity() -> u64 {
    Capacity::DEFAULT_UNITS
}

fn default_strategies() -> Vec<String> {
    vec!["greedy".to_string(), "exhaustive".to_string()]
}

fn default_max_exhaustive_items() -> usize {
    DEFAULT_MAX_EXHAUSTIVE_ITEMS
}

impl TransportConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, TransportError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TransportError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, TransportError> {
        toml::from_str(toml_str)
            .map_err(|e| TransportError::Config(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, TransportError> {
        toml::to_string_pretty(self)
            .map_err(|e| TransportError::Config(format!("TOML serialise error: {e}")))
    }

    /// Returns the capacity, rejecting zero.
    pub fn parse_capacity(&self) -> Result<Capacity, TransportError> {
        if self.capacity == 0 {
            return Err(TransportError::Config("capacity must be positive".into()));
        }
        Ok(Capacity::new(self.capacity))
    }

    /// Loads and validates the configured item file.
    pub fn load_items(&self) -> Result<ItemSet<Validated>, TransportError> {
        Ok(ItemLoader::load(&self.items_path)?)
    }

    /// Creates the strategy with the given name.
    pub fn create_strategy(
        &self,
        name: &str,
    ) -> Result<Box<dyn AllocationStrategy>, TransportError> {
        match name.trim().to_lowercase().as_str() {
            "greedy" => Ok(Box::new(GreedyAllocator::new())),
            "exhaustive" | "brute-force" | "brute_force" => {
                Ok(Box::new(match self.exhaustive_step_limit {
                    Some(limit) => ExhaustiveAllocator::with_step_limit(limit),
                    None => ExhaustiveAllocator::new(),
                }))
            }
            "auto" => Ok(Box::new(AutoAllocator::new(self.max_exhaustive_items))),
            other => Err(TransportError::Config(format!(
                "unknown strategy '{other}'; expected 'greedy', 'exhaustive', or 'auto'"
            ))),
        }
    }

    /// Creates every configured strategy, in order.
    pub fn create_strategies(&self) -> Result<Vec<Box<dyn AllocationStrategy>>, TransportError> {
        if self.strategies.is_empty() {
            return Err(TransportError::Config("no strategies configured".into()));
        }
        self.strategies
            .iter()
            .map(|name| self.create_strategy(name))
            .collect()
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            items_path: PathBuf::from("./data/cows.txt"),
            capacity: default_capacity(),
            strategies: default_strategies(),
            exhaustive_step_limit: None,
            max_exhaustive_items: default_max_exhaustive_items(),
        }
    }
}
