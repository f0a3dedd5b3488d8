// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared CLI helpers.

pub mod compare;
pub mod inspect;
pub mod plan;

use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use transport::TransportConfig;

/// Initialises the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows the `-v` count.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the run configuration: the TOML file (if any) first, then CLI
/// overrides.
pub fn resolve_config(
    config_path: Option<&Path>,
    items: Option<PathBuf>,
    capacity: Option<u64>,
) -> anyhow::Result<TransportConfig> {
    let mut config = match config_path {
        Some(path) => TransportConfig::from_file(path)?,
        None => TransportConfig::default(),
    };

    if let Some(items) = items {
        config.items_path = items;
    }
    if let Some(capacity) = capacity {
        config.capacity = capacity;
    }

    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}

/// Splits a comma-separated strategy list, dropping empty entries.
pub fn parse_strategy_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// Truncates a string to `max_len` characters with an ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
