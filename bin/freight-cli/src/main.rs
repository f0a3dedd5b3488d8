// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # freight
//!
//! Command-line interface for allocating weighted items to capacity-limited
//! trips.
//!
//! ## Usage
//! ```bash
//! # Allocate with one strategy
//! freight plan --items ./data/cows.txt --capacity 10 --strategy exhaustive
//!
//! # Compare greedy against exhaustive (trips and time)
//! freight compare --items ./data/cows.txt --strategies greedy,exhaustive
//!
//! # Inspect an item file
//! freight inspect --items ./data/cows.txt
//! ```

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "freight",
    about = "Greedy vs. exhaustive allocation of weighted items to capacity-limited trips",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file (CLI arguments override it).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Allocate items to trips with a single strategy.
    Plan {
        /// Path to the `identifier,weight` item file.
        #[arg(short, long)]
        items: Option<PathBuf>,

        /// Maximum total weight per trip.
        #[arg(short = 'k', long)]
        capacity: Option<u64>,

        /// Strategy: greedy, exhaustive, auto.
        #[arg(short, long, default_value = "auto")]
        strategy: String,

        /// Print the allocation as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run several strategies on the same items and compare trips and time.
    Compare {
        /// Path to the `identifier,weight` item file.
        #[arg(short, long)]
        items: Option<PathBuf>,

        /// Maximum total weight per trip.
        #[arg(short = 'k', long)]
        capacity: Option<u64>,

        /// Strategies to compare (comma-separated).
        #[arg(long)]
        strategies: Option<String>,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Inspect an item file: items, totals, and search-space size.
    Inspect {
        /// Path to the `identifier,weight` item file.
        #[arg(short, long)]
        items: Option<PathBuf>,

        /// Maximum total weight per trip.
        #[arg(short = 'k', long)]
        capacity: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Plan {
            items,
            capacity,
            strategy,
            json,
        } => {
            let config = commands::resolve_config(cli.config.as_deref(), items, capacity)?;
            commands::plan::execute(config, strategy, json)
        }
        Commands::Compare {
            items,
            capacity,
            strategies,
            json,
        } => {
            let mut config = commands::resolve_config(cli.config.as_deref(), items, capacity)?;
            if let Some(list) = strategies {
                config.strategies = commands::parse_strategy_list(&list);
            }
            commands::compare::execute(config, json)
        }
        Commands::Inspect { items, capacity } => {
            let config = commands::resolve_config(cli.config.as_deref(), items, capacity)?;
            commands::inspect::execute(config)
        }
    }
}
