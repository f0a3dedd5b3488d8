// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `freight compare` command: run several strategies on the same items.
//!
//! Prints the number of trips and the time each strategy took, which is
//! the point of the exercise: the greedy heuristic is fast but may need
//! extra trips; the exhaustive search is optimal but exponential.

use anyhow::Context;
use transport::TransportConfig;

pub fn execute(config: TransportConfig, json: bool) -> anyhow::Result<()> {
    let capacity = config.parse_capacity()?;
    let strategies = config.create_strategies()?;
    let items = config.load_items().with_context(|| {
        format!("failed to load items from '{}'", config.items_path.display())
    })?;

    let report = transport::compare_strategies(&items, capacity, &strategies);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║             freight · Strategy Comparison           ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
    println!("  Items:       {}", items.summary());
    println!("  Capacity:    {capacity}");
    println!("  Lower bound: {} trips", report.lower_bound);
    println!();

    // ── Results Table ──────────────────────────────────────────
    println!("  {:<14} {:>8} {:>12} {:>10}", "Strategy", "Trips", "Time", "Peak");
    println!("  {}", "-".repeat(48));

    for run in &report.runs {
        match &run.allocation {
            Some(allocation) => println!(
                "  {:<14} {:>8} {:>10.3}ms {:>10}",
                run.strategy,
                allocation.num_groups(),
                run.elapsed_ms(),
                allocation.peak_weight,
            ),
            None => println!(
                "  {:<14} {:>8} {:>10.3}ms     FAILED: {}",
                run.strategy,
                "-",
                run.elapsed_ms(),
                run.error.as_deref().unwrap_or("unknown error"),
            ),
        }
    }
    println!();

    // ── Summary ────────────────────────────────────────────────
    match report.best() {
        Some(best) => {
            println!(
                "  Best: {} ({} trips)",
                best.strategy,
                best.num_groups().unwrap_or_default(),
            );
            for run in &report.runs {
                if let Some(allocation) = &run.allocation {
                    println!("   {}: {:?}", run.strategy, allocation.sorted_groups());
                }
            }
        }
        None => println!("  No strategy produced an allocation."),
    }
    println!();

    Ok(())
}
