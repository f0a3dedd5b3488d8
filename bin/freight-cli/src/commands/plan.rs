// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `freight plan` command: allocate items with a single strategy.

use anyhow::Context;
use transport::TransportConfig;

pub fn execute(config: TransportConfig, strategy_name: String, json: bool) -> anyhow::Result<()> {
    let capacity = config.parse_capacity()?;
    let strategy = config.create_strategy(&strategy_name)?;
    let items = config.load_items().with_context(|| {
        format!("failed to load items from '{}'", config.items_path.display())
    })?;

    let run = transport::run_strategy(strategy.as_ref(), &items, capacity);
    let allocation = match (run.allocation, run.error) {
        (Some(allocation), _) => allocation,
        (None, error) => anyhow::bail!(
            "strategy '{}' failed: {}",
            run.strategy,
            error.unwrap_or_default()
        ),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&allocation)?);
        return Ok(());
    }

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║              freight · Trip Planner                 ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
    println!("  Items:    {}", items.summary());
    println!("  Capacity: {capacity}");
    println!("  Strategy: {}", allocation.strategy_name);
    println!();

    println!("  {:<6} {:>8}  {}", "Trip", "Weight", "Items");
    println!("  {}", "-".repeat(60));
    for group in &allocation.groups {
        println!(
            "  {:<6} {:>8}  {}",
            group.group_index,
            format!("{}/{}", group.total_weight, allocation.capacity),
            super::truncate(&group.item_ids.join(", "), 44),
        );
    }
    println!();
    println!("  {} trips in {:.3}ms", allocation.num_groups(), run.elapsed.as_secs_f64() * 1000.0);
    println!();

    Ok(())
}
