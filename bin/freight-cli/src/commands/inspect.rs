// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `freight inspect` command: display an item file and the size of the
//! exhaustive search space.

use anyhow::Context;
use transport::TransportConfig;

pub fn execute(config: TransportConfig) -> anyhow::Result<()> {
    let capacity = config.parse_capacity()?;
    let items = config.load_items().with_context(|| {
        format!("failed to load items from '{}'", config.items_path.display())
    })?;

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║              freight · Item Inspector               ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    // ── Summary ────────────────────────────────────────────────
    println!("  Items:        {}", items.name);
    println!("  Count:        {}", items.len());
    println!("  Total weight: {}", items.total_weight());
    if let Some(heaviest) = items.heaviest() {
        println!("  Heaviest:     {}", heaviest.summary());
    }
    println!();

    // ── Per-Item Detail ────────────────────────────────────────
    println!("  {:<4} {:<30} {:>8} {:>6}", "Idx", "Identifier", "Weight", "Fits");
    println!("  {}", "-".repeat(52));
    for (i, item) in items.iter().enumerate() {
        println!(
            "  {:<4} {:<30} {:>8} {:>6}",
            i,
            super::truncate(&item.id, 30),
            item.weight,
            if capacity.fits(item.weight) { "yes" } else { "NO" },
        );
    }
    println!();

    // ── Search Space ───────────────────────────────────────────
    let partitions = set_partitions::bell_number(items.len())
        .map(|b| b.to_string())
        .unwrap_or_else(|| "overflow".to_string());
    println!("  Capacity {capacity}:");
    println!(
        "   Lower bound:          {} trips",
        capacity.min_groups(items.total_weight()),
    );
    println!("   Partitions (Bell {}): {partitions}", items.len());
    println!(
        "   Auto strategy:        {}",
        if items.len() <= config.max_exhaustive_items {
            "exhaustive"
        } else {
            "greedy"
        },
    );
    println!();

    Ok(())
}
