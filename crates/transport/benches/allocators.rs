// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks comparing the greedy and exhaustive allocators.

use allocation_planner::{AllocationStrategy, Capacity, ExhaustiveAllocator, GreedyAllocator};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use item_ir::{set::Validated, ItemSet};

/// Deterministic weights in 1..=9 whose optimum sits above the lower bound
/// often enough to force long exhaustive searches.
fn herd(n: usize) -> ItemSet<Validated> {
    ItemSet::from_pairs(
        format!("herd-{n}"),
        (0..n).map(|i| (format!("cow{i}"), ((i * 7 + 3) % 9 + 1) as u64)),
    )
    .validate()
    .expect("benchmark herd is valid")
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");
    for n in [10usize, 100, 1000] {
        let items = herd(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &items, |b, items| {
            b.iter(|| GreedyAllocator::new().allocate(black_box(items), Capacity::new(10)))
        });
    }
    group.finish();
}

fn bench_exhaustive(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive");
    group.sample_size(10);
    for n in [4usize, 6, 8, 9] {
        let items = herd(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &items, |b, items| {
            b.iter(|| ExhaustiveAllocator::new().allocate(black_box(items), Capacity::new(10)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_greedy, bench_exhaustive);
criterion_main!(benches);
