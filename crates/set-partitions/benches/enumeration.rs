// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for set-partition enumeration.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use set_partitions::partitions;

fn bench_full_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("partitions/full");
    for n in [4usize, 6, 8, 10] {
        let items: Vec<usize> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &items, |b, items| {
            b.iter(|| partitions(black_box(items)).count())
        });
    }
    group.finish();
}

fn bench_first_partitions(c: &mut Criterion) {
    let items: Vec<usize> = (0..24).collect();
    c.bench_function("partitions/first-1000-of-24", |b| {
        b.iter(|| partitions(black_box(&items)).take(1000).count())
    });
}

criterion_group!(benches, bench_full_enumeration, bench_first_partitions);
criterion_main!(benches);
