//! Criterion micro-benchmarks for push/pop with and without capacity borrowing.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use stackarena::{MultiStackArena, StackId};
use stackarena_bench::{fill_round_robin, random_pushes, skewed_profile};

/// Benchmark: push then pop on a stack with spare capacity (no shifting).
fn bench_push_pop_no_borrow(c: &mut Criterion) {
    let mut arena = MultiStackArena::new(4, 4096).unwrap();
    c.bench_function("push_pop_no_borrow", |b| {
        b.iter(|| {
            arena.push(StackId(1), black_box(7)).unwrap();
            black_box(arena.pop(StackId(1)).unwrap());
        });
    });
}

/// Benchmark: fill stack 0 of the skewed profile, cascading through 64 stacks.
fn bench_cascading_fill(c: &mut Criterion) {
    let config = skewed_profile(64);
    c.bench_function("cascading_fill_64", |b| {
        b.iter(|| {
            let mut arena = MultiStackArena::from_config(&config).unwrap();
            for i in 1..64 {
                arena.push(StackId(i), 1).unwrap();
            }
            while !arena.is_full() {
                arena.push(StackId(0), 2).unwrap();
            }
            black_box(arena.total_len());
        });
    });
}

/// Benchmark: random pushes over 16 stacks until full, then drain.
fn bench_random_fill_drain(c: &mut Criterion) {
    let pushes = random_pushes(42, 16, 1024);
    c.bench_function("random_fill_drain_1k", |b| {
        b.iter(|| {
            let mut arena = MultiStackArena::new(16, 1024).unwrap();
            for &(stack, value) in &pushes {
                arena.push(stack, value).unwrap();
            }
            for i in 0..16 {
                while let Ok(v) = arena.pop(StackId(i)) {
                    black_box(v);
                }
            }
        });
    });
}

/// Benchmark: round-robin fill of an evenly partitioned arena.
fn bench_round_robin_fill(c: &mut Criterion) {
    c.bench_function("round_robin_fill_1k", |b| {
        b.iter(|| {
            let mut arena = MultiStackArena::new(16, 1024).unwrap();
            fill_round_robin(&mut arena);
            black_box(arena.is_full());
        });
    });
}

criterion_group!(
    benches,
    bench_push_pop_no_borrow,
    bench_cascading_fill,
    bench_random_fill_drain,
    bench_round_robin_fill
);
criterion_main!(benches);
