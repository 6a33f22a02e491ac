//! Performance benchmarks for the conjugation engine
//!
//! Run with: cargo bench --bench conjugation_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tuslash_core::{BatchConjugator, ConjugationEngine, RawRow, Register};

const ROOTS: [&str; 10] = [
    "bil", "bor", "o'qi", "ye", "de", "kel", "yoz", "boshla", "ket", "ko'r",
];

/// Generate a batch of raw rows
fn generate_rows(count: usize) -> Vec<RawRow> {
    (0..count)
        .map(|i| {
            let root = ROOTS[i % ROOTS.len()];
            RawRow::new(i as u64 + 2, Some(root.to_string()), Some(root.to_string()))
        })
        .collect()
}

/// Benchmark single-root conjugation per register
fn bench_single_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_root");
    let engine = ConjugationEngine::new();

    for register in Register::ALL {
        group.bench_with_input(
            BenchmarkId::new("conjugate", register),
            &register,
            |b, register| {
                b.iter(|| {
                    for root in ROOTS {
                        let _ = engine.conjugate(black_box(root), *register).unwrap();
                    }
                });
            },
        );
    }

    group.finish();
}

/// Benchmark batch conjugation, sequential vs parallel
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for size in [1_000, 10_000, 100_000] {
        let rows = generate_rows(size);
        group.throughput(Throughput::Elements(size as u64));

        for parallel in [false, true] {
            let conjugator = BatchConjugator::default().parallel(parallel);
            let label = if parallel { "parallel" } else { "sequential" };
            group.bench_with_input(BenchmarkId::new(label, size), &rows, |b, rows| {
                b.iter(|| {
                    let _ = conjugator.run(black_box(rows)).unwrap();
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_single_root, bench_batch);
criterion_main!(benches);
