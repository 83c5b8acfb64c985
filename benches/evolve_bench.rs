//! Criterion benchmarks for evolve-query.
//!
//! Measures the population operators and oracle scoring on a synthetic
//! corpus, independent of any human input.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use evolve_query::ga::{Population, RecombinationMode};
use evolve_query::oracle::{MemoryIndex, ScoringOracle};
use evolve_query::query::{Queries, Query};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ===========================================================================
// Synthetic corpus
// ===========================================================================

fn corpus(lines: usize, rng: &mut StdRng) -> Vec<String> {
    (0..lines)
        .map(|_| {
            (0..12)
                .map(|_| format!("w{}", rng.random_range(0..500)))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn population(index: &MemoryIndex, size: usize, rng: &mut StdRng) -> Queries {
    let vocabulary = index.vocabulary();
    let queries = (0..size)
        .map(|_| {
            let musts = vocabulary.sample(2, &[], rng).expect("vocabulary has 2+ terms");
            let must_nots = vocabulary.sample(1, &musts, rng).expect("vocabulary has 3+ terms");
            Query::new(musts, must_nots)
        })
        .collect();
    Queries::new(vocabulary.word_list(), queries)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_mutate(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries_mutate");
    group.sample_size(10);

    let mut rng = StdRng::seed_from_u64(42);
    let mut index = MemoryIndex::new("bench");
    index.ingest(&corpus(200, &mut rng)).unwrap();

    for &size in &[16usize, 128, 1024] {
        let queries = population(&index, size, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(size), &queries, |b, q| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| {
                let mut q = q.clone();
                q.mutate(&mut rng).unwrap();
                black_box(q)
            })
        });
    }
    group.finish();
}

fn bench_clone_and_dedup(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries_clone_dedup");
    group.sample_size(10);

    let mut rng = StdRng::seed_from_u64(42);
    let mut index = MemoryIndex::new("bench");
    index.ingest(&corpus(200, &mut rng)).unwrap();

    for &size in &[16usize, 128, 1024] {
        let queries = population(&index, size, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(size), &queries, |b, q| {
            b.iter(|| {
                let mut q = q.clone();
                q.recombine(RecombinationMode::Clone).unwrap();
                q.remove_duplicates();
                black_box(q)
            })
        });
    }
    group.finish();
}

fn bench_explain(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_index_explain");
    group.sample_size(10);

    for &lines in &[100usize, 1000, 10000] {
        let mut rng = StdRng::seed_from_u64(42);
        let mut index = MemoryIndex::new("bench");
        index.ingest(&corpus(lines, &mut rng)).unwrap();
        let target = index.pick_random_target(&mut rng).unwrap();
        let queries = population(&index, 64, &mut rng);

        group.bench_with_input(
            BenchmarkId::from_parameter(lines),
            &(index, target, queries),
            |b, (index, target, queries)| {
                b.iter(|| {
                    for query in queries.queries() {
                        black_box(index.explain(query.body(), &target.id).unwrap());
                    }
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_mutate, bench_clone_and_dedup, bench_explain);
criterion_main!(benches);
