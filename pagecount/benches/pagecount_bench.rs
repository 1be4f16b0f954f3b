//! Criterion benchmark harness: division against shift page counts, on the
//! three fixed pairs and on a larger set of random valid pairs.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pagecount::pages::{
    generate_pairs, pagecount, pagecount_fast, pagecount_shift, MEMORY_SIZES, PAGE_SIZES,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;
use std::time::Duration;

const RANDOM_PAIRS: usize = 4096;

fn fixed_pairs() -> Vec<(u64, u64)> {
    MEMORY_SIZES.into_iter().zip(PAGE_SIZES).collect()
}

fn input_sets() -> Vec<(&'static str, Vec<(u64, u64)>)> {
    let mut rng = StdRng::seed_from_u64(0x9a9e);
    vec![
        ("fixed", fixed_pairs()),
        ("random", generate_pairs(RANDOM_PAIRS, &mut rng)),
    ]
}

fn bench_pagecount(c: &mut Criterion) {
    let mut group = c.benchmark_group("pagecount");
    group.measurement_time(Duration::from_secs(5));

    for (label, pairs) in input_sets() {
        group.throughput(Throughput::Elements(pairs.len() as u64));

        group.bench_with_input(BenchmarkId::new("division", label), &pairs, |b, pairs| {
            b.iter(|| {
                pairs.iter().fold(0u64, |acc, &(m, p)| {
                    acc.wrapping_add(pagecount(black_box(m), black_box(p)))
                })
            });
        });

        group.bench_with_input(BenchmarkId::new("fast", label), &pairs, |b, pairs| {
            b.iter(|| {
                pairs.iter().fold(0u64, |acc, &(m, p)| {
                    acc.wrapping_add(pagecount_fast(black_box(m), black_box(p)))
                })
            });
        });

        // log2 hoisted out of the timed loop.
        let shifted: Vec<(u64, u32)> = pairs
            .iter()
            .map(|&(m, p)| (m, p.trailing_zeros()))
            .collect();
        group.bench_with_input(BenchmarkId::new("shift", label), &shifted, |b, shifted| {
            b.iter(|| {
                shifted.iter().fold(0u64, |acc, &(m, s)| {
                    acc.wrapping_add(pagecount_shift(black_box(m), black_box(s)))
                })
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pagecount);
criterion_main!(benches);
