//! Benchmarks for the step generators
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

use algoviz::algorithms::{binary_search, merge_sort, sieve, two_pointer};

fn bench_binary_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_search_generate");

    for size in [16usize, 256, 4096].iter() {
        let mut rng = StdRng::seed_from_u64(42);
        let array = binary_search::random_sorted_array(&mut rng, 0, 1_000_000, *size);
        let target = array[*size / 3];

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| binary_search::generate(black_box(&array), black_box(target)));
        });
    }

    group.finish();
}

fn bench_merge_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_sort_generate");

    for size in [8usize, 16, 32].iter() {
        let values: Vec<i64> = (0..*size as i64).rev().collect();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| merge_sort::generate(black_box(&values)));
        });
    }

    group.finish();
}

fn bench_two_pointer(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_pointer_generate");

    for size in [8usize, 64, 256].iter() {
        let input: String = "abcdefghij".chars().cycle().take(*size).collect();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| two_pointer::generate(black_box(&input)));
        });
    }

    group.finish();
}

fn bench_sieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve_generate");

    for limit in [10u64, 50, 100].iter() {
        group.throughput(Throughput::Elements(*limit));
        group.bench_with_input(BenchmarkId::from_parameter(limit), limit, |b, _| {
            b.iter(|| sieve::generate(black_box(*limit)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_binary_search,
    bench_merge_sort,
    bench_two_pointer,
    bench_sieve
);
criterion_main!(benches);
