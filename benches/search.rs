use biased_merge::generate::unique_sorted;
use biased_merge::search::lower_bound_biased;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

const PROBLEM_SIZE: usize = 1000;

fn search_benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let input = unique_sorted(&mut rng, PROBLEM_SIZE);
    let mut group = c.benchmark_group("search in 1000 sorted values");
    for &index in &[0usize, 1, 2, 5, 10, 50, 100, 500, 999] {
        let target = input[index];
        group.bench_with_input(BenchmarkId::new("binary", index), &target, |b, target| {
            b.iter(|| input.partition_point(|x| x < black_box(target)))
        });
        group.bench_with_input(BenchmarkId::new("biased", index), &target, |b, target| {
            b.iter(|| lower_bound_biased(&input, black_box(target)))
        });
    }
    group.finish();
}

criterion_group!(benches, search_benchmarks);
criterion_main!(benches);
