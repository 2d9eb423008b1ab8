use algos_lists::lists::{cycle_list, median_of_sorted};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn sorted_data(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data: Vec<i64> = (0..size).map(|_| rng.gen_range(0..size as i64)).collect();
    data.sort();
    data
}

fn bench_median_of_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("median_of_sorted");
    // Odd sizes so the median is a single element of the data.
    for size in [11, 101, 1001] {
        let data = sorted_data(size, size as u64);
        let (head, hint) = cycle_list(data.clone(), Some(0));

        group.bench_with_input(BenchmarkId::new("hint", size), &size, |b, _| {
            b.iter(|| median_of_sorted(black_box(&head), black_box(hint.as_ref())))
        });
        group.bench_with_input(BenchmarkId::new("autodetect", size), &size, |b, _| {
            b.iter(|| median_of_sorted(black_box(&head), None))
        });

        let (chain, _) = cycle_list(data, None);
        group.bench_with_input(BenchmarkId::new("chain", size), &size, |b, _| {
            b.iter(|| median_of_sorted(black_box(&chain), None))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_median_of_sorted);
criterion_main!(benches);
