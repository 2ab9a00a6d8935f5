use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use polyexp::subarray::{max_subarray_dbh, max_subarray_exh, max_subarray_kadane};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_input(len: usize) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(len as u64);
    (0..len).map(|_| rng.gen_range(-1000..=1000)).collect()
}

fn bench_max_subarray(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_subarray");
    for &len in &[16usize, 64, 256] {
        let input = random_input(len);
        group.bench_with_input(BenchmarkId::new("exhaustive", len), &input, |b, input| {
            b.iter(|| max_subarray_exh(black_box(input)))
        });
        group.bench_with_input(
            BenchmarkId::new("decrease_by_half", len),
            &input,
            |b, input| b.iter(|| max_subarray_dbh(black_box(input))),
        );
        group.bench_with_input(BenchmarkId::new("kadane", len), &input, |b, input| {
            b.iter(|| max_subarray_kadane(black_box(input)))
        });
    }
    group.finish();
}

fn bench_large_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_subarray_large");
    for &len in &[10_000usize, 100_000] {
        let input = random_input(len);
        group.bench_with_input(
            BenchmarkId::new("decrease_by_half", len),
            &input,
            |b, input| b.iter(|| max_subarray_dbh(black_box(input))),
        );
        group.bench_with_input(BenchmarkId::new("kadane", len), &input, |b, input| {
            b.iter(|| max_subarray_kadane(black_box(input)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_max_subarray, bench_large_inputs);
criterion_main!(benches);
