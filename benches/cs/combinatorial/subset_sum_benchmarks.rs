use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use polyexp::combinatorial::subset_sum_exh;

// Even values with an odd target never match, so every pattern is visited.
fn unsatisfiable_input(len: usize) -> Vec<i32> {
    (1..=len as i32).map(|x| 2 * x).collect()
}

fn bench_subset_sum_worst_case(c: &mut Criterion) {
    let mut group = c.benchmark_group("subset_sum_exhaustive");
    group.sample_size(10);
    for &len in &[8usize, 12, 16, 20] {
        let input = unsatisfiable_input(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &input, |b, input| {
            b.iter(|| subset_sum_exh(black_box(input), black_box(1)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_subset_sum_worst_case);
criterion_main!(benches);
