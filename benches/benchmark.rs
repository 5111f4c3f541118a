use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use sortkernels::patterns::Pattern;
use sortkernels::{sort, ALL_ALGORITHMS};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];
const SEED: u64 = 12345;

fn benchmark_kernels(c: &mut Criterion) {
    for pattern in [Pattern::Random, Pattern::Ascending, Pattern::Descending, Pattern::FewUnique] {
        let mut group = c.benchmark_group(pattern.name());
        for size in SIZES {
            let data = pattern.generate(size, SEED);
            for algo in ALL_ALGORITHMS {
                if algo.is_quadratic() && size > 10_000 {
                    continue;
                }
                group.bench_with_input(BenchmarkId::new(algo.name(), size), &data, |b, data| {
                    b.iter_batched_ref(
                        || data.clone(),
                        |arr| sort(algo, black_box(arr)),
                        BatchSize::LargeInput,
                    )
                });
            }
        }
        group.finish();
    }
}

criterion_group!(name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_kernels);
criterion_main!(benches);
