//! Criterion benchmarks for the Fibonacci generators.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use fibdev_core::registry::{AlgorithmRegistry, DefaultRegistry};
use fibdev_core::Variant;

fn bench_variants(c: &mut Criterion) {
    let registry = DefaultRegistry::new();

    // Native variants wrap past 93, but their cost still scales with k.
    let ks: Vec<u64> = vec![10, 92, 500, 1_000, 4_896];

    for variant in Variant::ALL {
        let algo = registry.get(variant);
        let mut group = c.benchmark_group(algo.name());
        for &k in &ks {
            group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
                b.iter(|| algo.compute(black_box(k)).unwrap());
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_variants);
criterion_main!(benches);
