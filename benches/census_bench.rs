//! Census throughput, serial against parallel.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use vieta::census::{Census, CensusConfig, MemoryBuckets};

fn bench_census(c: &mut Criterion) {
    let mut group = c.benchmark_group("census");
    group.sample_size(10);

    for (range, degree) in [(3, 3), (2, 4)] {
        let Ok(census) = Census::new(CensusConfig {
            workers: 4,
            ..CensusConfig::new(range, degree)
        }) else {
            continue;
        };
        let id = format!("deg{degree}_range{range}");

        group.bench_with_input(BenchmarkId::new("serial", &id), &id, |b, _| {
            b.iter(|| black_box(census.run_serial(&MemoryBuckets::new()).ok()))
        });
        group.bench_with_input(BenchmarkId::new("parallel", &id), &id, |b, _| {
            b.iter(|| black_box(census.run_parallel(&MemoryBuckets::new()).ok()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_census);

criterion_main!(benches);
