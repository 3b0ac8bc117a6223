//! Benchmarks for the resolvent reduction and its views.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use vieta::resolvent::{
    calc_fixed, calc_fixed_batch, calc_vieta_sum, reduce, CoefficientAssignment, FormulaVariant,
};
use vieta::integers::Rational;

fn bench_reduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");
    group.sample_size(20);

    for degree in [3, 4, 5, 6] {
        group.bench_with_input(BenchmarkId::new("canonical", degree), &degree, |b, &j| {
            b.iter(|| black_box(reduce(j, FormulaVariant::Canonical)))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("calc_fixed");
    group.sample_size(10);

    let degrees = [3, 4, 5, 6];
    group.bench_function("serial", |b| {
        b.iter(|| {
            for &j in &degrees {
                black_box(calc_fixed(j, FormulaVariant::Canonical).ok());
            }
        })
    });
    group.bench_function("batch", |b| {
        b.iter(|| black_box(calc_fixed_batch(&degrees, FormulaVariant::Canonical)))
    });

    group.finish();
}

fn bench_numeric_substitution(c: &mut Criterion) {
    let mut group = c.benchmark_group("vieta_substitution");

    for degree in [3usize, 4, 5] {
        let Ok(terms) = calc_vieta_sum(degree, FormulaVariant::Canonical) else {
            continue;
        };
        let values = (0..=degree as i64).map(|i| Rational::from(i - 2)).collect();
        let assignment = CoefficientAssignment::from_values(values);

        group.bench_with_input(BenchmarkId::new("evaluate_all", degree), &degree, |b, _| {
            b.iter(|| black_box(assignment.evaluate_all(&terms.terms)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reduction, bench_batch, bench_numeric_substitution);

criterion_main!(benches);
