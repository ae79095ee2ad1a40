//! Benchmarks for curve algebra and rule firing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fuzzy_sets::{Curve, CutKind, Modifier, Rule, Shape, Variables};

fn zigzag(points: usize, offset: f64) -> Curve {
    Curve::new((0..points).map(|i| (i as f64 + offset, if i % 2 == 0 { 0.1 } else { 0.9 }))).unwrap()
}

fn algebra_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("algebra");

    for points in [8, 64, 512] {
        let a = zigzag(points, 0.);
        let b = zigzag(points, 0.5);

        group.bench_with_input(BenchmarkId::new("union", points), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(a.union(b)))
        });
        group.bench_with_input(BenchmarkId::new("intersection", points), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(a.intersection(b)))
        });
        group.bench_with_input(BenchmarkId::new("alpha_cuts", points), &a, |bench, a| {
            bench.iter(|| black_box(a.alpha_cuts(0.5, CutKind::Weak)))
        });
    }

    group.finish();
}

fn modifier_benchmark(c: &mut Criterion) {
    let gaussian = Shape::Gaussian(50., 10.).generate().unwrap();

    c.bench_function("very_gaussian", |b| b.iter(|| black_box(Modifier::Very.apply(&gaussian))));
    c.bench_function("moment_defuzzify", |b| b.iter(|| black_box(gaussian.moment_defuzzify())));
}

fn rule_benchmark(c: &mut Criterion) {
    let mut vars = Variables::new();
    let service = vars.add("service", 0. ..=10.).unwrap();
    let tip = vars.add("tip", 0. ..=30.).unwrap();
    let rule = Rule::new(
        vec![vars.bind_shape(service, Shape::Triangle(5., 10., 10.)).unwrap()],
        vec![vars.bind_shape(tip, Shape::Triangle(15., 25., 30.)).unwrap()],
    );
    let cached = vec![vars.crisp(service, 8.).unwrap()];

    c.bench_function("rule_cached_firing", |b| b.iter(|| black_box(rule.execute(&cached))));
    c.bench_function("rule_fresh_firing", |b| {
        b.iter(|| {
            rule.invalidate();
            black_box(rule.execute(&cached))
        })
    });
}

criterion_group!(benches, algebra_benchmark, modifier_benchmark, rule_benchmark);
criterion_main!(benches);
