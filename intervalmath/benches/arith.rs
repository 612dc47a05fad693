use criterion::{
    BenchmarkId, Criterion, black_box, criterion_group, criterion_main,
};
use intervalmath::Interval;

fn make_intervals(n: usize) -> Vec<Interval> {
    (0..n)
        .map(|i| {
            let v = i as f64 / n as f64 - 0.5;
            Interval::new(v, v + 0.25).unwrap()
        })
        .collect()
}

pub fn bench_accumulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("accumulate");
    for n in [10, 100, 1000] {
        let data = make_intervals(n);
        group.bench_function(BenchmarkId::new("add", n), |b| {
            b.iter(|| {
                let sum = data
                    .iter()
                    .fold(Interval::from(0.0), |acc, &v| acc + v);
                black_box(sum)
            })
        });
        group.bench_function(BenchmarkId::new("in-place", n), |b| {
            b.iter(|| {
                let mut sum = Interval::from(0.0);
                for &v in &data {
                    sum.accumulate(v);
                }
                black_box(sum)
            })
        });
    }
}

pub fn bench_reciprocal(c: &mut Criterion) {
    let mut group = c.benchmark_group("reciprocal");
    for n in [10, 100, 1000] {
        let data = make_intervals(n);
        group.bench_function(BenchmarkId::new("reciprocal", n), |b| {
            b.iter(|| {
                for &v in &data {
                    black_box(v.reciprocal());
                }
            })
        });
    }
}

pub fn bench_approx_eq(c: &mut Criterion) {
    let data = make_intervals(1000);
    c.bench_function("approx_eq", |b| {
        b.iter(|| {
            data.windows(2)
                .filter(|w| w[0].approx_eq(&w[1], 1e-3))
                .count()
        })
    });
}

criterion_group!(benches, bench_accumulate, bench_reciprocal, bench_approx_eq);
criterion_main!(benches);
