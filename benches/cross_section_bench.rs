use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ibd_mc::{differential_cross_section, total_cross_section, PhysicalConstants};

fn bench_differential(c: &mut Criterion) {
    let constants = PhysicalConstants::default();
    c.bench_function("differential 5 MeV", |b| {
        b.iter(|| differential_cross_section(&constants, black_box(5.0), black_box(0.3)).unwrap())
    });
}

fn bench_total(c: &mut Criterion) {
    let constants = PhysicalConstants::default();
    c.bench_function("total 5 MeV, 1000 samples", |b| {
        b.iter(|| total_cross_section(&constants, black_box(5.0)).unwrap())
    });
}

criterion_group!(benches, bench_differential, bench_total);
criterion_main!(benches);
