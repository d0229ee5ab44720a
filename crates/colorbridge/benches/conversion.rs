use colorbridge::{Cmyk, Rgb, Session, Xyz};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    let rgb = Rgb::new(0xb6, 0xeb, 0xd4);
    let xyz = Xyz::new(50.0, 50.0, 0.0);
    let cmyk = Cmyk::new(50.0, 25.0, 0.0, 10.0);

    group.bench_function("rgb-to-xyz", |b| b.iter(|| black_box(rgb).to_xyz()));
    group.bench_function("xyz-to-rgb", |b| b.iter(|| black_box(xyz).to_rgb()));
    group.bench_function("rgb-to-cmyk", |b| b.iter(|| black_box(rgb).to_cmyk()));
    group.bench_function("cmyk-to-rgb", |b| b.iter(|| black_box(cmyk).to_rgb()));
    group.bench_function("from-hex", |b| b.iter(|| Rgb::from_hex(black_box("#b6ebd4"))));

    group.finish();

    let mut group = c.benchmark_group("session");
    let mut session = Session::new();

    group.bench_function("update-from-rgb", |b| {
        b.iter(|| session.update_from_rgb(black_box(12), black_box(34), black_box(56)))
    });
    group.bench_function("update-from-xyz", |b| {
        b.iter(|| session.update_from_xyz(black_box(200.0), black_box(200.0), black_box(200.0)))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
