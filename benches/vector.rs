use compact_math::{Vector2, Vector3, add, cross, dot, normalize, scale};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn add_vector2(c: &mut Criterion) {
    let a = Vector2::new(1.0, 2.0);
    let b = Vector2::new(3.0, 4.0);
    c.bench_function("add_vector2", |bench| {
        bench.iter(|| add(black_box(a), black_box(b)));
    });
}

fn add_vector3(c: &mut Criterion) {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(4.0, 5.0, 6.0);
    c.bench_function("add_vector3", |bench| {
        bench.iter(|| add(black_box(a), black_box(b)));
    });
}

fn normalize_vector3(c: &mut Criterion) {
    let v = Vector3::new(1.0, -2.0, 3.0);
    c.bench_function("normalize_vector3", |bench| {
        bench.iter(|| normalize(black_box(v)));
    });
}

fn scale_vector3(c: &mut Criterion) {
    let v = Vector3::new(1.0, -2.0, 3.0);
    c.bench_function("scale_vector3", |bench| {
        bench.iter(|| scale(black_box(v), black_box(0.5)));
    });
}

fn dot_and_cross_vector3(c: &mut Criterion) {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(-3.0, 0.5, 2.0);
    c.bench_function("dot_vector3", |bench| {
        bench.iter(|| dot(black_box(a), black_box(b)));
    });
    c.bench_function("cross_vector3", |bench| {
        bench.iter(|| cross(black_box(a), black_box(b)));
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets =
        add_vector2,
        add_vector3,
        normalize_vector3,
        scale_vector3,
        dot_and_cross_vector3,
);
criterion_main!(benches);
