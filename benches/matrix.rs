use compact_math::{Matrix4, Vector4};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn build_matrix4_from_columns(c: &mut Criterion) {
    let column = Vector4::new(1.0, 2.0, 3.0, 4.0);
    c.bench_function("build_matrix4_from_columns", |bench| {
        bench.iter(|| {
            Matrix4::from_columns(
                black_box(column),
                black_box(column),
                black_box(column),
                black_box(column),
            )
        });
    });
}

fn sum_matrix4_elements(c: &mut Criterion) {
    let matrix = Matrix4::identity();
    c.bench_function("sum_matrix4_elements", |bench| {
        bench.iter(|| black_box(&matrix).as_array().iter().sum::<f32>());
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets =
        build_matrix4_from_columns,
        sum_matrix4_elements,
);
criterion_main!(benches);
