use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quatrot::coordinates::deg;
use quatrot::{AxisAngle, Quaternion, Vector3};

fn conversion_benchmarks(c: &mut Criterion) {
    let axis = Vector3::new(0.0, 0.6, 0.8);
    let q = Quaternion::from_axis_angle(axis, deg(75.0));
    let p = Vector3::new(3.0, 0.0, 1.0);

    c.bench_function("from_axis_angle", |b| {
        b.iter(|| Quaternion::from_axis_angle(black_box(axis), black_box(1.3)))
    });
    c.bench_function("from_euler_angles", |b| {
        b.iter(|| Quaternion::from_euler_angles(black_box(Vector3::new(0.1, 0.2, 0.3))))
    });
    c.bench_function("rotate_point", |b| b.iter(|| black_box(q).rotate_point(black_box(p))));
    c.bench_function("to_euler_angles", |b| b.iter(|| black_box(q).to_euler_angles()));
    c.bench_function("to_axis_angle", |b| b.iter(|| black_box(q).to_axis_angle()));
    c.bench_function("axis_angle_normalize", |b| {
        let aa = AxisAngle::new(Vector3::new(0.0, 2.0, 0.0), deg(560.0));
        b.iter(|| black_box(aa).normalize())
    });
}

criterion_group!(benches, conversion_benchmarks);
criterion_main!(benches);
