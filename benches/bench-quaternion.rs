#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};
use rand::SeedableRng;

use quatrot::rotation::random_rotation;
use quatrot::{slerp, Quaternion};
use vector3d::Vector3d;

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = rand_xoshiro::Xoshiro256StarStar::seed_from_u64(0);
    let a = random_rotation(&mut rng);
    let b = random_rotation(&mut rng);
    let v = Vector3d::new(0.3, -1.2, 2.0);
    let euler = Vector3d::new(0.4, -0.7, 1.3);

    c.bench_function("random_rotation", move |bench| {
        bench.iter(|| random_rotation(&mut rng))
    });
    c.bench_function("multiply", move |bench| {
        bench.iter(|| black_box(a) * black_box(b))
    });
    c.bench_function("rotate", move |bench| {
        bench.iter(|| black_box(a).rotate(black_box(v)))
    });
    c.bench_function("slerp", move |bench| {
        bench.iter(|| slerp(black_box(a), black_box(b), black_box(0.62)))
    });
    c.bench_function("from_euler_zyx", move |bench| {
        bench.iter(|| Quaternion::from_euler_zyx(black_box(euler)))
    });
    c.bench_function("to_euler_zyx", move |bench| {
        bench.iter(|| black_box(a).to_euler_zyx())
    });
    c.bench_function("to_axis_angle", move |bench| {
        bench.iter(|| black_box(a).to_axis_angle())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
