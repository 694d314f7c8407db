use criterion::{black_box, criterion_group, criterion_main, Criterion};
use floatchat_animation::BounceDecaySpec;
use floatchat_core::{Bounds, Point, Velocity};

fn run_to_rest(spec: &BounceDecaySpec, bounds: &Bounds, velocity: Velocity) -> u32 {
    let mut position = Point::new(600.0, 400.0);
    let mut velocity = velocity;
    let mut steps = 0;
    loop {
        let frame = spec.step(position, velocity, bounds);
        steps += 1;
        position = frame.position;
        velocity = frame.velocity;
        if frame.settled {
            return steps;
        }
    }
}

fn bench_inertia(c: &mut Criterion) {
    let spec = BounceDecaySpec::default();
    let bounds = Bounds::new(8.0, 8.0, 1_856.0, 1_016.0);

    c.bench_function("inertia_run_to_rest_fast_throw", |b| {
        b.iter(|| run_to_rest(&spec, &bounds, black_box(Velocity::new(12.0, -9.0))))
    });

    c.bench_function("inertia_single_step_corner", |b| {
        b.iter(|| {
            spec.step(
                black_box(Point::new(1_850.0, 1_010.0)),
                black_box(Velocity::new(3.0, 3.0)),
                &bounds,
            )
        })
    });
}

criterion_group!(benches, bench_inertia);
criterion_main!(benches);
