use super::*;

fn wide_bounds() -> Bounds {
    Bounds::new(8.0, 8.0, 10_000.0, 10_000.0)
}

#[test]
fn free_step_applies_friction_only() {
    let spec = BounceDecaySpec::default();
    let frame = spec.step(
        Point::new(100.0, 100.0),
        Velocity::new(2.0, -1.0),
        &wide_bounds(),
    );

    assert_eq!(frame.position, Point::new(132.0, 84.0));
    assert_eq!(frame.velocity, Velocity::new(2.0 * 0.985, -0.985));
    assert!(!frame.collided_x && !frame.collided_y);
    assert!(!frame.settled);
}

#[test]
fn reflect_keeps_sixty_percent() {
    let spec = BounceDecaySpec::default();
    assert_eq!(spec.reflect(2.0), -2.0 * 0.6);
    assert_eq!(spec.reflect(-1.5), 1.5 * 0.6);
}

#[test]
fn collision_clamps_and_reflects_axis() {
    let spec = BounceDecaySpec::default();
    let bounds = Bounds::new(8.0, 8.0, 200.0, 200.0);
    let frame = spec.step(Point::new(190.0, 100.0), Velocity::new(2.0, 0.0), &bounds);

    assert_eq!(frame.position, Point::new(200.0, 100.0));
    assert!(frame.collided_x);
    assert!(!frame.collided_y);
    assert_eq!(frame.velocity.vx, -2.0 * 0.6 * 0.985);
    assert_eq!(frame.velocity.vy, 0.0);
}

#[test]
fn landing_exactly_on_bound_counts_as_hit() {
    let spec = BounceDecaySpec::default();
    let bounds = Bounds::new(8.0, 8.0, 200.0, 200.0);
    // 40 + (-2 * 16) = 8
    let frame = spec.step(Point::new(40.0, 100.0), Velocity::new(-2.0, 0.0), &bounds);

    assert_eq!(frame.position.x, 8.0);
    assert!(frame.collided_x);
    assert!(frame.velocity.vx > 0.0);
}

#[test]
fn corner_hit_reflects_both_axes_independently() {
    let spec = BounceDecaySpec::default();
    let bounds = Bounds::new(8.0, 8.0, 200.0, 200.0);
    let frame = spec.step(Point::new(195.0, 195.0), Velocity::new(1.0, 2.0), &bounds);

    assert_eq!(frame.position, Point::new(200.0, 200.0));
    assert!(frame.collided_x && frame.collided_y);
    assert_eq!(frame.velocity.vx, -1.0 * 0.6 * 0.985);
    assert_eq!(frame.velocity.vy, -2.0 * 0.6 * 0.985);
}

#[test]
fn slow_speed_settles() {
    let spec = BounceDecaySpec::default();
    let frame = spec.step(Point::new(100.0, 100.0), Velocity::new(0.02, 0.0), &wide_bounds());
    assert!(frame.settled);
}

#[test]
fn positions_stay_within_bounds() {
    let spec = BounceDecaySpec::default();
    let bounds = Bounds::new(8.0, 8.0, 300.0, 200.0);
    let mut position = Point::new(150.0, 100.0);
    let mut velocity = Velocity::new(7.5, -5.25);

    for _ in 0..spec.max_steps(velocity.speed()) {
        let frame = spec.step(position, velocity, &bounds);
        assert!(bounds.contains(frame.position), "{:?} escaped", frame.position);
        position = frame.position;
        velocity = frame.velocity;
        if frame.settled {
            return;
        }
    }
    panic!("run did not settle within the step bound");
}

#[test]
fn runs_settle_within_max_steps() {
    let spec = BounceDecaySpec::default();
    let bounds = Bounds::new(8.0, 8.0, 1_200.0, 800.0);

    for initial in [
        Velocity::new(1.01, 0.0),
        Velocity::new(-3.0, 4.0),
        Velocity::new(25.0, -40.0),
        Velocity::new(0.0, 0.5),
    ] {
        let bound = spec.max_steps(initial.speed());
        let mut position = Point::new(600.0, 400.0);
        let mut velocity = initial;
        let mut steps = 0;
        loop {
            let frame = spec.step(position, velocity, &bounds);
            steps += 1;
            position = frame.position;
            velocity = frame.velocity;
            if frame.settled {
                break;
            }
            assert!(steps < bound, "{initial:?} exceeded {bound} steps");
        }
        assert!(steps <= bound);
    }
}

#[test]
fn max_steps_rejects_degenerate_speeds() {
    let spec = BounceDecaySpec::default();
    assert_eq!(spec.max_steps(0.0), 0);
    assert_eq!(spec.max_steps(-1.0), 0);
    assert_eq!(spec.max_steps(f32::NAN), 0);
    assert_eq!(spec.max_steps(f32::INFINITY), 0);
    assert_eq!(spec.max_steps(0.01), 1);
}

#[test]
fn degenerate_bounds_pin_to_minimum() {
    let spec = BounceDecaySpec::default();
    let bounds = Bounds::new(8.0, 8.0, 0.0, 0.0);
    let frame = spec.step(Point::new(8.0, 8.0), Velocity::new(3.0, -3.0), &bounds);
    assert_eq!(frame.position, Point::new(8.0, 8.0));
}
