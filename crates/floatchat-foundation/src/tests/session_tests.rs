use super::*;

fn bounds() -> Bounds {
    Bounds::new(8.0, 8.0, 400.0, 300.0)
}

fn started(pointer: Point, widget: Point) -> InputDisambiguator {
    let mut input = InputDisambiguator::default();
    assert!(input.on_session_start(1, pointer, widget, 0));
    input
}

#[test]
fn start_captures_grab_offset_and_seeds_sample() {
    let input = started(Point::new(120.0, 130.0), Point::new(100.0, 100.0));
    let session = input.session().expect("session open");

    assert_eq!(session.grab_offset(), Point::new(20.0, 30.0));
    assert_eq!(session.samples().len(), 1);
    assert_eq!(
        session.samples().first().map(|sample| sample.position),
        Some(Point::new(100.0, 100.0))
    );
    assert!(!session.exceeded_tolerance());
}

#[test]
fn second_pointer_is_rejected_while_session_active() {
    let mut input = started(Point::new(120.0, 130.0), Point::new(100.0, 100.0));

    assert!(!input.on_session_start(2, Point::ZERO, Point::ZERO, 5));
    assert_eq!(input.active_pointer(), Some(1));
    assert!(input
        .on_session_move(2, Point::new(200.0, 200.0), 10, &bounds())
        .is_none());
    assert!(input.on_session_end(2).is_none());
    assert!(!input.on_session_cancel(2));
    assert!(input.is_active());
}

#[test]
fn move_keeps_grab_offset_and_clamps() {
    let mut input = started(Point::new(120.0, 130.0), Point::new(100.0, 100.0));

    let update = input
        .on_session_move(1, Point::new(170.0, 180.0), 16, &bounds())
        .expect("same pointer");
    assert_eq!(update.position, Point::new(150.0, 150.0));

    let update = input
        .on_session_move(1, Point::new(-50.0, 900.0), 32, &bounds())
        .expect("same pointer");
    assert_eq!(update.position, Point::new(8.0, 300.0));
    assert_eq!(
        input
            .session()
            .and_then(|session| session.samples().last())
            .map(|sample| sample.position),
        Some(Point::new(8.0, 300.0)),
        "samples record the clamped position"
    );
}

#[test]
fn tolerance_flag_is_one_way() {
    let mut input = started(Point::new(100.0, 100.0), Point::new(90.0, 90.0));

    let small = input
        .on_session_move(1, Point::new(103.0, 104.0), 10, &bounds())
        .expect("move");
    assert!(!small.crossed_tolerance, "exactly 5px is still a click");

    let far = input
        .on_session_move(1, Point::new(110.0, 100.0), 20, &bounds())
        .expect("move");
    assert!(far.crossed_tolerance);

    let back = input
        .on_session_move(1, Point::new(100.0, 100.0), 30, &bounds())
        .expect("move");
    assert!(!back.crossed_tolerance);
    assert!(input.session().is_some_and(PointerSession::exceeded_tolerance));

    let outcome = input.on_session_end(1).expect("release");
    assert!(outcome.exceeded_tolerance);
    assert!(outcome.suppresses_click());
}

#[test]
fn press_release_without_moves_is_a_click() {
    let mut input = started(Point::new(100.0, 100.0), Point::new(90.0, 90.0));

    let outcome = input.on_session_end(1).expect("release");
    assert_eq!(
        outcome,
        ReleaseOutcome {
            exceeded_tolerance: false,
            velocity: None,
            throw: None,
        }
    );
    assert!(!outcome.suppresses_click());
    assert!(!input.is_active());
}

#[test]
fn velocity_uses_window_endpoints() {
    let mut input = started(Point::new(10.0, 10.0), Point::new(0.0, 0.0));
    input.on_session_move(1, Point::new(60.0, 10.0), 100, &Bounds::new(0.0, 0.0, 500.0, 500.0));

    let outcome = input.on_session_end(1).expect("release");
    assert_eq!(outcome.velocity, Some(Velocity::new(0.5, 0.0)));
    assert_eq!(outcome.throw, None);
}

#[test]
fn throw_threshold_is_strict() {
    let open_bounds = Bounds::new(0.0, 0.0, 1_000.0, 1_000.0);

    let mut exact = started(Point::ZERO, Point::ZERO);
    exact.on_session_move(1, Point::new(100.0, 0.0), 100, &open_bounds);
    let outcome = exact.on_session_end(1).expect("release");
    assert_eq!(outcome.velocity, Some(Velocity::new(1.0, 0.0)));
    assert!(outcome.throw.is_none(), "exactly 1 px/ms rests in place");

    let mut faster = started(Point::ZERO, Point::ZERO);
    faster.on_session_move(1, Point::new(101.0, 0.0), 100, &open_bounds);
    let outcome = faster.on_session_end(1).expect("release");
    assert!(outcome.throw.is_some(), "1.01 px/ms throws");
    assert!(outcome.suppresses_click());
}

#[test]
fn cancel_discards_without_outcome() {
    let mut input = started(Point::ZERO, Point::ZERO);
    input.on_session_move(1, Point::new(50.0, 0.0), 10, &bounds());

    assert!(input.on_session_cancel(1));
    assert!(!input.is_active());
    assert!(input.on_session_end(1).is_none());
}

#[test]
fn same_pointer_down_restarts_session() {
    let mut input = started(Point::ZERO, Point::new(8.0, 8.0));
    input.on_session_move(1, Point::new(50.0, 0.0), 10, &bounds());

    assert!(input.on_session_start(1, Point::new(60.0, 60.0), Point::new(40.0, 40.0), 20));
    let session = input.session().expect("session");
    assert!(!session.exceeded_tolerance());
    assert_eq!(session.samples().len(), 1);
}
