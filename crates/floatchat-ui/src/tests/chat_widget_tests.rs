use super::*;
use floatchat_core::{NoopScheduler, Runtime};
use std::sync::Arc;

fn signed_in() -> Option<User> {
    Some(User {
        email: "demo@acme.com".to_owned(),
    })
}

fn mount(runtime: &Runtime) -> ChatWidget {
    ChatWidget::mount(
        &runtime.handle(),
        &signed_in(),
        Size::new(800.0, 600.0),
        WidgetConfig::default(),
    )
    .expect("signed in")
}

#[test]
fn mount_requires_authenticated_user() {
    let runtime = Runtime::new(Arc::new(NoopScheduler));
    let nobody: Option<User> = None;
    let widget = ChatWidget::mount(
        &runtime.handle(),
        &nobody,
        Size::new(800.0, 600.0),
        WidgetConfig::default(),
    );
    assert!(widget.is_none());
}

#[test]
fn mounts_in_bottom_right_corner() {
    let runtime = Runtime::new(Arc::new(NoopScheduler));
    let widget = mount(&runtime);
    assert_eq!(widget.position(), Point::new(720.0, 520.0));
    assert_eq!(widget.user().email, "demo@acme.com");
    assert_eq!(widget.fab_label(), OPEN_LABEL);
}

#[test]
fn plain_click_toggles_panel_and_label() {
    let runtime = Runtime::new(Arc::new(NoopScheduler));
    let mut widget = mount(&runtime);

    widget.on_pointer_event(PointerEvent::down(1, Point::new(740.0, 540.0), 0));
    widget.on_pointer_event(PointerEvent::up(1, Point::new(740.0, 540.0), 50));
    assert!(widget.on_click());
    assert!(widget.is_panel_open());
    assert_eq!(widget.fab_label(), CLOSE_LABEL);
    assert_eq!(widget.transcript().len(), 1);

    widget.close_panel();
    assert!(!widget.is_panel_open());
}

#[test]
fn click_during_session_is_ignored() {
    let runtime = Runtime::new(Arc::new(NoopScheduler));
    let mut widget = mount(&runtime);

    widget.on_pointer_event(PointerEvent::down(1, Point::new(740.0, 540.0), 0));
    assert!(widget.is_dragging());
    assert!(!widget.on_click());
    assert!(!widget.is_panel_open());
}

#[test]
fn cancel_discards_session_without_suppression() {
    let runtime = Runtime::new(Arc::new(NoopScheduler));
    let mut widget = mount(&runtime);

    widget.on_pointer_event(PointerEvent::down(1, Point::new(740.0, 540.0), 0));
    widget.on_pointer_event(PointerEvent::moved(1, Point::new(600.0, 400.0), 10));
    widget.on_pointer_event(PointerEvent::cancel(1, Point::new(600.0, 400.0), 20));

    assert!(!widget.is_dragging());
    assert!(!widget.is_click_suppressed());
    assert!(!widget.is_animating());
    assert_eq!(widget.position(), Point::new(580.0, 380.0));
}

#[test]
fn second_pointer_is_ignored_while_first_holds_session() {
    let runtime = Runtime::new(Arc::new(NoopScheduler));
    let mut widget = mount(&runtime);

    widget.on_pointer_event(PointerEvent::down(1, Point::new(740.0, 540.0), 0));
    widget.on_pointer_event(PointerEvent::down(2, Point::new(100.0, 100.0), 5));
    widget.on_pointer_event(PointerEvent::moved(2, Point::new(50.0, 50.0), 10));
    assert_eq!(widget.position(), Point::new(720.0, 520.0));

    widget.on_pointer_event(PointerEvent::up(2, Point::new(50.0, 50.0), 15));
    assert!(widget.is_dragging());
}
