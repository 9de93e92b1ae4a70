use super::{ContainerGeometry, DividerBounds, DividerState, NudgeDirection, DEFAULT_RATIO, KEYBOARD_STEP};

const CONTAINER: ContainerGeometry = ContainerGeometry {
    left: 100.0,
    width: 1000.0,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn bounds_keep_both_panels_at_minimum_width() {
    let bounds = DividerBounds::for_container(1000.0, 200.0).expect("bounds");
    assert_close(bounds.min_ratio, 0.2);
    assert_close(bounds.max_ratio, 0.8);
    assert_close(bounds.clamp(0.05), 0.2);
    assert_close(bounds.clamp(0.95), 0.8);
    assert_close(bounds.clamp(0.4), 0.4);
}

#[test]
fn narrow_container_pins_ratio_to_upper_bound() {
    let bounds = DividerBounds::for_container(300.0, 200.0).expect("bounds");
    assert_close(bounds.clamp(0.1), 1.0 - 200.0 / 300.0);
    assert_close(bounds.clamp(0.9), 1.0 - 200.0 / 300.0);
}

#[test]
fn unusable_container_has_no_bounds() {
    assert!(DividerBounds::for_container(0.0, 200.0).is_none());
    assert!(DividerBounds::for_container(-5.0, 200.0).is_none());
    assert!(DividerBounds::for_container(f64::NAN, 200.0).is_none());
}

#[test]
fn begin_drag_moves_divider_immediately() {
    let mut divider = DividerState::new(200.0);
    assert!(divider.begin_drag(400.0, CONTAINER));
    assert!(divider.is_dragging());
    assert_close(divider.ratio(), 0.3);
}

#[test]
fn pointer_samples_coalesce_to_one_update_per_frame() {
    let mut divider = DividerState::new(200.0);
    divider.begin_drag(600.0, CONTAINER);

    assert!(divider.pointer_moved(500.0));
    assert!(divider.pointer_moved(700.0));
    assert!(divider.has_pending_frame());
    assert_close(divider.ratio(), 0.5);

    assert!(divider.on_frame(CONTAINER));
    assert_close(divider.ratio(), 0.6);
    assert!(!divider.has_pending_frame());
    assert!(!divider.on_frame(CONTAINER));
}

#[test]
fn samples_outside_container_are_clamped() {
    let mut divider = DividerState::new(200.0);
    divider.begin_drag(150.0, CONTAINER);
    assert_close(divider.ratio(), 0.2);

    divider.pointer_moved(1050.0);
    divider.on_frame(CONTAINER);
    assert_close(divider.ratio(), 0.8);
}

#[test]
fn pointer_moves_without_drag_are_ignored() {
    let mut divider = DividerState::new(200.0);
    assert!(!divider.pointer_moved(300.0));
    assert!(!divider.on_frame(CONTAINER));
    assert_close(divider.ratio(), DEFAULT_RATIO);
}

#[test]
fn scheduled_sample_lands_after_drag_ends() {
    let mut divider = DividerState::new(200.0);
    divider.begin_drag(400.0, CONTAINER);
    divider.pointer_moved(700.0);
    divider.end_drag();

    assert!(!divider.pointer_moved(800.0));
    assert!(divider.on_frame(CONTAINER));
    assert_close(divider.ratio(), 0.6);
}

#[test]
fn keyboard_nudges_step_and_clamp() {
    let mut divider = DividerState::new(200.0);
    assert!(divider.nudge(NudgeDirection::Right, CONTAINER, KEYBOARD_STEP));
    assert_close(divider.ratio(), 0.55);

    for _ in 0..10 {
        divider.nudge(NudgeDirection::Left, CONTAINER, KEYBOARD_STEP);
    }
    assert_close(divider.ratio(), 0.2);
    assert!(!divider.nudge(NudgeDirection::Left, CONTAINER, KEYBOARD_STEP));
}

#[test]
fn nudge_without_geometry_keeps_ratio() {
    let mut divider = DividerState::new(200.0).with_ratio(0.4);
    assert!(!divider.nudge(
        NudgeDirection::Right,
        ContainerGeometry::new(0.0, 0.0),
        KEYBOARD_STEP
    ));
    assert_close(divider.ratio(), 0.4);
}

#[test]
fn non_finite_sample_is_ignored() {
    let mut divider = DividerState::new(200.0);
    assert!(!divider.begin_drag(f64::NAN, CONTAINER));
    assert_close(divider.ratio(), DEFAULT_RATIO);
}

#[test]
fn reset_and_percentages() {
    let mut divider = DividerState::new(200.0).with_ratio(0.25);
    let (left, right) = divider.panel_percentages();
    assert_close(left, 25.0);
    assert_close(right, 75.0);

    divider.begin_drag(500.0, CONTAINER);
    divider.pointer_moved(600.0);
    divider.reset();
    assert_close(divider.ratio(), DEFAULT_RATIO);
    assert!(!divider.is_dragging());
    assert!(!divider.has_pending_frame());
}

#[test]
fn fit_to_pulls_initial_ratio_into_bounds() {
    let mut divider = DividerState::new(200.0).with_ratio(0.9);
    assert!(divider.fit_to(CONTAINER));
    assert_close(divider.ratio(), 0.8);
    assert!(!divider.fit_to(CONTAINER));

    let mut untouched = DividerState::new(200.0).with_ratio(0.9);
    assert!(!untouched.fit_to(ContainerGeometry::new(0.0, 0.0)));
    assert_close(untouched.ratio(), 0.9);
}
