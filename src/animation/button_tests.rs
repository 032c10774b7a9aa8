//! Tests for button micro-animations

use super::*;

const EPSILON: f32 = 1e-4;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn test_starts_at_rest() {
    let button = ButtonAnimator::default();

    assert_eq!(button.scale(), REST_SCALE);
    assert!(!button.is_animating());
    assert!(!button.is_hovered());
    assert!(!button.is_pressing());
}

#[test]
fn test_press_scales_down_then_up_then_completes() {
    let start = Instant::now();
    let mut button = ButtonAnimator::new(true);

    button.press(start);

    assert_eq!(button.update(start + ms(50)), None);
    assert!(button.scale() < REST_SCALE && button.scale() > PRESS_SCALE);

    assert_eq!(button.update(start + ms(100)), None);
    assert!((button.scale() - PRESS_SCALE).abs() < EPSILON);

    assert_eq!(button.update(start + ms(200)), None);
    assert!(button.scale() > PRESS_SCALE && button.scale() < REST_SCALE);

    assert_eq!(
        button.update(start + ms(300)),
        Some(ButtonEvent::PressComplete)
    );
    assert_eq!(button.scale(), REST_SCALE);
    assert!(!button.is_animating());
}

#[test]
fn test_press_completes_exactly_once() {
    let start = Instant::now();
    let mut button = ButtonAnimator::new(true);

    button.press(start);
    let events: Vec<_> = (0..=20)
        .filter_map(|i| button.update(start + ms(i * 25)))
        .collect();

    assert_eq!(events, vec![ButtonEvent::PressComplete]);
}

#[test]
fn test_press_not_complete_before_full_duration() {
    let start = Instant::now();
    let mut button = ButtonAnimator::new(true);

    button.press(start);

    assert_eq!(button.update(start + ms(299)), None);
    assert!(button.is_pressing());
}

#[test]
fn test_late_tick_still_completes() {
    let start = Instant::now();
    let mut button = ButtonAnimator::new(true);

    button.press(start);

    // A single tick long after both phases
    assert_eq!(
        button.update(start + ms(1000)),
        Some(ButtonEvent::PressComplete)
    );
}

#[test]
fn test_hover_enter_and_leave() {
    let start = Instant::now();
    let mut button = ButtonAnimator::new(true);

    button.hover_enter(start);
    assert!(button.is_hovered());
    button.update(start + ms(200));
    assert!((button.scale() - HOVER_SCALE).abs() < EPSILON);

    button.hover_leave(start + ms(300));
    assert!(!button.is_hovered());
    button.update(start + ms(500));
    assert!((button.scale() - REST_SCALE).abs() < EPSILON);
}

#[test]
fn test_hover_cancels_previous_hover_from_current_scale() {
    let start = Instant::now();
    let mut button = ButtonAnimator::new(true);

    button.hover_enter(start);
    button.update(start + ms(100));
    let mid_scale = button.scale();
    assert!(mid_scale > REST_SCALE && mid_scale < HOVER_SCALE);

    // Leave halfway: the new tween starts from where the old one was
    button.hover_leave(start + ms(100));
    button.update(start + ms(100));
    assert!((button.scale() - mid_scale).abs() < EPSILON);

    button.update(start + ms(300));
    assert!((button.scale() - REST_SCALE).abs() < EPSILON);
}

#[test]
fn test_repeated_hover_enter_is_ignored() {
    let start = Instant::now();
    let mut button = ButtonAnimator::new(true);

    button.hover_enter(start);
    button.update(start + ms(200));
    button.hover_enter(start + ms(200));

    assert!(!button.is_animating());
}

#[test]
fn test_hover_during_press_still_completes_press() {
    let start = Instant::now();
    let mut button = ButtonAnimator::new(true);

    button.press(start);
    button.update(start + ms(50));
    button.hover_leave(start + ms(60)); // not hovered: ignored
    button.hover_enter(start + ms(60));

    assert_eq!(
        button.update(start + ms(70)),
        Some(ButtonEvent::PressComplete)
    );
    assert!(button.is_animating(), "Hover tween keeps running");
}

#[test]
fn test_disabled_press_completes_on_next_update() {
    let start = Instant::now();
    let mut button = ButtonAnimator::new(false);

    button.press(start);

    assert_eq!(button.update(start), Some(ButtonEvent::PressComplete));
    assert_eq!(button.scale(), REST_SCALE);
}

#[test]
fn test_disabled_hover_keeps_rest_scale() {
    let start = Instant::now();
    let mut button = ButtonAnimator::new(false);

    button.hover_enter(start);
    button.update(start + ms(200));

    assert!(button.is_hovered());
    assert_eq!(button.scale(), REST_SCALE);
}

#[test]
fn test_leaving_mid_press_completes_on_next_update() {
    let start = Instant::now();
    let mut button = ButtonAnimator::new(true);

    button.hover_enter(start);
    button.update(start + ms(200));
    button.press(start + ms(200));
    button.update(start + ms(250));
    button.hover_leave(start + ms(260));

    // The press tween is gone, so completion does not wait out the 300ms press
    assert_eq!(
        button.update(start + ms(270)),
        Some(ButtonEvent::PressComplete)
    );
    assert_eq!(button.update(start + ms(500)), None);
    assert!((button.scale() - REST_SCALE).abs() < EPSILON);
}

#[test]
fn test_cancel_press_never_completes() {
    let start = Instant::now();
    let mut button = ButtonAnimator::new(true);

    button.press(start);
    button.update(start + ms(50));
    button.cancel_press(start + ms(60));

    assert!(!button.is_pressing());
    assert_eq!(button.update(start + ms(100)), None);
    assert_eq!(button.update(start + ms(400)), None);
    assert!((button.scale() - REST_SCALE).abs() < EPSILON);
}

#[test]
fn test_cancel_press_while_hovered_returns_to_hover_scale() {
    let start = Instant::now();
    let mut button = ButtonAnimator::new(true);

    button.hover_enter(start);
    button.update(start + ms(200));
    button.press(start + ms(200));
    button.cancel_press(start + ms(250));

    button.update(start + ms(450));
    assert!((button.scale() - HOVER_SCALE).abs() < EPSILON);
    assert!(!button.is_animating());
}

#[test]
fn test_cancel_press_keeps_hover_tween() {
    let start = Instant::now();
    let mut button = ButtonAnimator::new(true);

    button.hover_enter(start);
    button.cancel_press(start + ms(50));

    assert!(button.is_animating());
    button.update(start + ms(200));
    assert!((button.scale() - HOVER_SCALE).abs() < EPSILON);
}

#[test]
fn test_disabled_cancel_press_drops_completion() {
    let start = Instant::now();
    let mut button = ButtonAnimator::new(false);

    button.press(start);
    button.cancel_press(start);

    assert_eq!(button.update(start), None);
}
