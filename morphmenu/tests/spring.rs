use std::time::Duration;

use morphmenu::animation::{Animate, FrameClock};
use morphmenu::{ProgressValue, SpringConfig, SpringDriver, SpringValue};

const FRAME: Duration = Duration::from_millis(16);

fn settle(value: &mut SpringValue) {
    for _ in 0..1000 {
        if !value.tick(FRAME) {
            return;
        }
    }
    panic!("spring did not settle: {value:?}");
}

// =============================================================================
// Settling
// =============================================================================

#[test]
fn test_settles_exactly_on_target() {
    let mut value = SpringValue::new(0.0, SpringConfig::default());
    value.animate_to(1.0);
    settle(&mut value);

    assert_eq!(value.get(), 1.0);
    assert_eq!(value.progress().velocity(), 0.0);
    assert!(!value.is_animating());
}

#[test]
fn test_settled_value_is_last_target_after_retargets() {
    let mut value = SpringValue::new(0.0, SpringConfig::default());
    let targets = [1.0, 0.0, 1.0, 0.0, 1.0, 0.0];

    for (i, target) in targets.iter().enumerate() {
        value.animate_to(*target);
        value.tick(Duration::from_millis(10 + 7 * i as u64));
    }
    settle(&mut value);

    assert_eq!(value.get(), 0.0);
}

#[test]
fn test_idle_value_does_not_move() {
    let mut value = SpringValue::new(0.4, SpringConfig::default());
    assert!(!value.tick(FRAME));
    assert_eq!(value.get(), 0.4);
}

#[test]
fn test_zero_dt_keeps_running_without_moving() {
    let mut value = SpringValue::new(0.0, SpringConfig::default());
    value.animate_to(1.0);

    assert!(value.tick(Duration::ZERO));
    assert_eq!(value.get(), 0.0);
    assert!(value.is_animating());
}

#[test]
fn test_animate_to_current_value_settles_immediately() {
    let mut value = SpringValue::new(1.0, SpringConfig::default());
    value.animate_to(1.0);

    assert!(!value.tick(FRAME));
    assert_eq!(value.get(), 1.0);
}

#[test]
fn test_zero_rest_thresholds_still_settle() {
    let config = SpringConfig::default().rest_thresholds(0.0, 0.0);
    for target in [1.0, 0.0] {
        let mut value = SpringValue::new(1.0 - target, config);
        value.animate_to(target);
        settle(&mut value);
        assert_eq!(value.get(), target);
    }
}

#[test]
fn test_finish_jumps_to_target() {
    let mut value = SpringValue::new(0.0, SpringConfig::default());
    value.animate_to(1.0);
    value.tick(FRAME);
    value.finish();

    assert_eq!(value.get(), 1.0);
    assert!(!value.is_animating());
}

// =============================================================================
// Retargeting
// =============================================================================

#[test]
fn test_retarget_continues_from_mid_flight() {
    let mut value = SpringValue::new(0.0, SpringConfig::default());
    value.animate_to(1.0);
    value.tick(Duration::from_millis(100));

    let mid = value.get();
    assert!(mid > 0.2 && mid < 0.9, "expected mid-flight value, got {mid}");
    assert!(value.progress().velocity() > 0.0);

    value.animate_to(0.0);
    value.tick(Duration::from_millis(1));
    assert!(
        (value.get() - mid).abs() < 0.02,
        "value jumped from {mid} to {}",
        value.get()
    );

    // Momentum carries it a little further up, but never near the old target.
    let mut highest = value.get();
    while value.tick(FRAME) {
        highest = highest.max(value.get());
    }
    assert!(highest < 0.8, "reversed spring reached {highest}");
    assert_eq!(value.get(), 0.0);
}

#[test]
fn test_retarget_keeps_velocity() {
    let mut value = SpringValue::new(0.0, SpringConfig::default());
    value.animate_to(1.0);
    value.tick(Duration::from_millis(50));
    let before = value.progress().velocity();

    value.animate_to(0.0);
    assert_eq!(value.progress().velocity(), before);
}

// =============================================================================
// Overshoot
// =============================================================================

#[test]
fn test_default_spring_overshoots_transiently() {
    let mut value = SpringValue::new(0.0, SpringConfig::default());
    value.animate_to(1.0);

    let mut highest: f32 = 0.0;
    while value.tick(FRAME) {
        highest = highest.max(value.get());
    }
    assert!(highest > 1.0, "underdamped spring should overshoot");
    assert_eq!(value.get(), 1.0);
}

#[test]
fn test_overshoot_clamping_stops_at_target() {
    let config = SpringConfig::default().overshoot_clamping(true);
    let mut value = SpringValue::new(0.0, config);
    value.animate_to(1.0);

    let mut highest: f32 = 0.0;
    while value.tick(FRAME) {
        highest = highest.max(value.get());
    }
    assert!(highest <= 1.0);
    assert_eq!(value.get(), 1.0);
}

// =============================================================================
// Integration step
// =============================================================================

#[test]
fn test_frame_rate_does_not_change_trajectory_much() {
    let mut coarse = SpringValue::new(0.0, SpringConfig::default());
    let mut fine = SpringValue::new(0.0, SpringConfig::default());
    coarse.animate_to(1.0);
    fine.animate_to(1.0);

    coarse.tick(Duration::from_millis(48));
    for _ in 0..3 {
        fine.tick(FRAME);
    }

    assert!((coarse.get() - fine.get()).abs() < 0.02);
}

#[test]
fn test_driver_and_value_used_separately() {
    let mut progress = ProgressValue::from_intent(false);
    let mut driver = SpringDriver::new(SpringConfig::new(400.0, 40.0));

    assert_eq!(driver.target(), None);
    driver.animate_to(1.0);
    assert_eq!(driver.target(), Some(1.0));

    while driver.step(&mut progress, FRAME) {}
    assert_eq!(progress.get(), 1.0);
    assert!(!driver.is_running());
}

#[test]
fn test_stiffer_spring_is_faster() {
    let mut soft = SpringValue::new(0.0, SpringConfig::new(100.0, 20.0));
    let mut stiff = SpringValue::new(0.0, SpringConfig::new(600.0, 49.0));
    soft.animate_to(1.0);
    stiff.animate_to(1.0);

    soft.tick(Duration::from_millis(80));
    stiff.tick(Duration::from_millis(80));
    assert!(stiff.get() > soft.get());
}

// =============================================================================
// FrameClock
// =============================================================================

#[test]
fn test_frame_clock_first_frame_is_zero() {
    let mut clock = FrameClock::new();
    assert_eq!(clock.frame(), Duration::ZERO);
}

#[test]
fn test_frame_clock_caps_long_gaps() {
    let start = std::time::Instant::now();
    let mut clock = FrameClock::new().with_max_frame(Duration::from_millis(50));

    clock.frame_at(start);
    assert_eq!(
        clock.frame_at(start + Duration::from_millis(20)),
        Duration::from_millis(20)
    );
    assert_eq!(
        clock.frame_at(start + Duration::from_secs(5)),
        Duration::from_millis(50)
    );

    clock.reset();
    assert_eq!(clock.frame_at(start + Duration::from_secs(6)), Duration::ZERO);
}
