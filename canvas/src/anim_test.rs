#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Easing
// =============================================================

#[test]
fn easing_endpoints_are_fixed() {
    for easing in [Easing::Linear, Easing::FastOutSlowIn] {
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
    }
}

#[test]
fn easing_clamps_input() {
    assert_eq!(Easing::Linear.apply(-1.0), 0.0);
    assert_eq!(Easing::FastOutSlowIn.apply(2.0), 1.0);
}

#[test]
fn fast_out_slow_in_leads_linear_at_midpoint() {
    let v = Easing::FastOutSlowIn.apply(0.5);
    assert!(v > 0.5 && v < 1.0, "got {v}");
}

#[test]
fn easing_is_monotonic() {
    for easing in [Easing::Linear, Easing::FastOutSlowIn] {
        let mut last = 0.0;
        for i in 0..=100 {
            let v = easing.apply(f64::from(i) / 100.0);
            assert!(v + 1e-9 >= last, "{easing:?} not monotonic at {i}");
            last = v;
        }
    }
}

// =============================================================
// Animation
// =============================================================

#[test]
fn unstarted_animation_reads_zero() {
    let anim = Animation::new(700.0);
    assert_eq!(anim.progress(5_000.0), 0.0);
    assert!(!anim.is_running(0.0));
}

#[test]
fn once_animation_reaches_one_exactly_at_duration() {
    let mut anim = Animation::new(700.0).with_easing(Easing::Linear);
    anim.restart(1_000.0);
    assert_eq!(anim.progress(1_000.0), 0.0);
    assert_eq!(anim.progress(1_350.0), 0.5);
    assert_eq!(anim.progress(1_700.0), 1.0);
    assert_eq!(anim.progress(9_999.0), 1.0);
    assert!(anim.is_running(1_699.0));
    assert!(!anim.is_running(1_700.0));
}

#[test]
fn restart_mid_run_snaps_to_zero() {
    let mut anim = Animation::new(700.0);
    anim.restart(0.0);
    assert!(anim.progress(400.0) > 0.0);
    anim.restart(400.0);
    assert_eq!(anim.progress(400.0), 0.0);
    assert_eq!(anim.progress(1_100.0), 1.0);
}

#[test]
fn progress_is_monotonic_over_run() {
    let mut anim = Animation::new(700.0);
    anim.restart(0.0);
    let mut last = 0.0;
    for ms in (0..=700).step_by(10) {
        let p = anim.progress(f64::from(ms));
        assert!(p >= last);
        last = p;
    }
    assert_eq!(last, 1.0);
}

#[test]
fn restart_repeat_wraps() {
    let mut anim = Animation::new(3_000.0).with_easing(Easing::Linear).with_repeat(Repeat::Restart);
    anim.restart(0.0);
    assert_eq!(anim.fraction(1_500.0), 0.5);
    assert_eq!(anim.fraction(4_500.0), 0.5);
    assert!(anim.is_running(1e9));
}

#[test]
fn zero_duration_completes_immediately() {
    let mut anim = Animation::new(0.0);
    anim.restart(10.0);
    assert_eq!(anim.progress(10.0), 1.0);
}

#[test]
fn time_before_start_reads_zero() {
    let mut anim = Animation::new(100.0).with_easing(Easing::Linear);
    anim.restart(50.0);
    assert_eq!(anim.fraction(0.0), 0.0);
}

#[test]
fn stop_resets_progress() {
    let mut anim = Animation::new(100.0);
    anim.restart(0.0);
    anim.stop();
    assert_eq!(anim.progress(50.0), 0.0);
}

// =============================================================
// Tween
// =============================================================

#[test]
fn tween_starts_at_initial_value() {
    let tween = Tween::new(0.0, Animation::new(1_000.0));
    assert_eq!(tween.value(123.0), 0.0);
}

#[test]
fn tween_moves_to_target() {
    let mut tween = Tween::new(0.0, Animation::new(1_000.0).with_easing(Easing::Linear));
    tween.retarget(80.0, 0.0);
    assert_eq!(tween.value(500.0), 40.0);
    assert_eq!(tween.value(1_000.0), 80.0);
}

#[test]
fn tween_retarget_mid_flight_continues_from_shown_value() {
    let mut tween = Tween::new(0.0, Animation::new(1_000.0).with_easing(Easing::Linear));
    tween.retarget(80.0, 0.0);
    tween.retarget(0.0, 500.0);
    assert_eq!(tween.value(500.0), 40.0);
    assert_eq!(tween.value(1_500.0), 0.0);
}

#[test]
fn tween_same_target_does_not_restart() {
    let mut tween = Tween::new(0.0, Animation::new(1_000.0).with_easing(Easing::Linear));
    tween.retarget(80.0, 0.0);
    tween.retarget(80.0, 900.0);
    assert_eq!(tween.value(1_000.0), 80.0);
}

#[test]
fn tween_points() {
    let mut tween = Tween::new(Point::new(0.0, 0.0), Animation::new(100.0).with_easing(Easing::Linear));
    tween.retarget(Point::new(100.0, 50.0), 0.0);
    assert_eq!(tween.value(50.0), Point::new(50.0, 25.0));
}

#[test]
fn tween_snap_jumps() {
    let mut tween = Tween::new(0.0, Animation::new(100.0));
    tween.retarget(10.0, 0.0);
    tween.snap(3.0);
    assert_eq!(tween.value(50.0), 3.0);
    assert_eq!(tween.target(), 3.0);
}
