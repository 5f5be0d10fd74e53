use super::*;

#[test]
fn defaults_to_thirty_seconds_stopped() {
    let c = Countdown::default();
    assert_eq!(c.remaining(), 30);
    assert!(!c.is_running());
}

#[test]
fn tick_while_stopped_is_idle() {
    let mut c = Countdown::new(3);
    assert_eq!(c.tick(), Tick::Idle);
    assert_eq!(c.remaining(), 3);
}

#[test]
fn runs_down_to_finish_then_resets() {
    let mut c = Countdown::new(3);
    c.set_running(true);
    assert_eq!(c.tick(), Tick::Remaining(2));
    assert_eq!(c.tick(), Tick::Remaining(1));
    assert_eq!(c.tick(), Tick::Finished);
    assert!(!c.is_running());
    assert_eq!(c.remaining(), 3);
    assert_eq!(c.tick(), Tick::Idle);
}

#[test]
fn stopping_midway_resets() {
    let mut c = Countdown::new(10);
    c.set_running(true);
    c.tick();
    c.tick();
    assert_eq!(c.remaining(), 8);
    c.set_running(false);
    assert_eq!(c.remaining(), 10);
}

#[test]
fn zero_length_countdown_finishes_on_first_tick() {
    let mut c = Countdown::new(0);
    c.set_running(true);
    assert_eq!(c.tick(), Tick::Finished);
}
