use std::time::{Duration, Instant};

use jobboard_core::Debouncer;

const DELAY: Duration = Duration::from_millis(300);

fn at(base: Instant, ms: u64) -> Instant {
    base + Duration::from_millis(ms)
}

#[test]
fn emits_nothing_before_quiet_period() {
    let base = Instant::now();
    let mut debouncer = Debouncer::new(DELAY);

    debouncer.push("qa".to_string(), base);

    // No leading edge, and nothing until the window has elapsed.
    assert_eq!(debouncer.delay(), DELAY);
    assert_eq!(debouncer.poll(base), None);
    assert_eq!(debouncer.poll(at(base, 299)), None);
    assert!(debouncer.is_armed());
}

#[test]
fn emits_last_value_exactly_once_after_quiet_period() {
    let base = Instant::now();
    let mut debouncer = Debouncer::new(DELAY);

    debouncer.push("q".to_string(), base);
    debouncer.push("qa".to_string(), at(base, 50));
    debouncer.push("qa e".to_string(), at(base, 120));

    // Window restarts from the last push.
    assert_eq!(debouncer.poll(at(base, 350)), None);
    assert_eq!(debouncer.poll(at(base, 420)), Some("qa e".to_string()));
    assert_eq!(debouncer.poll(at(base, 10_000)), None);
    assert!(!debouncer.is_armed());
}

#[test]
fn emits_exactly_at_the_window_boundary() {
    let base = Instant::now();
    let mut debouncer = Debouncer::new(DELAY);

    debouncer.push(7u32, base);
    assert_eq!(debouncer.poll(at(base, 300)), Some(7));
}

#[test]
fn push_rearms_a_ready_but_unpolled_value() {
    let base = Instant::now();
    let mut debouncer = Debouncer::new(DELAY);

    debouncer.push("first".to_string(), base);
    // The first value became ready but was never polled; a new push
    // replaces it and restarts the window.
    debouncer.push("second".to_string(), at(base, 500));

    assert_eq!(debouncer.poll(at(base, 700)), None);
    assert_eq!(debouncer.poll(at(base, 800)), Some("second".to_string()));
}

#[test]
fn cancel_drops_pending_value_without_emitting() {
    let base = Instant::now();
    let mut debouncer = Debouncer::new(DELAY);

    debouncer.push("qa".to_string(), base);
    debouncer.cancel();

    assert!(!debouncer.is_armed());
    assert_eq!(debouncer.poll(at(base, 1_000)), None);
}

#[test]
fn poll_tolerates_a_clock_reading_before_the_arm_time() {
    let base = Instant::now();
    let mut debouncer = Debouncer::new(DELAY);

    debouncer.push(1u8, at(base, 100));
    assert_eq!(debouncer.poll(base), None);
    assert!(debouncer.is_armed());
}
