use std::{
    sync::{
        Arc, Barrier,
        atomic::{AtomicU64, Ordering},
    },
    thread,
    time::Duration,
};

use crate::IntervalGate;

#[test]
fn non_positive_interval_always_passes() {
    for interval in [0, -1, i64::MIN] {
        let gate = IntervalGate::new(interval);

        for now in [0, 1, 1_000, i64::MAX, -5_000] {
            assert!(
                gate.try_acquire_at(now),
                "interval={interval} now={now} should pass"
            );
        }
    }
}

#[test]
fn first_call_wins_then_window_suppresses() {
    let gate = IntervalGate::new(1_000);

    assert!(gate.try_acquire_at(5_000));
    assert!(!gate.try_acquire_at(5_000));
    assert!(!gate.try_acquire_at(5_999));
    assert!(gate.try_acquire_at(6_000));
    assert!(!gate.try_acquire_at(6_500));
}

#[test]
fn repeated_calls_with_same_now_pass_only_once() {
    let gate = IntervalGate::new(100);

    assert!(gate.try_acquire_at(10_000));
    for _ in 0..50 {
        assert!(!gate.try_acquire_at(10_000));
    }
}

#[test]
fn accepted_timestamps_are_separated_by_at_least_the_interval() {
    let interval = 7;
    let gate = IntervalGate::new(interval);

    let mut accepted = Vec::new();
    for now in 1_000..1_100 {
        if gate.try_acquire_at(now) {
            accepted.push(now);
        }
    }

    assert!(!accepted.is_empty());
    for pair in accepted.windows(2) {
        assert!(
            pair[1] - pair[0] >= interval,
            "accepted {} and {} are closer than {}",
            pair[0],
            pair[1],
            interval
        );
    }
}

#[test]
fn backward_clock_jump_is_suppressed_until_window_from_last_fired() {
    let gate = IntervalGate::new(1_000);

    assert!(gate.try_acquire_at(10_000));

    // Clock stepped backwards: now - last_fired is negative, stays inside
    // the window rather than wrapping or panicking.
    assert!(!gate.try_acquire_at(4_000));
    assert!(!gate.try_acquire_at(10_500));

    assert!(gate.try_acquire_at(11_000));
}

#[test]
fn from_duration_matches_millisecond_interval() {
    let gate = IntervalGate::from_duration(Duration::from_secs(2));
    assert_eq!(gate.interval_ms(), 2_000);

    assert!(gate.try_acquire_at(1_000));
    assert!(!gate.try_acquire_at(2_999));
    assert!(gate.try_acquire_at(3_000));
}

#[test]
fn wall_clock_try_acquire_passes_again_after_interval() {
    let gate = IntervalGate::new(50);

    assert!(gate.try_acquire());
    assert!(!gate.try_acquire());

    thread::sleep(Duration::from_millis(80));
    assert!(gate.try_acquire());
}

#[test]
fn distinct_gates_do_not_influence_each_other() {
    let a = IntervalGate::new(1_000);
    let b = IntervalGate::new(1_000);

    assert!(a.try_acquire_at(5_000));
    assert!(!a.try_acquire_at(5_001));

    // b is untouched by a's acquisition.
    assert!(b.try_acquire_at(5_001));
}

#[test]
fn concurrent_calls_with_same_now_have_exactly_one_winner() {
    let threads = 8;

    for trial in 0..50 {
        let gate = Arc::new(IntervalGate::new(1_000));
        let barrier = Arc::new(Barrier::new(threads));
        let wins = Arc::new(AtomicU64::new(0));
        let now = 1_000_000 + trial;

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let gate = Arc::clone(&gate);
                let barrier = Arc::clone(&barrier);
                let wins = Arc::clone(&wins);

                thread::spawn(move || {
                    barrier.wait();
                    if gate.try_acquire_at(now) {
                        wins.fetch_add(1, Ordering::Relaxed);
                    }
                })
            })
            .collect();

        for t in handles {
            t.join().expect("thread panicked");
        }

        assert_eq!(
            wins.load(Ordering::Relaxed),
            1,
            "trial {trial}: expected exactly one winner"
        );
    }
}
