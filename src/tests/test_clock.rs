use crate::unix_millis;

#[test]
fn unix_millis_is_past_epoch_and_non_decreasing() {
    let a = unix_millis();
    // Any sane test host is decades past the epoch.
    assert!(a > 1_000_000_000_000, "unix_millis: {a}");

    std::thread::sleep(std::time::Duration::from_millis(5));
    let b = unix_millis();
    assert!(b >= a, "clock went backwards: {a} -> {b}");
}
