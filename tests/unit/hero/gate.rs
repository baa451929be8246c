use super::*;

#[test]
fn opens_exactly_once_when_quota_is_met() {
    let mut g = LoadGate::new(3, None, 0.0).unwrap();
    let mut opened = 0;
    let mut last = 0;
    for _ in 0..5 {
        if g.on_video_loaded() == GateChange::Opened(ReadyReason::Loaded) {
            opened += 1;
            assert_eq!(g.loaded_count(), 3);
        }
        assert!(g.loaded_count() > last);
        last = g.loaded_count();
    }
    assert_eq!(opened, 1);
    assert!(g.is_ready());
    assert_eq!(g.loaded_count(), 5);
}

#[test]
fn stays_closed_below_quota_without_timeout() {
    let mut g = LoadGate::new(3, None, 0.0).unwrap();
    g.on_video_loaded();
    g.on_video_loaded();
    assert_eq!(g.poll(1.0e9), GateChange::Unchanged);
    assert!(!g.is_ready());
}

#[test]
fn timeout_fallback_opens_the_gate() {
    let mut g = LoadGate::new(3, Some(8.0), 1.0).unwrap();
    assert_eq!(g.poll(8.9), GateChange::Unchanged);
    assert_eq!(g.poll(9.0), GateChange::Opened(ReadyReason::TimedOut));
    assert_eq!(g.poll(10.0), GateChange::Unchanged);
    assert_eq!(g.on_video_loaded(), GateChange::Unchanged);
    assert_eq!(g.ready_reason(), Some(ReadyReason::TimedOut));
}

#[test]
fn zero_quota_starts_open() {
    let g = LoadGate::new(0, None, 0.0).unwrap();
    assert!(g.is_ready());
}

#[test]
fn invalid_timeout_is_rejected() {
    assert!(LoadGate::new(3, Some(0.0), 0.0).is_err());
    assert!(LoadGate::new(3, Some(f64::NAN), 0.0).is_err());
}
