use super::*;

fn state() -> HeroState {
    HeroState::new(4, LoadGate::new(3, None, 0.0).unwrap()).unwrap()
}

#[test]
fn initial_state() {
    let s = state();
    assert_eq!(s.current().get(), 1);
    assert_eq!(s.upcoming().get(), 2);
    assert!(!s.has_clicked());
    assert!(!s.is_ready());
    assert_eq!(s.loaded_count(), 0);
}

#[test]
fn click_from_one_moves_to_two() {
    let mut s = state();
    let change = s.click();
    assert_eq!(change.from.get(), 1);
    assert_eq!(change.to.get(), 2);
    assert!(change.first_click);
    assert_eq!(s.current().get(), 2);
    assert_eq!(s.upcoming().get(), 3);
}

#[test]
fn click_from_four_wraps_to_one() {
    let mut s = state();
    for _ in 0..3 {
        s.click();
    }
    assert_eq!(s.current().get(), 4);
    assert_eq!(s.upcoming().get(), 1);
    let change = s.click();
    assert_eq!(change.to.get(), 1);
}

#[test]
fn has_clicked_latches_once() {
    let mut s = state();
    let firsts: Vec<bool> = (0..6).map(|_| s.click().first_click).collect();
    assert_eq!(firsts, vec![true, false, false, false, false, false]);
    assert!(s.has_clicked());
}

#[test]
fn upcoming_is_always_derived_from_current() {
    let mut s = state();
    for _ in 0..10 {
        assert_eq!(s.upcoming().get(), (s.current().get() % 4) + 1);
        s.click();
    }
}

#[test]
fn ready_after_three_loads_and_never_reverts() {
    let mut s = state();
    assert_eq!(s.video_loaded(), GateChange::Unchanged);
    assert_eq!(s.video_loaded(), GateChange::Unchanged);
    assert!(matches!(s.video_loaded(), GateChange::Opened(_)));
    assert!(s.is_ready());
    assert_eq!(s.video_loaded(), GateChange::Unchanged);
    s.click();
    assert!(s.is_ready());
}
