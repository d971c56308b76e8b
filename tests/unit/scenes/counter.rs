use super::*;

#[test]
fn one_step_moves_by_the_factor() {
    assert!((smooth_toward(100.0, 200.0, 0.18) - 118.0).abs() < 1e-9);
    assert_eq!(smooth_toward(50.0, 50.0, 0.18), 50.0);
}

#[test]
fn display_converges_within_the_derived_bound() {
    let mut c = CounterState::new(49.0, DEFAULT_SMOOTHING);
    let target = 1_249.0;
    let bound = frames_to_settle(target - 49.0, 0.5, DEFAULT_SMOOTHING);
    for _ in 0..bound {
        c.advance(target).unwrap();
    }
    assert!((c.display() - target).abs() <= 0.5);
    assert!(bound < 60, "bound={bound}");
}

#[test]
fn display_never_overshoots() {
    let mut c = CounterState::new(0.0, DEFAULT_SMOOTHING);
    let mut prev = 0.0;
    for _ in 0..200 {
        let d = c.advance(10.0).unwrap();
        assert!(d >= prev && d <= 10.0);
        prev = d;
    }
}

#[test]
fn state_carries_across_frames() {
    let mut c = CounterState::new(0.0, 0.5);
    assert_eq!(c.advance(8.0).unwrap(), 4.0);
    assert_eq!(c.advance(8.0).unwrap(), 6.0);
}

#[test]
fn non_finite_target_leaves_state_untouched() {
    let mut c = CounterState::new(12.0, 0.5);
    assert!(c.advance(f64::NAN).is_err());
    assert!(c.advance(f64::INFINITY).is_err());
    assert_eq!(c.display(), 12.0);
}

#[test]
fn settle_bound_edge_cases() {
    assert_eq!(frames_to_settle(0.2, 0.5, 0.18), 0);
    assert_eq!(frames_to_settle(100.0, 0.5, 1.0), 1);
    assert_eq!(frames_to_settle(-100.0, 0.5, 0.5), 8);
}

#[test]
fn settles_once_the_gap_is_below_epsilon() {
    let mut c = CounterState::new(49.0, DEFAULT_SMOOTHING);
    assert!(c.is_settled(49.0));
    assert!(!c.is_settled(399.0));
    let bound = frames_to_settle(350.0, SETTLE_EPSILON, DEFAULT_SMOOTHING);
    let mut frames = 0;
    while !c.is_settled(399.0) {
        c.advance(399.0).unwrap();
        frames += 1;
        assert!(frames <= bound, "frames={frames} bound={bound}");
    }
    assert_eq!(c.display().round(), 399.0);
    assert!(!c.is_settled(f64::NAN));
}
