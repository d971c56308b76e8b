use super::*;

fn scenario() -> ScenePartition {
    ScenePartition::new(&[320.0, 380.0, 0.0], 0.06).unwrap()
}

#[test]
fn zero_length_trailing_scene_is_dropped() {
    let p = scenario();
    assert_eq!(p.len(), 2);
    assert_eq!(p.ranges()[0].start, 0.0);
    assert_eq!(p.ranges()[1].end, 1.0);
    assert_eq!(p.ranges()[0].end, p.ranges()[1].start);
}

#[test]
fn scenario_weights_at_top_and_boundary() {
    let p = scenario();
    assert!((p.weight(0, 0.0) - 1.0).abs() < 1e-9);
    assert!(p.weight(1, 0.0).abs() < 1e-9);

    let boundary = p.ranges()[0].end;
    assert!((p.weight(0, boundary) - 0.5).abs() < 1e-9);
    assert!((p.weight(1, boundary) - 0.5).abs() < 1e-9);
}

#[test]
fn last_scene_holds_full_weight_at_end() {
    let p = scenario();
    assert_eq!(p.weight(1, 1.0), 1.0);
    assert_eq!(p.weight(0, 1.0), 0.0);
    assert_eq!(p.local(1, 1.0), 1.0);
}

#[test]
fn every_sample_has_a_visible_scene() {
    let p = ScenePartition::new(&[320.0, 380.0, 150.0], 0.08).unwrap();
    for i in 0..=1000 {
        let raw = f64::from(i) / 1000.0;
        let total: f64 = (0..p.len()).map(|s| p.weight(s, raw)).sum();
        assert!(total > 0.99, "raw={raw} total={total}");
        assert!(total < 1.0 + 1e-9, "raw={raw} total={total}");
    }
}

#[test]
fn weights_are_continuous_across_bands() {
    let p = ScenePartition::new(&[320.0, 380.0, 150.0], 0.08).unwrap();
    let step = 1e-4;
    for s in 0..p.len() {
        let mut prev = p.weight(s, 0.0);
        let mut raw = step;
        while raw <= 1.0 {
            let w = p.weight(s, raw);
            assert!((w - prev).abs() < 0.01, "scene {s} jumps at {raw}");
            prev = w;
            raw += step;
        }
    }
}

#[test]
fn local_is_clamped_linear_map() {
    let p = scenario();
    let r = p.ranges()[1];
    assert_eq!(p.local(1, r.start - 0.1), 0.0);
    assert!((p.local(1, r.start + r.len() * 0.25) - 0.25).abs() < 1e-9);
    assert_eq!(p.local(7, 0.5), 0.0);
    assert_eq!(p.weight(7, 0.5), 0.0);
}

#[test]
fn overlap_is_capped_and_shrunk() {
    let capped = ScenePartition::new(&[100.0, 100.0], 0.5).unwrap();
    assert_eq!(capped.overlap(), MAX_OVERLAP);

    let shrunk = ScenePartition::new(&[1000.0, 20.0], 0.1).unwrap();
    let shortest = shrunk.ranges()[1].len();
    assert!((shrunk.overlap() - shortest * 0.5).abs() < 1e-12);
}

#[test]
fn rejects_bad_input() {
    assert!(ScenePartition::new(&[0.0, 0.0], 0.06).is_err());
    assert!(ScenePartition::new(&[-1.0, 10.0], 0.06).is_err());
    assert!(ScenePartition::new(&[10.0, 10.0], f64::NAN).is_err());
}

#[test]
fn states_come_from_one_sample() {
    let p = scenario();
    let states = p.states(0.3);
    assert_eq!(states.len(), 2);
    assert_eq!(states[0].weight, p.weight(0, 0.3));
    assert_eq!(states[1].local, p.local(1, 0.3));
}
