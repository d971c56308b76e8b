use super::*;

fn two_phase_plan() -> ElementPlan {
    ElementPlan::new(Pose::at(-100.0, 0.0, 20.0, 0.5).with_opacity(0.0))
        .then(Phase {
            start: 0.2,
            duration: 0.2,
            ease: Ease::Linear,
            opacity_ease: Ease::Linear,
            to: Pose::at(0.0, 0.0, 0.0, 1.0),
        })
        .then(Phase {
            start: 0.6,
            duration: 0.2,
            ease: Ease::Linear,
            opacity_ease: Ease::Linear,
            to: Pose::at(0.0, -50.0, 0.0, 1.0).with_opacity(0.0),
        })
}

#[test]
fn tween_holds_outside_window() {
    let t = Tween {
        start: 0.5,
        duration: 0.25,
        ease: Ease::InOutQuad,
        from: 2.0,
        to: 6.0,
    };
    assert_eq!(t.sample(0.0), 2.0);
    assert_eq!(t.sample(1.0), 6.0);
    assert_eq!(t.sample(0.625), 4.0);
    assert_eq!(t.end(), 0.75);
}

#[test]
fn plan_holds_rest_before_first_phase() {
    let plan = two_phase_plan();
    let p = plan.sample(0.1);
    assert_eq!(p, plan.rest);
    assert_eq!(plan.active_phase(0.1), None);
}

#[test]
fn plan_settles_between_phases() {
    let plan = two_phase_plan();
    let p = plan.sample(0.5);
    assert_eq!(p.translate, Vec2::ZERO);
    assert_eq!(p.opacity, 1.0);
    assert_eq!(plan.active_phase(0.5), Some(0));
}

#[test]
fn later_phase_composes_onto_earlier_result() {
    let plan = two_phase_plan();
    let p = plan.sample(0.7);
    assert!((p.translate.y + 25.0).abs() < 1e-9);
    assert!((p.opacity - 0.5).abs() < 1e-9);
    assert_eq!(plan.active_phase(0.7), Some(1));
}

#[test]
fn sampling_is_continuous_at_phase_start() {
    let plan = two_phase_plan();
    let before = plan.sample(0.6 - 1e-9);
    let after = plan.sample(0.6 + 1e-9);
    assert!((before.translate - after.translate).hypot() < 1e-6);
    assert!((before.opacity - after.opacity).abs() < 1e-6);
}
