use super::*;

const VP: Viewport = Viewport {
    width: 1280.0,
    height: 800.0,
};

#[test]
fn plans_cycle_through_four_directions() {
    let plans = LetterReveal::default().plans("abcdefgh", VP);
    assert_eq!(plans.len(), 8);
    assert!(plans[0].start_offset.x < -200.0);
    assert!(plans[1].start_offset.x > 200.0);
    assert!(plans[2].start_offset.y < -200.0);
    assert!(plans[3].start_offset.y > 200.0);
    assert!(plans[4].start_offset.x < -200.0);
}

#[test]
fn neighbors_in_the_same_direction_do_not_move_in_lockstep() {
    let plans = LetterReveal::default().plans("abcdefgh", VP);
    assert_ne!(plans[0].start_offset, plans[4].start_offset);
    assert_ne!(plans[1].start_offset, plans[5].start_offset);
}

#[test]
fn plans_are_deterministic() {
    let r = LetterReveal::default();
    assert_eq!(r.plans("Ship it.", VP), r.plans("Ship it.", VP));
}

#[test]
fn delays_increase_by_a_fixed_step() {
    let r = LetterReveal::default();
    let plans = r.plans("hello", VP);
    for pair in plans.windows(2) {
        assert!((pair[1].start_delay - pair[0].start_delay - r.step).abs() < 1e-12);
    }
    assert!(plans.iter().all(|p| p.duration == r.duration));
}

#[test]
fn long_phrases_finish_by_the_end() {
    let r = LetterReveal::default();
    let plans = r.plans(&"x".repeat(80), VP);
    let last = plans.last().unwrap();
    assert!(last.start_delay + last.duration <= 1.0 + 1e-12);
}

#[test]
fn letters_fly_to_rest_and_fade_in() {
    let plan = LetterReveal::default().plans("ab", VP)[1];
    let before = plan.sample(0.0, 1.0);
    assert_eq!(before.translate, plan.start_offset);
    assert_eq!(before.opacity, 0.0);

    let after = plan.sample(1.0, 0.5);
    assert_eq!(after.translate, Vec2::ZERO);
    assert_eq!(after.opacity, 0.5);
}

#[test]
fn multibyte_characters_count_once() {
    let plans = LetterReveal::default().plans("héllo", VP);
    assert_eq!(plans.len(), 5);
    assert_eq!(plans[1].ch, 'é');
}

#[test]
fn gradient_offsets_accumulate_advances() {
    let g = GradientOffsets::from_advances(&[10.0, 12.5, 8.0]).unwrap();
    assert_eq!(g.offset(0), Some(0.0));
    assert_eq!(g.offset(2), Some(22.5));
    assert_eq!(g.offset(3), None);
    assert_eq!(g.total_width(), 30.5);
    assert_eq!(g.len(), 3);
}

#[test]
fn gradient_offsets_reject_bad_measurements() {
    assert!(GradientOffsets::from_advances(&[1.0, f64::NAN]).is_err());
    assert!(GradientOffsets::from_advances(&[-1.0]).is_err());
}
