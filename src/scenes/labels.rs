use crate::animation::ease::Ease;
use crate::foundation::core::{Pose, Vec2};
use crate::foundation::math::{clamp01, lerp, window};

/// Staggered word reveal with a shared exit fade.
///
/// Each word pops in through its own [`Ease::OutBack`] window; all words then fade out together
/// across one exit window regardless of when they entered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelTimeline {
    /// Entrance start of the first word.
    pub first_start: f64,
    /// Preferred delay between consecutive words.
    pub stagger: f64,
    /// Entrance window length of one word.
    pub duration: f64,
    /// Shared exit window start.
    pub exit_start: f64,
    /// Shared exit window length.
    pub exit_duration: f64,
    /// Vertical distance in pixels a word rises during its entrance.
    pub rise_px: f64,
}

impl Default for LabelTimeline {
    fn default() -> Self {
        Self {
            first_start: 0.30,
            stagger: 0.05,
            duration: 0.12,
            exit_start: 0.56,
            exit_duration: 0.08,
            rise_px: 40.0,
        }
    }
}

impl LabelTimeline {
    /// Stagger actually used for `count` words, compressed so every entrance ends before the exit.
    pub fn effective_stagger(&self, count: usize) -> f64 {
        if count < 2 {
            return self.stagger;
        }
        let room = (self.exit_start - self.first_start - self.duration).max(0.0);
        self.stagger.min(room / (count - 1) as f64)
    }

    /// Entrance window start of word `idx` out of `count`.
    pub fn start_of(&self, idx: usize, count: usize) -> f64 {
        self.first_start + self.effective_stagger(count) * idx as f64
    }

    /// Pose of word `idx` out of `count` at `local`, opacity scaled by `weight`.
    pub fn sample(&self, idx: usize, count: usize, local: f64, weight: f64) -> Pose {
        let p = window(local, self.start_of(idx, count), self.duration);
        let e = Ease::OutBack.apply(p);
        let exit = 1.0 - Ease::InOutQuad.apply(window(local, self.exit_start, self.exit_duration));
        Pose {
            translate: Vec2::new(0.0, lerp(self.rise_px, 0.0, e)),
            scale: lerp(0.8, 1.0, e),
            rotation_deg: 0.0,
            opacity: clamp01(e) * exit * weight,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/labels.rs"]
mod tests;
