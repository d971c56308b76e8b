//! Letter-by-letter phrase reveal.
//!
//! Every character flies in from a synthetic origin: a cyclic four-way direction (left, right,
//! top, bottom) plus deterministic symmetric jitter so neighbors never move in lockstep. Plans
//! are generated once per phrase and viewport and never randomized per frame.

use crate::animation::ease::Ease;
use crate::foundation::core::{Pose, Vec2, Viewport};
use crate::foundation::error::{ReelError, ReelResult};
use crate::foundation::math::{signed_jitter, window};

const DIRECTIONS: [(f64, f64); 4] = [(-1.0, 0.0), (1.0, 0.0), (0.0, -1.0), (0.0, 1.0)];

/// Flight plan of one character.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LetterPlan {
    /// Character index in the phrase.
    pub index: usize,
    /// The character itself.
    pub ch: char,
    /// Offset in pixels the character starts from.
    pub start_offset: Vec2,
    /// Local progress at which the character starts moving.
    pub start_delay: f64,
    /// Local progress the flight takes.
    pub duration: f64,
}

impl LetterPlan {
    /// Pose at `local`, opacity scaled by `weight`.
    pub fn sample(&self, local: f64, weight: f64) -> Pose {
        let p = Ease::InOutQuad.apply(window(local, self.start_delay, self.duration));
        Pose {
            translate: self.start_offset * (1.0 - p),
            opacity: p * weight,
            ..Pose::default()
        }
    }
}

/// Generator for [`LetterPlan`]s.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LetterReveal {
    /// Local progress before the first character moves.
    pub lead: f64,
    /// Preferred delay step between consecutive characters.
    pub step: f64,
    /// Flight duration of each character.
    pub duration: f64,
    /// Flight distance as a fraction of the viewport's smaller side.
    pub travel: f64,
    /// Jitter amplitude as a fraction of the flight distance.
    pub jitter: f64,
}

impl Default for LetterReveal {
    fn default() -> Self {
        Self {
            lead: 0.05,
            step: 0.025,
            duration: 0.30,
            travel: 0.35,
            jitter: 0.15,
        }
    }
}

impl LetterReveal {
    /// Delay step for `count` characters, compressed so the last flight ends by `local = 1`.
    pub fn effective_step(&self, count: usize) -> f64 {
        if count < 2 {
            return self.step;
        }
        let room = (1.0 - self.lead - self.duration).max(0.0);
        self.step.min(room / (count - 1) as f64)
    }

    /// Generate one plan per character of `phrase`.
    pub fn plans(&self, phrase: &str, viewport: Viewport) -> Vec<LetterPlan> {
        let count = phrase.chars().count();
        let step = self.effective_step(count);
        let distance = self.travel * viewport.min_side();
        let jitter = self.jitter * distance;

        phrase
            .chars()
            .enumerate()
            .map(|(index, ch)| {
                let (dx, dy) = DIRECTIONS[index % DIRECTIONS.len()];
                let i = index as u64;
                let wobble = Vec2::new(signed_jitter(i, 0), signed_jitter(i, 1)) * jitter;
                LetterPlan {
                    index,
                    ch,
                    start_offset: Vec2::new(dx, dy) * distance + wobble,
                    start_delay: self.lead + step * index as f64,
                    duration: self.duration,
                }
            })
            .collect()
    }
}

/// Per-character `background-position` offsets keeping a shared gradient continuous.
///
/// Built once from measured glyph advances after font layout, then held constant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GradientOffsets {
    offsets: Vec<f64>,
    total: f64,
}

impl GradientOffsets {
    /// Cumulative offsets from per-character advances in pixels.
    pub fn from_advances(advances: &[f64]) -> ReelResult<Self> {
        if advances.iter().any(|a| !a.is_finite() || *a < 0.0) {
            return Err(ReelError::geometry(
                "letter advances must be finite and non-negative",
            ));
        }
        let mut offsets = Vec::with_capacity(advances.len());
        let mut total = 0.0;
        for a in advances {
            offsets.push(total);
            total += a;
        }
        Ok(Self { offsets, total })
    }

    /// Horizontal offset of character `idx`, if measured.
    pub fn offset(&self, idx: usize) -> Option<f64> {
        self.offsets.get(idx).copied()
    }

    /// Number of measured characters.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Return `true` when nothing was measured.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Full phrase width in pixels.
    pub fn total_width(&self) -> f64 {
        self.total
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/letters.rs"]
mod tests;
