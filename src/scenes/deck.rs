//! Deck assembly: cards fly in from off-screen, fan out, collect into a stack, then lift away.
//!
//! Every card's pose is a pure function of scene-local progress. Phases are ordered thresholds
//! over `local`, never remembered state, so scrolling backwards replays the sequence exactly.

use smallvec::SmallVec;

use crate::animation::anim::{ElementPlan, Phase};
use crate::animation::ease::Ease;
use crate::foundation::core::{Pose, Vec2, Viewport};

/// Number of cards in the deck.
pub const CARD_COUNT: usize = 5;

// (x, y) in viewport fractions, rotation in degrees, scale
const ENTRY_ORIGINS: [(f64, f64, f64, f64); CARD_COUNT] = [
    (-1.25, -0.35, -38.0, 0.70),
    (1.20, -0.50, 32.0, 0.70),
    (-1.10, 0.65, 26.0, 0.75),
    (1.15, 0.70, -30.0, 0.75),
    (0.0, 1.25, 14.0, 0.80),
];

const FAN_X_STEP: f64 = 0.17;
const FAN_Y: [f64; CARD_COUNT] = [0.05, -0.01, -0.04, -0.01, 0.05];
const FAN_ROT_STEP: f64 = 7.0;

const STACK_X_STEP_PX: f64 = 6.0;
const STACK_Y_STEP_PX: f64 = 4.0;
const STACK_ROT_STEP: f64 = 1.5;
const STACK_SCALE: f64 = 0.92;

const EXIT_LIFT: f64 = 1.15;

/// Where a card is in its journey for a given local progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum DeckPhase {
    /// Held off-screen and invisible.
    Idle,
    /// Travelling to its fan position.
    Entering,
    /// Resting in the fan.
    Settled,
    /// Collecting into the shared stack.
    Stacking,
    /// Lifting off-screen with the stack.
    Exiting,
}

/// Local-progress thresholds driving the deck.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeckThresholds {
    /// Entrance start of the first card.
    pub first_entry: f64,
    /// Delay between consecutive card entrances.
    pub entry_stagger: f64,
    /// Length of each card's entrance.
    pub entry_duration: f64,
    /// Start of the stack phase, shared by all cards.
    pub stack_start: f64,
    /// Length of the stack phase.
    pub stack_duration: f64,
    /// Start of the exit phase, shared by all cards.
    pub exit_start: f64,
    /// Length of the exit phase.
    pub exit_duration: f64,
}

impl Default for DeckThresholds {
    fn default() -> Self {
        Self {
            first_entry: 0.08,
            entry_stagger: 0.07,
            entry_duration: 0.20,
            stack_start: 0.62,
            stack_duration: 0.16,
            exit_start: 0.84,
            exit_duration: 0.16,
        }
    }
}

impl DeckThresholds {
    /// Entrance window start of card `idx`.
    pub fn entry_start(&self, idx: usize) -> f64 {
        self.first_entry + self.entry_stagger * idx as f64
    }

    /// Entrance window end of card `idx`.
    pub fn entry_end(&self, idx: usize) -> f64 {
        self.entry_start(idx) + self.entry_duration
    }

    /// Classify `local` for card `idx`.
    pub fn phase_at(&self, idx: usize, local: f64) -> DeckPhase {
        if local <= self.entry_start(idx) {
            DeckPhase::Idle
        } else if local < self.entry_end(idx) {
            DeckPhase::Entering
        } else if local <= self.stack_start {
            DeckPhase::Settled
        } else if local <= self.exit_start {
            DeckPhase::Stacking
        } else {
            DeckPhase::Exiting
        }
    }
}

/// Card deck evaluator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeckTimeline {
    /// Phase thresholds.
    pub thresholds: DeckThresholds,
}

impl DeckTimeline {
    /// Off-screen pose a card starts from.
    pub fn origin(idx: usize, viewport: Viewport) -> Pose {
        let (x, y, rot, scale) = ENTRY_ORIGINS[idx % CARD_COUNT];
        Pose::at(x * viewport.width, y * viewport.height, rot, scale).with_opacity(0.0)
    }

    /// Fanned on-screen layout pose of a card.
    pub fn fan(idx: usize, viewport: Viewport) -> Pose {
        let offset = idx as f64 - (CARD_COUNT as f64 - 1.0) / 2.0;
        Pose::at(
            offset * FAN_X_STEP * viewport.width,
            FAN_Y[idx % CARD_COUNT] * viewport.height,
            offset * FAN_ROT_STEP,
            1.0,
        )
    }

    /// Pose of a card once collected into the deck.
    pub fn stacked(idx: usize) -> Pose {
        let offset = idx as f64 - (CARD_COUNT as f64 - 1.0) / 2.0;
        Pose::at(
            offset * STACK_X_STEP_PX,
            -(idx as f64) * STACK_Y_STEP_PX,
            offset * STACK_ROT_STEP,
            STACK_SCALE,
        )
    }

    /// Full phase plan for card `idx`.
    pub fn plan(&self, idx: usize, viewport: Viewport) -> ElementPlan {
        let th = &self.thresholds;
        let stacked = Self::stacked(idx);
        let lifted = Pose {
            translate: stacked.translate - Vec2::new(0.0, EXIT_LIFT * viewport.height),
            ..stacked
        }
        .with_opacity(0.0);

        ElementPlan::new(Self::origin(idx, viewport))
            .then(Phase {
                start: th.entry_start(idx),
                duration: th.entry_duration,
                ease: Ease::InOutQuad,
                opacity_ease: Ease::InOutQuad,
                to: Self::fan(idx, viewport),
            })
            .then(Phase {
                start: th.stack_start,
                duration: th.stack_duration,
                ease: Ease::InOutQuad,
                opacity_ease: Ease::Linear,
                to: stacked,
            })
            .then(Phase {
                start: th.exit_start,
                duration: th.exit_duration,
                ease: Ease::InOutQuad,
                opacity_ease: Ease::OutCubic,
                to: lifted,
            })
    }

    /// Poses of every card at `local`, opacity scaled by `weight`.
    pub fn sample(
        &self,
        local: f64,
        weight: f64,
        viewport: Viewport,
    ) -> SmallVec<[Pose; CARD_COUNT]> {
        (0..CARD_COUNT)
            .map(|idx| {
                let pose = self.plan(idx, viewport).sample(local);
                pose.with_opacity(pose.opacity * weight)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/deck.rs"]
mod tests;
