//! Scrollreel is a scroll-driven choreography engine for landing-page sequences.
//!
//! A single scroll position is turned into a normalized progress value, split across scenes with
//! soft crossfades, and evaluated into element poses and styles that a host page applies once
//! per display frame.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: anchor measurement or viewport fallback -> [`TrackLength`]
//! 2. **Sample**: viewport height + section rect top -> `raw` progress ([`ProgressSampler`])
//! 3. **Partition**: `raw` -> per-scene local progress and crossfade weight ([`ScenePartition`])
//! 4. **Evaluate**: scene states -> element writes ([`Timeline`])
//! 5. **Apply**: element writes -> inline styles through a [`TransformSink`]
//!
//! [`EngineInstance`] owns the host wiring: listeners, resize observers and frame coalescing.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure frames**: a frame is a function of the progress sample, the viewport and the
//!   previous counter value; nothing else carries over.
//! - **Soft failure on the page**: missing elements and anchors degrade silently; errors are
//!   reserved for bad configuration and non-finite values.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod engine;
mod foundation;
mod scenes;
mod track;

pub use animation::anim::{ElementPlan, Lerp, Phase, Tween};
pub use animation::ease::{Ease, ease_in_out, ease_out_back};
pub use config::{ContentConfig, EngineConfig, PricingConfig};
pub use engine::headless::HeadlessHost;
pub use engine::host::{FrameToken, Host, ObserveTarget, ObserverId};
pub use engine::instance::EngineInstance;
pub use engine::scheduler::FrameScheduler;
pub use engine::sink::{InMemorySink, StyleValue, TransformSink};
pub use engine::timeline::{ElementWrite, FrameOutput, Timeline, apply};
pub use foundation::core::{Affine, ElementId, Pose, Vec2, Viewport};
pub use foundation::error::{ReelError, ReelResult};
pub use foundation::math::{clamp01, lerp, smoothstep, window};
pub use scenes::checklist::{
    CHECK_PATH_LEN, ChecklistTimeline, PricingFrame, RowFill, RowFrame, RowKind, RowSpec,
};
pub use scenes::counter::{
    CounterState, DEFAULT_SMOOTHING, SETTLE_EPSILON, frames_to_settle, smooth_toward,
};
pub use scenes::deck::{CARD_COUNT, DeckPhase, DeckThresholds, DeckTimeline};
pub use scenes::labels::LabelTimeline;
pub use scenes::letters::{GradientOffsets, LetterPlan, LetterReveal};
pub use scenes::title::TitleTimeline;
pub use track::partition::{MAX_OVERLAP, ScenePartition, SceneRange, SceneState};
pub use track::resolver::{TrackHeight, TrackLength, TrackResolver, measure_anchor};
pub use track::sampler::{ProgressSampler, ScrollTrack};
