use smallvec::SmallVec;

use crate::foundation::error::{ReelError, ReelResult};
use crate::foundation::math::{clamp01, smoothstep};

/// Upper bound on the crossfade width, as a fraction of total progress.
pub const MAX_OVERLAP: f64 = 0.12;

/// Nominal slice `[start, end]` of raw progress owned by one scene.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SceneRange {
    /// Raw progress at which the scene nominally begins.
    pub start: f64,
    /// Raw progress at which the scene nominally ends.
    pub end: f64,
}

impl SceneRange {
    /// Nominal length of the range.
    pub fn len(self) -> f64 {
        self.end - self.start
    }

    /// Return `true` for a zero-length range.
    pub fn is_empty(self) -> bool {
        self.len() <= 0.0
    }
}

/// Per-frame derived state of one scene.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SceneState {
    /// Scene-relative progress in `[0, 1]`.
    pub local: f64,
    /// Crossfade weight in `[0, 1]`.
    pub weight: f64,
}

impl SceneState {
    /// State with no visual contribution.
    pub const HIDDEN: Self = Self {
        local: 0.0,
        weight: 0.0,
    };
}

/// Adjoining scene ranges covering `[0, 1]` plus the crossfade width between them.
///
/// Each shared boundary carries a blend band `overlap` wide centered on it; the outgoing scene
/// ramps out across the band while the incoming one ramps in, so their weights sum to one
/// everywhere inside it. The first scene never fades in and the last never fades out.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenePartition {
    ranges: SmallVec<[SceneRange; 4]>,
    overlap: f64,
}

impl ScenePartition {
    /// Partition `[0, 1]` proportionally to `lengths`; zero lengths are skipped.
    ///
    /// The requested overlap is capped at [`MAX_OVERLAP`] and additionally shrunk to half the
    /// shortest scene so no blend band can swallow a neighbor.
    pub fn new(lengths: &[f64], overlap: f64) -> ReelResult<Self> {
        if lengths.iter().any(|l| !l.is_finite() || *l < 0.0) {
            return Err(ReelError::validation(
                "scene lengths must be finite and non-negative",
            ));
        }
        if !overlap.is_finite() || overlap < 0.0 {
            return Err(ReelError::validation(
                "overlap must be finite and non-negative",
            ));
        }
        let total: f64 = lengths.iter().sum();
        if total <= 0.0 {
            return Err(ReelError::validation(
                "at least one scene must have a positive length",
            ));
        }

        let mut ranges: SmallVec<[SceneRange; 4]> = SmallVec::new();
        let mut acc = 0.0;
        for &len in lengths.iter().filter(|l| **l > 0.0) {
            let start = acc / total;
            acc += len;
            ranges.push(SceneRange {
                start,
                end: acc / total,
            });
        }
        if let Some(last) = ranges.last_mut() {
            last.end = 1.0;
        }

        let shortest = ranges.iter().map(|r| r.len()).fold(f64::INFINITY, f64::min);
        let capped = overlap.min(MAX_OVERLAP);
        let effective = capped.min(shortest * 0.5);
        if effective < capped {
            tracing::warn!(
                requested = overlap,
                effective,
                "overlap shrunk to keep scene ranges non-degenerate"
            );
        }

        Ok(Self {
            ranges,
            overlap: effective,
        })
    }

    /// Ranges in scene order.
    pub fn ranges(&self) -> &[SceneRange] {
        &self.ranges
    }

    /// Effective crossfade width after capping.
    pub fn overlap(&self) -> f64 {
        self.overlap
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Return `true` when no scene is present.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Crossfade weight of scene `idx` at `raw`; zero for an unknown index.
    pub fn weight(&self, idx: usize, raw: f64) -> f64 {
        let Some(range) = self.ranges.get(idx) else {
            return 0.0;
        };
        let half = self.overlap * 0.5;
        let fade_in = if idx == 0 {
            1.0
        } else {
            smoothstep(range.start - half, range.start + half, raw)
        };
        let fade_out = if idx + 1 == self.ranges.len() {
            1.0
        } else {
            1.0 - smoothstep(range.end - half, range.end + half, raw)
        };
        fade_in * fade_out
    }

    /// Scene-relative progress of scene `idx` at `raw`; zero for an unknown index.
    pub fn local(&self, idx: usize, raw: f64) -> f64 {
        let Some(range) = self.ranges.get(idx) else {
            return 0.0;
        };
        clamp01((raw - range.start) / range.len())
    }

    /// Derive every scene's state from the same `raw` sample.
    pub fn states(&self, raw: f64) -> SmallVec<[SceneState; 4]> {
        (0..self.ranges.len())
            .map(|idx| SceneState {
                local: self.local(idx, raw),
                weight: self.weight(idx, raw),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/track/partition.rs"]
mod tests;
