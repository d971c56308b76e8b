use crate::foundation::error::{ReelError, ReelResult};
use crate::foundation::math::clamp01;
use crate::track::resolver::TrackLength;

/// One sample of the scrollable region, recomputed every scheduled frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollTrack {
    /// Total section length in pixels.
    pub total_length: f64,
    /// Scroll distance over which progress runs from 0 to 1, at least 1px.
    pub travel: f64,
    /// Progress through the whole section in `[0, 1]`.
    pub raw: f64,
}

/// Maps section geometry to raw progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressSampler {
    global_raw_end: f64,
}

impl ProgressSampler {
    /// Build a sampler; `global_raw_end` only applies to normalized track lengths.
    pub fn new(global_raw_end: f64) -> Self {
        Self { global_raw_end }
    }

    /// Tail-cut fraction used by the normalized fallback.
    pub fn global_raw_end(&self) -> f64 {
        self.global_raw_end
    }

    /// Sample progress from the viewport height and the section's bounding-rect top.
    ///
    /// `raw = clamp((viewportHeight - sectionTop) / travel, 0, 1)`. For a normalized length the
    /// result is further rescaled by `1 / global_raw_end` and clamped again, so the tail of the
    /// scroll still reaches exactly 1.
    ///
    /// `raw` is 0 only while `section_top >= viewport_height`. A section that starts less than
    /// one viewport below the top of the document is already partway through on first paint, so
    /// place it at least one viewport below the fold for every scene to start from rest.
    pub fn sample(
        &self,
        length: TrackLength,
        viewport_height: f64,
        section_top: f64,
    ) -> ReelResult<ScrollTrack> {
        if !viewport_height.is_finite() || !section_top.is_finite() {
            return Err(ReelError::geometry(format!(
                "non-finite geometry (viewport_height={viewport_height}, section_top={section_top})"
            )));
        }
        let total_length = length.total_px(viewport_height);
        if !total_length.is_finite() {
            return Err(ReelError::geometry("non-finite track length"));
        }

        let travel = (total_length - viewport_height).max(1.0);
        let mut raw = clamp01((viewport_height - section_top) / travel);
        if !length.is_exact() {
            raw = clamp01(raw / self.global_raw_end);
        }

        Ok(ScrollTrack {
            total_length,
            travel,
            raw,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/track/sampler.rs"]
mod tests;
