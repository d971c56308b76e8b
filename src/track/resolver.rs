//! Tail-snap: decides how long the scrollable section is.
//!
//! With a resolvable anchor the section ends exactly where the following section begins, so
//! there is no dead scroll after the last scene. Otherwise the length is a multiple of the
//! viewport height derived from the configured scene lengths.

use crate::foundation::core::fmt_num;

/// Resolved total length of the tracked section.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum TrackLength {
    /// Exact pixel distance from the section top to the anchor top.
    Exact {
        /// Length in pixels.
        px: f64,
    },
    /// Multiple of the viewport height.
    Normalized {
        /// Length in viewport heights (`1.0` = `100vh`).
        viewport_heights: f64,
    },
}

impl TrackLength {
    /// Total length in pixels for the given viewport height.
    pub fn total_px(self, viewport_height: f64) -> f64 {
        match self {
            Self::Exact { px } => px,
            Self::Normalized { viewport_heights } => viewport_heights * viewport_height,
        }
    }

    /// Return `true` when the length came from an anchor measurement.
    pub fn is_exact(self) -> bool {
        matches!(self, Self::Exact { .. })
    }

    /// Height to write onto the section element.
    pub fn section_height(self) -> TrackHeight {
        match self {
            Self::Exact { px } => TrackHeight::Px(px),
            Self::Normalized { viewport_heights } => TrackHeight::Vh(viewport_heights * 100.0),
        }
    }
}

/// CSS height of the tracked section.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum TrackHeight {
    /// Absolute pixels.
    Px(f64),
    /// Viewport-height units (`100.0` = one viewport).
    Vh(f64),
}

impl TrackHeight {
    /// CSS value for the `height` property.
    pub fn css(self) -> String {
        match self {
            Self::Px(v) => format!("{}px", fmt_num(v)),
            Self::Vh(v) => format!("{}vh", fmt_num(v)),
        }
    }
}

/// Chooses between anchor measurement and the normalized fallback.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackResolver {
    selector: Option<String>,
    viewport_heights: f64,
}

impl TrackResolver {
    /// Build a resolver from the optional anchor selector and per-scene lengths in `vh` units.
    pub fn new(selector: Option<String>, scene_lengths_vh: &[f64]) -> Self {
        let viewport_heights = scene_lengths_vh.iter().sum::<f64>() / 100.0;
        Self {
            selector: selector.filter(|s| !s.trim().is_empty()),
            viewport_heights,
        }
    }

    /// Selector of the anchor the sequence must end at, if tail-snap is configured.
    pub fn selector(&self) -> Option<&str> {
        self.selector.as_deref()
    }

    /// Fallback length in viewport heights.
    pub fn viewport_heights(&self) -> f64 {
        self.viewport_heights
    }

    /// Resolve the track length from bounding-rect tops of the section and the anchor.
    ///
    /// Any missing or unusable measurement falls back to the normalized length.
    pub fn resolve(&self, section_top: Option<f64>, anchor_top: Option<f64>) -> TrackLength {
        if self.selector.is_some()
            && let Some(px) = measure_anchor(section_top, anchor_top)
        {
            return TrackLength::Exact { px };
        }
        TrackLength::Normalized {
            viewport_heights: self.viewport_heights,
        }
    }
}

/// Distance from the section top to the anchor top, when both are known and it is positive.
pub fn measure_anchor(section_top: Option<f64>, anchor_top: Option<f64>) -> Option<f64> {
    let px = anchor_top? - section_top?;
    (px.is_finite() && px > 0.0).then_some(px)
}

#[cfg(test)]
#[path = "../../tests/unit/track/resolver.rs"]
mod tests;
