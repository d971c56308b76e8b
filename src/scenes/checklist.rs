//! Pricing panel: rows slide in, checkmarks draw, sliders fill, and the price target follows.

use crate::animation::ease::Ease;
use crate::foundation::core::{Pose, Vec2, Viewport};
use crate::foundation::math::{lerp, window};

/// Length of the checkmark path, used as its `stroke-dasharray`.
pub const CHECK_PATH_LEN: f64 = 24.0;

/// Kind of a pricing row.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum RowKind {
    /// Checkbox whose checkmark draws in.
    Checkbox,
    /// Slider whose bar fills to `fill`.
    Slider {
        /// Target fill fraction in `[0, 1]`.
        fill: f64,
    },
}

/// One row of the pricing panel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowSpec {
    /// Row caption; inert content.
    #[serde(default)]
    pub label: String,
    /// Checkbox or slider.
    pub kind: RowKind,
    /// Price contributed at full check or full slider fill.
    pub price: f64,
}

/// Fill state of a row in one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum RowFill {
    /// Checkbox row.
    Check {
        /// Draw-in progress in `[0, 1]`.
        progress: f64,
        /// `stroke-dashoffset` of the checkmark path.
        dash_offset: f64,
    },
    /// Slider row.
    Slider {
        /// Current fill fraction in `[0, 1]`.
        fraction: f64,
        /// Knob translation in pixels along the track.
        knob_x: f64,
    },
}

/// One row in one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RowFrame {
    /// Row container pose.
    pub pose: Pose,
    /// Check or slider fill state.
    pub fill: RowFill,
}

/// Whole pricing scene in one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PricingFrame {
    /// Panel container pose; its opacity carries the scene weight for all rows.
    pub panel: Pose,
    /// Rows in declaration order.
    pub rows: Vec<RowFrame>,
    /// Price the counter eases toward.
    pub target_price: f64,
}

/// Timing of the pricing scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChecklistTimeline {
    /// Panel entrance length, starting at local 0.
    pub panel_duration: f64,
    /// Pause after the panel lands before the first row.
    pub settle_hold: f64,
    /// Preferred delay between consecutive rows.
    pub row_stagger: f64,
    /// Entrance length of one row.
    pub row_duration: f64,
    /// Fill length of one row, starting when its entrance ends.
    pub fill_duration: f64,
    /// Local progress by which the last fill must be complete.
    pub fill_deadline: f64,
    /// Panel entrance distance as a fraction of viewport height.
    pub panel_rise: f64,
    /// Row entrance distance in pixels.
    pub row_rise_px: f64,
    /// Slider track width in pixels.
    pub slider_track_px: f64,
}

impl Default for ChecklistTimeline {
    fn default() -> Self {
        Self {
            panel_duration: 0.18,
            settle_hold: 0.04,
            row_stagger: 0.07,
            row_duration: 0.10,
            fill_duration: 0.12,
            fill_deadline: 0.95,
            panel_rise: 0.6,
            row_rise_px: 24.0,
            slider_track_px: 240.0,
        }
    }
}

impl ChecklistTimeline {
    /// Local progress at which the first row starts.
    pub fn rows_start(&self) -> f64 {
        self.panel_duration + self.settle_hold
    }

    /// Row stagger for `count` rows, compressed so every fill ends by the deadline.
    pub fn effective_stagger(&self, count: usize) -> f64 {
        if count < 2 {
            return self.row_stagger;
        }
        let room = (self.fill_deadline
            - self.rows_start()
            - self.row_duration
            - self.fill_duration)
            .max(0.0);
        self.row_stagger.min(room / (count - 1) as f64)
    }

    /// Entrance start of row `idx` out of `count`.
    pub fn row_start(&self, idx: usize, count: usize) -> f64 {
        self.rows_start() + self.effective_stagger(count) * idx as f64
    }

    /// Evaluate the scene at `local` with crossfade `weight`.
    pub fn sample(
        &self,
        rows: &[RowSpec],
        base_price: f64,
        local: f64,
        weight: f64,
        viewport: Viewport,
    ) -> PricingFrame {
        let panel_p = Ease::InOutQuad.apply(window(local, 0.0, self.panel_duration));
        let panel = Pose {
            translate: Vec2::new(0.0, lerp(self.panel_rise * viewport.height, 0.0, panel_p)),
            opacity: panel_p * weight,
            ..Pose::default()
        };

        let count = rows.len();
        let mut target_price = base_price;
        let frames = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let start = self.row_start(idx, count);
                let enter = Ease::InOutQuad.apply(window(local, start, self.row_duration));
                let fill_p = Ease::InOutQuad.apply(window(
                    local,
                    start + self.row_duration,
                    self.fill_duration,
                ));
                let fill = match row.kind {
                    RowKind::Checkbox => {
                        target_price += fill_p * row.price;
                        RowFill::Check {
                            progress: fill_p,
                            dash_offset: CHECK_PATH_LEN * (1.0 - fill_p),
                        }
                    }
                    RowKind::Slider { fill } => {
                        let fraction = fill * fill_p;
                        target_price += fraction * row.price;
                        RowFill::Slider {
                            fraction,
                            knob_x: fraction * self.slider_track_px,
                        }
                    }
                };
                RowFrame {
                    pose: Pose {
                        translate: Vec2::new(0.0, lerp(self.row_rise_px, 0.0, enter)),
                        opacity: enter,
                        ..Pose::default()
                    },
                    fill,
                }
            })
            .collect();

        PricingFrame {
            panel,
            rows: frames,
            target_price,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/checklist.rs"]
mod tests;
