use crate::foundation::error::{ReelError, ReelResult};
use crate::foundation::math::lerp;

/// Default per-frame smoothing factor of the price counter.
pub const DEFAULT_SMOOTHING: f64 = 0.18;

/// Gap below which the counter stops asking for frames.
pub const SETTLE_EPSILON: f64 = 0.01;

/// One smoothing step: move `prev` toward `target` by `factor` of the remaining gap.
#[inline]
pub fn smooth_toward(prev: f64, target: f64, factor: f64) -> f64 {
    lerp(prev, target, factor)
}

/// Number of frames after which a gap of `gap` shrinks to at most `tolerance`.
///
/// Each frame multiplies the gap by `1 - factor`, so the bound is
/// `ceil(ln(tolerance / |gap|) / ln(1 - factor))`.
pub fn frames_to_settle(gap: f64, tolerance: f64, factor: f64) -> u32 {
    let gap = gap.abs();
    if gap <= tolerance {
        return 0;
    }
    if factor >= 1.0 {
        return 1;
    }
    let n = (tolerance / gap).ln() / (1.0 - factor).ln();
    n.ceil().max(1.0) as u32
}

/// Displayed price that eases toward a per-frame target.
///
/// This is the only value carried from one frame to the next; everything else is recomputed
/// from the sampled scroll progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CounterState {
    display: f64,
    factor: f64,
}

impl CounterState {
    /// Counter starting at `initial` with smoothing `factor` in `(0, 1]`.
    pub fn new(initial: f64, factor: f64) -> Self {
        Self {
            display: initial,
            factor,
        }
    }

    /// Current displayed value.
    pub fn display(&self) -> f64 {
        self.display
    }

    /// Smoothing factor.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Return `true` once the display is within [`SETTLE_EPSILON`] of `target`.
    ///
    /// A non-finite target never settles the counter.
    pub fn is_settled(&self, target: f64) -> bool {
        (self.display - target).abs() <= SETTLE_EPSILON
    }

    /// Advance one frame toward `target` and return the new display value.
    ///
    /// A non-finite target is a defect upstream; it is rejected and the state is left untouched.
    pub fn advance(&mut self, target: f64) -> ReelResult<f64> {
        if !target.is_finite() {
            return Err(ReelError::evaluation(format!(
                "price target is not finite ({target})"
            )));
        }
        self.display = smooth_toward(self.display, target, self.factor);
        Ok(self.display)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/counter.rs"]
mod tests;
