/// Easing functions used to map normalized animation progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in/out; the default curve for element travel.
    InOutQuad,
    /// Cubic ease-out; used for the deck exit fade.
    OutCubic,
    /// Back ease-out: overshoots past 1 and settles, used for label pops.
    OutBack,
}

impl Ease {
    const BACK_C1: f64 = 1.70158;
    const BACK_C3: f64 = Self::BACK_C1 + 1.0;

    /// Apply this easing function to normalized progress `t`.
    ///
    /// Input is clamped to `[0, 1]`. Output stays in `[0, 1]` for every curve except
    /// [`Ease::OutBack`], which peaks slightly above 1.
    pub fn apply(self, t: f64) -> f64 {
        let t = crate::foundation::math::clamp01(t);
        match self {
            Self::Linear => t,
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::OutBack => {
                let u = t - 1.0;
                1.0 + Self::BACK_C3 * u.powi(3) + Self::BACK_C1 * u.powi(2)
            }
        }
    }
}

/// Shorthand for the ease-in/out curve used by element travel.
#[inline]
pub fn ease_in_out(t: f64) -> f64 {
    Ease::InOutQuad.apply(t)
}

/// Shorthand for the overshooting back-out curve.
#[inline]
pub fn ease_out_back(t: f64) -> f64 {
    Ease::OutBack.apply(t)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
