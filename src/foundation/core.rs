use std::fmt;

pub use kurbo::{Affine, Vec2};

/// Viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport from width and height.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Return `true` when both dimensions are finite.
    pub fn is_finite(self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// The smaller of the two dimensions.
    pub fn min_side(self) -> f64 {
        self.width.min(self.height)
    }
}

/// Visual state of one element: 2D transform components plus opacity.
///
/// Translation is in pixels relative to the element's laid-out position, rotation in degrees.
/// Scale and rotation apply around the element center, matching the default CSS
/// `transform-origin`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pose {
    /// Translation in pixels.
    pub translate: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation in degrees, clockwise.
    pub rotation_deg: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            scale: 1.0,
            rotation_deg: 0.0,
            opacity: 1.0,
        }
    }
}

impl Pose {
    /// Pose at `(x, y)` with the given rotation and scale, fully opaque.
    pub fn at(x: f64, y: f64, rotation_deg: f64, scale: f64) -> Self {
        Self {
            translate: Vec2::new(x, y),
            scale,
            rotation_deg,
            opacity: 1.0,
        }
    }

    /// Same pose with a different opacity.
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    /// Return `true` when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.translate.is_finite()
            && self.scale.is_finite()
            && self.rotation_deg.is_finite()
            && self.opacity.is_finite()
    }

    /// Affine matrix for this pose, ignoring opacity.
    pub fn to_affine(self) -> Affine {
        // Canonical order: T(translate) * R(rot) * S(scale)
        Affine::translate(self.translate)
            * Affine::rotate(self.rotation_deg.to_radians())
            * Affine::scale(self.scale)
    }

    /// CSS `transform` value for this pose.
    pub fn css_transform(self) -> String {
        let [a, b, c, d, e, f] = self.to_affine().as_coeffs();
        format!(
            "matrix({}, {}, {}, {}, {}, {})",
            fmt_num(a),
            fmt_num(b),
            fmt_num(c),
            fmt_num(d),
            fmt_num(e),
            fmt_num(f)
        )
    }
}

/// Format a CSS number with bounded precision and no negative zero.
pub(crate) fn fmt_num(v: f64) -> String {
    let rounded = (v * 10_000.0).round() / 10_000.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}")
}

/// Handle of an element the engine writes styles onto every frame.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum ElementId {
    /// Headline of the deck scene.
    Title,
    /// Card in the deck, by index.
    Card(u8),
    /// Label word in the deck scene, by index.
    Label(u8),
    /// Pricing panel container.
    Panel,
    /// Pricing row container, by index.
    Row(u8),
    /// Checkmark stroke of a checkbox row.
    Check(u8),
    /// Fill bar of a slider row.
    SliderFill(u8),
    /// Knob of a slider row.
    SliderKnob(u8),
    /// Price display span.
    Price,
    /// Character span of the closing phrase, by index.
    Letter(u16),
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => f.write_str("title"),
            Self::Card(i) => write!(f, "card-{i}"),
            Self::Label(i) => write!(f, "label-{i}"),
            Self::Panel => f.write_str("panel"),
            Self::Row(i) => write!(f, "row-{i}"),
            Self::Check(i) => write!(f, "check-{i}"),
            Self::SliderFill(i) => write!(f, "slider-fill-{i}"),
            Self::SliderKnob(i) => write!(f, "slider-knob-{i}"),
            Self::Price => f.write_str("price"),
            Self::Letter(i) => write!(f, "letter-{i}"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
