use crate::animation::anim::Tween;
use crate::animation::ease::Ease;
use crate::foundation::core::Pose;

/// Headline animation of a scene: scale decays, then the headline fades out.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleTimeline {
    /// Scale over local time.
    pub scale: Tween<f64>,
    /// Opacity over local time.
    pub fade: Tween<f64>,
}

impl Default for TitleTimeline {
    fn default() -> Self {
        Self {
            scale: Tween {
                start: 0.0,
                duration: 0.35,
                ease: Ease::InOutQuad,
                from: 1.6,
                to: 0.35,
            },
            fade: Tween {
                start: 0.30,
                duration: 0.15,
                ease: Ease::InOutQuad,
                from: 1.0,
                to: 0.0,
            },
        }
    }
}

impl TitleTimeline {
    /// Pose of the headline at `local`, with opacity scaled by the scene `weight`.
    pub fn sample(&self, local: f64, weight: f64) -> Pose {
        Pose {
            scale: self.scale.sample(local),
            opacity: self.fade.sample(local) * weight,
            ..Pose::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/title.rs"]
mod tests;
