use smallvec::SmallVec;

use crate::{
    animation::ease::Ease,
    foundation::core::{Pose, Vec2},
    foundation::math::window,
};

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with factor `t`; `t` may leave `[0, 1]` for overshooting curves.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Pose {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            translate: <Vec2 as Lerp>::lerp(&a.translate, &b.translate, t),
            scale: a.scale + (b.scale - a.scale) * t,
            rotation_deg: a.rotation_deg + (b.rotation_deg - a.rotation_deg) * t,
            opacity: a.opacity + (b.opacity - a.opacity) * t,
        }
    }
}

/// Single eased transition between two values over a local-time window.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween<T> {
    /// Local time at which the tween starts moving.
    pub start: f64,
    /// Window length in local time.
    pub duration: f64,
    /// Curve applied to window progress.
    pub ease: Ease,
    /// Value held before the window.
    pub from: T,
    /// Value held after the window.
    pub to: T,
}

impl<T: Lerp> Tween<T> {
    /// Eased progress at `local`.
    pub fn progress(&self, local: f64) -> f64 {
        self.ease.apply(window(local, self.start, self.duration))
    }

    /// Sample the tween at `local`.
    pub fn sample(&self, local: f64) -> T {
        T::lerp(&self.from, &self.to, self.progress(local))
    }

    /// Local time at which the tween reaches `to`.
    pub fn end(&self) -> f64 {
        self.start + self.duration.max(0.0)
    }
}

/// One phase of an element's journey: blends whatever earlier phases produced toward `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phase {
    /// Local time at which the phase begins.
    pub start: f64,
    /// Phase length in local time.
    pub duration: f64,
    /// Curve for translation, rotation and scale.
    pub ease: Ease,
    /// Curve for opacity.
    pub opacity_ease: Ease,
    /// Pose reached at the end of the phase.
    pub to: Pose,
}

impl Phase {
    /// Local time at which the phase completes.
    pub fn end(&self) -> f64 {
        self.start + self.duration.max(0.0)
    }
}

/// Ordered phases for one element, evaluated as a pure function of local progress.
///
/// Every phase is applied on every sample in declaration order. A phase whose window has not
/// been reached contributes nothing, so sampling is continuous at every threshold and scrolling
/// backwards replays the journey exactly.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementPlan {
    /// Pose held before the first phase starts.
    pub rest: Pose,
    /// Phases with ascending start times.
    pub phases: SmallVec<[Phase; 3]>,
}

impl ElementPlan {
    /// Plan that starts at `rest` with no phases.
    pub fn new(rest: Pose) -> Self {
        Self {
            rest,
            phases: SmallVec::new(),
        }
    }

    /// Append a phase; callers add phases in ascending start order.
    pub fn then(mut self, phase: Phase) -> Self {
        debug_assert!(
            self.phases.last().is_none_or(|p| p.start <= phase.start),
            "phases must be appended in start order"
        );
        self.phases.push(phase);
        self
    }

    /// Sample the composed pose at `local`.
    pub fn sample(&self, local: f64) -> Pose {
        let mut pose = self.rest;
        for phase in &self.phases {
            let p = window(local, phase.start, phase.duration);
            let moved = Pose::lerp(&pose, &phase.to, phase.ease.apply(p));
            let opacity =
                <f64 as Lerp>::lerp(&pose.opacity, &phase.to.opacity, phase.opacity_ease.apply(p));
            pose = moved.with_opacity(opacity);
        }
        pose
    }

    /// Index of the last phase whose window has been entered at `local`, if any.
    pub fn active_phase(&self, local: f64) -> Option<usize> {
        self.phases.iter().rposition(|p| local > p.start)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
