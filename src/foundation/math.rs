//! Scalar helpers shared by every stage of the timeline.

/// Clamp `x` into `[0, 1]`.
///
/// NaN maps to `0` so a bad intermediate can never leak into persisted state through a clamp.
#[inline]
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

/// Linear interpolation without clamping `t`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Cubic Hermite ramp `3t² - 2t³` of `x` across `[edge0, edge1]`.
///
/// A zero-width band degenerates to a step at `edge0`.
#[inline]
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let width = edge1 - edge0;
    if width.abs() <= f64::EPSILON {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = clamp01((x - edge0) / width);
    t * t * (3.0 - 2.0 * t)
}

/// Progress of `x` through the window starting at `start` and lasting `duration`, in `[0, 1]`.
///
/// Non-positive durations behave as an instantaneous switch at `start`.
#[inline]
pub fn window(x: f64, start: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return if x < start { 0.0 } else { 1.0 };
    }
    clamp01((x - start) / duration)
}

/// FNV-1a 64-bit hasher for deterministic, platform-stable jitter.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Deterministic value in `[-1, 1]` for `(index, axis)`, symmetric around zero.
pub(crate) fn signed_jitter(index: u64, axis: u64) -> f64 {
    let mut h = Fnv1a64::new_default();
    h.write_u64(index);
    h.write_u64(axis);
    // top 53 bits -> [0, 1)
    let unit = (h.finish() >> 11) as f64 / (1u64 << 53) as f64;
    unit * 2.0 - 1.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
