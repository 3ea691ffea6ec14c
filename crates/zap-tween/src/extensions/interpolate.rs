// extensions/interpolate.rs
//
// Per-value-type interpolation. A tween is generic over any `Lerp` value;
// the state machine never looks inside the value.

use bytemuck::{Pod, Zeroable};
use glam::{Quat, Vec2, Vec3, Vec4};

/// Interpolation between two bounds of the same value type.
///
/// `t` is an eased fraction. It is usually in [0, 1] but overshooting curves
/// (Back, Elastic) push it slightly outside, so implementations extrapolate.
pub trait Lerp: Copy {
    fn lerp(from: Self, to: Self, t: f32) -> Self;
}

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

impl Lerp for f32 {
    #[inline]
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        lerp(from, to, t)
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Lerp for Vec4 {
    #[inline]
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

/// Rotations take the shortest arc. Slerp cannot extrapolate, so overshoot
/// is clamped.
impl Lerp for Quat {
    #[inline]
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        from.slerp(to, t.clamp(0.0, 1.0)).normalize()
    }
}

/// Linear RGBA color, laid out for direct upload into instance buffers.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }

    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, self.a)
    }

    pub fn from_vec4(v: Vec4) -> Self {
        Self::rgba(v.x, v.y, v.z, v.w)
    }

    /// Clamp every channel into [0, 1].
    pub fn saturate(self) -> Self {
        Self::from_vec4(self.to_vec4().clamp(Vec4::ZERO, Vec4::ONE))
    }
}

/// Channels are extrapolated like any vector; callers that need a
/// displayable color after an overshooting curve call `saturate()`.
impl Lerp for Color {
    #[inline]
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        Color::from_vec4(Vec4::lerp(from.to_vec4(), to.to_vec4(), t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_lerp() {
        assert!((<f32 as Lerp>::lerp(100.0, 200.0, 0.5) - 150.0).abs() < 0.001);
        assert!((<f32 as Lerp>::lerp(0.0, 10.0, 1.1) - 11.0).abs() < 0.001);
    }

    #[test]
    fn vec2_lerp() {
        let v = Vec2::lerp(Vec2::ZERO, Vec2::new(100.0, -50.0), 0.25);
        assert!((v - Vec2::new(25.0, -12.5)).length() < 0.001);
    }

    #[test]
    fn quat_lerp_halfway() {
        let from = Quat::IDENTITY;
        let to = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
        let mid = <Quat as Lerp>::lerp(from, to, 0.5);
        let expected = Quat::from_rotation_z(std::f32::consts::FRAC_PI_4);
        assert!(mid.angle_between(expected) < 1e-3);
    }

    #[test]
    fn quat_overshoot_is_clamped() {
        let to = Quat::from_rotation_z(1.0);
        let q = <Quat as Lerp>::lerp(Quat::IDENTITY, to, 1.3);
        assert!(q.angle_between(to) < 1e-3);
    }

    #[test]
    fn color_lerp_and_saturate() {
        let c = Color::lerp(Color::BLACK, Color::WHITE, 0.5);
        assert!((c.r - 0.5).abs() < 0.001);
        assert!((c.a - 1.0).abs() < 0.001);

        let over = Color::lerp(Color::BLACK, Color::WHITE, 1.2).saturate();
        assert_eq!(over, Color::WHITE);
    }

    #[test]
    fn color_is_pod() {
        let c = Color::rgba(0.1, 0.2, 0.3, 0.4);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&c));
        assert_eq!(floats, &[0.1, 0.2, 0.3, 0.4]);
    }
}
