use std::f32::consts::TAU;

use glam::Vec2;

use crate::shading::smoothstep;

/// Sharpness of the radial warp applied before shaping.
pub const SPHERIZE_STRENGTH: f32 = 10.0;

/// Radial power-law warp: `uv + d * |d|⁴ * strength` with `d = uv - center`.
///
/// Points near `center` barely move; corners are pushed far outward.
#[inline]
pub fn spherize_uv(uv: Vec2, strength: f32, center: Vec2) -> Vec2 {
    let delta = uv - center;
    let d2 = delta.dot(delta);
    uv + delta * (d2 * d2 * strength)
}

/// Warp shared by both flames.
///
/// Spherize, shrink into `[0.2, 0.8]` about the centre, raise y to `squash_y`
/// (stretches the base, compresses the tip), then double x around the centre
/// so the flame is narrow. `powf` keeps integral exponents well defined for
/// the negative y the spherize step produces in the corners.
#[inline]
pub fn base_warp(uv: Vec2, squash_y: f32) -> Vec2 {
    let uv = spherize_uv(uv, SPHERIZE_STRENGTH, Vec2::splat(0.5)) * 0.6 + 0.2;
    let uv = Vec2::new(uv.x, uv.y.powf(squash_y));
    Vec2::new(uv.x * 2.0 - 0.5, uv.y)
}

/// Horizontal flicker terms.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Flicker {
    /// Travelling wave `sin(10t - 4πy)`.
    pub wave: f32,
    /// `smoothstep(0, 1, y)`: zero at the base, full strength at the tip.
    pub rise: f32,
}

impl Flicker {
    /// Horizontal offset contributed by the flicker.
    #[inline]
    pub fn offset(self) -> f32 {
        self.wave * self.rise * 0.2
    }
}

#[inline]
pub fn flicker(y: f32, time: f32) -> Flicker {
    Flicker {
        wave: (time * 10.0 - y * TAU * 2.0).sin(),
        rise: smoothstep(0.0, 1.0, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spherize_fixes_center() {
        let c = Vec2::splat(0.5);
        assert_eq!(spherize_uv(c, 10.0, c), c);
    }

    #[test]
    fn spherize_pushes_corners_outward() {
        let out = spherize_uv(Vec2::ONE, 10.0, Vec2::splat(0.5));
        // d = 0.5, |d|⁴ = 0.25, 1 + 0.5 * 2.5
        assert!((out.x - 2.25).abs() < 1e-6);
    }

    #[test]
    fn base_warp_center() {
        let w = base_warp(Vec2::splat(0.5), 2.0);
        assert!((w.x - 0.5).abs() < 1e-6);
        assert!((w.y - 0.25).abs() < 1e-6);
    }

    #[test]
    fn base_warp_squash_exponent() {
        let a = base_warp(Vec2::new(0.5, 0.7), 2.0);
        let b = base_warp(Vec2::new(0.5, 0.7), 3.0);
        assert!(b.y < a.y);
        assert_eq!(a.x, b.x);
    }

    #[test]
    fn flicker_vanishes_at_base() {
        let f = flicker(0.0, 1.234);
        assert_eq!(f.rise, 0.0);
        assert_eq!(f.offset(), 0.0);
    }

    #[test]
    fn flicker_wave_period_two_pi_over_ten() {
        let a = flicker(0.4, 0.3);
        let b = flicker(0.4, 0.3 + TAU / 10.0);
        assert!((a.wave - b.wave).abs() < 1e-5);
    }
}
