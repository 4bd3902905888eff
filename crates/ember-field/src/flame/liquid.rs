use glam::{Vec2, Vec3};

use crate::noise::NoiseSampler;
use crate::paint::ColorRamp;
use crate::shading::{remap, smoothstep, wrap01_vec2};

use super::{base_warp, flicker, FlameSample};

/// Shape value above which the flame core turns white.
const CORE_THRESHOLD: f32 = 0.8;

/// Smooth flame: an elliptical falloff eroded by scrolling cellular noise.
///
/// `cellular` is read from its red channel at wrapped coordinates. The
/// colour comes from `ramp` at the shape value, with a white core.
pub fn liquid<C>(uv: Vec2, time: f32, cellular: &C, ramp: &ColorRamp) -> FlameSample
where
    C: NoiseSampler + ?Sized,
{
    let mut uv = base_warp(uv, 2.0);

    let flick = flicker(uv.y, time);
    uv.x += flick.offset();

    let cell_uv = wrap01_vec2(uv * 0.5 + Vec2::new(0.0, -time * 0.5));
    let cell = 1.0 - cellular.sample(cell_uv).x;
    let erosion = (1.0 - smoothstep(0.0, 0.5, cell)) * flick.rise;

    let falloff = 1.0 - ((uv - 0.5) * Vec2::new(3.0, 2.0)).length();
    let shape = falloff - erosion;

    let base = ramp.sample(remap(shape, 0.0, 1.0, 0.0, 1.0)).rgb();
    let color = if shape > CORE_THRESHOLD { Vec3::ONE } else { base };

    FlameSample {
        color,
        alpha: smoothstep(0.0, 0.3, shape),
        shape,
    }
}
