use glam::{Vec2, Vec3};

use crate::noise::NoiseSampler;
use crate::shading::{smoothstep, step, wrap01_vec2};

use super::{base_warp, flicker, FlameSample};

/// Turbulent flame: a thin column pushed sideways by three gradient-noise
/// lookups, masked by cellular noise and hard-thresholded.
///
/// Gradient-noise samples are recentred to `[-0.5, 0.5]`. Output colour is
/// white; alpha is 0 or 1.
pub fn wispy<P, C>(uv: Vec2, time: f32, perlin: &P, cellular: &C) -> FlameSample
where
    P: NoiseSampler + ?Sized,
    C: NoiseSampler + ?Sized,
{
    let mut uv = base_warp(uv, 3.0);

    let drift = perlin.sample(wrap01_vec2(uv + Vec2::new(0.0, -time))) - 0.5;
    uv.x += drift.x * 0.5;

    let flick = flicker(uv.y, time);
    let tip = smoothstep(0.0, 0.3, 1.0 - uv.y);
    uv.x += flick.offset();

    // Advection: the first lookup displaces the coordinate of the second.
    let warp_uv = wrap01_vec2(uv * 0.5 + Vec2::new(0.0, -time * 0.25));
    let warp = perlin.sample(warp_uv) - 0.5;
    let advected_uv = wrap01_vec2(uv + Vec2::new(0.0, -time * 0.5) + warp.truncate().truncate());
    let advected = perlin.sample(advected_uv) - 0.5;
    uv.x += advected.x * 0.5;

    let cell_uv = wrap01_vec2(uv + Vec2::new(0.0, -time * 1.5));
    let cell = smoothstep(0.25, 1.0, 1.0 - cellular.sample(cell_uv).x);

    let radius = ((uv - 0.5) * Vec2::new(6.0, 1.0)).length();
    let column = step(radius, 0.5);
    let shape = column * cell * tip;

    FlameSample {
        color: Vec3::ONE,
        alpha: step(0.01, shape),
        shape,
    }
}
