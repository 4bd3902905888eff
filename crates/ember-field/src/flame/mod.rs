//! Flame mask fields.
//!
//! Two variants share one coordinate warp and flicker term, then shape the
//! warped coordinate differently:
//! - `liquid`: soft silhouette eroded by cellular noise, coloured by a ramp
//! - `wispy`: hard-edged column advected by chained gradient-noise lookups
//!
//! Coordinates are billboard uv in `[0, 1]²` with y up; the flame base sits
//! on the bottom edge.

mod liquid;
mod warp;
mod wispy;

pub use liquid::liquid;
pub use warp::{base_warp, flicker, spherize_uv, Flicker, SPHERIZE_STRENGTH};
pub use wispy::wispy;

use glam::{Vec2, Vec3};

use crate::noise::NoiseSampler;
use crate::paint::ColorRamp;

/// Output of one flame evaluation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlameSample {
    pub color: Vec3,
    pub alpha: f32,
    /// Shape field before the final alpha mapping.
    pub shape: f32,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FlameVariant {
    Liquid,
    Wispy,
}

/// Lookups shared by both variants. `perlin` is ignored by `Liquid`, `ramp` by `Wispy`.
#[derive(Clone, Copy)]
pub struct FlameInputs<'a> {
    pub cellular: &'a dyn NoiseSampler,
    pub perlin: &'a dyn NoiseSampler,
    pub ramp: &'a ColorRamp,
}

impl FlameVariant {
    pub const ALL: [FlameVariant; 2] = [FlameVariant::Liquid, FlameVariant::Wispy];

    pub fn name(self) -> &'static str {
        match self {
            Self::Liquid => "liquid",
            Self::Wispy => "wispy",
        }
    }

    pub fn evaluate(self, uv: Vec2, time: f32, inputs: &FlameInputs<'_>) -> FlameSample {
        match self {
            Self::Liquid => liquid(uv, time, inputs.cellular, inputs.ramp),
            Self::Wispy => wispy(uv, time, inputs.perlin, inputs.cellular),
        }
    }
}
