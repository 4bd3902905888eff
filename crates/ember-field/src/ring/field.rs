use std::f32::consts::TAU;

use glam::{Mat3, Vec2, Vec3, Vec4};

use crate::error::{FieldError, Result};
use crate::shading::euler_rotation;

use super::RingParameters;

/// Position of an instance within the ring arrangement.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct InstanceSlot {
    /// Index along the circle, in `[0, instances_per_circle)`.
    pub within_circle: u32,
    /// 1-based circle index.
    pub circle_index: u32,
}

impl InstanceSlot {
    #[inline]
    pub fn is_even(self) -> bool {
        self.circle_index % 2 == 0
    }

    /// `+1` for even circles, `-1` for odd circles.
    #[inline]
    pub fn parity(self) -> f32 {
        if self.is_even() { 1.0 } else { -1.0 }
    }
}

/// Splits a flat instance index into circle membership.
///
/// Circles are numbered from 1, so `index = u32::MAX` with one instance per
/// circle has no representable circle and is rejected.
pub fn decompose(index: u32, instances_per_circle: u32) -> Result<InstanceSlot> {
    if instances_per_circle == 0 {
        return Err(FieldError::ZeroInstancesPerCircle);
    }
    let circle_index = (index / instances_per_circle)
        .checked_add(1)
        .ok_or(FieldError::IndexOutOfRange { index, instances_per_circle })?;
    Ok(InstanceSlot { within_circle: index % instances_per_circle, circle_index })
}

/// Output of one ring field evaluation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RingSample {
    pub slot: InstanceSlot,
    /// Final vertex position: spun, scaled base position plus the circle offset.
    pub displacement: Vec3,
    /// Spin applied to the scaled base position.
    pub rotation: Mat3,
    /// Position on the circle in the XY plane, before bounce.
    pub planar: Vec2,
    /// Signed vertical bounce added to `planar.y`.
    pub bounce: f32,
    /// Depth of the circle.
    pub depth: f32,
}

impl RingSample {
    /// Offset of the circle placement alone, without the spun base position.
    #[inline]
    pub fn circle_offset(&self) -> Vec3 {
        Vec3::new(self.planar.x, self.planar.y + self.bounce, self.depth)
    }
}

/// Evaluates the ring field for one vertex of one instance.
///
/// `base_position` is the vertex in the mesh's local space. The only error is
/// a zero `instances_per_circle`; every other input produces periodic output.
pub fn evaluate(
    index: u32,
    base_position: Vec3,
    time: f32,
    params: &RingParameters,
    instances_per_circle: u32,
) -> Result<RingSample> {
    let slot = decompose(index, instances_per_circle)?;
    let circle = slot.circle_index as f32;
    let parity = slot.parity();

    let radius = params.circle_radius * circle;
    let angle = slot.within_circle as f32 / instances_per_circle as f32 * TAU + time * params.circle_speed;
    let planar = Vec2::new(angle.sin() * radius * parity, angle.cos() * radius);

    let rotation = euler_rotation(Vec3::splat(time));
    let spun = rotation * (base_position * circle);

    // Even circles bounce up while odd circles bounce down.
    let bounce = (time * 10.0).cos() * params.circle_bounce * parity;

    let depth = circle * params.separation(time);

    let sample = RingSample {
        slot,
        displacement: Vec3::ZERO,
        rotation,
        planar,
        bounce,
        depth,
    };

    Ok(RingSample {
        displacement: spun + sample.circle_offset(),
        ..sample
    })
}

/// Per-instance RGBA tint: `(sin(t + i), cos(t + i), sin(t), 1)`.
#[inline]
pub fn instance_color(index: u32, time: f32) -> Vec4 {
    let phase = time + index as f32;
    Vec4::new(phase.sin(), phase.cos(), time.sin(), 1.0)
}
