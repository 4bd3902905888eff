use bytemuck::{Pod, Zeroable};
use glam::Vec4;

use super::RingSample;

/// Per-instance data laid out for a GPU instance buffer.
///
/// `rotation` holds the three matrix columns, each padded to 16 bytes to
/// match `mat3x3<f32>` storage alignment.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct InstanceRecord {
    pub offset: [f32; 3],
    pub circle_index: f32,
    pub rotation: [[f32; 4]; 3],
    pub color: [f32; 4],
}

impl InstanceRecord {
    /// Packs the circle placement (no base position) and spin of `sample`.
    pub fn new(sample: &RingSample, color: Vec4) -> Self {
        let col = |c: glam::Vec3| [c.x, c.y, c.z, 0.0];
        Self {
            offset: sample.circle_offset().to_array(),
            circle_index: sample.slot.circle_index as f32,
            rotation: [
                col(sample.rotation.x_axis),
                col(sample.rotation.y_axis),
                col(sample.rotation.z_axis),
            ],
            color: color.to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::{evaluate, RingParameters};
    use glam::Vec3;

    #[test]
    fn record_is_eighty_bytes() {
        assert_eq!(std::mem::size_of::<InstanceRecord>(), 80);
    }

    #[test]
    fn record_packs_identity_rotation() {
        let sample = evaluate(0, Vec3::ZERO, 0.0, &RingParameters::default(), 20).unwrap();
        let record = InstanceRecord::new(&sample, Vec4::ONE);
        assert_eq!(record.rotation[0], [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(record.circle_index, 1.0);
        let bytes: &[u8] = bytemuck::bytes_of(&record);
        assert_eq!(bytes.len(), 80);
    }
}
