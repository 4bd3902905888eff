use glam::Vec3;
use rayon::prelude::*;

use crate::error::Result;
use crate::ring::{instance_color, InstanceRecord, RingLayout, RingParameters};

/// Axis-aligned bounds of a point set.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Extent {
    pub min: Vec3,
    pub max: Vec3,
}

impl Extent {
    /// `None` for an empty set.
    pub fn of(points: &[Vec3]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points
            .iter()
            .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p)));
        Some(Self { min, max })
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Instanced cubes arranged on concentric rings.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RingScene {
    pub layout: RingLayout,
    pub params: RingParameters,
    /// Edge length of each cube.
    pub cube_size: f32,
}

impl Default for RingScene {
    fn default() -> Self {
        Self {
            layout: RingLayout::default(),
            params: RingParameters::default(),
            cube_size: 0.1,
        }
    }
}

impl RingScene {
    /// Corners of the cube centred on the origin.
    pub fn cube_vertices(&self) -> [Vec3; 8] {
        let h = self.cube_size * 0.5;
        let mut corners = [Vec3::ZERO; 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            let sign = |bit: usize| if i & bit == 0 { -h } else { h };
            *corner = Vec3::new(sign(1), sign(2), sign(4));
        }
        corners
    }

    /// One record per instance: circle placement, spin and tint at `time`.
    pub fn instances(&self, time: f32) -> Result<Vec<InstanceRecord>> {
        (0..self.layout.instance_count())
            .into_par_iter()
            .map(|index| -> Result<InstanceRecord> {
                let sample = self.layout.evaluate(index, Vec3::ZERO, time, &self.params)?;
                Ok(InstanceRecord::new(&sample, instance_color(index, time)))
            })
            .collect()
    }

    /// Final position of every cube corner, instance-major.
    pub fn vertex_positions(&self, time: f32) -> Result<Vec<Vec3>> {
        let corners = self.cube_vertices();
        let per_instance: Vec<[Vec3; 8]> = (0..self.layout.instance_count())
            .into_par_iter()
            .map(|index| -> Result<[Vec3; 8]> {
                let mut out = [Vec3::ZERO; 8];
                for (slot, &corner) in out.iter_mut().zip(&corners) {
                    *slot = self.layout.evaluate(index, corner, time, &self.params)?.displacement;
                }
                Ok(out)
            })
            .collect::<Result<_>>()?;
        Ok(per_instance.into_iter().flatten().collect())
    }
}
