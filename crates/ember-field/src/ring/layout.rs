use glam::Vec3;

use crate::error::{FieldError, Result};

use super::{decompose, evaluate, InstanceSlot, RingParameters, RingSample};

/// How a fixed instance count is split into equal circles.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RingLayout {
    instance_count: u32,
    circle_count: u32,
}

impl Default for RingLayout {
    /// 80 instances over 4 circles, 20 per circle.
    fn default() -> Self {
        Self { instance_count: 80, circle_count: 4 }
    }
}

impl RingLayout {
    pub fn new(instance_count: u32, circle_count: u32) -> Result<Self> {
        if circle_count == 0 || instance_count == 0 || instance_count % circle_count != 0 {
            return Err(FieldError::InvalidLayout { instance_count, circle_count });
        }
        log::debug!(
            "ring layout: {instance_count} instances, {circle_count} circles, {} per circle",
            instance_count / circle_count
        );
        Ok(Self { instance_count, circle_count })
    }

    #[inline]
    pub fn instance_count(&self) -> u32 {
        self.instance_count
    }

    #[inline]
    pub fn circle_count(&self) -> u32 {
        self.circle_count
    }

    /// Never zero for a constructed layout.
    #[inline]
    pub fn instances_per_circle(&self) -> u32 {
        self.instance_count / self.circle_count
    }

    pub fn slot(&self, index: u32) -> Result<InstanceSlot> {
        decompose(index, self.instances_per_circle())
    }

    pub fn slots(&self) -> impl Iterator<Item = InstanceSlot> + '_ {
        let per_circle = self.instances_per_circle();
        (0..self.instance_count).map(move |index| InstanceSlot {
            within_circle: index % per_circle,
            circle_index: index / per_circle + 1,
        })
    }

    pub fn evaluate(
        &self,
        index: u32,
        base_position: Vec3,
        time: f32,
        params: &RingParameters,
    ) -> Result<RingSample> {
        evaluate(index, base_position, time, params, self.instances_per_circle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_has_twenty_per_circle() {
        let layout = RingLayout::default();
        assert_eq!(layout.instances_per_circle(), 20);
        assert_eq!(RingLayout::new(80, 4).unwrap(), layout);
    }

    #[test]
    fn rejects_zero_circles() {
        assert_eq!(
            RingLayout::new(80, 0),
            Err(FieldError::InvalidLayout { instance_count: 80, circle_count: 0 })
        );
    }

    #[test]
    fn rejects_uneven_split() {
        assert!(RingLayout::new(81, 4).is_err());
        assert!(RingLayout::new(3, 4).is_err());
    }

    #[test]
    fn slots_match_decompose() {
        let layout = RingLayout::new(12, 3).unwrap();
        for (index, slot) in layout.slots().enumerate() {
            assert_eq!(slot, layout.slot(index as u32).unwrap());
        }
        assert_eq!(layout.slots().last().map(|s| s.circle_index), Some(3));
    }
}
