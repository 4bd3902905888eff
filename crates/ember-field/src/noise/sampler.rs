use glam::{Vec2, Vec4};

/// A deterministic 2D lookup returning up to four channels in `[0, 1]`.
///
/// Single-channel sources replicate their value into RGB with alpha 1.
/// Callers wrap or clamp `uv` into `[0, 1]²` before sampling.
pub trait NoiseSampler: Sync {
    fn sample(&self, uv: Vec2) -> Vec4;
}

impl<F> NoiseSampler for F
where
    F: Fn(Vec2) -> Vec4 + Sync,
{
    #[inline]
    fn sample(&self, uv: Vec2) -> Vec4 {
        self(uv)
    }
}

/// Returns the same value everywhere.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ConstantNoise(pub Vec4);

impl ConstantNoise {
    pub fn grey(v: f32) -> Self {
        Self(Vec4::new(v, v, v, 1.0))
    }
}

impl NoiseSampler for ConstantNoise {
    #[inline]
    fn sample(&self, _uv: Vec2) -> Vec4 {
        self.0
    }
}
