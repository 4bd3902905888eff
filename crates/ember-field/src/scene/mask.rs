use glam::Vec4;

use crate::paint::color::linear_to_srgb;

/// Rasterised flame output: straight-alpha linear RGBA, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskImage {
    width: u32,
    height: u32,
    pixels: Vec<Vec4>,
}

impl MaskImage {
    pub(crate) fn from_pixels(width: u32, height: u32, pixels: Vec<Vec4>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self { width, height, pixels }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Vec4] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y` (row 0 is the top).
    pub fn pixel(&self, x: u32, y: u32) -> Option<Vec4> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// Fraction of pixels with non-zero alpha. Zero for an empty image.
    pub fn coverage(&self) -> f32 {
        if self.pixels.is_empty() {
            return 0.0;
        }
        let lit = self.pixels.iter().filter(|p| p.w > 0.0).count();
        lit as f32 / self.pixels.len() as f32
    }

    /// sRGB-encoded straight-alpha bytes, ready for an image encoder.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        self.pixels
            .iter()
            .flat_map(|p| {
                [
                    byte(linear_to_srgb(p.x)),
                    byte(linear_to_srgb(p.y)),
                    byte(linear_to_srgb(p.z)),
                    byte(p.w),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_counts_non_zero_alpha() {
        let img = MaskImage::from_pixels(2, 2, vec![Vec4::ZERO, Vec4::ONE, Vec4::new(1.0, 1.0, 1.0, 0.2), Vec4::ZERO]);
        assert!((img.coverage() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn empty_coverage_is_zero() {
        assert_eq!(MaskImage::from_pixels(0, 0, vec![]).coverage(), 0.0);
    }

    #[test]
    fn rgba8_encodes_white_and_clear() {
        let img = MaskImage::from_pixels(2, 1, vec![Vec4::ONE, Vec4::ZERO]);
        assert_eq!(img.to_rgba8(), vec![255, 255, 255, 255, 0, 0, 0, 0]);
    }

    #[test]
    fn pixel_bounds() {
        let img = MaskImage::from_pixels(1, 1, vec![Vec4::ONE]);
        assert_eq!(img.pixel(0, 0), Some(Vec4::ONE));
        assert_eq!(img.pixel(1, 0), None);
    }
}
