use glam::{Vec2, Vec4};

use crate::error::{FieldError, Result};

use super::NoiseSampler;

/// RGBA `f32` lookup table with bilinear filtering.
///
/// Texel `(0, 0)` is the bottom-left corner of uv space (uv y up). Samples
/// are taken at texel centres with clamp-to-edge addressing.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseTexture {
    width: u32,
    height: u32,
    texels: Vec<Vec4>,
}

impl NoiseTexture {
    /// Builds a texture from row-major texels, bottom row first.
    pub fn from_texels(width: u32, height: u32, texels: Vec<Vec4>) -> Result<Self> {
        if width == 0 || height == 0 || texels.len() != width as usize * height as usize {
            return Err(FieldError::InvalidNoiseTexture { width, height, len: texels.len() });
        }
        Ok(Self { width, height, texels })
    }

    /// Builds a texture from tightly packed RGBA bytes, top row first (image order).
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        if bytes.len() % 4 != 0 {
            return Err(FieldError::InvalidNoiseTexture { width, height, len: bytes.len() / 4 });
        }
        let texels = bytes
            .chunks_exact(4)
            .map(|px| Vec4::new(px[0] as f32, px[1] as f32, px[2] as f32, px[3] as f32) / 255.0)
            .collect();
        Self::from_image_rows(width, height, texels)
    }

    /// Builds a greyscale texture from one byte per texel, top row first.
    pub fn from_luma8(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let texels = bytes
            .iter()
            .map(|&v| {
                let v = v as f32 / 255.0;
                Vec4::new(v, v, v, 1.0)
            })
            .collect();
        Self::from_image_rows(width, height, texels)
    }

    fn from_image_rows(width: u32, height: u32, mut texels: Vec<Vec4>) -> Result<Self> {
        if width == 0 || height == 0 || texels.len() != width as usize * height as usize {
            return Err(FieldError::InvalidNoiseTexture { width, height, len: texels.len() });
        }
        // Flip to bottom row first so uv y points up.
        let row = width as usize;
        let rows = height as usize;
        for y in 0..rows / 2 {
            let (top, bottom) = texels.split_at_mut((rows - 1 - y) * row);
            top[y * row..(y + 1) * row].swap_with_slice(&mut bottom[..row]);
        }
        Ok(Self { width, height, texels })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Unfiltered texel fetch with clamp-to-edge addressing.
    #[inline]
    pub fn texel(&self, x: i64, y: i64) -> Vec4 {
        let x = x.clamp(0, self.width as i64 - 1) as usize;
        let y = y.clamp(0, self.height as i64 - 1) as usize;
        self.texels[y * self.width as usize + x]
    }
}

impl NoiseSampler for NoiseTexture {
    fn sample(&self, uv: Vec2) -> Vec4 {
        let fx = uv.x * self.width as f32 - 0.5;
        let fy = uv.y * self.height as f32 - 0.5;
        let x0 = fx.floor();
        let y0 = fy.floor();
        let tx = fx - x0;
        let ty = fy - y0;
        let (x0, y0) = (x0 as i64, y0 as i64);

        let bottom = self.texel(x0, y0).lerp(self.texel(x0 + 1, y0), tx);
        let top = self.texel(x0, y0 + 1).lerp(self.texel(x0 + 1, y0 + 1), tx);
        bottom.lerp(top, ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grey(v: f32) -> Vec4 {
        Vec4::new(v, v, v, 1.0)
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn rejects_size_mismatch() {
        let err = NoiseTexture::from_texels(2, 2, vec![Vec4::ZERO; 3]).unwrap_err();
        assert_eq!(err, FieldError::InvalidNoiseTexture { width: 2, height: 2, len: 3 });
    }

    #[test]
    fn rejects_zero_dimension() {
        assert!(NoiseTexture::from_texels(0, 1, vec![]).is_err());
    }

    #[test]
    fn rgba8_rejects_partial_pixel() {
        assert!(NoiseTexture::from_rgba8(1, 1, &[1, 2, 3]).is_err());
    }

    #[test]
    fn luma8_flips_rows_to_uv_up() {
        // Image order: top row 255, bottom row 0.
        let tex = NoiseTexture::from_luma8(1, 2, &[255, 0]).unwrap();
        assert_eq!(tex.texel(0, 0), grey(0.0));
        assert_eq!(tex.texel(0, 1), grey(1.0));
    }

    #[test]
    fn rgba8_flips_odd_row_count() {
        let bytes = [10, 0, 0, 255, 20, 0, 0, 255, 30, 0, 0, 255];
        let tex = NoiseTexture::from_rgba8(1, 3, &bytes).unwrap();
        assert!((tex.texel(0, 0).x - 30.0 / 255.0).abs() < 1e-6);
        assert!((tex.texel(0, 1).x - 20.0 / 255.0).abs() < 1e-6);
        assert!((tex.texel(0, 2).x - 10.0 / 255.0).abs() < 1e-6);
    }

    // ── sampling ──────────────────────────────────────────────────────────

    #[test]
    fn sample_at_texel_centre_is_exact() {
        let tex = NoiseTexture::from_texels(2, 1, vec![grey(0.0), grey(1.0)]).unwrap();
        assert!((tex.sample(Vec2::new(0.25, 0.5)).x - 0.0).abs() < 1e-6);
        assert!((tex.sample(Vec2::new(0.75, 0.5)).x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn sample_between_centres_interpolates() {
        let tex = NoiseTexture::from_texels(2, 1, vec![grey(0.0), grey(1.0)]).unwrap();
        assert!((tex.sample(Vec2::new(0.5, 0.5)).x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn sample_clamps_at_edges() {
        let tex = NoiseTexture::from_texels(2, 1, vec![grey(0.2), grey(0.8)]).unwrap();
        assert!((tex.sample(Vec2::new(0.0, 0.0)).x - 0.2).abs() < 1e-6);
        assert!((tex.sample(Vec2::new(1.0, 1.0)).x - 0.8).abs() < 1e-6);
    }
}
