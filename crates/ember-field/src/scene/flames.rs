use glam::{Vec2, Vec4};
use rayon::prelude::*;

use crate::error::Result;
use crate::flame::{FlameInputs, FlameVariant};
use crate::noise::NoiseTexture;
use crate::paint::ColorRamp;

use super::MaskImage;

/// Placement of one flame billboard.
///
/// The renderer owns billboarding; these values only describe where the
/// sprite sits and how wide it is relative to its height.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlameSprite {
    pub variant: FlameVariant,
    /// Pivot in sprite uv; `(0.5, 0)` pins the flame base.
    pub anchor: Vec2,
    pub scale_x: f32,
    pub position_x: f32,
}

impl FlameSprite {
    pub const LIQUID: Self = Self {
        variant: FlameVariant::Liquid,
        anchor: Vec2::new(0.5, 0.0),
        scale_x: 0.5,
        position_x: -0.5,
    };

    pub const WISPY: Self = Self {
        variant: FlameVariant::Wispy,
        anchor: Vec2::new(0.5, 0.0),
        scale_x: 1.0,
        position_x: 0.5,
    };

    /// World-space `(min, max)` corners of the billboard at unit height.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let size = Vec2::new(self.scale_x, 1.0);
        let min = Vec2::new(self.position_x, 0.0) - self.anchor * size;
        (min, min + size)
    }
}

/// Two flame billboards sharing their noise tables and palette.
#[derive(Debug, Clone)]
pub struct FlameScene {
    sprites: [FlameSprite; 2],
    cellular: NoiseTexture,
    perlin: NoiseTexture,
    ramp: ColorRamp,
}

impl FlameScene {
    pub fn new(cellular: NoiseTexture, perlin: NoiseTexture, ramp: ColorRamp) -> Self {
        Self {
            sprites: [FlameSprite::LIQUID, FlameSprite::WISPY],
            cellular,
            perlin,
            ramp,
        }
    }

    /// Scene backed by procedurally generated 256² noise tables.
    pub fn generated(seed: u32) -> Result<Self> {
        let cellular = NoiseTexture::cellular(256, 8, seed)?;
        let perlin = NoiseTexture::gradient_rgb(256, 8, seed.wrapping_add(1))?;
        Ok(Self::new(cellular, perlin, ColorRamp::flame()?))
    }

    pub fn sprites(&self) -> &[FlameSprite; 2] {
        &self.sprites
    }

    pub fn inputs(&self) -> FlameInputs<'_> {
        FlameInputs {
            cellular: &self.cellular,
            perlin: &self.perlin,
            ramp: &self.ramp,
        }
    }

    /// Evaluates `variant` at every pixel centre of a `width` × `height` sprite.
    ///
    /// Rows are produced top first; uv y points up, so row 0 is the flame tip.
    pub fn rasterize(&self, variant: FlameVariant, width: u32, height: u32, time: f32) -> MaskImage {
        let inputs = self.inputs();
        let mut pixels = vec![Vec4::ZERO; width as usize * height as usize];

        if width > 0 {
            pixels
                .par_chunks_mut(width as usize)
                .enumerate()
                .for_each(|(row, out)| {
                    let v = 1.0 - (row as f32 + 0.5) / height as f32;
                    for (col, px) in out.iter_mut().enumerate() {
                        let uv = Vec2::new((col as f32 + 0.5) / width as f32, v);
                        let s = variant.evaluate(uv, time, &inputs);
                        *px = s.color.extend(s.alpha);
                    }
                });
        }

        let image = MaskImage::from_pixels(width, height, pixels);
        log::debug!(
            "rasterized {} flame {width}x{height} at t={time:.2}: coverage {:.3}",
            variant.name(),
            image.coverage()
        );
        image
    }
}
