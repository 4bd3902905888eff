use glam::{Vec2, Vec4};

use crate::error::Result;

use super::NoiseTexture;

impl NoiseTexture {
    /// Tileable cellular (Voronoi F1) noise, greyscale.
    ///
    /// One feature point per cell of a `cells` × `cells` lattice; each texel
    /// stores the distance to the nearest point in cell units, clamped to 1.
    pub fn cellular(size: u32, cells: u32, seed: u32) -> Result<Self> {
        let cells = cells.max(1);
        let mut texels = Vec::with_capacity(size as usize * size as usize);

        for y in 0..size {
            for x in 0..size {
                let p = (Vec2::new(x as f32, y as f32) + 0.5) / size as f32 * cells as f32;
                let cell = p.floor();
                let mut nearest = f32::MAX;

                for dy in -1..=1 {
                    for dx in -1..=1 {
                        let neighbour = cell + Vec2::new(dx as f32, dy as f32);
                        let wrapped = Vec2::new(
                            (neighbour.x as i64).rem_euclid(cells as i64) as f32,
                            (neighbour.y as i64).rem_euclid(cells as i64) as f32,
                        );
                        let feature = neighbour + feature_point(wrapped, seed);
                        nearest = nearest.min(p.distance(feature));
                    }
                }

                let v = nearest.min(1.0);
                texels.push(Vec4::new(v, v, v, 1.0));
            }
        }

        log::debug!("generated cellular noise {size}x{size}, {cells} cells, seed {seed}");
        Self::from_texels(size, size, texels)
    }

    /// Tileable gradient noise with an independent octave per RGB channel.
    ///
    /// `period` is the lattice resolution across the texture. Values are
    /// remapped from roughly `[-0.7, 0.7]` into `[0, 1]`, alpha is 1.
    pub fn gradient_rgb(size: u32, period: u32, seed: u32) -> Result<Self> {
        let period = period.max(1);
        let mut texels = Vec::with_capacity(size as usize * size as usize);

        for y in 0..size {
            for x in 0..size {
                let p = (Vec2::new(x as f32, y as f32) + 0.5) / size as f32 * period as f32;
                let channel = |c: u32| {
                    let n = gradient_noise(p, period, seed.wrapping_add(c.wrapping_mul(0x9e37_79b9)));
                    (n * 0.5 / 0.7 + 0.5).clamp(0.0, 1.0)
                };
                texels.push(Vec4::new(channel(0), channel(1), channel(2), 1.0));
            }
        }

        log::debug!("generated gradient noise {size}x{size}, period {period}, seed {seed}");
        Self::from_texels(size, size, texels)
    }
}

fn feature_point(cell: Vec2, seed: u32) -> Vec2 {
    let h = lattice_hash(cell.x as u32, cell.y as u32, seed);
    Vec2::new(hash01(h), hash01(h ^ 0x68e3_1da4))
}

fn gradient_noise(p: Vec2, period: u32, seed: u32) -> f32 {
    let cell = p.floor();
    let f = p - cell;
    let u = f * f * (Vec2::splat(3.0) - 2.0 * f);

    let corner = |ox: u32, oy: u32| {
        let cx = (cell.x as u32 + ox) % period;
        let cy = (cell.y as u32 + oy) % period;
        let angle = hash01(lattice_hash(cx, cy, seed)) * std::f32::consts::TAU;
        let gradient = Vec2::new(angle.cos(), angle.sin());
        gradient.dot(f - Vec2::new(ox as f32, oy as f32))
    };

    let bottom = corner(0, 0) + (corner(1, 0) - corner(0, 0)) * u.x;
    let top = corner(0, 1) + (corner(1, 1) - corner(0, 1)) * u.x;
    bottom + (top - bottom) * u.y
}

fn lattice_hash(x: u32, y: u32, seed: u32) -> u32 {
    x.wrapping_mul(0x8da6_b343) ^ y.wrapping_mul(0xd816_3841) ^ seed.wrapping_mul(0xcb1a_b31f)
}

fn hash01(seed: u32) -> f32 {
    let mut x = seed.wrapping_mul(747_796_405).wrapping_add(2_891_336_453);
    x ^= x >> 16;
    x = x.wrapping_mul(2_246_822_519);
    x ^= x >> 13;
    (x as f32) / (u32::MAX as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::NoiseSampler;

    #[test]
    fn cellular_values_in_unit_range() {
        let tex = NoiseTexture::cellular(32, 4, 7).unwrap();
        for y in 0..32 {
            for x in 0..32 {
                let t = tex.texel(x, y);
                assert!((0.0..=1.0).contains(&t.x));
                assert_eq!(t.x, t.y);
            }
        }
    }

    #[test]
    fn cellular_is_deterministic_per_seed() {
        let a = NoiseTexture::cellular(16, 3, 1).unwrap();
        let b = NoiseTexture::cellular(16, 3, 1).unwrap();
        let c = NoiseTexture::cellular(16, 3, 2).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn gradient_rgb_channels_differ() {
        let tex = NoiseTexture::gradient_rgb(32, 4, 3).unwrap();
        let differs = (0..32).any(|x| {
            let t = tex.texel(x, 11);
            (t.x - t.y).abs() > 1e-3
        });
        assert!(differs);
    }

    #[test]
    fn gradient_rgb_tiles_across_edges() {
        // Opposite edges are one texel apart on the torus, so they stay close.
        let tex = NoiseTexture::gradient_rgb(64, 4, 9).unwrap();
        for y in 0..64 {
            let left = tex.texel(0, y);
            let right = tex.texel(63, y);
            assert!((left - right).abs().max_element() < 0.2);
        }
    }

    #[test]
    fn generated_textures_sample_in_range() {
        let tex = NoiseTexture::gradient_rgb(16, 2, 5).unwrap();
        let v = tex.sample(Vec2::new(0.3, 0.9));
        assert!(v.min_element() >= 0.0 && v.max_element() <= 1.0);
    }
}
