//! Noise lookups consumed by the flame fields.
//!
//! Fields only see the `NoiseSampler` capability. `NoiseTexture` is the
//! table-backed implementation (bilinear, clamp-to-edge); the generators
//! build tileable tables in place of image assets.

mod generate;
mod sampler;
mod texture;

pub use sampler::{ConstantNoise, NoiseSampler};
pub use texture::NoiseTexture;
