//! Colour model for shaded outputs.
//!
//! Scope:
//! - linear straight-alpha colour with sRGB literal decoding
//! - 1D colour ramps sampled by the liquid flame

pub mod color;
pub mod ramp;

pub use color::Color;
pub use ramp::{ColorRamp, ColorStop};
