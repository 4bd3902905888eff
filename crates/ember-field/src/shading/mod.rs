//! Scalar and vector operators with GPU shading-language semantics.
//!
//! Both fields are written as explicit compositions of these functions; their
//! order matters because `smoothstep` and `step` saturate.

mod ops;
mod rotate;

pub use ops::{remap, smoothstep, step, wrap01, wrap01_vec2};
pub use rotate::euler_rotation;
