//! Headless scene drivers.
//!
//! These call the fields the way a renderer would, once per element per
//! frame, and hand back plain buffers. Elements are independent, so both
//! drivers evaluate in parallel.

mod flames;
mod mask;
mod rings;

pub use flames::{FlameScene, FlameSprite};
pub use mask::MaskImage;
pub use rings::{Extent, RingScene};
