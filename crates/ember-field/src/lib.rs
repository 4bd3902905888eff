//! Ember field crate.
//!
//! Pure procedural evaluators for two demo scenes: an instanced ring of
//! spinning cubes and a pair of noise-driven flame billboards. Every field is
//! a stateless function of (index | coordinate, time, parameters, noise), so
//! callers may evaluate elements in any order or in parallel.

pub mod error;
pub mod logging;
pub mod time;

pub mod shading;
pub mod noise;
pub mod paint;
pub mod ring;
pub mod flame;
pub mod scene;

pub use error::{FieldError, Result};
