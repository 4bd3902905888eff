//! Time subsystem.
//!
//! Supplies the monotonically increasing `time` that every field consumes.
//! - call `tick()` once per presented frame when driven by a real loop
//! - call `advance(dt)` for deterministic offline stepping

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
