//! Ring layout field.
//!
//! Places each instance of a cube mesh on one of several concentric circles.
//! Circles alternate spin direction and bounce phase, grow in radius with
//! their 1-based index, and drift apart in depth on a slow oscillation.

mod field;
mod layout;
mod params;
mod record;

pub use field::{decompose, evaluate, instance_color, InstanceSlot, RingSample};
pub use layout::RingLayout;
pub use params::{ParameterRange, RingParameters};
pub use record::InstanceRecord;
