use glam::{Mat3, Vec3};

/// Rotation by Euler angles (radians), composed as `Rx * Ry * Rz`.
///
/// Applied to a column vector this rotates about Z first, then Y, then X.
pub fn euler_rotation(angles: Vec3) -> Mat3 {
    Mat3::from_rotation_x(angles.x) * Mat3::from_rotation_y(angles.y) * Mat3::from_rotation_z(angles.z)
}
