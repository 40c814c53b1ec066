//! Math utilities and types
//!
//! Thin aliases over `nalgebra` plus the Euler-angle rotation helpers used by
//! the scene graph. Rotations are always composed X first, then Y, then Z.

pub use nalgebra::{Matrix4, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }
}

/// Extension trait for Mat4 with rotation constructors
pub trait Mat4Ext {
    /// Create a rotation matrix around the X axis
    fn rotation_x(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Y axis
    fn rotation_y(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Z axis
    fn rotation_z(angle: f32) -> Mat4;

    /// Compose Euler angles (radians) as `Rz * Ry * Rx`.
    ///
    /// Applied to a column vector this rotates about X first, then Y, then Z.
    fn euler_xyz(angles: &Vec3) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn rotation_x(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::x_axis(), angle)
    }

    fn rotation_y(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::y_axis(), angle)
    }

    fn rotation_z(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::z_axis(), angle)
    }

    fn euler_xyz(angles: &Vec3) -> Mat4 {
        Self::rotation_z(angles.z) * Self::rotation_y(angles.y) * Self::rotation_x(angles.x)
    }
}

/// Rotate `point` by `angles` about `origin`.
///
/// The point is expressed relative to `origin`, rotated by the homogeneous
/// `Rz * Ry * Rx` matrix and translated back.
pub fn orbit_point(point: &Vec3, angles: &Vec3, origin: &Vec3) -> Vec3 {
    let relative = Point3::from(point - origin);
    Mat4::euler_xyz(angles).transform_point(&relative).coords + origin
}
