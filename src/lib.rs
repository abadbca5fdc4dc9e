//! Quatrot: quaternion rotation math
//!
//! This crate represents 3D orientations as quaternions, converts between
//! quaternion, Euler-angle and axis-angle forms, and rotates points.
//!
//! All types are small `Copy` values and every operation returns a new
//! value, so everything here can be shared across threads freely.
//!
//! ```rust
//! use quatrot::{Quaternion, Vector3};
//! use quatrot::coordinates::deg;
//!
//! let eighth = Quaternion::from_axis_angle(Vector3::new(0.0, 1.0, 0.0), deg(45.0));
//! let quarter = eighth * eighth;
//!
//! let aa = quarter.to_axis_angle();
//! assert!((aa.angle - deg(90.0)).abs() < 1e-12);
//! println!("{} {:#}", quarter, aa);
//! ```

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod format;
pub mod rotation;

// Re-export commonly used types
pub use coordinates::Vector3;
pub use format::TruncatedDisplay;
pub use rotation::{AxisAngle, Quaternion, Tolerance};

/// Main error type for the quatrot library
///
/// The conversions themselves resolve degenerate input with fallback
/// values; these errors come only from the opt-in checked operations.
#[derive(Debug, Error)]
pub enum RotationError {
    #[error("Degenerate rotation: quaternion magnitude is {magnitude}")]
    DegenerateRotation { magnitude: f64 },

    #[error("Non-finite component: {0}")]
    NonFinite(String),

    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(String),
}

/// Result type for quatrot operations
pub type Result<T> = std::result::Result<T, RotationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::deg;

    #[test]
    fn test_error_messages() {
        let err = RotationError::DegenerateRotation { magnitude: 0.0 };
        assert_eq!(err.to_string(), "Degenerate rotation: quaternion magnitude is 0");

        let err = RotationError::InvalidTolerance("negative".to_string());
        assert_eq!(err.to_string(), "Invalid tolerance: negative");
    }

    #[test]
    fn test_reference_demo_outputs() {
        // Two 45° turns about +Y against one 90° turn
        let y_axis = Vector3::new(0.0, 1.0, 0.0);
        let q1 = Quaternion::from_axis_angle(y_axis, deg(45.0));
        let q = q1 * q1;
        let r = Quaternion::from_axis_angle(y_axis, deg(90.0));

        assert_eq!(q.to_string(), r.to_string());
        assert!((r.to_euler_angles() - Vector3::new(0.0, deg(90.0), 0.0)).magnitude() < 1e-7);

        let p = Vector3::new(3.0, 0.0, 1.0);
        let expected = Vector3::new(1.0, 0.0, -3.0);
        assert!((r.rotate_point(p) - expected).magnitude() < 1e-12);
        assert!((q.rotate_point(p) - expected).magnitude() < 1e-12);

        // 90° roll through Euler angles and back
        let e3 = Vector3::new(deg(90.0), 0.0, 0.0);
        let q3 = Quaternion::from_euler_angles(e3);
        assert!((q3.to_euler_angles() - e3).magnitude() < 1e-12);
        assert_eq!(e3.truncated(4).to_string(), "V ( x: 1.5707, y: 0, z: 0 )");
    }

    #[test]
    fn test_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Vector3>();
        assert_send_sync::<Quaternion>();
        assert_send_sync::<AxisAngle>();
        assert_send_sync::<Tolerance>();
        assert_send_sync::<RotationError>();
    }
}
