//! Rotation representations and the conversions between them
//!
//! [`Quaternion`] is the working representation; [`AxisAngle`] and Euler
//! angles (carried in a [`Vector3`](crate::Vector3)) are the forms rotations
//! are usually specified and reported in.

pub mod axis_angle;
pub mod quaternion;
pub mod tolerance;

pub use axis_angle::AxisAngle;
pub use quaternion::Quaternion;
pub use tolerance::Tolerance;
