//! # Three-Dimensional Vector Module
//!
//! This module provides the plain 3D value type that every rotation in the
//! crate consumes and produces: points to be rotated, rotation axes, and
//! Euler angle triples (roll, pitch, yaw) all travel as a `Vector3`.
//!
//! ## Coordinate System Convention
//!
//! Right-handed, with rotations measured counter-clockwise when looking
//! down the positive axis toward the origin:
//! - **X-axis**: roll axis
//! - **Y-axis**: pitch axis
//! - **Z-axis**: yaw axis
//!
//! ## Examples
//!
//! ```rust
//! use quatrot::coordinates::vector::Vector3;
//!
//! let x_axis = Vector3::new(1.0, 0.0, 0.0);
//! let y_axis = Vector3::new(0.0, 1.0, 0.0);
//!
//! assert_eq!(x_axis.dot(&y_axis), 0.0);
//! assert_eq!(x_axis.cross(&y_axis), Vector3::new(0.0, 0.0, 1.0));
//! ```

use crate::format::{precision_of, truncate_decimal};
use nalgebra as na;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-dimensional vector of `f64` components
///
/// A pure value: no normalization, validation or unit is implied. Non-finite
/// components are accepted and simply propagate through arithmetic.
///
/// # Interpretation
///
/// Depending on context a `Vector3` is:
/// - **a point** passed to [`Quaternion::rotate_point`](crate::Quaternion::rotate_point)
/// - **a rotation axis** inside an [`AxisAngle`](crate::AxisAngle)
/// - **Euler angles** as (roll, pitch, yaw) in radians
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component
    pub z: f64,
}

impl Vector3 {
    /// Creates a new vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quatrot::coordinates::vector::Vector3;
    ///
    /// let v = Vector3::new(3.0, 0.0, 1.0);
    /// assert_eq!(v.x, 3.0);
    /// assert_eq!(v.z, 1.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// Euclidean length, `sqrt(x² + y² + z²)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quatrot::coordinates::vector::Vector3;
    ///
    /// assert_eq!(Vector3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns a unit vector in the same direction
    ///
    /// Returns `None` when the magnitude is zero, since no direction exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quatrot::coordinates::vector::Vector3;
    ///
    /// let unit = Vector3::new(3.0, 4.0, 0.0).normalize().unwrap();
    /// assert_eq!(unit, Vector3::new(0.6, 0.8, 0.0));
    /// assert!(Vector3::default().normalize().is_none());
    /// ```
    pub fn normalize(&self) -> Option<Vector3> {
        let mag = self.magnitude();
        if mag == 0.0 {
            None
        } else {
            Some(*self / mag)
        }
    }

    /// Dot product
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product, following the right-hand rule
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

impl From<na::Vector3<f64>> for Vector3 {
    fn from(vec: na::Vector3<f64>) -> Self {
        Vector3::new(vec.x, vec.y, vec.z)
    }
}

impl From<Vector3> for na::Vector3<f64> {
    fn from(vec: Vector3) -> Self {
        na::Vector3::new(vec.x, vec.y, vec.z)
    }
}

impl std::ops::Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: f64) -> Vector3 {
        Vector3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::ops::Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, scalar: f64) -> Vector3 {
        Vector3 {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = precision_of(f);
        write!(
            f,
            "V ( x: {}, y: {}, z: {} )",
            truncate_decimal(self.x, digits),
            truncate_decimal(self.y, digits),
            truncate_decimal(self.z, digits)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_creation() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);

        assert_eq!(Vector3::default(), Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_magnitude_and_normalize() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        assert_eq!(v.magnitude(), 5.0);

        let unit = v.normalize().unwrap();
        assert!((unit.magnitude() - 1.0).abs() < 1e-15);
        assert!((unit.x - 0.6).abs() < 1e-15);
        assert!((unit.y - 0.8).abs() < 1e-15);

        assert!(Vector3::new(0.0, 0.0, 0.0).normalize().is_none());

        // Tiny but non-zero still has a direction
        let tiny = Vector3::new(1e-15, 1e-15, 1e-15);
        assert!((tiny.normalize().unwrap().magnitude() - 1.0).abs() < 1e-14);
    }

    #[test]
    fn test_dot_and_cross() {
        let x_axis = Vector3::new(1.0, 0.0, 0.0);
        let y_axis = Vector3::new(0.0, 1.0, 0.0);
        let z_axis = Vector3::new(0.0, 0.0, 1.0);

        assert_eq!(x_axis.dot(&y_axis), 0.0);
        assert_eq!(x_axis.dot(&Vector3::new(-2.0, 0.0, 0.0)), -2.0);

        // Right-hand rule
        assert_eq!(x_axis.cross(&y_axis), z_axis);
        assert_eq!(y_axis.cross(&z_axis), x_axis);
        assert_eq!(z_axis.cross(&x_axis), y_axis);
    }

    #[test]
    fn test_arithmetic_operations() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Vector3::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn test_non_finite_propagates() {
        let v = Vector3::new(f64::NAN, f64::INFINITY, 1.0);
        let sum = v + Vector3::new(1.0, 1.0, 1.0);
        assert!(sum.x.is_nan());
        assert!(sum.y.is_infinite());
        assert_eq!(sum.z, 2.0);
    }

    #[test]
    fn test_nalgebra_conversions() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let na_vec: na::Vector3<f64> = v.into();
        assert_eq!(na_vec, na::Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Vector3::from(na_vec), v);
    }

    #[test]
    fn test_display_truncates() {
        let v = Vector3::new(1.999999996, -0.5, 6.123233995736766e-17);
        assert_eq!(v.to_string(), "V ( x: 1.99999999, y: -0.5, z: 0 )");
        assert_eq!(format!("{:.2}", v), "V ( x: 1.99, y: -0.5, z: 0 )");
    }
}
