//! # Quaternion Module
//!
//! The central rotation representation. A quaternion `w + xi + yj + zk`
//! of unit norm encodes a rotation by angle θ about unit axis `n` as
//! `(cos(θ/2), n·sin(θ/2))`.
//!
//! ## Normalization
//!
//! The type does not enforce unit norm. The axis-angle constructor
//! normalizes its result, but sums, differences and long chains of
//! products drift, and callers are expected to call
//! [`Quaternion::normalize`] themselves where that matters.
//!
//! ## Composition Convention
//!
//! `a * b` is the Hamilton product. Under [`Quaternion::rotate_point`] it
//! applies `b` first and then `a`.
//!
//! ## Euler Angles
//!
//! Euler triples use the aerospace ZYX convention and are stored in a
//! [`Vector3`] as `(roll, pitch, yaw)`: roll about X, pitch about Y, yaw
//! about Z, applied yaw first.
//!
//! ## Examples
//!
//! ```rust
//! use quatrot::{Quaternion, Vector3};
//! use quatrot::coordinates::deg;
//!
//! let quarter_turn = Quaternion::from_axis_angle(Vector3::new(0.0, 1.0, 0.0), deg(90.0));
//! let p = quarter_turn.rotate_point(Vector3::new(3.0, 0.0, 1.0));
//!
//! assert!((p.x - 1.0).abs() < 1e-12);
//! assert!(p.y.abs() < 1e-12);
//! assert!((p.z + 3.0).abs() < 1e-12);
//! ```

use crate::constants::HALF_PI;
use crate::coordinates::Vector3;
use crate::format::{precision_of, truncate_decimal};
use crate::rotation::axis_angle::AxisAngle;
use crate::rotation::tolerance::Tolerance;
use crate::{Result, RotationError};
use nalgebra as na;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quaternion `w + xi + yj + zk`
///
/// Plain value type; every operation returns a new quaternion.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Quaternion {
    /// Scalar part
    pub w: f64,
    /// i component
    pub x: f64,
    /// j component
    pub y: f64,
    /// k component
    pub z: f64,
}

impl Quaternion {
    /// Creates a quaternion from raw components
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Quaternion { w, x, y, z }
    }

    /// The identity rotation `(1, 0, 0, 0)`
    pub fn identity() -> Self {
        Quaternion::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Builds the rotation of `angle` radians about `axis`
    ///
    /// The result is normalized before it is returned. The axis itself is
    /// not: a non-unit axis still produces a unit quaternion, but one that
    /// encodes a different rotation than intended. Pass a unit axis.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quatrot::{Quaternion, Vector3};
    /// use std::f64::consts::PI;
    ///
    /// let q = Quaternion::from_axis_angle(Vector3::new(0.0, 0.0, 1.0), PI);
    /// assert!(q.w.abs() < 1e-15);
    /// assert_eq!(q.z, 1.0);
    /// ```
    pub fn from_axis_angle(axis: Vector3, angle: f64) -> Self {
        let half = angle / 2.0;
        let s = half.sin();
        Quaternion::new(half.cos(), axis.x * s, axis.y * s, axis.z * s).normalize()
    }

    /// Builds a rotation from Euler angles `(roll, pitch, yaw)` in radians
    ///
    /// Uses the half-angle product formula for the ZYX convention. The
    /// result is unit norm by construction and is not re-normalized.
    pub fn from_euler_angles(euler: Vector3) -> Self {
        let (roll, pitch, yaw) = (euler.x, euler.y, euler.z);

        let (sy, cy) = (yaw * 0.5).sin_cos();
        let (sr, cr) = (roll * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();

        Quaternion::new(
            cy * cr * cp + sy * sr * sp,
            cy * sr * cp - sy * cr * sp,
            cy * cr * sp + sy * sr * cp,
            sy * cr * cp - cy * sr * sp,
        )
    }

    /// Negates the vector part; the inverse of a unit quaternion
    pub fn conjugate(&self) -> Quaternion {
        Quaternion::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Multiplicative inverse, `conjugate / |q|²`
    ///
    /// Like [`Quaternion::normalize`], the zero quaternion yields
    /// non-finite components.
    pub fn inverse(&self) -> Quaternion {
        let norm_sq = self.norm_squared();
        let c = self.conjugate();
        Quaternion::new(c.w / norm_sq, c.x / norm_sq, c.y / norm_sq, c.z / norm_sq)
    }

    fn norm_squared(&self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean norm of `(w, x, y, z)`
    pub fn magnitude(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Divides every component by the magnitude
    ///
    /// # Zero Magnitude
    ///
    /// The zero quaternion is not special-cased: the division produces NaN
    /// components. Use [`Quaternion::try_normalize`] to get an error
    /// instead.
    ///
    /// ```rust
    /// use quatrot::Quaternion;
    ///
    /// let q = Quaternion::default().normalize();
    /// assert!(q.w.is_nan());
    /// ```
    pub fn normalize(&self) -> Quaternion {
        let n = self.magnitude();
        Quaternion::new(self.w / n, self.x / n, self.y / n, self.z / n)
    }

    /// Normalizes, reporting inputs that have no direction
    ///
    /// # Errors
    ///
    /// - [`RotationError::NonFinite`] if any component is NaN or infinite
    /// - [`RotationError::DegenerateRotation`] if the magnitude is zero
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quatrot::{Quaternion, RotationError};
    ///
    /// let q = Quaternion::new(0.0, 3.0, 0.0, 4.0).try_normalize().unwrap();
    /// assert_eq!(q, Quaternion::new(0.0, 0.6, 0.0, 0.8));
    ///
    /// assert!(matches!(
    ///     Quaternion::default().try_normalize(),
    ///     Err(RotationError::DegenerateRotation { .. })
    /// ));
    /// ```
    pub fn try_normalize(&self) -> Result<Quaternion> {
        if !self.is_finite() {
            log::debug!("refusing to normalize non-finite quaternion {:?}", self);
            return Err(RotationError::NonFinite(format!("{:?}", self)));
        }

        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            log::debug!("refusing to normalize zero quaternion");
            return Err(RotationError::DegenerateRotation { magnitude });
        }

        Ok(self.normalize())
    }

    /// True when every component is finite
    pub fn is_finite(&self) -> bool {
        self.w.is_finite() && self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Rotates a point, computing `q · (0, p) · q*`
    ///
    /// Only meaningful for a unit quaternion; this is not checked.
    pub fn rotate_point(&self, p: Vector3) -> Vector3 {
        let r = *self * Quaternion::new(0.0, p.x, p.y, p.z) * self.conjugate();
        Vector3::new(r.x, r.y, r.z)
    }

    /// Extracts Euler angles `(roll, pitch, yaw)` in radians
    ///
    /// # Gimbal Lock
    ///
    /// When the pitch term `2(wy - zx)` reaches ±1, rounding can push it
    /// past the domain of `asin`. Pitch is then reported as exactly ±π/2
    /// with the sign of the term.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quatrot::{Quaternion, Vector3};
    ///
    /// let euler = Vector3::new(0.1, -0.2, 0.3);
    /// let back = Quaternion::from_euler_angles(euler).to_euler_angles();
    /// assert!((back - euler).magnitude() < 1e-12);
    /// ```
    pub fn to_euler_angles(&self) -> Vector3 {
        let q = self;

        // roll (x-axis rotation)
        let sinr = 2.0 * (q.w * q.x + q.y * q.z);
        let cosr = 1.0 - 2.0 * (q.x * q.x + q.y * q.y);
        let roll = sinr.atan2(cosr);

        // pitch (y-axis rotation)
        let sinp = 2.0 * (q.w * q.y - q.z * q.x);
        let pitch = if sinp.abs() >= 1.0 {
            log::trace!("pitch term {} out of asin domain, clamping", sinp);
            if sinp < 0.0 {
                -HALF_PI
            } else {
                HALF_PI
            }
        } else {
            sinp.asin()
        };

        // yaw (z-axis rotation)
        let siny = 2.0 * (q.w * q.z + q.x * q.y);
        let cosy = 1.0 - 2.0 * (q.y * q.y + q.z * q.z);
        let yaw = siny.atan2(cosy);

        Vector3::new(roll, pitch, yaw)
    }

    /// Converts to axis-angle form using the default tolerance
    ///
    /// See [`Quaternion::to_axis_angle_with`].
    pub fn to_axis_angle(&self) -> AxisAngle {
        self.to_axis_angle_with(&Tolerance::default())
    }

    /// Converts to axis-angle form
    ///
    /// The angle is `2·acos(w)` in [0, 2π] and the axis is the vector part
    /// divided by `sqrt(1 - w²)`. When that divisor falls below
    /// `tolerance.axis_angle_epsilon` the rotation is too close to the
    /// identity for the axis to mean anything, and the fixed value
    /// `axis = (1, 0, 0), angle = 0` is returned.
    ///
    /// `w` is clamped to [-1, 1] first so rounding on a unit quaternion
    /// cannot leave the domain of `acos`. The input should be unit norm.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quatrot::{AxisAngle, Quaternion, Tolerance, Vector3};
    ///
    /// let nearly_identity = Quaternion::from_axis_angle(Vector3::new(0.0, 0.0, 1.0), 1e-5);
    /// assert_eq!(
    ///     nearly_identity.to_axis_angle_with(&Tolerance::default()),
    ///     AxisAngle::from_components(1.0, 0.0, 0.0, 0.0)
    /// );
    ///
    /// let strict = Tolerance::default().with_axis_angle_epsilon(1e-8);
    /// let aa = nearly_identity.to_axis_angle_with(&strict);
    /// assert!((aa.axis.z - 1.0).abs() < 1e-6);
    /// ```
    pub fn to_axis_angle_with(&self, tolerance: &Tolerance) -> AxisAngle {
        let w = self.w.clamp(-1.0, 1.0);
        let angle = 2.0 * w.acos();
        let d = (1.0 - w * w).sqrt();

        if d < tolerance.axis_angle_epsilon {
            log::trace!(
                "sin(angle/2) = {} below {}, axis undefined",
                d,
                tolerance.axis_angle_epsilon
            );
            return AxisAngle::from_components(1.0, 0.0, 0.0, 0.0);
        }

        AxisAngle::from_components(self.x / d, self.y / d, self.z / d, angle)
    }
}

impl std::ops::Add for Quaternion {
    type Output = Quaternion;

    fn add(self, other: Quaternion) -> Quaternion {
        Quaternion::new(
            self.w + other.w,
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
        )
    }
}

impl std::ops::Sub for Quaternion {
    type Output = Quaternion;

    fn sub(self, other: Quaternion) -> Quaternion {
        Quaternion::new(
            self.w - other.w,
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
        )
    }
}

/// Hamilton product
impl std::ops::Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, other: Quaternion) -> Quaternion {
        let (a, b, c, d) = (self.w, self.x, self.y, self.z);
        let (e, f, g, h) = (other.w, other.x, other.y, other.z);

        Quaternion::new(
            a * e - b * f - c * g - d * h,
            b * e + a * f + c * h - d * g,
            a * g - b * h + c * e + d * f,
            a * h + b * g - c * f + d * e,
        )
    }
}

/// Rotation of a point, same as [`Quaternion::rotate_point`]
impl std::ops::Mul<Vector3> for Quaternion {
    type Output = Vector3;

    fn mul(self, p: Vector3) -> Vector3 {
        self.rotate_point(p)
    }
}

impl From<na::Quaternion<f64>> for Quaternion {
    fn from(q: na::Quaternion<f64>) -> Self {
        // nalgebra stores [i, j, k, w]
        Quaternion::new(q.coords[3], q.coords[0], q.coords[1], q.coords[2])
    }
}

impl From<Quaternion> for na::Quaternion<f64> {
    fn from(q: Quaternion) -> Self {
        na::Quaternion::new(q.w, q.x, q.y, q.z)
    }
}

impl From<AxisAngle> for Quaternion {
    fn from(aa: AxisAngle) -> Self {
        aa.to_quaternion()
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = precision_of(f);
        write!(
            f,
            "Q ( {} + {} i + {} j + {} k )",
            truncate_decimal(self.w, digits),
            truncate_decimal(self.x, digits),
            truncate_decimal(self.y, digits),
            truncate_decimal(self.z, digits)
        )
    }
}
