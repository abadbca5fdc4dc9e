//! # Axis-Angle Representation
//!
//! A rotation expressed as a direction in space and an angle about it.
//! The same rotation has many axis-angle spellings (any multiple of 2π may
//! be added to the angle, and negating both the axis and the angle changes
//! nothing), so [`AxisAngle::normalize`] picks a canonical one: a unit axis
//! with the angle in [0, π].
//!
//! ## Display
//!
//! Two renderings are available:
//! - `{}` is the *starred* form `A* ( x, y, z )`, where the axis is scaled
//!   by `angle / π` so a single vector carries both direction and amount
//! - `{:#}` is the *raw* form `A ( x, y, z, angle: …π )`
//!
//! ```rust
//! use quatrot::{AxisAngle, Vector3};
//! use quatrot::coordinates::deg;
//!
//! let quarter_turn = AxisAngle::new(Vector3::new(0.0, 1.0, 0.0), deg(90.0));
//! assert_eq!(quarter_turn.to_string(), "A* ( x: 0, y: 0.5, z: 0 )");
//! assert_eq!(format!("{:#}", quarter_turn), "A ( x: 0, y: 1, z: 0, angle: 0.5π )");
//! ```

use crate::coordinates::{wrap_pi, Vector3};
use crate::format::{precision_of, truncate_decimal};
use crate::rotation::quaternion::Quaternion;
use crate::rotation::tolerance::Tolerance;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Rotation of `angle` radians about `axis`
///
/// The axis is expected to be unit length but this is not enforced;
/// [`AxisAngle::normalize`] produces the canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisAngle {
    /// Rotation axis
    pub axis: Vector3,
    /// Rotation angle in radians
    pub angle: f64,
}

impl AxisAngle {
    /// Creates an axis-angle pair as given, without normalization
    pub fn new(axis: Vector3, angle: f64) -> Self {
        AxisAngle { axis, angle }
    }

    /// Creates an axis-angle pair from the axis components and angle
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quatrot::{AxisAngle, Vector3};
    ///
    /// let aa = AxisAngle::from_components(0.0, 0.0, 1.0, 0.25);
    /// assert_eq!(aa.axis, Vector3::new(0.0, 0.0, 1.0));
    /// assert_eq!(aa.angle, 0.25);
    /// ```
    pub fn from_components(x: f64, y: f64, z: f64, angle: f64) -> Self {
        AxisAngle {
            axis: Vector3::new(x, y, z),
            angle,
        }
    }

    /// Returns the canonical form of this rotation using default tolerances
    ///
    /// See [`AxisAngle::normalize_with`].
    pub fn normalize(&self) -> AxisAngle {
        self.normalize_with(&Tolerance::default())
    }

    /// Returns the canonical form of this rotation
    ///
    /// # Algorithm
    ///
    /// 1. A zero-length axis has no direction; the value is returned as is
    /// 2. The axis is scaled to unit length
    /// 3. The angle is wrapped into (-π, π] by whole turns
    /// 4. A negative angle is negated together with the axis, leaving the
    ///    angle in [0, π] while describing the same rotation
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quatrot::{AxisAngle, Tolerance, Vector3};
    /// use quatrot::coordinates::deg;
    ///
    /// let aa = AxisAngle::new(Vector3::new(0.0, 2.0, 0.0), deg(200.0));
    /// let canonical = aa.normalize_with(&Tolerance::default());
    ///
    /// assert!((canonical.angle - deg(160.0)).abs() < 1e-12);
    /// assert_eq!(canonical.axis, Vector3::new(-0.0, -1.0, -0.0));
    /// ```
    pub fn normalize_with(&self, tolerance: &Tolerance) -> AxisAngle {
        let axis = match self.axis.normalize() {
            Some(axis) => axis,
            None => {
                log::trace!("zero-length axis, leaving {:?} unchanged", self);
                return *self;
            }
        };

        let angle = wrap_pi(self.angle, tolerance.max_wrap_steps);
        if angle < 0.0 {
            AxisAngle::new(-axis, -angle)
        } else {
            AxisAngle::new(axis, angle)
        }
    }

    /// Builds the equivalent unit quaternion
    pub fn to_quaternion(&self) -> Quaternion {
        Quaternion::from_axis_angle(self.axis, self.angle)
    }

    /// Axis scaled by `angle / π`
    ///
    /// For a canonical value the length of the result is the fraction of a
    /// half turn the rotation covers.
    pub fn scaled_axis(&self) -> Vector3 {
        self.axis * (self.angle / PI)
    }
}

impl From<Quaternion> for AxisAngle {
    fn from(q: Quaternion) -> Self {
        q.to_axis_angle()
    }
}

impl fmt::Display for AxisAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = precision_of(f);
        if f.alternate() {
            write!(
                f,
                "A ( x: {}, y: {}, z: {}, angle: {}π )",
                truncate_decimal(self.axis.x, digits),
                truncate_decimal(self.axis.y, digits),
                truncate_decimal(self.axis.z, digits),
                truncate_decimal(self.angle / PI, digits)
            )
        } else {
            let starred = self.scaled_axis();
            write!(
                f,
                "A* ( x: {}, y: {}, z: {} )",
                truncate_decimal(starred.x, digits),
                truncate_decimal(starred.y, digits),
                truncate_decimal(starred.z, digits)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::deg;

    fn assert_vec_close(a: Vector3, b: Vector3, tol: f64) {
        assert!(
            (a - b).magnitude() < tol,
            "Vectors differ: {:?} vs {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_construction() {
        let aa = AxisAngle::from_components(1.0, 2.0, 3.0, 0.5);
        assert_eq!(aa, AxisAngle::new(Vector3::new(1.0, 2.0, 3.0), 0.5));

        let zero = AxisAngle::default();
        assert_eq!(zero.axis, Vector3::default());
        assert_eq!(zero.angle, 0.0);
    }

    #[test]
    fn test_normalize_unit_axis_in_range() {
        let aa = AxisAngle::from_components(0.0, 0.0, 1.0, 1.0);
        assert_eq!(aa.normalize(), aa);
    }

    #[test]
    fn test_normalize_scales_axis() {
        let aa = AxisAngle::from_components(0.0, 3.0, 4.0, 0.5).normalize();
        assert_vec_close(aa.axis, Vector3::new(0.0, 0.6, 0.8), 1e-15);
        assert_eq!(aa.angle, 0.5);
    }

    #[test]
    fn test_normalize_wraps_and_flips() {
        let axis = Vector3::new(1.0, 2.0, 2.0);
        let aa = AxisAngle::new(axis, deg(200.0)).normalize();

        assert!((aa.angle - deg(160.0)).abs() < 1e-12);
        assert!(aa.angle >= 0.0 && aa.angle <= PI);
        assert_vec_close(aa.axis, -(axis / 3.0), 1e-15);
    }

    #[test]
    fn test_normalize_negative_angle_flips_axis() {
        let aa = AxisAngle::from_components(0.0, 1.0, 0.0, -0.3).normalize();
        assert!((aa.angle - 0.3).abs() < 1e-15);
        assert_vec_close(aa.axis, Vector3::new(0.0, -1.0, 0.0), 1e-15);
    }

    #[test]
    fn test_normalize_multiple_turns() {
        let aa = AxisAngle::from_components(1.0, 0.0, 0.0, deg(3.0 * 360.0 + 10.0)).normalize();
        assert!((aa.angle - deg(10.0)).abs() < 1e-12);
        assert_vec_close(aa.axis, Vector3::new(1.0, 0.0, 0.0), 1e-15);
    }

    #[test]
    fn test_normalize_half_turn_boundaries() {
        // +π stays, -π becomes +π without flipping the axis
        let aa = AxisAngle::from_components(0.0, 0.0, 1.0, PI).normalize();
        assert_eq!(aa.angle, PI);
        assert_eq!(aa.axis, Vector3::new(0.0, 0.0, 1.0));

        let aa = AxisAngle::from_components(0.0, 0.0, 1.0, -PI).normalize();
        assert!((aa.angle - PI).abs() < 1e-15);
        assert_eq!(aa.axis, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_normalize_zero_axis_unchanged() {
        let aa = AxisAngle::from_components(0.0, 0.0, 0.0, deg(200.0));
        assert_eq!(aa.normalize(), aa);
    }

    #[test]
    fn test_normalize_does_not_mutate() {
        let aa = AxisAngle::from_components(0.0, 2.0, 0.0, -1.0);
        let _ = aa.normalize();
        assert_eq!(aa, AxisAngle::from_components(0.0, 2.0, 0.0, -1.0));
    }

    #[test]
    fn test_normalize_with_small_step_budget() {
        let tol = Tolerance::default().with_max_wrap_steps(1);
        let aa = AxisAngle::from_components(1.0, 0.0, 0.0, deg(10.0 * 360.0 - 20.0));
        let canonical = aa.normalize_with(&tol);

        assert!((canonical.angle - deg(20.0)).abs() < 1e-9);
        assert_vec_close(canonical.axis, Vector3::new(-1.0, 0.0, 0.0), 1e-15);
    }

    #[test]
    fn test_to_quaternion_round_trip() {
        let aa = AxisAngle::from_components(0.0, 0.0, 1.0, deg(60.0));
        let back = aa.to_quaternion().to_axis_angle();

        assert!((back.angle - aa.angle).abs() < 1e-12);
        assert_vec_close(back.axis, aa.axis, 1e-12);

        let via_from: AxisAngle = aa.to_quaternion().into();
        assert_eq!(via_from, back);
    }

    #[test]
    fn test_scaled_axis() {
        let aa = AxisAngle::from_components(0.0, 0.0, -1.0, PI / 4.0);
        assert_vec_close(aa.scaled_axis(), Vector3::new(0.0, 0.0, -0.25), 1e-15);
    }

    #[test]
    fn test_display_modes() {
        let aa = AxisAngle::from_components(0.0, 1.0, 0.0, deg(120.0));

        assert_eq!(aa.to_string(), "A* ( x: 0, y: 0.66666666, z: 0 )");
        assert_eq!(format!("{:.3}", aa), "A* ( x: 0, y: 0.666, z: 0 )");
        assert_eq!(
            format!("{:#.3}", aa),
            "A ( x: 0, y: 1, z: 0, angle: 0.666π )"
        );
    }
}
