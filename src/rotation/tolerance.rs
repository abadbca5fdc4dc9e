//! Numerical thresholds for the rotation conversions
//!
//! The defaults reproduce the fixed constants the conversions have always
//! used. They are exposed because their correctness depends on the
//! precision of the inputs: data that has been through single-precision
//! storage, for example, needs a looser degeneracy threshold.

use crate::constants::{AXIS_ANGLE_EPSILON, MAX_WRAP_STEPS};
use crate::{Result, RotationError};
use serde::{Deserialize, Serialize};

/// Tunable thresholds used by quaternion and axis-angle conversions
///
/// Deserializes from partial input; missing fields take their defaults.
///
/// ```rust
/// use quatrot::Tolerance;
///
/// let tol: Tolerance = serde_json::from_str(r#"{ "axis_angle_epsilon": 1e-6 }"#).unwrap();
/// assert_eq!(tol.axis_angle_epsilon, 1e-6);
/// assert_eq!(tol.max_wrap_steps, Tolerance::default().max_wrap_steps);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// `sqrt(1 - w²)` below this marks a quaternion whose axis is undefined
    pub axis_angle_epsilon: f64,
    /// 2π corrections attempted before angle wrapping switches to closed form
    pub max_wrap_steps: usize,
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance {
            axis_angle_epsilon: AXIS_ANGLE_EPSILON,
            max_wrap_steps: MAX_WRAP_STEPS,
        }
    }
}

impl Tolerance {
    /// Returns a copy with a different degeneracy threshold
    pub fn with_axis_angle_epsilon(mut self, epsilon: f64) -> Self {
        self.axis_angle_epsilon = epsilon;
        self
    }

    /// Returns a copy with a different wrap step budget
    pub fn with_max_wrap_steps(mut self, steps: usize) -> Self {
        self.max_wrap_steps = steps;
        self
    }

    /// Checks that the thresholds are usable
    ///
    /// The epsilon must be finite and non-negative. A zero epsilon is
    /// allowed and disables the degenerate-axis fallback except for exact
    /// identity rotations.
    pub fn validate(&self) -> Result<()> {
        if !self.axis_angle_epsilon.is_finite() || self.axis_angle_epsilon < 0.0 {
            return Err(RotationError::InvalidTolerance(format!(
                "axis_angle_epsilon must be finite and non-negative, got {}",
                self.axis_angle_epsilon
            )));
        }
        Ok(())
    }
}
