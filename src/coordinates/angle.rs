//! # Angle Helpers
//!
//! Degree/radian conversion and principal-range wrapping used by the
//! rotation types. Everything in here works on plain `f64` radians; no
//! extension of the primitive types is involved.
//!
//! ## Examples
//!
//! ```rust
//! use quatrot::coordinates::angle::{deg, rad_to_deg};
//!
//! let quarter = deg(90.0);
//! assert!((quarter - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
//! assert!((rad_to_deg(quarter) - 90.0).abs() < 1e-12);
//! ```

use crate::constants::{DEG2RAD, RAD2DEG, TAU};
use std::f64::consts::PI;

/// Converts degrees to radians (`degrees * π / 180`)
///
/// # Examples
///
/// ```rust
/// use quatrot::coordinates::angle::deg;
///
/// assert!((deg(180.0) - std::f64::consts::PI).abs() < 1e-15);
/// ```
pub fn deg(degrees: f64) -> f64 {
    degrees * DEG2RAD
}

/// Converts radians to degrees
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * RAD2DEG
}

/// Wraps an angle into the half-open range (-π, π]
///
/// Steps by 2π at most `max_steps` times, which is all that is needed for
/// inputs already near the principal range. When the budget runs out the
/// remainder is taken in closed form. Non-finite input stays non-finite.
///
/// # Arguments
///
/// * `angle` - Angle in radians
/// * `max_steps` - Maximum number of 2π corrections before falling back
///
/// # Examples
///
/// ```rust
/// use quatrot::coordinates::angle::{deg, wrap_pi};
///
/// let wrapped = wrap_pi(deg(200.0), 64);
/// assert!((wrapped - deg(-160.0)).abs() < 1e-12);
/// ```
pub fn wrap_pi(angle: f64, max_steps: usize) -> f64 {
    if !angle.is_finite() {
        return f64::NAN;
    }

    let mut wrapped = angle;
    for _ in 0..max_steps {
        if wrapped > PI {
            wrapped -= TAU;
        } else if wrapped <= -PI {
            wrapped += TAU;
        } else {
            return wrapped;
        }
    }

    if wrapped > PI || wrapped <= -PI {
        log::debug!(
            "angle {} not wrapped after {} steps, using closed form",
            angle,
            max_steps
        );
        // rem_euclid lands in [0, 2π); shift so that +π maps to itself
        let shifted = (wrapped + PI).rem_euclid(TAU);
        if shifted == 0.0 {
            PI
        } else {
            shifted - PI
        }
    } else {
        wrapped
    }
}
