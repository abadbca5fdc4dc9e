//! Constants module for rotation calculations

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;
/// Quarter turn, the pitch reported at gimbal lock
pub const HALF_PI: f64 = PI / 2.0;

// Numerical thresholds
/// Below this value of `sqrt(1 - w²)` a quaternion's rotation axis is undefined
pub const AXIS_ANGLE_EPSILON: f64 = 1e-4;
/// Upper bound on 2π steps taken when wrapping an angle into (-π, π]
pub const MAX_WRAP_STEPS: usize = 64;

// Display
/// Fractional digits kept when rendering values
pub const DEFAULT_PRECISION: usize = 8;
