pub mod angle;
pub mod vector;

pub use angle::{deg, rad_to_deg, wrap_pi};
pub use vector::Vector3;
