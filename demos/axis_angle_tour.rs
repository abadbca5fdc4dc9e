use quatrot::coordinates::{deg, rad_to_deg};
use quatrot::{AxisAngle, Quaternion, TruncatedDisplay, Vector3};

fn main() {
    println!("Quatrot Axis-Angle Tour");
    println!("=======================\n");

    // Canonical form: unit axis, angle in [0, π]
    let raw = AxisAngle::new(Vector3::new(0.0, 1.0, 0.0), deg(200.0));
    let canonical = raw.normalize();
    println!("Raw:       {:#}", raw.truncated(4));
    println!("Canonical: {:#}", canonical.truncated(4));
    println!(
        "Angle {:.1}° becomes {:.1}° about the flipped axis",
        rad_to_deg(raw.angle),
        rad_to_deg(canonical.angle)
    );

    // Both describe the same rotation
    let p = Vector3::new(1.0, 0.0, 0.0);
    println!("\nRotating {}", p.truncated(4));
    println!("  raw:       {}", raw.to_quaternion().rotate_point(p).truncated(4));
    println!("  canonical: {}", canonical.to_quaternion().rotate_point(p).truncated(4));

    // Starred form packs direction and amount into one vector
    println!("\nStarred forms (axis scaled by angle/π):");
    for degrees in [30.0, 90.0, 180.0, 270.0] {
        let aa = AxisAngle::from_components(0.0, 0.0, 1.0, deg(degrees)).normalize();
        println!("  {:>5.1}° -> {}", degrees, aa.truncated(4));
    }

    // Three thirds of a turn come back to where they started
    let third = Quaternion::from_axis_angle(Vector3::new(0.0, 1.0, 0.0), deg(120.0));
    let full = third * third * third;
    println!("\nThree 120° turns: {}", full.truncated(6));
    println!("As axis-angle:    {:#}", full.to_axis_angle().truncated(6));
}
