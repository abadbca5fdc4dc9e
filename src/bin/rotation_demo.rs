//! Rotation Demo
//!
//! Walks through the basic conversions: composing two 45° turns about +Y
//! and comparing with a single 90° turn, extracting Euler angles,
//! rotating a point, and round-tripping a 90° roll through Euler angles.
//!
//! Usage:
//!   cargo run --bin rotation_demo -- [--precision 4] [--json] [--verbose]

use clap::{ArgAction, Parser};
use quatrot::coordinates::deg;
use quatrot::{AxisAngle, Quaternion, Tolerance, TruncatedDisplay, Vector3};
use serde::Serialize;

/// Type alias for the error type used throughout this binary
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Quaternion rotation demo
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Demonstrates quaternion, Euler-angle and axis-angle conversions",
    long_about = None
)]
struct Args {
    /// Fractional digits to show (truncated, not rounded)
    #[arg(
        short,
        long,
        default_value_t = quatrot::constants::DEFAULT_PRECISION as u16,
        value_parser = clap::value_parser!(u16)
    )]
    precision: u16,

    /// Threshold below which a rotation axis is treated as undefined
    #[arg(long, default_value_t = quatrot::constants::AXIS_ANGLE_EPSILON)]
    epsilon: f64,

    /// Emit the results as JSON instead of text
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Log fallback paths taken by the conversions
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

/// Everything the demo computes, in the order it is printed
#[derive(Debug, Serialize)]
struct DemoReport {
    composed: Quaternion,
    direct: Quaternion,
    composed_euler: Vector3,
    direct_euler: Vector3,
    point: Vector3,
    composed_rotated: Vector3,
    direct_rotated: Vector3,
    roll_quaternion: Quaternion,
    roll_euler: Vector3,
    roll_euler_round_trip: Vector3,
    composed_axis_angle: AxisAngle,
}

fn run_demo(tolerance: &Tolerance) -> DemoReport {
    let y_axis = Vector3::new(0.0, 1.0, 0.0);

    let q1 = Quaternion::from_axis_angle(y_axis, deg(45.0));
    let q2 = Quaternion::from_axis_angle(y_axis, deg(45.0));
    let composed = q1 * q2;
    let direct = Quaternion::from_axis_angle(y_axis, deg(90.0));

    let point = Vector3::new(3.0, 0.0, 1.0);

    let roll_euler = Vector3::new(deg(90.0), 0.0, 0.0);
    let roll_quaternion = Quaternion::from_euler_angles(roll_euler);

    DemoReport {
        composed,
        direct,
        composed_euler: composed.to_euler_angles(),
        direct_euler: direct.to_euler_angles(),
        point,
        composed_rotated: composed.rotate_point(point),
        direct_rotated: direct.rotate_point(point),
        roll_quaternion,
        roll_euler,
        roll_euler_round_trip: roll_quaternion.to_euler_angles(),
        composed_axis_angle: composed.to_axis_angle_with(tolerance).normalize_with(tolerance),
    }
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

fn print_report(report: &DemoReport, digits: usize) {
    print_section_header("Composition (45° + 45° about +Y vs 90°)");
    println!("{}", report.composed.truncated(digits));
    println!("{}", report.direct.truncated(digits));

    print_section_header("Euler angles (roll, pitch, yaw)");
    println!("{}", report.composed_euler.truncated(digits));
    println!("{}", report.direct_euler.truncated(digits));

    print_section_header(&format!("Rotating {}", report.point.truncated(digits)));
    println!("{}", report.composed_rotated.truncated(digits));
    println!("{}", report.direct_rotated.truncated(digits));

    print_section_header("90° roll via Euler angles");
    println!("{}", report.roll_quaternion.truncated(digits));
    println!("{}", report.roll_euler.truncated(digits));
    println!("{}", report.roll_euler_round_trip.truncated(digits));

    print_section_header("Axis-angle of the composition");
    println!("{}", report.composed_axis_angle.truncated(digits));
    println!("{:#}", report.composed_axis_angle.truncated(digits));
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "trace" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let tolerance = Tolerance::default().with_axis_angle_epsilon(args.epsilon);
    tolerance.validate()?;
    log::debug!("using {:?}", tolerance);

    let report = run_demo(&tolerance);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, usize::from(args.precision));
    }

    Ok(())
}
