//! Unit conversions between robot-frame motion and wheel rotation.
//!
//! The motion executor thinks in robot units (inches of travel, degrees of
//! robot rotation) while the motors report wheel rotation in degrees. This
//! module holds the conversions between the two, plus the physical constants
//! they depend on.
//!
//! All conversions are pure functions of their arguments; the drivetrain
//! geometry is passed in explicitly rather than read from shared state.
//!
//! # Example
//!
//! ```ignore
//! use talos::motion::geo::RobotGeometry;
//!
//! // 4" wheels on a 12" track
//! let geometry = RobotGeometry::new(4.0, 12.0);
//!
//! // Wheel rotation needed to travel two feet
//! let degrees = geometry.linear_to_wheel_degrees(24.0);
//! ```

use std::f64::consts::PI;

/// Physical constants of a differential drivetrain.
///
/// These are fixed properties of the robot, measured once and supplied when
/// the motion executor is constructed.
///
/// # Example
///
/// ```ignore
/// let geometry = RobotGeometry::new(4.0, 12.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RobotGeometry {
    /// The drive wheel diameter in inches.
    pub wheel_diameter: f64,
    /// The distance between the left and right wheel contact patches in
    /// inches.
    pub track_width:    f64,
}

impl RobotGeometry {
    /// Creates a new geometry from a wheel diameter and track width.
    ///
    /// # Panics
    ///
    /// Panics if either measurement is not strictly positive.
    pub fn new(wheel_diameter: f64, track_width: f64) -> Self {
        assert!(wheel_diameter > 0.0, "wheel diameter must be positive");
        assert!(track_width > 0.0, "track width must be positive");
        Self {
            wheel_diameter,
            track_width,
        }
    }

    /// Converts a linear distance to wheel rotation for this drivetrain.
    pub fn linear_to_wheel_degrees(&self, inches: f64) -> f64 {
        linear_to_wheel_degrees(inches, self.wheel_diameter)
    }

    /// Converts a robot turn angle to wheel rotation for this drivetrain.
    pub fn turn_to_wheel_degrees(&self, turn_degrees: f64) -> f64 {
        turn_to_wheel_degrees(turn_degrees, self.track_width, self.wheel_diameter)
    }
}

/// Converts a linear distance in inches to the wheel rotation in degrees
/// needed to travel it.
///
/// One full wheel rotation covers the wheel's circumference, so
/// `degrees = inches / (π · diameter) · 360`. The sign of `inches` carries
/// through; callers that only care about magnitude take the absolute value
/// themselves and handle direction separately.
pub fn linear_to_wheel_degrees(inches: f64, wheel_diameter: f64) -> f64 {
    (inches / (PI * wheel_diameter)) * 360.0
}

/// Converts a robot turn angle in degrees to the wheel rotation in degrees
/// each side must cover to rotate the robot in place.
///
/// Turning in place moves each wheel along a circle whose diameter is the
/// track width. The turn angle selects a fraction of that circumference,
/// which then converts like any other linear distance.
pub fn turn_to_wheel_degrees(turn_degrees: f64, track_width: f64, wheel_diameter: f64) -> f64 {
    let arc_inches = (turn_degrees / 360.0) * (PI * track_width);
    linear_to_wheel_degrees(arc_inches, wheel_diameter)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn linear_matches_formula() {
        let expected = (30.0 / (PI * 4.0)) * 360.0;
        assert!((linear_to_wheel_degrees(30.0, 4.0) - expected).abs() < TOLERANCE);
        // 30" on a 4" wheel is the canonical field-tile drive
        assert!((expected - 859.4366927).abs() < 1e-6);
    }

    #[test]
    fn linear_is_odd_in_distance() {
        let fwd = linear_to_wheel_degrees(6.0, 4.0);
        let rev = linear_to_wheel_degrees(-6.0, 4.0);
        assert!((fwd + rev).abs() < TOLERANCE);
        assert!(fwd > 0.0);
    }

    #[test]
    fn turn_120_on_12in_track_is_one_wheel_rotation() {
        // arc = (120/360)·π·12 = 4π inches; on a 4" wheel that is exactly 360°
        let degrees = turn_to_wheel_degrees(120.0, 12.0, 4.0);
        assert!((degrees - 360.0).abs() < TOLERANCE);
    }

    #[test]
    fn turn_is_monotonic_in_angle() {
        let mut prev = 0.0;
        for theta in [15.0, 45.0, 90.0, 180.0, 360.0, 720.0] {
            let degrees = turn_to_wheel_degrees(theta, 12.0, 4.0);
            assert!(degrees > prev);
            prev = degrees;
        }
    }

    #[test]
    fn full_turn_equals_track_circumference_drive() {
        // A 360° turn in place walks each wheel around the full track circle.
        let turn = turn_to_wheel_degrees(360.0, 12.0, 4.0);
        let line = linear_to_wheel_degrees(PI * 12.0, 4.0);
        assert!((turn - line).abs() < TOLERANCE);
    }

    #[test]
    fn geometry_methods_delegate() {
        let geometry = RobotGeometry::new(4.0, 12.0);
        assert!(
            (geometry.linear_to_wheel_degrees(30.0) - linear_to_wheel_degrees(30.0, 4.0)).abs()
                < TOLERANCE
        );
        assert!(
            (geometry.turn_to_wheel_degrees(120.0) - turn_to_wheel_degrees(120.0, 12.0, 4.0)).abs()
                < TOLERANCE
        );
    }

    #[test]
    #[should_panic(expected = "wheel diameter must be positive")]
    fn zero_wheel_diameter_rejected() { RobotGeometry::new(0.0, 12.0); }

    #[test]
    #[should_panic(expected = "track width must be positive")]
    fn negative_track_width_rejected() { RobotGeometry::new(4.0, -1.0); }
}
