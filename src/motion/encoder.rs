//! Encoder-threshold motion primitives for autonomous movement.
//!
//! This module provides [`EncoderMovement`], a blocking motion executor that
//! drives the robot a commanded distance or turns it a commanded angle using
//! only the motors' integrated encoders. No feedback gains are involved: the
//! drivetrain spins at a fixed power until both sides have rotated far
//! enough, then brakes.
//!
//! # Lifecycle of a primitive
//!
//! Every call runs the same sequence:
//!
//! 1. **Reset** both wheel groups' position counters, so completion is
//!    measured from the start of this primitive rather than a stale baseline.
//! 2. **Spin** both groups at the commanded speed, directions selected by
//!    the sign of the request.
//! 3. **Poll** both positions on a fixed tick until both sides reach the
//!    converted target rotation. A side that arrives early keeps spinning at
//!    the commanded speed until the other catches up, which tolerates minor
//!    motor mismatch without an explicit synchronization mechanism.
//! 4. **Stop** both groups with the configured brake mode, leaving the
//!    drivetrain stationary for the next segment.
//!
//! The device commands are issued synchronously and in order on the calling
//! task, so the reset is acknowledged before any spin command and the spin
//! commands before the first poll. Only one primitive may be in flight at a
//! time; the position counters are shared drivetrain state.
//!
//! # Stalls
//!
//! A drivetrain that never reports reaching its target (a dropped motor, a
//! robot pinned against the field wall) would leave a naive polling loop
//! spinning forever. Every primitive therefore carries a timeout; on expiry
//! the executor brakes and returns [`MotionError::Stalled`] so the
//! autonomous sequence can abort cleanly.
//!
//! # Usage
//!
//! ```ignore
//! use talos::motion::{
//!     encoder::{EncoderMovement, MotionConfig},
//!     geo::RobotGeometry,
//! };
//!
//! let motion = EncoderMovement::new(drivetrain, RobotGeometry::new(4.0, 12.0), MotionConfig::default());
//!
//! motion.drive_inches(30.0, 40.0).await?;  // forward 30", 40% power
//! motion.turn_degrees(120.0, 30.0).await?; // clockwise 120°, 30% power
//! motion.drive_inches(-6.0, 35.0).await?;  // back up 6"
//! ```

use std::time::Duration;

use log::{info, warn};
use thiserror::Error;
use vexide::{
    prelude::Direction,
    smart::motor::BrakeMode,
    time::{sleep, user_uptime},
};

use crate::{drivetrain::Differential, motion::geo::RobotGeometry};

/// Timing and stop behavior shared by all motion primitives.
///
/// The defaults match a typical competition drivetrain; most robots only
/// ever adjust `timeout`.
#[derive(Clone, Copy, Debug)]
pub struct MotionConfig {
    /// How often the polling loop samples the encoder positions.
    pub poll_interval: Duration,
    /// How long a primitive may run before it is declared stalled.
    pub timeout:       Duration,
    /// Brake mode applied to both sides when a primitive ends, whether it
    /// completed or stalled. [`BrakeMode::Brake`] actively resists outside
    /// motion so back-to-back segments start from a known-stationary state.
    pub stop_mode:     BrakeMode,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(10),
            timeout:       Duration::from_secs(5),
            stop_mode:     BrakeMode::Brake,
        }
    }
}

/// Failure reported by a motion primitive.
#[derive(Debug, Error)]
pub enum MotionError {
    /// The drivetrain did not reach its target rotation within the
    /// configured timeout. The drivetrain has already been stopped; the
    /// positions are the last values sampled before giving up.
    #[error(
        "drivetrain stalled after {elapsed:?}: left {left:.1}°, right {right:.1}° of {target:.1}° target"
    )]
    Stalled {
        /// Target wheel rotation in degrees.
        target:  f64,
        /// Last sampled left-side rotation magnitude in degrees.
        left:    f64,
        /// Last sampled right-side rotation magnitude in degrees.
        right:   f64,
        /// Time spent in the polling loop before aborting.
        elapsed: Duration,
    },
}

/// The encoder-threshold motion executor.
///
/// Owns the drivetrain for the duration of autonomous and converts
/// robot-frame motion commands into per-wheel rotation targets via
/// [`RobotGeometry`].
///
/// # Example
///
/// ```ignore
/// use talos::motion::encoder::{EncoderMovement, MotionConfig};
/// use talos::motion::geo::RobotGeometry;
///
/// let motion = EncoderMovement::new(
///     robot.drivetrain.clone(),
///     RobotGeometry::new(4.0, 12.0),
///     MotionConfig::default(),
/// );
/// ```
pub struct EncoderMovement {
    /// The drivetrain being driven.
    pub drivetrain: Differential,
    /// Physical constants used for unit conversion.
    pub geometry:   RobotGeometry,
    /// Timing and stop behavior.
    pub config:     MotionConfig,
}

impl EncoderMovement {
    pub fn new(drivetrain: Differential, geometry: RobotGeometry, config: MotionConfig) -> Self {
        Self {
            drivetrain,
            geometry,
            config,
        }
    }

    /// Drives the robot in a straight line for `inches` at `speed` percent
    /// of full power.
    ///
    /// Negative distances drive in reverse; the completion threshold always
    /// uses the magnitude. Blocks until both sides have covered the distance
    /// or the timeout expires.
    ///
    /// Speed is a 0–100 percentage. Values outside that range are passed
    /// through to the motors unclamped; staying in range is the caller's
    /// contract.
    pub async fn drive_inches(&self, inches: f64, speed: f64) -> Result<(), MotionError> {
        let target = self.geometry.linear_to_wheel_degrees(inches.abs());
        let (left_dir, right_dir) = drive_directions(inches);
        info!("drive {:.1}\" at {:.0}% ({:.1}° of wheel rotation)", inches, speed, target);
        self.run_to_target(target, left_dir, right_dir, speed).await
    }

    /// Rotates the robot in place by `degrees` at `speed` percent of full
    /// power.
    ///
    /// Positive angles turn clockwise (left side forward, right side
    /// reverse); negative angles mirror that. Blocks until both sides have
    /// covered the turn arc or the timeout expires.
    pub async fn turn_degrees(&self, degrees: f64, speed: f64) -> Result<(), MotionError> {
        let target = self.geometry.turn_to_wheel_degrees(degrees.abs());
        let (left_dir, right_dir) = turn_directions(degrees);
        info!("turn {:.1}° at {:.0}% ({:.1}° of wheel rotation)", degrees, speed, target);
        self.run_to_target(target, left_dir, right_dir, speed).await
    }

    async fn run_to_target(
        &self,
        target: f64,
        left_dir: Direction,
        right_dir: Direction,
        speed: f64,
    ) -> Result<(), MotionError> {
        // Counters must be zeroed before the spin commands go out, or the
        // completion check below compares against a stale baseline.
        self.drivetrain.left.reset_position();
        self.drivetrain.right.reset_position();

        self.drivetrain.left.spin(left_dir, speed);
        self.drivetrain.right.spin(right_dir, speed);

        let start = user_uptime();
        let result = loop {
            let left = self.drivetrain.left.position().as_degrees().abs();
            let right = self.drivetrain.right.position().as_degrees().abs();

            if both_at_target(left, right, target) {
                break Ok(());
            }

            let elapsed = user_uptime() - start;
            if elapsed >= self.config.timeout {
                warn!(
                    "motion stalled at left {:.1}° / right {:.1}° of {:.1}°",
                    left, right, target
                );
                break Err(MotionError::Stalled {
                    target,
                    left,
                    right,
                    elapsed,
                });
            }

            sleep(self.config.poll_interval).await;
        };

        self.drivetrain.left.stop(self.config.stop_mode);
        self.drivetrain.right.stop(self.config.stop_mode);
        result
    }
}

/// Direction pair for straight-line motion: both sides follow the sign of
/// the requested distance, forward for zero.
fn drive_directions(inches: f64) -> (Direction, Direction) {
    if inches >= 0.0 {
        (Direction::Forward, Direction::Forward)
    } else {
        (Direction::Reverse, Direction::Reverse)
    }
}

/// Direction pair for an in-place turn. Positive angles are clockwise:
/// left side forward, right side reverse.
fn turn_directions(degrees: f64) -> (Direction, Direction) {
    if degrees > 0.0 {
        (Direction::Forward, Direction::Reverse)
    } else {
        (Direction::Reverse, Direction::Forward)
    }
}

/// Completion predicate for the polling loop. Both sides must have reached
/// the target independently; a side that arrives early keeps spinning until
/// the other catches up.
fn both_at_target(left: f64, right: f64, target: f64) -> bool {
    left >= target && right >= target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drive_target_for_30_inches() {
        let geometry = RobotGeometry::new(4.0, 12.0);
        let target = geometry.linear_to_wheel_degrees(30.0_f64.abs());
        assert!((target - 859.4366927).abs() < 1e-6);
    }

    #[test]
    fn turn_target_for_120_degrees() {
        let geometry = RobotGeometry::new(4.0, 12.0);
        let target = geometry.turn_to_wheel_degrees(120.0_f64.abs());
        assert!((target - 360.0).abs() < 1e-9);
    }

    #[test]
    fn forward_drive_spins_both_sides_forward() {
        assert!(matches!(
            drive_directions(30.0),
            (Direction::Forward, Direction::Forward)
        ));
        // zero distance counts as forward
        assert!(matches!(
            drive_directions(0.0),
            (Direction::Forward, Direction::Forward)
        ));
    }

    #[test]
    fn reverse_drive_spins_both_sides_backward() {
        assert!(matches!(
            drive_directions(-6.0),
            (Direction::Reverse, Direction::Reverse)
        ));
    }

    #[test]
    fn turn_sides_oppose() {
        assert!(matches!(
            turn_directions(120.0),
            (Direction::Forward, Direction::Reverse)
        ));
        assert!(matches!(
            turn_directions(-90.0),
            (Direction::Reverse, Direction::Forward)
        ));
    }

    #[test]
    fn completion_requires_both_sides() {
        let target = 859.4;
        // one side early keeps the loop (and both motors) running
        assert!(!both_at_target(860.0, 858.0, target));
        assert!(!both_at_target(858.0, 860.0, target));
        assert!(!both_at_target(0.0, 0.0, target));
        assert!(both_at_target(859.4, 859.4, target));
        assert!(both_at_target(900.0, 861.0, target));
    }

    #[test]
    fn config_defaults() {
        let config = MotionConfig::default();
        assert_eq!(config.poll_interval, Duration::from_millis(10));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(matches!(config.stop_mode, BrakeMode::Brake));
    }

    #[test]
    fn stall_error_reports_positions() {
        let err = MotionError::Stalled {
            target:  859.4,
            left:    120.0,
            right:   118.5,
            elapsed: Duration::from_secs(5),
        };
        let text = err.to_string();
        assert!(text.contains("stalled"));
        assert!(text.contains("859.4"));
        assert!(text.contains("120.0"));
    }
}
