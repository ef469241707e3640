//! Autonomous motion control.
//!
//! This module provides the tools for moving the robot during autonomous
//! periods:
//!
//! - **Geometry**: pure unit conversions from robot-frame motion (inches of
//!   travel, degrees of robot rotation) to per-wheel rotation in degrees.
//! - **Encoder motion**: blocking motion primitives that spin the drivetrain
//!   at fixed power and poll the integrated encoders until the target
//!   rotation is reached.
//!
//! # Architecture
//!
//! Motion primitives run on the calling task. Each call resets the position
//! counters, commands both sides to spin, then cooperatively polls on a
//! fixed tick until completion (or a stall timeout), and finally brakes the
//! drivetrain so the next segment starts stationary.
//!
//! # Example
//!
//! ```ignore
//! use talos::motion::{
//!     encoder::{EncoderMovement, MotionConfig},
//!     geo::RobotGeometry,
//! };
//!
//! let motion = EncoderMovement::new(drivetrain, RobotGeometry::new(4.0, 12.0), MotionConfig::default());
//!
//! motion.drive_inches(30.0, 40.0).await?;
//! motion.turn_degrees(120.0, 30.0).await?;
//! ```

/// Encoder-threshold motion primitives.
///
/// Provides [`EncoderMovement`](encoder::EncoderMovement) for blocking
/// drive and turn primitives with stall detection.
pub mod encoder;

/// Drivetrain geometry and unit conversions.
///
/// Provides [`RobotGeometry`](geo::RobotGeometry) and the pure conversion
/// functions between linear/turn motion and wheel rotation.
pub mod geo;
