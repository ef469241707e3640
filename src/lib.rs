//! # Talos
//!
//! Talos is a compact control library for VEX V5 differential-drive robots
//! built on [Vexide](https://vexide.dev). It covers the two halves of a
//! competition program:
//!
//! - **Autonomous Motion**: encoder-threshold motion primitives that drive a
//!   commanded distance or turn a commanded angle, blocking until both sides
//!   of the drivetrain reach their target rotation.
//! - **Driver Control**: arcade and tank control schemes with deadband and
//!   turn scaling.
//! - **Logging**: a file-based logger for debugging and telemetry.
//!
//! ## Quick Start
//!
//! ```ignore
//! use talos::{
//!     drivetrain::{Differential, WheelGroup},
//!     motion::{encoder::{EncoderMovement, MotionConfig}, geo::RobotGeometry},
//! };
//! use vexide::prelude::*;
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     let drivetrain = Differential::new(
//!         [
//!             Motor::new(peripherals.port_1, Gearset::Red, Direction::Forward),
//!             Motor::new(peripherals.port_2, Gearset::Red, Direction::Forward),
//!         ],
//!         [
//!             Motor::new(peripherals.port_3, Gearset::Red, Direction::Reverse),
//!             Motor::new(peripherals.port_4, Gearset::Red, Direction::Reverse),
//!         ],
//!     );
//!
//!     let motion = EncoderMovement::new(
//!         drivetrain,
//!         RobotGeometry::new(4.0, 12.0),
//!         MotionConfig::default(),
//!     );
//!
//!     if let Err(e) = motion.drive_inches(24.0, 40.0).await {
//!         log::error!("drive failed: {e}");
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`drivetrain`]: Wheel groups and differential drivetrain control.
//! - [`motion`]: Autonomous motion primitives and drivetrain geometry.
//! - [`fs`]: Filesystem utilities including logging.
//! - [`rng`]: Entropy seeding from hardware state.

/// Differential drivetrain control module.
///
/// Provides [`WheelGroup`](drivetrain::WheelGroup), an abstraction over one
/// or more motors driven in unison, and
/// [`Differential`](drivetrain::Differential), which pairs a left and right
/// group and implements the driver control schemes:
///
/// - **Arcade**: Left stick for forward/backward, right stick for turning.
/// - **Tank**: Each joystick controls one side of the robot.
pub mod drivetrain;

/// Filesystem utilities module.
///
/// Contains logging functionality for recording robot telemetry and debug
/// information to files on the V5 Brain's SD card.
pub mod fs;

/// Autonomous motion control module.
///
/// Provides the unit conversions between robot-frame motion and wheel
/// rotation ([`geo`](motion::geo)) and the encoder-threshold motion
/// executor ([`encoder`](motion::encoder)) used during autonomous periods.
pub mod motion;

/// Entropy seeding module.
///
/// Derives a pseudo-random seed from battery telemetry and program uptime,
/// for robots that want per-run variation without a hardware RNG.
pub mod rng;
