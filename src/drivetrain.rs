//! Differential drivetrain control.
//!
//! This module provides [`WheelGroup`], an abstraction over one or more
//! mechanically-coupled motors driven in unison, and [`Differential`], which
//! pairs a left and a right group into a tank-drive robot.
//!
//! # Supported Drive Modes
//!
//! - **Arcade**: Left stick for forward/backward, right stick for turning.
//! - **Tank**: Each joystick directly controls one side of the drivetrain.
//!
//! Both schemes apply a configurable deadband so stick noise does not creep
//! into the motors, and arcade scales the turn axis down for finer steering.
//!
//! # Example
//!
//! ```ignore
//! use talos::drivetrain::{Differential, DriverConfig};
//! use vexide::prelude::*;
//!
//! let drivetrain = Differential::new(
//!     [
//!         Motor::new(peripherals.port_1, Gearset::Red, Direction::Forward),
//!         Motor::new(peripherals.port_2, Gearset::Red, Direction::Forward),
//!     ],
//!     [
//!         Motor::new(peripherals.port_3, Gearset::Red, Direction::Reverse),
//!         Motor::new(peripherals.port_4, Gearset::Red, Direction::Reverse),
//!     ],
//! );
//!
//! // In your driver control loop:
//! let controller = Controller::new(ControllerId::Primary);
//! drivetrain.arcade(&controller, &DriverConfig::default());
//! ```

use std::{cell::RefCell, rc::Rc};

use log::warn;
use vexide::{
    controller::ControllerState,
    math::Angle,
    prelude::{Controller, Direction, Motor},
    smart::motor::BrakeMode,
};

/// Full-scale motor voltage on the V5 platform.
const MAX_VOLTAGE: f64 = 12.0;

/// One side of a drivetrain: motors that spin together as a unit.
///
/// The motors are stored in a reference-counted cell so the group can be
/// shared between systems (driver control and the motion executor hold the
/// same hardware).
///
/// # Motor Configuration
///
/// Whether positive commands drive the physical wheel forward is fixed when
/// the motors are constructed, via [`Direction`] — typically one side of the
/// robot is built reversed. The group itself never re-inverts.
///
/// # Errors
///
/// Commands are fanned out to every motor in the group. A motor that
/// rejects a command (unplugged, overheated port) is logged and skipped;
/// the rest of the group still receives the command.
#[derive(Clone)]
pub struct WheelGroup {
    motors: Rc<RefCell<dyn AsMut<[Motor]>>>,
}

impl WheelGroup {
    /// Creates a wheel group from any fixed collection of motors.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let left = WheelGroup::new([
    ///     Motor::new(peripherals.port_1, Gearset::Red, Direction::Forward),
    ///     Motor::new(peripherals.port_2, Gearset::Red, Direction::Forward),
    /// ]);
    /// ```
    pub fn new<M: AsMut<[Motor]> + 'static>(motors: M) -> Self {
        Self {
            motors: Rc::new(RefCell::new(motors)),
        }
    }

    /// Creates a wheel group with shared ownership of an existing motor
    /// collection.
    pub fn from_shared<M: AsMut<[Motor]> + 'static>(motors: Rc<RefCell<M>>) -> Self {
        Self { motors }
    }

    /// Zeroes every motor's position counter.
    ///
    /// Distance measurements made through [`position`](Self::position) are
    /// relative to the most recent reset.
    pub fn reset_position(&self) {
        if let Ok(mut motors) = self.motors.try_borrow_mut() {
            for motor in motors.as_mut() {
                motor.reset_position().unwrap_or_else(|e| {
                    warn!("Motor Reset Position Error: {}", e);
                });
            }
        }
    }

    /// Spins the group continuously in `direction` at `speed` percent of
    /// full power.
    ///
    /// The percentage maps linearly onto the ±12 V motor range. Values
    /// outside 0–100 are passed through unclamped; staying in range is the
    /// caller's contract.
    pub fn spin(&self, direction: Direction, speed: f64) {
        self.set_voltage(spin_voltage(direction, speed));
    }

    /// Applies a raw voltage to every motor in the group.
    pub fn set_voltage(&self, volts: f64) {
        if let Ok(mut motors) = self.motors.try_borrow_mut() {
            for motor in motors.as_mut() {
                motor.set_voltage(volts).unwrap_or_else(|e| {
                    warn!("Motor Set Voltage Error: {}", e);
                });
            }
        }
    }

    /// Halts the group.
    ///
    /// [`BrakeMode::Brake`] actively resists outside motion,
    /// [`BrakeMode::Hold`] servos back to the stop position, and
    /// [`BrakeMode::Coast`] lets the wheels spin freely.
    pub fn stop(&self, mode: BrakeMode) {
        if let Ok(mut motors) = self.motors.try_borrow_mut() {
            for motor in motors.as_mut() {
                motor.brake(mode).unwrap_or_else(|e| {
                    warn!("Motor Brake Error: {}", e);
                });
            }
        }
    }

    /// Returns the group's rotation since the last reset, averaged across
    /// its motors.
    ///
    /// Motors that fail to report are excluded from the average and logged.
    /// If nothing reports (or the group is momentarily borrowed elsewhere)
    /// the position reads as zero.
    pub fn position(&self) -> Angle {
        let mut sum = Angle::from_degrees(0.0);
        let mut count: f64 = 0.0;

        match self.motors.try_borrow_mut() {
            Ok(mut motors) => {
                for motor in motors.as_mut() {
                    match motor.position() {
                        Ok(angle) => {
                            sum += angle;
                            count += 1.0;
                        }
                        Err(e) => warn!("Motor Position Error: {}", e),
                    }
                }
            }
            Err(e) => warn!("Error Borrowing Motor Group: {}", e),
        }

        if count > 0.0 {
            sum / count
        } else {
            Angle::from_degrees(0.0)
        }
    }
}

/// Driver-control tuning shared by the control schemes.
///
/// The defaults come from match practice: a 5% deadband swallows stick
/// noise, and scaling turns to 85% keeps steering controllable at speed.
#[derive(Clone, Copy, Debug)]
pub struct DriverConfig {
    /// Stick inputs at or below this magnitude (on the ±1 stick range) are
    /// treated as zero.
    pub deadband:   f64,
    /// Multiplier applied to the arcade turn axis.
    pub turn_scale: f64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            deadband:   0.05,
            turn_scale: 0.85,
        }
    }
}

/// A differential drivetrain: a left and a right [`WheelGroup`].
///
/// Cloning is cheap and shares the underlying hardware, so driver control
/// and the autonomous motion executor can both hold the drivetrain. The two
/// never run concurrently — the competition scheduler switches between them.
#[derive(Clone)]
pub struct Differential {
    /// The left-side wheel group.
    pub left:  WheelGroup,
    /// The right-side wheel group.
    pub right: WheelGroup,
}

impl Differential {
    /// Creates a drivetrain from the left and right motor collections.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let drivetrain = Differential::new(
    ///     [
    ///         Motor::new(peripherals.port_1, Gearset::Red, Direction::Forward),
    ///         Motor::new(peripherals.port_2, Gearset::Red, Direction::Forward),
    ///     ],
    ///     [
    ///         Motor::new(peripherals.port_3, Gearset::Red, Direction::Reverse),
    ///         Motor::new(peripherals.port_4, Gearset::Red, Direction::Reverse),
    ///     ],
    /// );
    /// ```
    pub fn new<L: AsMut<[Motor]> + 'static, R: AsMut<[Motor]> + 'static>(
        left: L,
        right: R,
    ) -> Self {
        Self {
            left:  WheelGroup::new(left),
            right: WheelGroup::new(right),
        }
    }

    /// Creates a drivetrain from two existing wheel groups.
    pub fn from_groups(left: WheelGroup, right: WheelGroup) -> Self { Self { left, right } }

    /// Drives using arcade controls: left stick Y for forward/backward,
    /// right stick X for turning.
    ///
    /// Each axis passes through the deadband, the turn axis is scaled by
    /// `turn_scale`, and the mixed per-side outputs are clamped to the unit
    /// range before being scaled to volts. If reading the controller fails,
    /// zeroed inputs are used and a warning is logged.
    pub fn arcade(&self, controller: &Controller, config: &DriverConfig) {
        let state = get_state(controller);

        let fwd = apply_deadband(state.left_stick.y(), config.deadband);
        let turn = apply_deadband(state.right_stick.x(), config.deadband) * config.turn_scale;

        let (left, right) = arcade_mix(fwd, turn);

        self.left.set_voltage(left * MAX_VOLTAGE);
        self.right.set_voltage(right * MAX_VOLTAGE);
    }

    /// Drives using tank controls: each stick's Y axis commands its side
    /// directly.
    ///
    /// The deadband applies per stick; `turn_scale` is unused in this
    /// scheme. On a controller read error, zeroed inputs are used and a
    /// warning is logged.
    pub fn tank(&self, controller: &Controller, config: &DriverConfig) {
        let state = get_state(controller);

        let left = apply_deadband(state.left_stick.y(), config.deadband);
        let right = apply_deadband(state.right_stick.y(), config.deadband);

        self.left.set_voltage(left * MAX_VOLTAGE);
        self.right.set_voltage(right * MAX_VOLTAGE);
    }

    /// Sets the brake mode for every motor in the drivetrain.
    ///
    /// The brake mode determines how motors behave when no voltage is
    /// applied.
    pub fn set_brakemode(&self, mode: BrakeMode) {
        self.left.stop(mode);
        self.right.stop(mode);
    }
}

fn get_state(controller: &Controller) -> ControllerState {
    controller.state().unwrap_or_else(|e| {
        warn!("Controller State Error: {}", e);
        ControllerState::default()
    })
}

/// Zeroes inputs whose magnitude is within the deadband; passes the rest
/// through unchanged.
fn apply_deadband(value: f64, deadband: f64) -> f64 {
    if value.abs() <= deadband { 0.0 } else { value }
}

/// Mixes forward/turn into per-side outputs, clamped to the unit range.
fn arcade_mix(fwd: f64, turn: f64) -> (f64, f64) {
    let left = (fwd + turn).clamp(-1.0, 1.0);
    let right = (fwd - turn).clamp(-1.0, 1.0);
    (left, right)
}

/// Signed voltage for a percent-of-full-power spin command.
fn spin_voltage(direction: Direction, speed: f64) -> f64 {
    let volts = speed / 100.0 * MAX_VOLTAGE;
    match direction {
        Direction::Forward => volts,
        Direction::Reverse => -volts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn deadband_zeroes_small_inputs() {
        assert_eq!(apply_deadband(0.03, 0.05), 0.0);
        assert_eq!(apply_deadband(-0.05, 0.05), 0.0);
        assert_eq!(apply_deadband(0.06, 0.05), 0.06);
        assert_eq!(apply_deadband(-0.5, 0.05), -0.5);
    }

    #[test]
    fn arcade_mix_is_sum_and_difference() {
        let (left, right) = arcade_mix(0.5, 0.25);
        assert!((left - 0.75).abs() < TOLERANCE);
        assert!((right - 0.25).abs() < TOLERANCE);
    }

    #[test]
    fn arcade_mix_clamps_to_unit_range() {
        let (left, right) = arcade_mix(0.9, 0.5);
        assert!((left - 1.0).abs() < TOLERANCE);
        assert!((right - 0.4).abs() < TOLERANCE);

        let (left, right) = arcade_mix(-0.9, 0.5);
        assert!((left + 0.4).abs() < TOLERANCE);
        assert!((right + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn spin_voltage_scales_percent_onto_voltage_range() {
        assert!((spin_voltage(Direction::Forward, 40.0) - 4.8).abs() < TOLERANCE);
        assert!((spin_voltage(Direction::Reverse, 40.0) + 4.8).abs() < TOLERANCE);
        assert!((spin_voltage(Direction::Forward, 100.0) - MAX_VOLTAGE).abs() < TOLERANCE);
        assert_eq!(spin_voltage(Direction::Forward, 0.0), 0.0);
    }
}
