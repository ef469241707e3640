use talos::{
    drivetrain::{Differential, WheelGroup},
    motion::geo::RobotGeometry,
};
use vexide::controller::ControllerId;
use vexide::prelude::*;

/// Every piece of hardware the robot touches, built once at startup and
/// passed by reference from there on.
pub struct Robot {
    pub drivetrain: Differential,
    pub controller: Controller,
    pub geometry:   RobotGeometry,
}

impl Robot {
    /// Standard six-motor configuration: left side on ports 1/2/3, right
    /// side on ports 15/13/14 built reversed, red (36:1) gearsets all
    /// around, 4" wheels on a 12" track.
    pub fn default_config(peripherals: Peripherals) -> Self {
        let left = WheelGroup::new([
            Motor::new(peripherals.port_1, Gearset::Red, Direction::Forward),
            Motor::new(peripherals.port_2, Gearset::Red, Direction::Forward),
            Motor::new(peripherals.port_3, Gearset::Red, Direction::Forward),
        ]);
        let right = WheelGroup::new([
            Motor::new(peripherals.port_15, Gearset::Red, Direction::Reverse),
            Motor::new(peripherals.port_13, Gearset::Red, Direction::Reverse),
            Motor::new(peripherals.port_14, Gearset::Red, Direction::Reverse),
        ]);

        Self {
            drivetrain: Differential::from_groups(left, right),
            controller: unsafe { Controller::new(ControllerId::Primary) },
            geometry:   RobotGeometry::new(4.0, 12.0),
        }
    }
}
