use std::time::Duration;

use talos::drivetrain::DriverConfig;
use vexide::time::sleep;

use crate::hardware::Robot;

pub async fn opcontrol(robot: &mut Robot) {
    let config = DriverConfig::default();

    loop {
        robot.drivetrain.arcade(&robot.controller, &config);
        sleep(Duration::from_millis(20)).await;
    }
}
