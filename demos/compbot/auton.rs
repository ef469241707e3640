use std::time::Duration;

use log::error;
use talos::motion::encoder::{EncoderMovement, MotionConfig, MotionError};
use vexide::time::sleep;

use crate::hardware::Robot;

pub async fn main_auton(robot: &mut Robot) {
    let motion = EncoderMovement::new(
        robot.drivetrain.clone(),
        robot.geometry,
        MotionConfig::default(),
    );

    if let Err(e) = run(&motion).await {
        // no recovery strategy mid-sequence; stop where we are
        error!("autonomous aborted: {}", e);
    }
}

async fn run(motion: &EncoderMovement) -> Result<(), MotionError> {
    // Drive forward ~1.25 field tiles
    motion.drive_inches(30.0, 40.0).await?;
    sleep(Duration::from_millis(300)).await;

    motion.turn_degrees(120.0, 30.0).await?;
    sleep(Duration::from_millis(200)).await;

    // Back off the scoring zone
    motion.drive_inches(-6.0, 35.0).await
}
