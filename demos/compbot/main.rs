use log::{LevelFilter, info};
use talos::{fs::logger, rng};
use vexide::prelude::*;
pub mod auton;
pub mod hardware;
pub mod opcontrol;

impl Compete for hardware::Robot {
    async fn autonomous(&mut self) { auton::main_auton(self).await; }

    async fn driver(&mut self) { opcontrol::opcontrol(self).await; }
}

#[vexide::main]
async fn main(peripherals: Peripherals) {
    if let Err(e) = logger::init(LevelFilter::Info) {
        println!("Logger init failed: {}", e);
    }
    info!("session seed {:#x}", rng::entropy_seed());

    let robot = hardware::Robot::default_config(peripherals);

    robot.compete().await;
}
