use std::time::Duration;

use everybot::{
    auton::{AutoProgram, AutoSelector, SelectorInput},
    config::RobotConfig,
    drivetrain::Differential,
    fs::logger,
    hardware::Everybot,
    opcontrol::{ControllerBindings, InputSnapshot},
    robot::Robot,
    telemetry::LogTelemetry,
};
use log::{info, warn};
use vexide::{prelude::*, time::user_uptime};

/// Control loop period.
const TICK: Duration = Duration::from_millis(20);

/// The program selected at power-on, from `EVERYBOT_AUTO` at build time.
///
/// The drive team can change it from the controller while disabled.
fn initial_program() -> AutoProgram {
    match option_env!("EVERYBOT_AUTO") {
        None => AutoProgram::default(),
        Some(name) => name.parse().unwrap_or_else(|e| {
            warn!("{}, running {}", e, AutoProgram::default());
            AutoProgram::default()
        }),
    }
}

struct Competition {
    robot:      Robot<Everybot, LogTelemetry>,
    controller: Controller,
    bindings:   ControllerBindings,
    selector:   AutoSelector,
}

impl Compete for Competition {
    async fn autonomous(&mut self) {
        self.robot.autonomous_init(self.selector.program());
        let start = user_uptime();
        loop {
            let now = user_uptime();
            self.robot.robot_periodic(now);
            self.robot.autonomous_periodic(now.saturating_sub(start));
            sleep(TICK).await;
        }
    }

    async fn driver(&mut self) {
        self.robot.teleop_init();
        loop {
            self.robot.robot_periodic(user_uptime());
            let input = InputSnapshot::from_controller(&self.controller, &self.bindings);
            self.robot.teleop_periodic(&input);
            sleep(TICK).await;
        }
    }

    async fn disabled(&mut self) {
        self.robot.disabled_init();
        loop {
            self.robot.robot_periodic(user_uptime());
            let input = SelectorInput::from_controller(&self.controller, &self.bindings);
            self.selector.update(input);
            sleep(TICK).await;
        }
    }
}

#[vexide::main]
async fn main(peripherals: Peripherals) {
    if let Err(e) = logger::init(logger::DEFAULT_LEVEL) {
        println!("Logger Init Error: {}", e);
    }

    let selector = AutoSelector::new(initial_program());
    info!("Auto selected: {}", selector.program());

    let config = RobotConfig::default();
    let hardware = Everybot::new(
        Differential::new(
            [
                Motor::new(peripherals.port_3, Gearset::Green, Direction::Forward),
                Motor::new(peripherals.port_4, Gearset::Green, Direction::Forward),
            ],
            [
                Motor::new(peripherals.port_1, Gearset::Green, Direction::Reverse),
                Motor::new(peripherals.port_2, Gearset::Green, Direction::Reverse),
            ],
        ),
        Motor::new(peripherals.port_5, Gearset::Red, Direction::Reverse),
        Motor::new(peripherals.port_6, Gearset::Blue, Direction::Forward),
        &config.mechanism,
    );

    Competition {
        robot:      Robot::new(hardware, LogTelemetry, config),
        controller: peripherals.primary_controller,
        bindings:   ControllerBindings::default(),
        selector,
    }
    .compete()
    .await;
}
