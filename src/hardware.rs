//! The physical robot.
//!
//! [`Everybot`] binds the [`Actuators`] channels to vexide motors: a
//! [`Differential`] drivetrain, one arm motor and one intake motor. Motor
//! errors are logged and dropped; every channel is rewritten on the next
//! tick anyway.
//!
//! # Example
//!
//! ```ignore
//! use everybot::{drivetrain::Differential, hardware::Everybot};
//! use vexide::prelude::*;
//!
//! let robot = Everybot::new(
//!     Differential::new(
//!         [Motor::new(peripherals.port_1, Gearset::Green, Direction::Forward)],
//!         [Motor::new(peripherals.port_2, Gearset::Green, Direction::Reverse)],
//!     ),
//!     Motor::new(peripherals.port_5, Gearset::Red, Direction::Reverse),
//!     Motor::new(peripherals.port_6, Gearset::Green, Direction::Forward),
//!     &MechanismConfig::default(),
//! );
//! ```

use log::warn;
use vexide::{prelude::Motor, smart::motor::BrakeMode};

use crate::{
    actuation::{Actuators, MechanismReadings, NeutralMode},
    config::MechanismConfig,
    drivetrain::Differential,
};

/// Voltage corresponding to full percent output.
const MAX_VOLTAGE: f64 = 12.0;

/// Drivetrain, arm and intake motors.
pub struct Everybot {
    pub drivetrain: Differential,
    pub arm:        Motor,
    pub intake:     Motor,
}

impl Everybot {
    /// Wraps the motors and puts the mechanisms in brake mode so they hold
    /// position when unpowered. The arm's current limit is set here once.
    ///
    /// Arm out is positive and intake cube-in is positive; set the motor
    /// [`Direction`](vexide::prelude::Direction)s to match.
    pub fn new(
        drivetrain: Differential,
        mut arm: Motor,
        mut intake: Motor,
        mechanism: &MechanismConfig,
    ) -> Self {
        for motor in [&mut arm, &mut intake] {
            motor.brake(BrakeMode::Brake).unwrap_or_else(|e| {
                warn!("Motor Brake Error: {}", e);
            });
        }
        arm.set_current_limit(f64::from(mechanism.arm_current_limit))
            .unwrap_or_else(|e| {
                warn!("Arm Current Limit Error: {}", e);
            });

        Self {
            drivetrain,
            arm,
            intake,
        }
    }
}

impl Actuators for Everybot {
    fn set_drive(&mut self, forward: f64, turn: f64) { self.drivetrain.drive_arcade(forward, turn); }

    fn set_arm(&mut self, percent: f64) {
        self.arm.set_voltage(percent * MAX_VOLTAGE).unwrap_or_else(|e| {
            warn!("Arm Set Voltage Error: {}", e);
        });
    }

    fn set_intake(&mut self, percent: f64, current_limit: u32) {
        self.intake
            .set_current_limit(f64::from(current_limit))
            .unwrap_or_else(|e| {
                warn!("Intake Current Limit Error: {}", e);
            });
        self.intake
            .set_voltage(percent * MAX_VOLTAGE)
            .unwrap_or_else(|e| {
                warn!("Intake Set Voltage Error: {}", e);
            });
    }

    fn set_drive_neutral(&mut self, mode: NeutralMode) {
        self.drivetrain.set_brakemode(match mode {
            NeutralMode::Brake => BrakeMode::Brake,
            NeutralMode::Coast => BrakeMode::Coast,
        });
    }

    fn readings(&mut self) -> MechanismReadings {
        MechanismReadings {
            arm_current:        self.arm.current().ok(),
            arm_temperature:    self.arm.temperature().ok(),
            intake_current:     self.intake.current().ok(),
            intake_temperature: self.intake.temperature().ok(),
        }
    }
}
