//! # Everybot
//!
//! Control logic for an arm-and-intake competition robot built on
//! [Vexide](https://vexide.dev). It covers:
//!
//! - **Autonomous**: a timed sequence that scores a preloaded cone or cube
//!   and optionally drives out for mobility.
//! - **Operator Control**: arm, intake and arcade drive from a controller,
//!   with holding power on the last game piece picked up.
//! - **Logging and Telemetry**: a file-based logger and per-tick telemetry of
//!   commanded and measured values.
//!
//! Everything that decides what the motors should do is plain computation
//! over an [`ActuationCommand`](actuation::ActuationCommand), so it can be
//! tested off the robot. The [`hardware`] module binds those commands to
//! vexide motors.
//!
//! ## Quick Start
//!
//! ```ignore
//! use everybot::{config::RobotConfig, robot::Robot, telemetry::LogTelemetry};
//!
//! let mut robot = Robot::new(hardware, LogTelemetry, RobotConfig::default());
//! robot.autonomous_init(AutoProgram::ConeAndMobility);
//! loop {
//!     robot.autonomous_periodic(start.elapsed());
//!     sleep(Duration::from_millis(20)).await;
//! }
//! ```

/// Actuation commands and the [`Actuators`](actuation::Actuators) trait.
pub mod actuation;

/// Timed autonomous routines.
///
/// Provides the [`AutoProgram`](auton::AutoProgram) choices and the
/// [`AutonSequencer`](auton::AutonSequencer) that turns elapsed time into
/// commands.
pub mod auton;

/// Tunable constants for the mechanisms and the autonomous routine.
pub mod config;

/// Differential drivetrain control.
///
/// Provides the [`Differential`](drivetrain::Differential) motor groups and
/// the arcade mixer that feeds them.
pub mod drivetrain;

/// Filesystem utilities module.
///
/// Contains logging functionality for recording robot telemetry and debug
/// information to files on the V5 Brain's SD card.
pub mod fs;

/// Game pieces the intake can hold.
pub mod game_piece;

/// The physical robot's motors.
pub mod hardware;

/// Operator control module.
///
/// Maps controller input to arm, intake and drive commands during driver
/// control.
pub mod opcontrol;

/// Period lifecycle hooks called by the competition scheduler.
pub mod robot;

/// Fire-and-forget telemetry sinks.
pub mod telemetry;
