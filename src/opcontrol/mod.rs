//! Driver control during the teleoperated period.
//!
//! This module turns what the driver is holding into commands for the
//! drivetrain, arm and intake.
//!
//! # Controls
//!
//! - **Arm**: one button swings the arm down, another swings it up. Down wins
//!   if both are held.
//! - **Intake**: one button pulls a cube in (or pushes a cone out), the other
//!   pulls a cone in (or pushes a cube out). After release, the intake keeps
//!   a small holding power on whichever piece it last grabbed.
//! - **Drive**: arcade drive from the left stick.
//!
//! # Example
//!
//! ```ignore
//! use everybot::opcontrol::{ControllerBindings, InputSnapshot, TeleopSession};
//!
//! let bindings = ControllerBindings::default();
//! let mut session = TeleopSession::new(MechanismConfig::default());
//! loop {
//!     let input = InputSnapshot::from_controller(&controller, &bindings);
//!     let command = session.tick(&input);
//!     robot.apply(&command);
//!     sleep(Duration::from_millis(20)).await;
//! }
//! ```

/// Controller button bindings and input snapshots.
pub mod controller;

/// The pure input-to-command mapping.
mod mapper;

pub use controller::{ControllerBindings, ControllerButton};
pub use mapper::{InputSnapshot, TeleopSession, compute_command};
