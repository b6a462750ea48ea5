//! Timed autonomous routines.
//!
//! The routine is a fixed series of time windows with no sensor feedback:
//! swing the arm out, throw the game piece, bring the arm back, and
//! optionally drive out of the community. Which windows run, and whether the
//! whole thing starts late, depends on the [`AutoProgram`] picked before the
//! match.
//!
//! # Example
//!
//! ```ignore
//! use everybot::auton::{AutoProgram, AutonSequencer};
//! use everybot::config::RobotConfig;
//!
//! let sequencer = AutonSequencer::new(AutoProgram::ConeAndMobility, &RobotConfig::default());
//! let command = sequencer.command_at(0.5); // arm swinging out
//! ```

/// The selectable autonomous programs.
mod program;

/// Phase boundaries derived from a program and its timings.
mod schedule;

/// Choosing the program from the controller before the match.
mod selector;

/// Maps elapsed time to actuator commands.
mod sequencer;

pub use program::{AutoProgram, ParseProgramError};
pub use schedule::{Boundary, Phase, PhaseSchedule, ScheduleError};
pub use selector::{AutoSelector, SelectorInput};
pub use sequencer::{AutonSequencer, compute_command};
