use log::warn;

use super::{AutoProgram, Phase, PhaseSchedule};
use crate::{
    actuation::ActuationCommand,
    config::{MechanismConfig, RobotConfig},
};

/// Runs one autonomous activation.
///
/// Built once when autonomous starts. The schedule is derived from the
/// program and timings at that point and never changes afterwards.
#[derive(Debug, Clone)]
pub struct AutonSequencer {
    program:     AutoProgram,
    schedule:    PhaseSchedule,
    mechanism:   MechanismConfig,
    drive_speed: f64,
}

impl AutonSequencer {
    /// Prepares `program` to run with `config`.
    ///
    /// If the configured timings are invalid, a warning is logged and the
    /// sequencer runs [`AutoProgram::DoNothing`] instead.
    pub fn new(program: AutoProgram, config: &RobotConfig) -> Self {
        let (program, schedule) = match PhaseSchedule::build(program, &config.timings) {
            Ok(schedule) => (program, schedule),
            Err(e) => {
                warn!("Autonomous Timing Error: {}, running {}", e, AutoProgram::DoNothing);
                (AutoProgram::DoNothing, PhaseSchedule::default())
            }
        };

        Self {
            program,
            schedule,
            mechanism:   config.mechanism,
            drive_speed: config.timings.drive_speed,
        }
    }

    /// The program this sequencer is running.
    pub fn program(&self) -> AutoProgram { self.program }

    pub fn schedule(&self) -> &PhaseSchedule { &self.schedule }

    /// The phase running `elapsed` seconds after autonomous started.
    pub fn phase_at(&self, elapsed: f64) -> Phase { self.schedule.phase_at(elapsed) }

    /// The outputs to command `elapsed` seconds after autonomous started.
    pub fn command_at(&self, elapsed: f64) -> ActuationCommand {
        let nominal = self.mechanism.intake_current_limit;
        let Some(piece) = self.program.game_piece() else {
            return ActuationCommand::neutral(nominal);
        };

        match self.phase_at(elapsed) {
            Phase::StartDelay | Phase::Hold => ActuationCommand::neutral(nominal),
            Phase::ArmOut => ActuationCommand {
                arm: self.mechanism.arm_output_power,
                ..ActuationCommand::neutral(nominal)
            },
            Phase::IntakeOut => ActuationCommand {
                intake: piece.eject_sign() * self.mechanism.intake_output_power,
                ..ActuationCommand::neutral(nominal)
            },
            Phase::ArmIn => ActuationCommand {
                arm: -self.mechanism.arm_output_power,
                ..ActuationCommand::neutral(self.mechanism.intake_hold_current_limit)
            },
            Phase::DriveOut => ActuationCommand {
                forward: self.drive_speed,
                ..ActuationCommand::neutral(nominal)
            },
        }
    }
}

/// The outputs `program` commands `elapsed` seconds into autonomous, using
/// the default robot configuration.
///
/// The function is total: [`AutoProgram::DoNothing`] and any time past the
/// end of the routine give the all-zero command.
pub fn compute_command(elapsed: f64, program: AutoProgram) -> ActuationCommand {
    AutonSequencer::new(program, &RobotConfig::default()).command_at(elapsed)
}
