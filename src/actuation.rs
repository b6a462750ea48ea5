//! Commands sent to the drivetrain, arm and intake.
//!
//! The control logic never talks to motors directly. It produces an
//! [`ActuationCommand`] every tick and hands it to something implementing
//! [`Actuators`], which is the hardware on the robot and a recording fake in
//! tests.

/// Outputs for a single control tick.
///
/// Percent outputs are in `[-1.0, 1.0]`. Arm out and intake cube-in are
/// positive. `turn` is positive counter-clockwise seen from above.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActuationCommand {
    /// Forward drive speed.
    pub forward:              f64,
    /// Turning speed.
    pub turn:                 f64,
    /// Arm percent output.
    pub arm:                  f64,
    /// Intake percent output.
    pub intake:               f64,
    /// Intake current limit in amps.
    pub intake_current_limit: u32,
}

impl ActuationCommand {
    /// Drive stopped, arm off and intake off at the given current limit.
    pub const fn neutral(intake_current_limit: u32) -> Self {
        Self {
            forward: 0.0,
            turn:    0.0,
            arm:     0.0,
            intake:  0.0,
            intake_current_limit,
        }
    }

    /// Returns true when nothing on the robot is being driven.
    pub fn is_idle(&self) -> bool {
        self.forward == 0.0 && self.turn == 0.0 && self.arm == 0.0 && self.intake == 0.0
    }
}

/// What the drive motors do when commanded to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeutralMode {
    /// Motors actively resist rotation. Used in autonomous so the robot stops
    /// where the routine leaves it.
    Brake,
    /// Motors spin freely. Used during driver control.
    Coast,
}

/// Measured motor state, where the hardware can report it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MechanismReadings {
    pub arm_current:        Option<f64>,
    pub arm_temperature:    Option<f64>,
    pub intake_current:     Option<f64>,
    pub intake_temperature: Option<f64>,
}

/// The three output channels of the robot.
///
/// Every setter must be idempotent: the control loop calls each of them
/// once per tick, usually with the same value as last time.
pub trait Actuators {
    /// Arcade drive. Positive `forward` drives forward, positive `turn` turns
    /// counter-clockwise.
    fn set_drive(&mut self, forward: f64, turn: f64);

    /// Sets the arm output. Positive is out, negative is in.
    fn set_arm(&mut self, percent: f64);

    /// Sets the intake output and its current limit in amps.
    fn set_intake(&mut self, percent: f64, current_limit: u32);

    /// Sets how the drive motors behave when stopped.
    fn set_drive_neutral(&mut self, _mode: NeutralMode) {}

    /// Reads back motor current and temperature. Defaults to nothing.
    fn readings(&mut self) -> MechanismReadings { MechanismReadings::default() }

    /// Forwards every channel of `command` to the setters.
    fn apply(&mut self, command: &ActuationCommand) {
        self.set_arm(command.arm);
        self.set_intake(command.intake, command.intake_current_limit);
        self.set_drive(command.forward, command.turn);
    }
}
