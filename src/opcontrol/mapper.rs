use crate::{actuation::ActuationCommand, config::MechanismConfig, game_piece::GamePiece};

/// Driver inputs read at the start of a control tick.
///
/// Axes follow the gamepad convention: pushing a stick forward reads
/// negative, pushing it right reads positive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    pub arm_down:     bool,
    pub arm_up:       bool,
    pub intake_in:    bool,
    pub intake_out:   bool,
    pub forward_axis: f64,
    pub turn_axis:    f64,
}

impl InputSnapshot {
    /// Clamps both axes into `[-1.0, 1.0]`, reading NaN as centered.
    pub fn sanitized(self) -> Self {
        Self {
            forward_axis: clean_axis(self.forward_axis),
            turn_axis:    clean_axis(self.turn_axis),
            ..self
        }
    }

    /// True when no button is held.
    pub fn buttons_released(&self) -> bool {
        !(self.arm_down || self.arm_up || self.intake_in || self.intake_out)
    }
}

fn clean_axis(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(-1.0, 1.0) }
}

/// Computes one tick of driver control.
///
/// Returns the command to apply and the game piece to remember for the next
/// tick. The memory only changes while an intake button is held.
pub fn compute_command(
    input: &InputSnapshot,
    memory: GamePiece,
    mechanism: &MechanismConfig,
) -> (ActuationCommand, GamePiece) {
    // Arm down wins if both are held. With neither, the motor's brake mode
    // keeps the arm where it is.
    let arm = if input.arm_down {
        -mechanism.arm_output_power
    } else if input.arm_up {
        mechanism.arm_output_power
    } else {
        0.0
    };

    let (intake, intake_current_limit, memory) = if input.intake_in {
        // cube in or cone out
        (mechanism.intake_output_power, mechanism.intake_current_limit, GamePiece::Cube)
    } else if input.intake_out {
        // cone in or cube out
        (-mechanism.intake_output_power, mechanism.intake_current_limit, GamePiece::Cone)
    } else {
        match memory {
            GamePiece::None => (0.0, 0, memory),
            held => (
                held.intake_sign() * mechanism.intake_hold_power,
                mechanism.intake_hold_current_limit,
                held,
            ),
        }
    };

    let command = ActuationCommand {
        forward: -input.forward_axis,
        turn:    -input.turn_axis,
        arm,
        intake,
        intake_current_limit,
    };
    (command, memory)
}

/// Driver control state for one teleoperated period.
///
/// Remembers the last game piece picked up so the intake can keep a small
/// holding power on it after the button is released.
#[derive(Debug, Clone, Default)]
pub struct TeleopSession {
    memory:    GamePiece,
    mechanism: MechanismConfig,
}

impl TeleopSession {
    /// Starts a period with nothing in the intake.
    pub fn new(mechanism: MechanismConfig) -> Self {
        Self {
            memory: GamePiece::None,
            mechanism,
        }
    }

    /// The game piece the intake is currently holding power on.
    pub fn game_piece(&self) -> GamePiece { self.memory }

    /// Computes the command for this tick and updates the game piece memory.
    pub fn tick(&mut self, input: &InputSnapshot) -> ActuationCommand {
        let (command, memory) = compute_command(input, self.memory, &self.mechanism);
        self.memory = memory;
        command
    }
}
