//! The period lifecycle.
//!
//! [`Robot`] owns the actuators and a telemetry sink and exposes the hooks a
//! competition scheduler calls: one init hook per period and one periodic
//! hook per control tick (nominally every 20 ms). Exactly one mode is
//! active at a time, so the autonomous and driver mappers never both write
//! to the motors in the same tick.
//!
//! Hooks never fail. A periodic hook called for a mode that was never
//! initialized stops everything for that tick. The first such tick after an
//! init hook logs a warning; the rest are silent.

use std::time::Duration;

use log::{info, warn};

use crate::{
    actuation::{ActuationCommand, Actuators, MechanismReadings, NeutralMode},
    auton::{AutoProgram, AutonSequencer},
    config::RobotConfig,
    opcontrol::{InputSnapshot, TeleopSession},
    telemetry::{Telemetry, keys},
};

/// What the robot is doing this period.
#[derive(Debug, Clone)]
pub enum Mode {
    Disabled,
    Autonomous(AutonSequencer),
    Teleop(TeleopSession),
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Disabled => "disabled",
            Mode::Autonomous(_) => "autonomous",
            Mode::Teleop(_) => "teleop",
        }
    }
}

/// Control logic bound to a set of actuators and a telemetry sink.
pub struct Robot<A: Actuators, T: Telemetry> {
    actuators:       A,
    telemetry:       T,
    config:          RobotConfig,
    mode:            Mode,
    mismatch_warned: bool,
}

impl<A: Actuators, T: Telemetry> Robot<A, T> {
    /// Starts disabled.
    pub fn new(actuators: A, telemetry: T, config: RobotConfig) -> Self {
        Self {
            actuators,
            telemetry,
            config,
            mode:            Mode::Disabled,
            mismatch_warned: false,
        }
    }

    pub fn mode(&self) -> &Mode { &self.mode }

    pub fn config(&self) -> &RobotConfig { &self.config }

    pub fn actuators(&self) -> &A { &self.actuators }

    pub fn actuators_mut(&mut self) -> &mut A { &mut self.actuators }

    pub fn telemetry(&self) -> &T { &self.telemetry }

    /// Runs every tick regardless of mode.
    pub fn robot_periodic(&mut self, uptime: Duration) {
        self.telemetry.put_number(keys::TIME, uptime.as_secs_f64());
    }

    /// Starts an autonomous period running `program`.
    ///
    /// The program and its phase schedule are fixed from here until the
    /// period ends.
    pub fn autonomous_init(&mut self, program: AutoProgram) {
        self.actuators.set_drive_neutral(NeutralMode::Brake);

        let sequencer = AutonSequencer::new(program, &self.config);
        info!("Auto selected: {}", sequencer.program());
        self.telemetry.put_text(keys::AUTO_SELECTED, sequencer.program().name());
        self.mode = Mode::Autonomous(sequencer);
        self.mismatch_warned = false;
        self.publish_run_state();
    }

    /// One autonomous tick, `elapsed` after [`autonomous_init`](Self::autonomous_init).
    pub fn autonomous_periodic(&mut self, elapsed: Duration) {
        let seconds = elapsed.as_secs_f64();
        let step = match &self.mode {
            Mode::Autonomous(sequencer) => {
                Some((sequencer.command_at(seconds), sequencer.phase_at(seconds)))
            }
            _ => None,
        };
        let Some((command, phase)) = step else {
            self.reject_tick("Autonomous");
            return;
        };

        self.actuators.apply(&command);
        self.telemetry.put_number(keys::AUTO_ELAPSED, seconds);
        self.telemetry.put_text(keys::AUTO_PHASE, phase.name());
        self.publish_command(&command);
    }

    /// Starts a teleoperated period with nothing in the intake.
    pub fn teleop_init(&mut self) {
        self.actuators.set_drive_neutral(NeutralMode::Coast);
        self.mode = Mode::Teleop(TeleopSession::new(self.config.mechanism));
        self.mismatch_warned = false;
        self.publish_run_state();
    }

    /// One driver control tick.
    pub fn teleop_periodic(&mut self, input: &InputSnapshot) {
        let step = match &mut self.mode {
            Mode::Teleop(session) => {
                let command = session.tick(&input.sanitized());
                Some((command, session.game_piece()))
            }
            _ => None,
        };
        let Some((command, piece)) = step else {
            self.reject_tick("Teleop");
            return;
        };

        self.actuators.apply(&command);
        self.telemetry.put_text(keys::GAME_PIECE, piece.name());
        self.publish_command(&command);
    }

    /// Stops every output and leaves the current period.
    pub fn disabled_init(&mut self) {
        self.mode = Mode::Disabled;
        self.mismatch_warned = false;
        self.stop();
        self.publish_run_state();
    }

    fn reject_tick(&mut self, hook: &str) {
        if !self.mismatch_warned {
            warn!("{} Tick While {}", hook, self.mode.name());
            self.mismatch_warned = true;
        }
        self.stop();
    }

    fn stop(&mut self) {
        let command = ActuationCommand::neutral(self.config.mechanism.intake_current_limit);
        self.actuators.apply(&command);
        self.publish_command(&command);
    }

    fn publish_run_state(&mut self) {
        let (autonomous, teleop) = match self.mode {
            Mode::Disabled => (false, false),
            Mode::Autonomous(_) => (true, false),
            Mode::Teleop(_) => (false, true),
        };
        self.telemetry.put_bool(keys::AUTONOMOUS_ENABLED, autonomous);
        self.telemetry.put_bool(keys::TELEOP_ENABLED, teleop);
    }

    fn publish_command(&mut self, command: &ActuationCommand) {
        let t = &mut self.telemetry;
        t.put_number(keys::DRIVE_FORWARD, command.forward);
        t.put_number(keys::DRIVE_TURN, command.turn);
        t.put_number(keys::ARM_POWER, command.arm);
        t.put_number(keys::INTAKE_POWER, command.intake);
        t.put_number(keys::INTAKE_CURRENT_LIMIT, f64::from(command.intake_current_limit));

        let MechanismReadings {
            arm_current,
            arm_temperature,
            intake_current,
            intake_temperature,
        } = self.actuators.readings();
        let readings = [
            (keys::ARM_CURRENT, arm_current),
            (keys::ARM_TEMPERATURE, arm_temperature),
            (keys::INTAKE_CURRENT, intake_current),
            (keys::INTAKE_TEMPERATURE, intake_temperature),
        ];
        for (key, value) in readings {
            if let Some(value) = value {
                t.put_number(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        actuation::tests::RecordingActuators, game_piece::GamePiece, telemetry::TelemetryTable,
    };

    fn robot() -> Robot<RecordingActuators, TelemetryTable> {
        Robot::new(
            RecordingActuators::default(),
            TelemetryTable::default(),
            RobotConfig::default(),
        )
    }

    fn last(robot: &Robot<RecordingActuators, TelemetryTable>) -> ActuationCommand {
        robot.actuators().last_command().expect("a command was applied")
    }

    #[test]
    fn autonomous_runs_the_selected_program() {
        let mut robot = robot();
        robot.autonomous_init(AutoProgram::ConeAndMobility);

        assert_eq!(robot.actuators().neutral_modes, vec![NeutralMode::Brake]);
        assert_eq!(robot.telemetry().text(keys::AUTO_SELECTED), Some("cone and mobility"));
        assert_eq!(robot.telemetry().flag(keys::AUTONOMOUS_ENABLED), Some(true));

        robot.autonomous_periodic(Duration::from_millis(500));
        assert_eq!(last(&robot).arm, robot.config().mechanism.arm_output_power);
        assert_eq!(robot.telemetry().text(keys::AUTO_PHASE), Some("arm out"));
        assert_eq!(robot.telemetry().number(keys::AUTO_ELAPSED), Some(0.5));

        robot.autonomous_periodic(Duration::from_secs(4));
        assert_eq!(last(&robot).forward, robot.config().timings.drive_speed);

        robot.autonomous_periodic(Duration::from_secs(6));
        assert!(last(&robot).is_idle());
        assert_eq!(robot.telemetry().text(keys::AUTO_PHASE), Some("hold"));
    }

    #[test]
    fn teleop_resets_game_piece_each_period() {
        let mut robot = robot();
        let mechanism = robot.config().mechanism;

        robot.teleop_init();
        assert_eq!(robot.actuators().neutral_modes, vec![NeutralMode::Coast]);
        robot.teleop_periodic(&InputSnapshot {
            intake_in: true,
            ..InputSnapshot::default()
        });
        robot.teleop_periodic(&InputSnapshot::default());
        assert_eq!(last(&robot).intake, mechanism.intake_hold_power);
        assert_eq!(robot.telemetry().text(keys::GAME_PIECE), Some(GamePiece::Cube.name()));

        robot.disabled_init();
        robot.teleop_init();
        robot.teleop_periodic(&InputSnapshot::default());
        assert_eq!(last(&robot), ActuationCommand::neutral(0));
        assert_eq!(robot.telemetry().text(keys::GAME_PIECE), Some("none"));
    }

    #[test]
    fn ticks_in_the_wrong_mode_stop_everything() {
        let mut robot = robot();
        robot.autonomous_periodic(Duration::from_millis(500));
        assert!(last(&robot).is_idle());

        robot.teleop_init();
        robot.autonomous_periodic(Duration::from_millis(500));
        assert!(last(&robot).is_idle());

        robot.autonomous_init(AutoProgram::ConeOnly);
        robot.teleop_periodic(&InputSnapshot {
            arm_up:       true,
            forward_axis: -1.0,
            ..InputSnapshot::default()
        });
        assert!(last(&robot).is_idle());
    }

    #[test]
    fn wrong_mode_warning_is_latched_until_the_next_init() {
        let mut robot = robot();
        assert!(!robot.mismatch_warned);

        for _ in 0..3 {
            robot.teleop_periodic(&InputSnapshot::default());
            assert!(robot.mismatch_warned);
            assert!(last(&robot).is_idle());
        }

        robot.teleop_init();
        assert!(!robot.mismatch_warned);
        robot.teleop_periodic(&InputSnapshot::default());
        assert!(!robot.mismatch_warned);

        robot.autonomous_periodic(Duration::from_millis(20));
        assert!(robot.mismatch_warned);
        robot.disabled_init();
        assert!(!robot.mismatch_warned);
    }

    #[test]
    fn teleop_sanitizes_axes() {
        let mut robot = robot();
        robot.teleop_init();
        robot.teleop_periodic(&InputSnapshot {
            forward_axis: -3.0,
            turn_axis:    f64::NAN,
            ..InputSnapshot::default()
        });
        let command = last(&robot);
        assert_eq!(command.forward, 1.0);
        assert_eq!(command.turn, 0.0);
    }

    #[test]
    fn publishes_commands_readings_and_time() {
        let mut robot = robot();
        robot.robot_periodic(Duration::from_millis(1500));
        robot.teleop_init();
        robot.teleop_periodic(&InputSnapshot {
            arm_down: true,
            ..InputSnapshot::default()
        });

        let telemetry = robot.telemetry();
        assert_eq!(telemetry.number(keys::TIME), Some(1.5));
        assert_eq!(telemetry.number(keys::ARM_POWER), Some(-0.4));
        assert_eq!(telemetry.number(keys::ARM_CURRENT), Some(1.5));
        assert_eq!(telemetry.number(keys::ARM_TEMPERATURE), Some(30.0));
        assert_eq!(telemetry.number(keys::INTAKE_CURRENT), None);
        assert_eq!(telemetry.flag(keys::TELEOP_ENABLED), Some(true));
        assert_eq!(telemetry.flag(keys::AUTONOMOUS_ENABLED), Some(false));
    }

    #[test]
    fn disabling_stops_outputs() {
        let mut robot = robot();
        robot.autonomous_init(AutoProgram::ConeAndMobility);
        robot.autonomous_periodic(Duration::from_millis(500));
        robot.disabled_init();

        assert!(matches!(robot.mode(), Mode::Disabled));
        assert!(last(&robot).is_idle());
        assert_eq!(robot.telemetry().flag(keys::AUTONOMOUS_ENABLED), Some(false));
    }
}
