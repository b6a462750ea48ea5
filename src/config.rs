//! Tunable constants for the robot's mechanisms and autonomous routine.
//!
//! Everything here is a plain struct with public fields and a [`Default`]
//! carrying the values the robot competes with. Build a [`RobotConfig`] once
//! at startup and hand it to [`Robot`](crate::robot::Robot).
//!
//! # Example
//!
//! ```ignore
//! use everybot::config::{AutonTimings, RobotConfig};
//!
//! let config = RobotConfig {
//!     timings: AutonTimings {
//!         start_delay: 5.0,
//!         ..AutonTimings::default()
//!     },
//!     ..RobotConfig::default()
//! };
//! ```

use crate::auton::ScheduleError;

/// Power and current settings for the arm and intake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MechanismConfig {
    /// Percent output to run the arm out or in at.
    pub arm_output_power:            f64,
    /// How many amps the arm motor can use.
    pub arm_current_limit:           u32,
    /// Percent output for intaking or ejecting.
    pub intake_output_power:         f64,
    /// How many amps the intake can use while picking up.
    pub intake_current_limit:        u32,
    /// Percent output for holding a game piece.
    pub intake_hold_power:           f64,
    /// How many amps the intake can use while holding.
    pub intake_hold_current_limit:   u32,
}

impl Default for MechanismConfig {
    fn default() -> Self {
        Self {
            arm_output_power:          0.4,
            arm_current_limit:         20,
            intake_output_power:       0.5,
            intake_current_limit:      25,
            intake_hold_power:         0.07,
            intake_hold_current_limit: 5,
        }
    }
}

/// Phase durations for the autonomous routine, in seconds.
///
/// The cumulative boundaries of the default table are 1.1 s (arm out),
/// 2.0 s (eject), 3.0 s (arm in) and 5.0 s (drive out). Delayed programs
/// shift every boundary by [`start_delay`](Self::start_delay).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutonTimings {
    /// Time spent waiting before anything moves, for delayed programs.
    pub start_delay:    f64,
    /// Time to extend the arm.
    pub arm_out:        f64,
    /// Time to run the intake and throw the game piece.
    pub intake:         f64,
    /// Time to retract the arm.
    pub arm_in:         f64,
    /// Time to drive out of the community for mobility.
    pub drive:          f64,
    /// Drive speed during the drive-out phase. Negative backs away from the grid.
    pub drive_speed:    f64,
}

impl Default for AutonTimings {
    fn default() -> Self {
        Self {
            start_delay: 3.0,
            arm_out:     1.1,
            intake:      0.9,
            arm_in:      1.0,
            drive:       2.0,
            drive_speed: -0.25,
        }
    }
}

impl AutonTimings {
    /// Checks that every phase has a finite, positive duration and that the
    /// start delay is finite and not negative.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScheduleError`] found, checking fields in phase
    /// order.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if !self.start_delay.is_finite() || self.start_delay < 0.0 {
            return Err(ScheduleError::InvalidDelay(self.start_delay));
        }
        let phases = [
            ("arm out", self.arm_out),
            ("intake", self.intake),
            ("arm in", self.arm_in),
            ("drive", self.drive),
        ];
        for (phase, duration) in phases {
            if !duration.is_finite() || duration <= 0.0 {
                return Err(ScheduleError::InvalidDuration { phase, duration });
            }
        }
        if !self.drive_speed.is_finite() {
            return Err(ScheduleError::InvalidDriveSpeed(self.drive_speed));
        }
        Ok(())
    }
}

/// Everything the control logic needs to know about the robot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RobotConfig {
    pub mechanism: MechanismConfig,
    pub timings:   AutonTimings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timings_are_valid() {
        assert_eq!(AutonTimings::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_durations() {
        let zero = AutonTimings {
            intake: 0.0,
            ..AutonTimings::default()
        };
        assert_eq!(
            zero.validate(),
            Err(ScheduleError::InvalidDuration {
                phase:    "intake",
                duration: 0.0,
            })
        );

        let negative = AutonTimings {
            drive: -1.0,
            ..AutonTimings::default()
        };
        assert!(matches!(
            negative.validate(),
            Err(ScheduleError::InvalidDuration { phase: "drive", .. })
        ));

        let nan = AutonTimings {
            arm_out: f64::NAN,
            ..AutonTimings::default()
        };
        assert!(matches!(
            nan.validate(),
            Err(ScheduleError::InvalidDuration { phase: "arm out", .. })
        ));
    }

    #[test]
    fn rejects_bad_delay() {
        let negative = AutonTimings {
            start_delay: -0.5,
            ..AutonTimings::default()
        };
        assert_eq!(negative.validate(), Err(ScheduleError::InvalidDelay(-0.5)));

        let zero = AutonTimings {
            start_delay: 0.0,
            ..AutonTimings::default()
        };
        assert_eq!(zero.validate(), Ok(()));
    }
}
