use heapless::Vec;

use super::AutoProgram;
use crate::config::AutonTimings;

/// Most phases a schedule can hold: delay, arm out, eject, arm in, drive.
const MAX_PHASES: usize = 5;

/// One step of the autonomous routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting before doing anything.
    StartDelay,
    /// Swinging the arm out over the grid.
    ArmOut,
    /// Running the intake to throw the game piece.
    IntakeOut,
    /// Bringing the arm back in.
    ArmIn,
    /// Driving out of the community.
    DriveOut,
    /// Routine finished, everything stopped.
    Hold,
}

impl Phase {
    pub const fn name(self) -> &'static str {
        match self {
            Phase::StartDelay => "start delay",
            Phase::ArmOut => "arm out",
            Phase::IntakeOut => "intake out",
            Phase::ArmIn => "arm in",
            Phase::DriveOut => "drive out",
            Phase::Hold => "hold",
        }
    }
}

/// Errors from building a [`PhaseSchedule`] out of bad timings.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    #[error("{phase} duration must be finite and positive, got {duration}")]
    InvalidDuration { phase: &'static str, duration: f64 },
    #[error("start delay must be finite and not negative, got {0}")]
    InvalidDelay(f64),
    #[error("drive speed must be finite, got {0}")]
    InvalidDriveSpeed(f64),
}

/// A phase and the elapsed time, in seconds, at which it ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub phase: Phase,
    pub end:   f64,
}

/// The ordered phase boundaries for one autonomous activation.
///
/// End times are strictly increasing. [`Phase::Hold`] is never stored; it is
/// whatever comes after the last boundary.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PhaseSchedule {
    boundaries: Vec<Boundary, MAX_PHASES>,
}

impl PhaseSchedule {
    /// Lays out the phases `program` runs using the durations in `timings`.
    ///
    /// Delayed programs start with a [`Phase::StartDelay`] and every later
    /// boundary moves back by the delay. Programs without mobility have no
    /// [`Phase::DriveOut`]. A program that does nothing gets an empty
    /// schedule, so it holds from the first tick.
    ///
    /// # Errors
    ///
    /// Returns a [`ScheduleError`] when `timings` fails
    /// [`AutonTimings::validate`].
    pub fn build(program: AutoProgram, timings: &AutonTimings) -> Result<Self, ScheduleError> {
        timings.validate()?;

        let mut boundaries = Vec::new();
        if program.game_piece().is_none() {
            return Ok(Self { boundaries });
        }

        let offset = if program.delayed() && timings.start_delay > 0.0 {
            push(&mut boundaries, Phase::StartDelay, timings.start_delay);
            timings.start_delay
        } else {
            0.0
        };

        // Ends are summed without the delay and shifted afterwards, so a
        // delayed boundary is exactly its undelayed end plus the delay.
        let steps = [
            Some((Phase::ArmOut, timings.arm_out)),
            Some((Phase::IntakeOut, timings.intake)),
            Some((Phase::ArmIn, timings.arm_in)),
            program.mobility().then_some((Phase::DriveOut, timings.drive)),
        ];
        let mut end = 0.0;
        for (phase, duration) in steps.into_iter().flatten() {
            end += duration;
            push(&mut boundaries, phase, end + offset);
        }
        Ok(Self { boundaries })
    }

    /// The phase running at `elapsed` seconds.
    ///
    /// Boundaries compare with strict less-than, so a time exactly on a
    /// boundary belongs to the phase after it.
    pub fn phase_at(&self, elapsed: f64) -> Phase {
        self.boundaries
            .iter()
            .find(|boundary| elapsed < boundary.end)
            .map_or(Phase::Hold, |boundary| boundary.phase)
    }

    /// When the phase `phase` ends, if this schedule has it.
    pub fn end_of(&self, phase: Phase) -> Option<f64> {
        self.boundaries
            .iter()
            .find(|boundary| boundary.phase == phase)
            .map(|boundary| boundary.end)
    }

    /// Time after which the routine holds still.
    pub fn total(&self) -> f64 { self.boundaries.last().map_or(0.0, |boundary| boundary.end) }

    pub fn boundaries(&self) -> &[Boundary] { &self.boundaries }
}

fn push(boundaries: &mut Vec<Boundary, MAX_PHASES>, phase: Phase, end: f64) {
    let pushed = boundaries.push(Boundary { phase, end });
    debug_assert!(pushed.is_ok(), "{} does not fit in {MAX_PHASES} phases", phase.name());
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn phases(schedule: &PhaseSchedule) -> std::vec::Vec<Phase> {
        schedule.boundaries().iter().map(|b| b.phase).collect()
    }

    #[test]
    fn cone_and_mobility_boundaries() {
        let schedule =
            PhaseSchedule::build(AutoProgram::ConeAndMobility, &AutonTimings::default()).unwrap();

        assert_eq!(
            phases(&schedule),
            [Phase::ArmOut, Phase::IntakeOut, Phase::ArmIn, Phase::DriveOut]
        );
        let ends: std::vec::Vec<f64> = schedule.boundaries().iter().map(|b| b.end).collect();
        for (end, expected) in ends.iter().zip([1.1, 2.0, 3.0, 5.0]) {
            assert!((end - expected).abs() < EPS, "{end} != {expected}");
        }
    }

    #[test]
    fn boundaries_belong_to_the_next_phase() {
        let schedule =
            PhaseSchedule::build(AutoProgram::ConeAndMobility, &AutonTimings::default()).unwrap();

        for boundary in schedule.boundaries() {
            assert_eq!(schedule.phase_at(boundary.end - 1e-6), boundary.phase);
            assert_ne!(schedule.phase_at(boundary.end), boundary.phase);
            assert_ne!(schedule.phase_at(boundary.end + 1e-6), boundary.phase);
        }
        assert_eq!(schedule.phase_at(0.0), Phase::ArmOut);
        assert_eq!(schedule.phase_at(schedule.total()), Phase::Hold);
        assert_eq!(schedule.phase_at(1000.0), Phase::Hold);
    }

    #[test]
    fn end_times_strictly_increase() {
        for program in AutoProgram::ALL {
            let schedule = PhaseSchedule::build(program, &AutonTimings::default()).unwrap();
            for pair in schedule.boundaries().windows(2) {
                assert!(pair[0].end < pair[1].end, "{program}: {pair:?}");
            }
        }
    }

    #[test]
    fn delay_shifts_every_boundary() {
        for start_delay in [AutonTimings::default().start_delay, 0.3, 1.3, 1.7, 2.1] {
            let timings = AutonTimings {
                start_delay,
                ..AutonTimings::default()
            };
            let plain = PhaseSchedule::build(AutoProgram::ConeAndMobility, &timings).unwrap();
            let delayed =
                PhaseSchedule::build(AutoProgram::DelayedConeAndMobility, &timings).unwrap();

            assert_eq!(
                delayed.boundaries()[0],
                Boundary {
                    phase: Phase::StartDelay,
                    end:   start_delay,
                }
            );
            assert_eq!(delayed.boundaries().len(), plain.boundaries().len() + 1);
            for (shifted, base) in delayed.boundaries()[1..].iter().zip(plain.boundaries()) {
                assert_eq!(shifted.phase, base.phase);
                assert_eq!(shifted.end, base.end + start_delay, "delay {start_delay}");
            }
        }
    }

    #[test]
    fn delayed_boundary_tick_moves_to_the_next_phase() {
        let timings = AutonTimings {
            start_delay: 0.3,
            ..AutonTimings::default()
        };
        let plain = PhaseSchedule::build(AutoProgram::ConeAndMobility, &timings).unwrap();
        let delayed = PhaseSchedule::build(AutoProgram::DelayedConeAndMobility, &timings).unwrap();

        let eject_end = plain.end_of(Phase::IntakeOut).unwrap() + 0.3;
        assert_eq!(delayed.phase_at(eject_end), Phase::ArmIn);
        assert_eq!(delayed.phase_at(2.3), Phase::ArmIn);
    }

    #[test]
    fn longest_program_fills_the_schedule() {
        let schedule =
            PhaseSchedule::build(AutoProgram::DelayedConeAndMobility, &AutonTimings::default())
                .unwrap();
        assert_eq!(schedule.boundaries().len(), MAX_PHASES);
        assert_eq!(schedule.phase_at(schedule.total()), Phase::Hold);
    }

    #[test]
    fn zero_delay_skips_the_delay_phase() {
        let timings = AutonTimings {
            start_delay: 0.0,
            ..AutonTimings::default()
        };
        let schedule = PhaseSchedule::build(AutoProgram::DelayedConeAndMobility, &timings).unwrap();
        assert_eq!(schedule.phase_at(0.0), Phase::ArmOut);
        assert_eq!(schedule.end_of(Phase::StartDelay), None);
    }

    #[test]
    fn no_mobility_has_no_drive_phase() {
        let schedule =
            PhaseSchedule::build(AutoProgram::ConeOnly, &AutonTimings::default()).unwrap();
        assert_eq!(schedule.end_of(Phase::DriveOut), None);
        assert!((schedule.total() - 3.0).abs() < EPS);
        assert_eq!(schedule.phase_at(3.5), Phase::Hold);
    }

    #[test]
    fn do_nothing_is_empty() {
        let schedule =
            PhaseSchedule::build(AutoProgram::DoNothing, &AutonTimings::default()).unwrap();
        assert!(schedule.boundaries().is_empty());
        assert_eq!(schedule.phase_at(0.0), Phase::Hold);
    }

    #[test]
    fn nan_elapsed_holds() {
        let schedule =
            PhaseSchedule::build(AutoProgram::ConeAndMobility, &AutonTimings::default()).unwrap();
        assert_eq!(schedule.phase_at(f64::NAN), Phase::Hold);
    }

    #[test]
    fn invalid_timings_are_rejected() {
        let timings = AutonTimings {
            arm_in: 0.0,
            ..AutonTimings::default()
        };
        assert!(matches!(
            PhaseSchedule::build(AutoProgram::ConeOnly, &timings),
            Err(ScheduleError::InvalidDuration { phase: "arm in", .. })
        ));
    }
}
