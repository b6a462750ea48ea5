use std::{fmt, str::FromStr};

use crate::game_piece::GamePiece;

/// The autonomous routines the robot can run.
///
/// Chosen once when autonomous starts and fixed for the rest of the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoProgram {
    /// Sit still for the whole period.
    #[default]
    DoNothing,
    /// Score the preloaded cone and stay put.
    ConeOnly,
    /// Score the preloaded cone, then drive out for mobility.
    ConeAndMobility,
    /// Wait out the start delay, then score a cone and drive out.
    DelayedConeAndMobility,
    /// Score the preloaded cube, then drive out for mobility.
    CubeAndMobility,
}

impl AutoProgram {
    /// Every program, in the order they are offered to the drive team.
    pub const ALL: [AutoProgram; 5] = [
        AutoProgram::DoNothing,
        AutoProgram::ConeOnly,
        AutoProgram::ConeAndMobility,
        AutoProgram::DelayedConeAndMobility,
        AutoProgram::CubeAndMobility,
    ];

    /// The game piece this program scores, if any.
    pub const fn game_piece(self) -> Option<GamePiece> {
        match self {
            AutoProgram::DoNothing => None,
            AutoProgram::ConeOnly
            | AutoProgram::ConeAndMobility
            | AutoProgram::DelayedConeAndMobility => Some(GamePiece::Cone),
            AutoProgram::CubeAndMobility => Some(GamePiece::Cube),
        }
    }

    /// Whether the routine ends by driving out of the community.
    pub const fn mobility(self) -> bool {
        matches!(
            self,
            AutoProgram::ConeAndMobility
                | AutoProgram::DelayedConeAndMobility
                | AutoProgram::CubeAndMobility
        )
    }

    /// Whether the routine waits out the start delay first.
    pub const fn delayed(self) -> bool { matches!(self, AutoProgram::DelayedConeAndMobility) }

    /// Position in [`AutoProgram::ALL`].
    pub fn index(self) -> usize {
        AutoProgram::ALL
            .iter()
            .position(|program| *program == self)
            .unwrap_or_default()
    }

    pub const fn name(self) -> &'static str {
        match self {
            AutoProgram::DoNothing => "do nothing",
            AutoProgram::ConeOnly => "cone",
            AutoProgram::ConeAndMobility => "cone and mobility",
            AutoProgram::DelayedConeAndMobility => "delayed cone and mobility",
            AutoProgram::CubeAndMobility => "cube and mobility",
        }
    }
}

impl fmt::Display for AutoProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

/// Returned when a program name matches none of [`AutoProgram::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown autonomous program: {0:?}")]
pub struct ParseProgramError(pub String);

impl FromStr for AutoProgram {
    type Err = ParseProgramError;

    /// Parses a program from its display name. Matching ignores case and
    /// treats spaces, dashes and underscores alike, so `"cone-and-mobility"`
    /// and `"Cone And Mobility"` both work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        AutoProgram::ALL
            .into_iter()
            .find(|program| normalize(program.name()) == wanted)
            .ok_or_else(|| ParseProgramError(s.to_owned()))
    }
}

fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            c => c.to_ascii_lowercase(),
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_properties() {
        assert_eq!(AutoProgram::DoNothing.game_piece(), None);
        assert!(!AutoProgram::DoNothing.mobility());

        assert_eq!(AutoProgram::ConeOnly.game_piece(), Some(GamePiece::Cone));
        assert!(!AutoProgram::ConeOnly.mobility());
        assert!(!AutoProgram::ConeOnly.delayed());

        assert!(AutoProgram::ConeAndMobility.mobility());
        assert!(!AutoProgram::ConeAndMobility.delayed());

        assert!(AutoProgram::DelayedConeAndMobility.mobility());
        assert!(AutoProgram::DelayedConeAndMobility.delayed());

        assert_eq!(AutoProgram::CubeAndMobility.game_piece(), Some(GamePiece::Cube));
        assert_eq!(AutoProgram::default(), AutoProgram::DoNothing);
    }

    #[test]
    fn index_matches_listing_order() {
        for (i, program) in AutoProgram::ALL.into_iter().enumerate() {
            assert_eq!(program.index(), i);
        }
    }

    #[test]
    fn parses_every_display_name() {
        for program in AutoProgram::ALL {
            assert_eq!(program.name().parse::<AutoProgram>(), Ok(program));
            assert_eq!(program.to_string().parse::<AutoProgram>(), Ok(program));
        }
    }

    #[test]
    fn parsing_is_forgiving_about_separators() {
        assert_eq!(
            "Delayed-Cone_and  Mobility".parse::<AutoProgram>(),
            Ok(AutoProgram::DelayedConeAndMobility)
        );
        assert_eq!(" do_nothing ".parse::<AutoProgram>(), Ok(AutoProgram::DoNothing));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "cube".parse::<AutoProgram>(),
            Err(ParseProgramError("cube".to_owned()))
        );
        assert!("".parse::<AutoProgram>().is_err());
    }
}
