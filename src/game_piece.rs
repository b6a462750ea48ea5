//! Game pieces the intake can hold.

/// The last game piece the intake was commanded to pick up.
///
/// Running the intake inward grabs a cube (and ejects a cone), running it
/// outward grabs a cone (and ejects a cube), so the polarity of the holding
/// power depends on which one is in the robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePiece {
    #[default]
    None,
    Cone,
    Cube,
}

impl GamePiece {
    /// Sign of the intake power that pulls this piece in, or zero when empty.
    pub const fn intake_sign(self) -> f64 {
        match self {
            GamePiece::None => 0.0,
            GamePiece::Cone => -1.0,
            GamePiece::Cube => 1.0,
        }
    }

    /// Sign of the intake power that throws this piece out, or zero when empty.
    pub const fn eject_sign(self) -> f64 { -self.intake_sign() }

    pub const fn name(self) -> &'static str {
        match self {
            GamePiece::None => "none",
            GamePiece::Cone => "cone",
            GamePiece::Cube => "cube",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GamePiece;

    #[test]
    fn cone_and_cube_have_opposite_polarity() {
        assert_eq!(GamePiece::Cube.intake_sign(), 1.0);
        assert_eq!(GamePiece::Cone.intake_sign(), -1.0);
        assert_eq!(GamePiece::Cone.eject_sign(), 1.0);
        assert_eq!(GamePiece::Cube.eject_sign(), -1.0);
        assert_eq!(GamePiece::None.intake_sign(), 0.0);
        assert_eq!(GamePiece::default(), GamePiece::None);
    }
}
