use log::info;

use super::AutoProgram;

/// The selector buttons as read on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectorInput {
    pub next:     bool,
    pub previous: bool,
}

/// Lets the drive team pick the autonomous program while the robot waits
/// for the match.
///
/// Each press moves one step through [`AutoProgram::ALL`], wrapping at
/// either end. Holding a button counts as a single press, and pressing both
/// at once does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoSelector {
    program: AutoProgram,
    held:    SelectorInput,
}

impl AutoSelector {
    pub fn new(program: AutoProgram) -> Self {
        Self {
            program,
            held: SelectorInput::default(),
        }
    }

    /// The program autonomous will run.
    pub fn program(&self) -> AutoProgram { self.program }

    /// Feeds one tick of button state. Returns the new program when the
    /// selection changed.
    pub fn update(&mut self, input: SelectorInput) -> Option<AutoProgram> {
        let next = input.next && !self.held.next;
        let previous = input.previous && !self.held.previous;
        self.held = input;

        let count = AutoProgram::ALL.len();
        let step = match (next, previous) {
            (true, false) => 1,
            (false, true) => count - 1,
            _ => return None,
        };
        self.program = AutoProgram::ALL[(self.program.index() + step) % count];
        info!("Auto selected: {}", self.program);
        Some(self.program)
    }
}
