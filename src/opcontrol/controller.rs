//! Reading driver inputs from a V5 controller.
//!
//! [`ControllerBindings`] says which physical button drives which mechanism
//! input. [`InputSnapshot::from_controller`] reads the controller once and
//! turns it into the snapshot the mapper works from.
//!
//! # Example
//!
//! ```ignore
//! use everybot::opcontrol::{ControllerBindings, InputSnapshot};
//!
//! let bindings = ControllerBindings::default();
//! let input = InputSnapshot::from_controller(&controller, &bindings);
//! ```

use log::warn;
use vexide::{
    controller::{ButtonState, ControllerState},
    prelude::Controller,
};

use super::InputSnapshot;
use crate::auton::SelectorInput;

/// Which controller buttons drive the arm and intake, and which step the
/// autonomous selection while disabled.
///
/// Drive always comes from the left stick: Y for forward, X for turning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerBindings {
    pub arm_down:      ControllerButton,
    pub arm_up:        ControllerButton,
    pub intake_in:     ControllerButton,
    pub intake_out:    ControllerButton,
    pub auto_next:     ControllerButton,
    pub auto_previous: ControllerButton,
}

impl Default for ControllerBindings {
    fn default() -> Self {
        Self {
            arm_down:      ControllerButton::ButtonL2,
            arm_up:        ControllerButton::ButtonL1,
            intake_in:     ControllerButton::ButtonR1,
            intake_out:    ControllerButton::ButtonR2,
            auto_next:     ControllerButton::ButtonRight,
            auto_previous: ControllerButton::ButtonLeft,
        }
    }
}

impl InputSnapshot {
    /// Reads `controller` and maps it through `bindings`.
    ///
    /// If the controller can't be read (e.g. it disconnected) a warning is
    /// logged and the neutral snapshot is returned.
    pub fn from_controller(controller: &Controller, bindings: &ControllerBindings) -> Self {
        Self::from_state(&get_state(controller), bindings)
    }

    /// Maps an already-read controller state through `bindings`.
    pub fn from_state(state: &ControllerState, bindings: &ControllerBindings) -> Self {
        InputSnapshot {
            arm_down:   get_button_state(state, bindings.arm_down).is_pressed(),
            arm_up:     get_button_state(state, bindings.arm_up).is_pressed(),
            intake_in:  get_button_state(state, bindings.intake_in).is_pressed(),
            intake_out: get_button_state(state, bindings.intake_out).is_pressed(),
            // The V5 stick reads positive when pushed forward.
            forward_axis: -state.left_stick.y(),
            turn_axis:    state.left_stick.x(),
        }
    }
}

impl SelectorInput {
    /// Reads the autonomous selector buttons from `controller`.
    pub fn from_controller(controller: &Controller, bindings: &ControllerBindings) -> Self {
        Self::from_state(&get_state(controller), bindings)
    }

    pub fn from_state(state: &ControllerState, bindings: &ControllerBindings) -> Self {
        SelectorInput {
            next:     get_button_state(state, bindings.auto_next).is_pressed(),
            previous: get_button_state(state, bindings.auto_previous).is_pressed(),
        }
    }
}

/// A list of Controller Buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerButton {
    ButtonA,
    ButtonB,
    ButtonX,
    ButtonY,
    ButtonUp,
    ButtonDown,
    ButtonLeft,
    ButtonRight,
    ButtonL1,
    ButtonL2,
    ButtonR1,
    ButtonR2,
}

fn get_button_state(state: &ControllerState, button: ControllerButton) -> ButtonState {
    match button {
        ControllerButton::ButtonA => state.button_a,
        ControllerButton::ButtonB => state.button_b,
        ControllerButton::ButtonX => state.button_x,
        ControllerButton::ButtonY => state.button_y,
        ControllerButton::ButtonUp => state.button_up,
        ControllerButton::ButtonDown => state.button_down,
        ControllerButton::ButtonLeft => state.button_left,
        ControllerButton::ButtonRight => state.button_right,
        ControllerButton::ButtonL1 => state.button_l1,
        ControllerButton::ButtonL2 => state.button_l2,
        ControllerButton::ButtonR1 => state.button_r1,
        ControllerButton::ButtonR2 => state.button_r2,
    }
}

fn get_state(controller: &Controller) -> ControllerState {
    controller.state().unwrap_or_else(|e| {
        warn!("Controller State Error: {}", e);
        ControllerState::default()
    })
}
