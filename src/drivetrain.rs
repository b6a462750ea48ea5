//! Differential drivetrain control.
//!
//! This module provides the `Differential` struct for driving a robot with
//! separate left and right motor groups from arcade-style `(forward, turn)`
//! commands, and the [`arcade_mix`] function that resolves those commands
//! into per-side outputs.
//!
//! # Example
//!
//! ```ignore
//! use everybot::drivetrain::Differential;
//! use vexide::prelude::*;
//!
//! let drivetrain = Differential::new(
//!     [
//!         Motor::new(peripherals.port_1, Gearset::Green, Direction::Forward),
//!         Motor::new(peripherals.port_2, Gearset::Green, Direction::Forward),
//!     ],
//!     [
//!         Motor::new(peripherals.port_3, Gearset::Green, Direction::Reverse),
//!         Motor::new(peripherals.port_4, Gearset::Green, Direction::Reverse),
//!     ],
//! );
//!
//! // Half speed forward, no turn.
//! drivetrain.drive_arcade(0.5, 0.0);
//! ```

use std::{cell::RefCell, rc::Rc};

use log::warn;
use vexide::{prelude::Motor, smart::motor::BrakeMode};

/// Voltage corresponding to full percent output.
const MAX_VOLTAGE: f64 = 12.0;

/// Mixes arcade inputs into `(left, right)` percent outputs.
///
/// - left = forward - turn
/// - right = forward + turn
///
/// Positive `turn` is counter-clockwise seen from above. Inputs are not
/// squared. If either side would exceed full output, both sides are scaled
/// down by the same factor so the ratio between them (and so the curvature
/// of the path) is kept.
pub fn arcade_mix(forward: f64, turn: f64) -> (f64, f64) {
    let left = forward - turn;
    let right = forward + turn;

    let greatest = left.abs().max(right.abs());
    if greatest > 1.0 {
        (left / greatest, right / greatest)
    } else {
        (left, right)
    }
}

/// A differential drivetrain.
///
/// The motors are stored in reference-counted cells so they can be shared
/// with anything else that needs them.
#[derive(Clone)]
pub struct Differential {
    /// The left motor group.
    pub left:  Rc<RefCell<dyn AsMut<[Motor]>>>,

    /// The right motor group.
    ///
    /// Typically configured to spin opposite to the left side for forward
    /// movement.
    pub right: Rc<RefCell<dyn AsMut<[Motor]>>>,
}

impl Differential {
    /// Creates a new drivetrain with the provided left/right motors.
    pub fn new<L: AsMut<[Motor]> + 'static, R: AsMut<[Motor]> + 'static>(
        left: L,
        right: R,
    ) -> Self {
        Self {
            left:  Rc::new(RefCell::new(left)),
            right: Rc::new(RefCell::new(right)),
        }
    }

    /// Drives from arcade inputs, both in `[-1.0, 1.0]`.
    ///
    /// Behavior:
    /// - The inputs are mixed with [`arcade_mix`].
    /// - Each side is scaled to volts by 12.0.
    /// - Motor errors are logged and otherwise ignored; the next tick retries.
    pub fn drive_arcade(&self, forward: f64, turn: f64) {
        let (left, right) = arcade_mix(forward, turn);
        self.set_voltages(left * MAX_VOLTAGE, right * MAX_VOLTAGE);
    }

    /// Commands zero volts on both sides.
    pub fn stop(&self) { self.set_voltages(0.0, 0.0); }

    /// Sets the brake mode for all motors in the drivetrain.
    ///
    /// - [`BrakeMode::Coast`]: Motors spin freely.
    /// - [`BrakeMode::Brake`]: Motors actively resist rotation.
    /// - [`BrakeMode::Hold`]: Motors actively hold their position.
    pub fn set_brakemode(&self, brakemode: BrakeMode) {
        for side in [&self.left, &self.right] {
            if let Ok(mut motors) = side.try_borrow_mut() {
                for motor in motors.as_mut() {
                    motor.brake(brakemode).unwrap_or_else(|e| {
                        warn!("Motor Brake Error: {}", e);
                    });
                }
            } else {
                warn!("Error Borrowing Drivetrain Motors");
            }
        }
    }

    fn set_voltages(&self, left_voltage: f64, right_voltage: f64) {
        for (side, voltage) in [(&self.left, left_voltage), (&self.right, right_voltage)] {
            if let Ok(mut motors) = side.try_borrow_mut() {
                for motor in motors.as_mut() {
                    motor.set_voltage(voltage).unwrap_or_else(|e| {
                        warn!("Motor Set Voltage Error: {}", e);
                    });
                }
            } else {
                warn!("Error Borrowing Drivetrain Motors");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::arcade_mix;

    #[test]
    fn straight_and_spin() {
        assert_eq!(arcade_mix(0.5, 0.0), (0.5, 0.5));
        assert_eq!(arcade_mix(-0.25, 0.0), (-0.25, -0.25));
        // counter-clockwise: right side forward, left side back
        assert_eq!(arcade_mix(0.0, 0.5), (-0.5, 0.5));
    }

    #[test]
    fn desaturates_keeping_ratio() {
        let (left, right) = arcade_mix(1.0, 0.5);
        assert_eq!(right, 1.0);
        assert!((left - 0.5 / 1.5).abs() < 1e-12);

        let (left, right) = arcade_mix(-1.0, -1.0);
        assert_eq!((left, right), (0.0, -1.0));
    }

    #[test]
    fn within_range_is_untouched() {
        assert_eq!(arcade_mix(0.6, 0.4), (0.6 - 0.4, 0.6 + 0.4));
    }
}
