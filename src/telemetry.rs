//! Fire-and-forget publishing of named values.
//!
//! The control loop reports what it commanded and what the motors measured
//! once per tick. Nothing reads these values back; a sink is free to drop
//! them.

use std::collections::BTreeMap;

use log::{Level, log};

/// Log target telemetry records are sent under.
pub const TARGET: &str = "telemetry";

/// Level telemetry records are sent at. It has to pass
/// [`DEFAULT_LEVEL`](crate::fs::logger::DEFAULT_LEVEL) or nothing gets
/// recorded on the robot.
pub const LEVEL: Level = Level::Info;

/// Keys published by [`Robot`](crate::robot::Robot).
pub mod keys {
    pub const TIME: &str = "time (s)";
    pub const AUTO_SELECTED: &str = "auto selected";
    pub const AUTO_ELAPSED: &str = "auto elapsed (s)";
    pub const AUTO_PHASE: &str = "auto phase";
    pub const AUTONOMOUS_ENABLED: &str = "autonomous enabled";
    pub const TELEOP_ENABLED: &str = "teleop enabled";
    pub const GAME_PIECE: &str = "game piece";
    pub const DRIVE_FORWARD: &str = "drive forward (%)";
    pub const DRIVE_TURN: &str = "drive turn (%)";
    pub const ARM_POWER: &str = "arm power (%)";
    pub const ARM_CURRENT: &str = "arm motor current (amps)";
    pub const ARM_TEMPERATURE: &str = "arm motor temperature (C)";
    pub const INTAKE_POWER: &str = "intake power (%)";
    pub const INTAKE_CURRENT_LIMIT: &str = "intake current limit (amps)";
    pub const INTAKE_CURRENT: &str = "intake motor current (amps)";
    pub const INTAKE_TEMPERATURE: &str = "intake motor temperature (C)";
}

/// A published value.
#[derive(Debug, Clone, PartialEq)]
pub enum TelemetryValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

/// Somewhere to send telemetry.
pub trait Telemetry {
    fn put_number(&mut self, key: &'static str, value: f64);

    fn put_bool(&mut self, key: &'static str, value: bool);

    fn put_text(&mut self, key: &'static str, value: &str);
}

/// Sends telemetry to the logger as [`LEVEL`] records under [`TARGET`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTelemetry;

impl Telemetry for LogTelemetry {
    fn put_number(&mut self, key: &'static str, value: f64) {
        log!(target: TARGET, LEVEL, "{} = {:.3}", key, value);
    }

    fn put_bool(&mut self, key: &'static str, value: bool) {
        log!(target: TARGET, LEVEL, "{} = {}", key, value);
    }

    fn put_text(&mut self, key: &'static str, value: &str) {
        log!(target: TARGET, LEVEL, "{} = {}", key, value);
    }
}

/// Keeps the latest value published under each key.
#[derive(Debug, Default, Clone)]
pub struct TelemetryTable {
    values: BTreeMap<&'static str, TelemetryValue>,
}

impl TelemetryTable {
    pub fn get(&self, key: &str) -> Option<&TelemetryValue> { self.values.get(key) }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            TelemetryValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            TelemetryValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            TelemetryValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

impl Telemetry for TelemetryTable {
    fn put_number(&mut self, key: &'static str, value: f64) {
        self.values.insert(key, TelemetryValue::Number(value));
    }

    fn put_bool(&mut self, key: &'static str, value: bool) {
        self.values.insert(key, TelemetryValue::Bool(value));
    }

    fn put_text(&mut self, key: &'static str, value: &str) {
        self.values.insert(key, TelemetryValue::Text(value.to_owned()));
    }
}
