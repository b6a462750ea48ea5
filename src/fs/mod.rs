//! Filesystem utilities for the V5 Brain.
//!
//! # Logging
//!
//! The `logger` submodule provides a file-based logger that writes to
//! `log.txt` on the SD card by default, which is how autonomous runs get
//! reviewed after a match.
//!
//! # Example
//!
//! ```ignore
//! use everybot::fs::logger;
//! use log::{info, LevelFilter};
//!
//! logger::init(LevelFilter::Info).expect("Failed to initialize logger");
//! info!("Robot initialized successfully");
//! ```

/// File-based logging for the V5 Brain.
///
/// Provides a logger implementation that writes to both the console
/// and a file on the SD card.
pub mod logger;
