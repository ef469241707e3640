//! Filesystem utilities for the V5 Brain.
//!
//! The V5 Brain exposes its SD card as an ordinary filesystem, which is the
//! only practical way to get telemetry off a robot during a match. This
//! module collects the pieces that use it.
//!
//! # Logging
//!
//! The `logger` submodule installs a [`log`] facade implementation that
//! mirrors every record to the terminal and to a file on the SD card, so
//! failures that only reproduce on the field can be read back afterwards.
//!
//! # Example
//!
//! ```ignore
//! use log::{LevelFilter, info};
//! use talos::fs::logger;
//!
//! logger::init(LevelFilter::Info).expect("Failed to initialize logger");
//!
//! info!("Robot initialized");
//! ```

/// File-based logging for the V5 Brain.
///
/// Provides a logger implementation that writes to both the console
/// and a file on the SD card.
pub mod logger;
