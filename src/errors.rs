//! Error types for the run controller and the command line
//!
//! Neither kind is fatal to a session. [`ControlError`] explains why a
//! command was refused and ends up in the status bar; [`ConfigError`] is
//! reported on stderr before the terminal UI starts.
//!
//! Cancellation and quitting are not errors; see [`crate::clock::Interrupt`].

use crate::controller::RunState;
use std::fmt;

/// A command the run controller refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlError {
    /// The previous run ended; new data must be generated before starting
    NeedsFreshData { state: RunState },

    /// Quit was requested; the session accepts nothing further
    SessionEnded,
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::NeedsFreshData { state } => {
                write!(f, "run {}; shuffle or resize before starting again", state)
            }
            ControlError::SessionEnded => write!(f, "session has ended"),
        }
    }
}

impl std::error::Error for ControlError {}

/// Invalid command-line arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownFlag(String),
    MissingValue(String),
    InvalidNumber { flag: String, value: String },
    UnknownAlgorithm(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownFlag(flag) => write!(f, "unknown option '{}'", flag),
            ConfigError::MissingValue(flag) => write!(f, "option '{}' needs a value", flag),
            ConfigError::InvalidNumber { flag, value } => {
                write!(f, "option '{}' expects a number, got '{}'", flag, value)
            }
            ConfigError::UnknownAlgorithm(name) => write!(
                f,
                "unknown algorithm '{}' (expected bubble, insertion, selection, merge or quick)",
                name
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
