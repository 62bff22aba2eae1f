//! Crate-level error types.

use std::fmt;

/// Errors produced by the spatial-controls crate.
///
/// The control math itself is total; only settings persistence and
/// validation can fail.
#[derive(Debug)]
pub enum ControlsError {
    /// Generic I/O failure while reading or writing a settings file.
    Io(std::io::Error),
    /// JSON/TOML settings parsing or serialization failure.
    SettingsParse(String),
    /// Settings were well-formed but describe an unusable configuration.
    InvalidSettings(String),
}

impl fmt::Display for ControlsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::SettingsParse(msg) => {
                write!(f, "settings parse error: {msg}")
            }
            Self::InvalidSettings(msg) => {
                write!(f, "invalid settings: {msg}")
            }
        }
    }
}

impl std::error::Error for ControlsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ControlsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ControlsError {
    fn from(e: serde_json::Error) -> Self {
        Self::SettingsParse(e.to_string())
    }
}
