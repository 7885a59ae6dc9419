//! Crate-level error types.

use std::fmt;

use crate::animation::AnimationType;

/// Errors produced by the finn crate.
#[derive(Debug)]
pub enum FinnError {
    /// No behavior factory is registered under the requested id.
    UnknownBehaviorId(String),
    /// The behavior registered under `behavior_id` cannot serve the
    /// requested animation type.
    BehaviorTypeMismatch {
        /// Behavior id the resource asked for.
        behavior_id: String,
        /// Animation type requested at registration.
        requested: AnimationType,
        /// Animation type the instantiated behavior declares.
        declared: AnimationType,
    },
    /// TOML/JSON options parsing or serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for FinnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBehaviorId(id) => {
                write!(f, "no animation behavior is registered for '{id}'")
            }
            Self::BehaviorTypeMismatch {
                behavior_id,
                requested,
                declared,
            } => write!(
                f,
                "behavior '{behavior_id}' handles '{declared}' and cannot \
                 serve '{requested}' animations"
            ),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for FinnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FinnError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FinnError>;
