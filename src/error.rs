//! Crate-level error types.

use std::fmt;

/// Errors produced by the xtalview crate.
///
/// Nothing here is fatal to a session: every variant is returned to the
/// caller with the session state left consistent, so unaffected features
/// keep working.
#[derive(Debug)]
pub enum ViewerError {
    /// Unit-cell geometry produced non-finite vertices, so the wireframe
    /// cannot be drawn. Raised after the fact by callers of the (unguarded)
    /// geometry builder, never by the builder itself.
    DegenerateCell,
    /// Crystal-face view preset name not in the supported set.
    UnknownFace(String),
    /// Camera rotation requested about the zero vector.
    ZeroRotationAxis,
    /// A command failed to parse or validate.
    Command {
        /// Index of the offending command within the submitted list.
        index: usize,
        /// Underlying parse/validation message.
        message: String,
    },
    /// Structure download failure (or the `fetch` feature is disabled).
    Fetch(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateCell => {
                write!(f, "unit cell parameters produce degenerate geometry")
            }
            Self::UnknownFace(face) => {
                write!(f, "unknown crystal face preset: {face}")
            }
            Self::ZeroRotationAxis => {
                write!(f, "rotation axis must be non-zero")
            }
            Self::Command { index, message } => {
                write!(f, "invalid command at index {index}: {message}")
            }
            Self::Fetch(msg) => write!(f, "structure fetch error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ViewerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
