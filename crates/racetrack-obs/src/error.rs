//! Error types for rendering.

use std::fmt;

/// Errors from [`RenderMode`](crate::RenderMode) parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// The requested render mode is not supported.
    UnsupportedMode {
        /// The mode string that was requested.
        mode: String,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedMode { mode } => write!(
                f,
                "unsupported render mode {mode:?} (expected \"human\" or \"rgb_array\")"
            ),
        }
    }
}

impl std::error::Error for RenderError {}
