//! Error taxonomy for content discovery.
//!
//! ERROR HANDLING
//! ==============
//! None of these errors reach the visitor. Repositories log them and treat
//! the affected project as absent; the only visible failure mode is the
//! placeholder fallback when nothing resolves.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced while probing and loading project content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// The request never produced a response (network failure, bad URL).
    #[error("request for {path} failed: {message}")]
    Transport { path: String, message: String },

    /// The host answered with a non-success status.
    #[error("request for {path} returned status {status}")]
    Status { path: String, status: u16 },

    /// The body was fetched but is not a valid metadata document.
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),
}

impl ContentError {
    /// Stable machine-readable code for logs.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "E_TRANSPORT",
            Self::Status { .. } => "E_STATUS",
            Self::Parse { .. } => "E_PARSE",
            Self::Config(_) => "E_CONFIG",
        }
    }

    /// True when the error means "no project lives here" rather than a
    /// damaged one.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::Transport { .. })
    }
}
