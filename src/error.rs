//! Error types for ScreenLens.
//!
//! Nothing here escapes [`crate::analyzer::Analyzer::analyze`] — vision and
//! recognizer failures are absorbed into the deterministic fallback path.
//! The types exist so the absorption points can log precise reasons.

/// Top-level error type for the engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Vision error: {0}")]
    Vision(#[from] VisionError),

    #[error("Recognizer error: {0}")]
    Recognizer(#[from] RecognizerError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Vision-path errors. Every variant means "unavailable" to the caller:
/// the analyzer logs it and falls back, never surfaces it.
#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    #[error("Vision service request failed: {0}")]
    RequestFailed(String),

    #[error("Vision service request timed out")]
    Timeout,

    #[error("Invalid reply from vision service: {0}")]
    InvalidReply(String),
}

/// Text-recognizer errors. Absorbed by the analyzer as empty text.
#[derive(Debug, thiserror::Error)]
pub enum RecognizerError {
    #[error("Failed to spawn recognizer: {0}")]
    Spawn(String),

    #[error("Recognizer exited with status {status}: {stderr}")]
    Failed { status: i32, stderr: String },

    #[error("Recognizer output was not valid UTF-8")]
    InvalidOutput,
}

/// Result type alias for the engine.
pub type Result<T> = std::result::Result<T, Error>;
