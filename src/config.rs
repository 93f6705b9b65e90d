//! Configuration types.

use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Default model for the vision path.
pub const DEFAULT_VISION_MODEL: &str = "gemini-2.0-flash";

/// Default bound on a single vision-service call.
pub const DEFAULT_VISION_TIMEOUT: Duration = Duration::from_secs(20);

/// Placeholder key value shipped in env templates — treated as unset.
const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

/// Vision-service configuration.
#[derive(Debug, Clone)]
pub struct VisionConfig {
    /// API key for the vision service.
    pub api_key: SecretString,
    /// Model name (e.g. "gemini-2.0-flash").
    pub model: String,
    /// Bound on a single vision call — an unresponsive service degrades to
    /// the fallback path instead of blocking.
    pub timeout: Duration,
}

/// Analyzer configuration.
///
/// `vision: None` disables the vision path entirely; the analyzer then goes
/// straight to text recognition and rule-based classification.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    pub vision: Option<VisionConfig>,
}

impl AnalyzerConfig {
    /// Build configuration from environment variables.
    ///
    /// - `GEMINI_API_KEY` — enables the vision path when set; the
    ///   `your_api_key_here` placeholder counts as unset
    /// - `SCREENLENS_MODEL` — vision model override
    /// - `SCREENLENS_VISION_TIMEOUT_SECS` — vision call bound in seconds
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = match std::env::var("GEMINI_API_KEY") {
            Ok(key) if !key.trim().is_empty() && key != PLACEHOLDER_API_KEY => key,
            _ => return Ok(Self { vision: None }),
        };

        let model = std::env::var("SCREENLENS_MODEL")
            .unwrap_or_else(|_| DEFAULT_VISION_MODEL.to_string());

        let timeout = match std::env::var("SCREENLENS_VISION_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "SCREENLENS_VISION_TIMEOUT_SECS".to_string(),
                    message: format!("expected an integer number of seconds, got '{raw}'"),
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_VISION_TIMEOUT,
        };

        Ok(Self {
            vision: Some(VisionConfig {
                api_key: SecretString::from(api_key),
                model,
                timeout,
            }),
        })
    }
}
