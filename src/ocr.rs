//! Text recognition collaborator — image-to-text transcription.

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::RecognizerError;

/// Best-effort plain-text transcription of an image.
///
/// Implementations may fail; the analyzer absorbs any error and proceeds
/// with empty text, so nothing here needs to be clever about recovery.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize(&self, image_path: &Path) -> Result<String, RecognizerError>;
}

/// Recognizer backed by the `tesseract` command-line binary.
///
/// Invokes `tesseract <image> stdout` and trims the transcription. Works
/// well on screenshots, which carry clean digital text.
pub struct TesseractCli {
    binary: String,
}

impl TesseractCli {
    pub fn new() -> Self {
        Self {
            binary: "tesseract".to_string(),
        }
    }

    /// Use a tesseract binary outside `PATH`.
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for TesseractCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextRecognizer for TesseractCli {
    async fn recognize(&self, image_path: &Path) -> Result<String, RecognizerError> {
        let output = Command::new(&self.binary)
            .arg(image_path)
            .arg("stdout")
            .output()
            .await
            .map_err(|e| RecognizerError::Spawn(format!("{}: {e}", self.binary)))?;

        if !output.status.success() {
            return Err(RecognizerError::Failed {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let text =
            String::from_utf8(output.stdout).map_err(|_| RecognizerError::InvalidOutput)?;
        let trimmed = text.trim().to_string();
        debug!(chars = trimmed.chars().count(), "Recognized text from image");
        Ok(trimmed)
    }
}
