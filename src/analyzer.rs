//! Classification orchestrator — vision path with deterministic fallback.
//!
//! Flow per request:
//! 1. Vision path (if configured): structured result straight from the model,
//!    bounded by a timeout.
//! 2. On any failure: text recognizer → rule-based classifier.
//!
//! `analyze` is total. Collaborator failures are logged and absorbed; the
//! caller always receives a valid [`ClassificationResult`]. No state is
//! shared between invocations, so any number of concurrent requests can run
//! without coordination.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::classify::model::ClassificationResult;
use crate::classify::rules;
use crate::config::DEFAULT_VISION_TIMEOUT;
use crate::error::VisionError;
use crate::ocr::TextRecognizer;
use crate::vision::VisionClassifier;

/// Single entry point for screenshot analysis.
pub struct Analyzer {
    vision: Option<VisionClassifier>,
    recognizer: Arc<dyn TextRecognizer>,
    vision_timeout: Duration,
}

impl Analyzer {
    /// Create an analyzer. `vision: None` means the fallback path only.
    pub fn new(vision: Option<VisionClassifier>, recognizer: Arc<dyn TextRecognizer>) -> Self {
        Self {
            vision,
            recognizer,
            vision_timeout: DEFAULT_VISION_TIMEOUT,
        }
    }

    /// Override the bound on a single vision attempt.
    pub fn with_vision_timeout(mut self, timeout: Duration) -> Self {
        self.vision_timeout = timeout;
        self
    }

    /// Classify the screenshot at `image_path`.
    ///
    /// Total function: never fails under normal operating conditions. Vision
    /// unavailability, unreadable files, and recognizer failures all degrade
    /// to the rule-based path on whatever text could be obtained.
    pub async fn analyze(&self, image_path: &Path) -> ClassificationResult {
        if let Some(vision) = &self.vision {
            match self.try_vision(vision, image_path).await {
                Ok(result) => {
                    info!(category = %result.category, "Vision path produced result");
                    return result;
                }
                Err(e) => {
                    warn!(error = %e, "Vision path unavailable, falling back to local recognition");
                }
            }
        } else {
            debug!("No vision classifier configured, using fallback path");
        }

        let text = match self.recognizer.recognize(image_path).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Text recognizer failed, treating as empty text");
                String::new()
            }
        };

        rules::classify(&text)
    }

    async fn try_vision(
        &self,
        vision: &VisionClassifier,
        image_path: &Path,
    ) -> Result<ClassificationResult, VisionError> {
        let image = tokio::fs::read(image_path)
            .await
            .map_err(|e| VisionError::RequestFailed(format!("Failed to read image: {e}")))?;

        tokio::time::timeout(self.vision_timeout, vision.classify(&image))
            .await
            .map_err(|_| VisionError::Timeout)?
    }
}
