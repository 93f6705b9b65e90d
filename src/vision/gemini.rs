//! Gemini REST client for the vision path.
//!
//! Speaks the `generateContent` endpoint directly: one inline base64 image
//! part plus the instruction prompt as a text part.

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use crate::config::VisionConfig;
use crate::error::VisionError;
use crate::vision::VisionProvider;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Vision provider backed by the Gemini API.
pub struct GeminiVision {
    http: Client,
    api_key: SecretString,
    model: String,
}

impl GeminiVision {
    pub fn new(config: &VisionConfig) -> Result<Self, VisionError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| VisionError::RequestFailed(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl VisionProvider for GeminiVision {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn request(&self, image: &[u8], prompt: &str) -> Result<String, VisionError> {
        let mime = infer::get(image)
            .map(|kind| kind.mime_type())
            .unwrap_or("image/png");
        debug!(model = %self.model, mime, bytes = image.len(), "Sending image to Gemini");

        let body = json!({
            "contents": [{
                "parts": [
                    { "inline_data": { "mime_type": mime, "data": BASE64.encode(image) } },
                    { "text": prompt }
                ]
            }]
        });

        let url = format!("{API_BASE}/{}:generateContent", self.model);
        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.expose_secret())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    VisionError::Timeout
                } else {
                    VisionError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(VisionError::RequestFailed(format!("HTTP {status}: {detail}")));
        }

        let reply: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| VisionError::InvalidReply(format!("Malformed response body: {e}")))?;

        reply
            .first_text()
            .ok_or_else(|| VisionError::InvalidReply("No candidate text in response".to_string()))
    }
}

#[derive(Debug, serde::Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, serde::Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, serde::Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, serde::Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    fn first_text(&self) -> Option<String> {
        self.candidates
            .iter()
            .flat_map(|c| c.content.parts.iter())
            .find_map(|p| p.text.clone())
    }
}
