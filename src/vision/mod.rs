//! Vision classification path — structured screenshot understanding.
//!
//! Wraps the external vision service behind the [`VisionProvider`] trait,
//! parses its JSON reply (models love wrapping JSON in markdown fences),
//! validates the required fields, and normalizes the reply into a
//! [`ClassificationResult`]. Every failure mode maps to [`VisionError`];
//! the analyzer absorbs those and falls back to the rule-based path.

mod gemini;

pub use gemini::GeminiVision;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::classify::model::{Category, ClassificationResult, clamp_summary, clamp_title};
use crate::error::VisionError;

/// Instruction prompt sent alongside the image.
pub(crate) const VISION_PROMPT: &str = r#"You are a screenshot analysis engine.

Look at this screenshot carefully. Your job:
1. READ all meaningful text in the image
2. IGNORE UI noise (nav bars, status bars, icons, buttons, app chrome)
3. IDENTIFY the core content the user wanted to capture
4. CLASSIFY it into one category

Categories (pick exactly one):
- "task" — assignments, to-dos, deadlines, action items
- "reminder" — dates, events, appointments, scheduled things
- "expense" — payments, bills, receipts, transactions, prices
- "link" — URLs, website references, resource links
- "note" — general information, knowledge, anything else

Respond with ONLY a JSON object (no markdown, no backticks, no extra text):
{
  "extracted_text": "The meaningful text you can read (content, not UI elements)",
  "category": "task|reminder|expense|link|note",
  "title": "Short, clear title (max 50 chars)",
  "summary": "1-2 sentence summary of what matters in this screenshot",
  "key_detail": "Most important specific detail (date, amount, URL) or null",
  "suggested_action": "What the user should do with this (be specific)"
}

Rules:
- extracted_text should contain the ACTUAL CONTENT, not every pixel of text
- Title should be descriptive, not generic
- For expenses: extract exact amounts
- For tasks: extract deadlines
- For links: extract URLs
- If the image has no meaningful text, say so honestly"#;

/// External vision-understanding collaborator.
///
/// Implementations take raw image bytes plus the instruction prompt and
/// return the raw model text. Explicitly constructed and injected — never
/// ambient global state — so tests can substitute a double.
#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Send the image and prompt; return the raw reply text.
    async fn request(&self, image: &[u8], prompt: &str) -> Result<String, VisionError>;
}

/// Adapter from a raw vision provider to the classification contract.
pub struct VisionClassifier {
    provider: Arc<dyn VisionProvider>,
}

impl VisionClassifier {
    pub fn new(provider: Arc<dyn VisionProvider>) -> Self {
        Self { provider }
    }

    /// Classify image bytes via the vision service.
    ///
    /// Any `Err` means "unavailable": the caller falls back, nothing is
    /// retried or surfaced here.
    pub async fn classify(&self, image: &[u8]) -> Result<ClassificationResult, VisionError> {
        let raw = self.provider.request(image, VISION_PROMPT).await?;
        let result = parse_vision_reply(&raw)?;
        debug!(
            provider = self.provider.name(),
            category = %result.category,
            "Vision classification succeeded"
        );
        Ok(result)
    }
}

/// Structured reply expected from the vision service.
///
/// The five non-optional fields are required — a reply missing any of them
/// fails deserialization and counts as unavailable.
#[derive(Debug, serde::Deserialize)]
struct VisionReply {
    extracted_text: String,
    category: String,
    title: String,
    summary: String,
    #[serde(default)]
    key_detail: Option<String>,
    suggested_action: String,
}

/// Parse and validate a raw vision reply into the result contract.
///
/// Unknown categories coerce to `note` while the rest of the reply is still
/// trusted; absent or blank `key_detail` normalizes to `None`; title and
/// summary are clamped to their display budgets.
pub(crate) fn parse_vision_reply(raw: &str) -> Result<ClassificationResult, VisionError> {
    let json_str = extract_json_object(raw);
    let reply: VisionReply = serde_json::from_str(&json_str)
        .map_err(|e| VisionError::InvalidReply(format!("JSON parse error: {e}")))?;

    let category = Category::from_wire(&reply.category);
    if category == Category::Note && !reply.category.trim().eq_ignore_ascii_case("note") {
        warn!(raw_category = %reply.category, "Unknown category in vision reply, coercing to note");
    }

    let title = if reply.title.trim().is_empty() {
        format!("New {}", category.display_name())
    } else {
        clamp_title(reply.title.trim())
    };

    Ok(ClassificationResult {
        extracted_text: reply.extracted_text,
        category,
        title,
        summary: clamp_summary(&reply.summary),
        key_detail: reply.key_detail.filter(|d| !d.trim().is_empty()),
        suggested_action: if reply.suggested_action.trim().is_empty() {
            "Save as note".to_string()
        } else {
            reply.suggested_action
        },
    })
}

/// Extract a JSON object from model output (handles markdown wrapping).
fn extract_json_object(text: &str) -> String {
    let trimmed = text.trim();

    // Already a JSON object
    if trimmed.starts_with('{') {
        return trimmed.to_string();
    }

    // Wrapped in a markdown code block
    if let Some(start) = trimmed.find("```json") {
        let after = &trimmed[start + 7..];
        if let Some(end) = after.find("```") {
            return after[..end].trim().to_string();
        }
    }

    if let Some(start) = trimmed.find("```") {
        let after = &trimmed[start + 3..];
        if let Some(end) = after.find("```") {
            let inner = after[..end].trim();
            if inner.starts_with('{') {
                return inner.to_string();
            }
        }
    }

    // Try to find object bounds
    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}'))
        && end > start
    {
        return trimmed[start..=end].to_string();
    }

    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reply() -> String {
        serde_json::json!({
            "extracted_text": "Electricity bill ₹1,240 due 5/10/2024",
            "category": "expense",
            "title": "Electricity Bill",
            "summary": "Pending electricity bill of ₹1,240.",
            "key_detail": "₹1,240",
            "suggested_action": "Log expense of ₹1,240"
        })
        .to_string()
    }

    #[test]
    fn parses_a_plain_json_reply() {
        let result = parse_vision_reply(&sample_reply()).unwrap();
        assert_eq!(result.category, Category::Expense);
        assert_eq!(result.title, "Electricity Bill");
        assert_eq!(result.key_detail.as_deref(), Some("₹1,240"));
    }

    #[test]
    fn parses_a_markdown_wrapped_reply() {
        let wrapped = format!("Here you go:\n```json\n{}\n```", sample_reply());
        let result = parse_vision_reply(&wrapped).unwrap();
        assert_eq!(result.category, Category::Expense);
    }

    #[test]
    fn missing_required_field_is_invalid() {
        let raw = r#"{"extracted_text": "x", "category": "note", "title": "t", "summary": "s"}"#;
        let err = parse_vision_reply(raw).unwrap_err();
        assert!(matches!(err, VisionError::InvalidReply(_)));
    }

    #[test]
    fn non_json_reply_is_invalid() {
        let err = parse_vision_reply("I cannot read this image, sorry.").unwrap_err();
        assert!(matches!(err, VisionError::InvalidReply(_)));
    }

    #[test]
    fn unknown_category_coerces_to_note_preserving_fields() {
        let raw = serde_json::json!({
            "extracted_text": "some text",
            "category": "banana",
            "title": "Fruit Chart",
            "summary": "A chart about fruit.",
            "key_detail": "bananas: 12",
            "suggested_action": "File under produce"
        })
        .to_string();
        let result = parse_vision_reply(&raw).unwrap();
        assert_eq!(result.category, Category::Note);
        assert_eq!(result.title, "Fruit Chart");
        assert_eq!(result.summary, "A chart about fruit.");
        assert_eq!(result.key_detail.as_deref(), Some("bananas: 12"));
        assert_eq!(result.suggested_action, "File under produce");
    }

    #[test]
    fn absent_key_detail_normalizes_to_none() {
        let raw = r#"{"extracted_text": "x", "category": "note", "title": "t",
                      "summary": "s", "suggested_action": "Save as note"}"#;
        let result = parse_vision_reply(raw).unwrap();
        assert_eq!(result.key_detail, None);

        let raw_null = r#"{"extracted_text": "x", "category": "note", "title": "t",
                           "summary": "s", "key_detail": null, "suggested_action": "a"}"#;
        assert_eq!(parse_vision_reply(raw_null).unwrap().key_detail, None);

        let raw_blank = r#"{"extracted_text": "x", "category": "note", "title": "t",
                            "summary": "s", "key_detail": "  ", "suggested_action": "a"}"#;
        assert_eq!(parse_vision_reply(raw_blank).unwrap().key_detail, None);
    }

    #[test]
    fn overlong_title_and_summary_are_clamped() {
        let raw = serde_json::json!({
            "extracted_text": "x",
            "category": "task",
            "title": "t".repeat(80),
            "summary": "s".repeat(200),
            "suggested_action": "Save as task"
        })
        .to_string();
        let result = parse_vision_reply(&raw).unwrap();
        assert_eq!(result.title.chars().count(), 50);
        assert!(result.title.ends_with("..."));
        assert!(result.summary.chars().count() <= 103);
    }

    #[test]
    fn blank_title_is_synthesized_from_category() {
        let raw = r#"{"extracted_text": "x", "category": "reminder", "title": "  ",
                      "summary": "s", "suggested_action": "a"}"#;
        let result = parse_vision_reply(raw).unwrap();
        assert_eq!(result.title, "New Reminder");
    }

    #[test]
    fn extract_json_object_variants() {
        assert_eq!(extract_json_object(r#"{"a": 1}"#), r#"{"a": 1}"#);
        assert!(extract_json_object("```json\n{\"a\": 1}\n```").starts_with('{'));
        assert!(extract_json_object("```\n{\"a\": 1}\n```").starts_with('{'));
        assert_eq!(extract_json_object("noise {\"a\": 1} more"), r#"{"a": 1}"#);
    }
}
