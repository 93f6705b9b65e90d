//! Saved-item record contract — what a record store persists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classify::model::{Category, ClassificationResult};

/// A finalized classification, stamped with identity and time.
///
/// The engine never reads or writes persisted state itself; this is the
/// shape the storage layer consumes after [`crate::analyzer::Analyzer::analyze`]
/// returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedItem {
    pub id: Uuid,
    pub category: Category,
    pub title: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_detail: Option<String>,
    pub extracted_text: String,
    pub suggested_action: String,
    pub created_at: DateTime<Utc>,
}

impl SavedItem {
    /// Stamp a classification result with a fresh id and timestamp.
    pub fn from_result(result: ClassificationResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: result.category,
            title: result.title,
            summary: result.summary,
            key_detail: result.key_detail,
            extracted_text: result.extracted_text,
            suggested_action: result.suggested_action,
            created_at: Utc::now(),
        }
    }
}
