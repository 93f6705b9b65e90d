//! Classification data model — categories and the result contract.

use serde::{Deserialize, Serialize};

/// Maximum title length in display characters (not bytes).
pub const TITLE_MAX_CHARS: usize = 50;

/// Maximum summary length in display characters before the ellipsis marker.
pub const SUMMARY_MAX_CHARS: usize = 100;

/// Content category assigned to a screenshot.
///
/// Closed set — `Note` is the universal default; every other category must be
/// positively earned by evidence. Unknown wire values collapse to `Note` at
/// the [`Category::from_wire`] boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Task,
    Reminder,
    Expense,
    Link,
    Note,
}

impl Category {
    /// Categories competing for keyword evidence, in tie-break order.
    ///
    /// The order is load-bearing: ties between equal-scoring categories
    /// resolve to the first one listed here. `Note` never competes — it has
    /// no keyword list and only arises from the zero-score case.
    pub const SCORED: [Category; 4] = [
        Category::Task,
        Category::Reminder,
        Category::Expense,
        Category::Link,
    ];

    /// Wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Reminder => "reminder",
            Self::Expense => "expense",
            Self::Link => "link",
            Self::Note => "note",
        }
    }

    /// Capitalized name for synthesized titles ("New Task").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Task => "Task",
            Self::Reminder => "Reminder",
            Self::Expense => "Expense",
            Self::Link => "Link",
            Self::Note => "Note",
        }
    }

    /// Lenient boundary parse for externally supplied category strings.
    ///
    /// Anything outside the closed set collapses to `Note` — the rest of the
    /// reply carrying the value is still trusted.
    pub fn from_wire(raw: &str) -> Category {
        match raw.trim().to_lowercase().as_str() {
            "task" => Self::Task,
            "reminder" => Self::Reminder,
            "expense" => Self::Expense,
            "link" => Self::Link,
            _ => Self::Note,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The finished judgment produced by either classification path.
///
/// Created fresh per classification call and immutable once produced.
/// Ownership transfers to the caller, which may stamp an id and timestamp
/// when persisting (see [`crate::record::SavedItem`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Best-effort plain text from the source. May be empty, never missing.
    pub extracted_text: String,
    /// One of the five categories.
    pub category: Category,
    /// Short human label, ≤ 50 display characters, never empty.
    pub title: String,
    /// Whitespace-collapsed, ≤ 100 characters plus ellipsis when truncated.
    pub summary: String,
    /// Most salient fact (date, amount, or URL) when one was found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_detail: Option<String>,
    /// Non-empty human-readable recommendation.
    pub suggested_action: String,
}

/// Clamp a title to the display budget, marking truncation with `...`.
pub(crate) fn clamp_title(line: &str) -> String {
    if line.chars().count() > TITLE_MAX_CHARS {
        let cut: String = line.chars().take(TITLE_MAX_CHARS - 3).collect();
        format!("{cut}...")
    } else {
        line.to_string()
    }
}

/// Clamp a summary to the display budget, marking truncation with `...`.
pub(crate) fn clamp_summary(text: &str) -> String {
    if text.chars().count() > SUMMARY_MAX_CHARS {
        let cut: String = text.chars().take(SUMMARY_MAX_CHARS).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}
