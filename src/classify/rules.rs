//! Rule-based classifier — the deterministic fallback path.
//!
//! Scores recognized text against per-category keyword lists, extracts the
//! most salient detail, and synthesizes title/summary/action. Total: always
//! returns a fully populated result, including for empty input.

use tracing::debug;

use crate::classify::model::{Category, ClassificationResult, clamp_summary, clamp_title};
use crate::classify::patterns;

/// Minimum trimmed length before text counts as readable.
const MIN_READABLE_CHARS: usize = 3;

/// Classify plain text into a finished result. Never fails.
pub fn classify(text: &str) -> ClassificationResult {
    if text.trim().chars().count() < MIN_READABLE_CHARS {
        return unreadable();
    }

    let category = score_category(text);
    let key_detail = extract_detail(category, text);
    let title = make_title(text, category);
    let summary = clamp_summary(&collapse_whitespace(text));
    let suggested_action = action_for(category, key_detail.as_deref());

    debug!(
        category = %category,
        has_detail = key_detail.is_some(),
        "Rule-based classification"
    );

    ClassificationResult {
        extracted_text: text.to_string(),
        category,
        title,
        summary,
        key_detail,
        suggested_action,
    }
}

/// Sentinel result for unreadable input — the terminal branch, not an error.
fn unreadable() -> ClassificationResult {
    ClassificationResult {
        extracted_text: String::new(),
        category: Category::Note,
        title: "Unreadable Screenshot".to_string(),
        summary: "Could not extract meaningful text from this screenshot.".to_string(),
        key_detail: None,
        suggested_action: "Try uploading a clearer screenshot.".to_string(),
    }
}

/// Pick the category with the strictly highest keyword score.
///
/// Each keyword contributes at most 1 regardless of how often it occurs —
/// presence, not frequency. Ties resolve to the first category in
/// [`Category::SCORED`]; a zero maximum yields `Note`.
fn score_category(text: &str) -> Category {
    let lower = text.to_lowercase();
    let mut best = Category::Note;
    let mut best_score = 0;

    for category in Category::SCORED {
        let score = patterns::keywords(category)
            .iter()
            .filter(|kw| lower.contains(**kw))
            .count();
        if score > best_score {
            best = category;
            best_score = score;
        }
    }

    best
}

/// Extract the key detail for a category from the raw (non-lowered) text.
/// First match wins; `Note` carries no detail.
fn extract_detail(category: Category, text: &str) -> Option<String> {
    let pattern = match category {
        Category::Task | Category::Reminder => &patterns::DATE_PATTERN,
        Category::Expense => &patterns::MONEY_PATTERN,
        Category::Link => &patterns::URL_PATTERN,
        Category::Note => return None,
    };
    pattern.find(text).map(|m| m.as_str().to_string())
}

/// Title from the first non-empty line, clamped to the display budget.
fn make_title(text: &str, category: Category) -> String {
    match text.lines().map(str::trim).find(|line| !line.is_empty()) {
        Some(line) => clamp_title(line),
        None => format!("New {}", category.display_name()),
    }
}

/// Collapse whitespace runs to single spaces.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Per-category action template, interpolating the detail when present.
fn action_for(category: Category, detail: Option<&str>) -> String {
    match (category, detail) {
        (Category::Task, Some(d)) => format!("Save as task (due: {d})"),
        (Category::Task, None) => "Save as task".to_string(),
        (Category::Reminder, Some(d)) => format!("Create reminder for {d}"),
        (Category::Reminder, None) => "Create reminder".to_string(),
        (Category::Expense, Some(d)) => format!("Log expense of {d}"),
        (Category::Expense, None) => "Log expense".to_string(),
        (Category::Link, Some(d)) => format!("Save link: {d}"),
        (Category::Link, None) => "Save link".to_string(),
        (Category::Note, _) => "Save as note for reference".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Sentinel branch ─────────────────────────────────────────────

    #[test]
    fn empty_and_near_empty_text_yields_sentinel() {
        for input in ["", "a", "ab", "  ab  ", "\n\n", "  \t "] {
            let result = classify(input);
            assert_eq!(result.category, Category::Note, "input {input:?}");
            assert_eq!(result.title, "Unreadable Screenshot");
            assert_eq!(result.key_detail, None);
            assert!(!result.suggested_action.is_empty());
        }
    }

    #[test]
    fn three_chars_is_enough_to_classify() {
        let result = classify("abc");
        assert_ne!(result.title, "Unreadable Screenshot");
        assert_eq!(result.extracted_text, "abc");
    }

    // ── Scoring and tie-break ───────────────────────────────────────

    #[test]
    fn no_keyword_text_is_a_note_without_detail() {
        let result = classify("asdkj qwoeinc");
        assert_eq!(result.category, Category::Note);
        assert_eq!(result.key_detail, None);
        assert_eq!(result.suggested_action, "Save as note for reference");
    }

    #[test]
    fn tie_breaks_to_first_declared_category() {
        // Exactly one task keyword ("task") and one reminder keyword
        // ("meeting") — task wins by declaration order.
        let result = classify("task meeting");
        assert_eq!(result.category, Category::Task);
    }

    #[test]
    fn scoring_counts_presence_not_frequency() {
        // "task" repeated still scores 1, so the tie resolves the same way
        // as a single occurrence.
        let result = classify("task task task meeting");
        assert_eq!(result.category, Category::Task);
    }

    #[test]
    fn more_evidence_beats_declaration_order() {
        // One task keyword vs two reminder keywords.
        let result = classify("task meeting appointment");
        assert_eq!(result.category, Category::Reminder);
    }

    #[test]
    fn keyword_matching_is_case_insensitive() {
        let result = classify("DEADLINE: SUBMIT THE ASSIGNMENT");
        assert_eq!(result.category, Category::Task);
    }

    // ── Detail extraction ───────────────────────────────────────────

    #[test]
    fn expense_with_date_extracts_money_not_date() {
        let result = classify("Pay ₹450 for rent on 5/10/2024");
        assert_eq!(result.category, Category::Expense);
        let detail = result.key_detail.expect("money detail");
        assert!(detail.contains("450"), "got {detail:?}");
        assert!(!detail.contains("2024"));
    }

    #[test]
    fn task_extracts_deadline_date() {
        let result = classify("Assignment due 5/10/2024");
        assert_eq!(result.category, Category::Task);
        assert_eq!(result.key_detail.as_deref(), Some("5/10/2024"));
        assert_eq!(result.suggested_action, "Save as task (due: 5/10/2024)");
    }

    #[test]
    fn link_extracts_url() {
        let result = classify("visit https://github.com/example/repo for the code");
        assert_eq!(result.category, Category::Link);
        assert_eq!(
            result.key_detail.as_deref(),
            Some("https://github.com/example/repo")
        );
        assert_eq!(
            result.suggested_action,
            "Save link: https://github.com/example/repo"
        );
    }

    #[test]
    fn reminder_without_date_gets_plain_action() {
        let result = classify("remember the meeting notes binder");
        assert_eq!(result.category, Category::Reminder);
        assert_eq!(result.key_detail, None);
        assert_eq!(result.suggested_action, "Create reminder");
    }

    // ── Title and summary ───────────────────────────────────────────

    #[test]
    fn title_is_first_nonempty_line_when_short() {
        let result = classify("\n\n  Buy milk  \nsecond line");
        assert_eq!(result.title, "Buy milk");
    }

    #[test]
    fn overlong_first_line_is_truncated_with_marker() {
        let line = "w".repeat(90);
        let result = classify(&line);
        assert_eq!(result.title.chars().count(), 50);
        assert!(result.title.ends_with("..."));
        assert!(result.title.starts_with("www"));
    }

    #[test]
    fn summary_collapses_whitespace_and_truncates() {
        let text = format!("line one\n\n   line\ttwo {}", "pad ".repeat(40));
        let result = classify(&text);
        assert!(result.summary.starts_with("line one line two"));
        assert!(result.summary.chars().count() <= 103);
        assert!(result.summary.ends_with("..."));
    }

    #[test]
    fn short_summary_is_verbatim_collapsed_text() {
        let result = classify("just   a  short\nnote here");
        assert_eq!(result.summary, "just a short note here");
    }

    #[test]
    fn single_very_long_line_still_produces_bounded_title() {
        let text = "deadline ".repeat(40);
        let result = classify(&text);
        assert!(result.title.chars().count() <= 50);
        assert!(result.title.ends_with("..."));
    }
}
