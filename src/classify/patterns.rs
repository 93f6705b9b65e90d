//! Pattern library — keyword evidence and detail-extraction patterns.
//!
//! Matching is literal substring/regex search with no semantic understanding;
//! a keyword occurring inside an unrelated word still counts. Known precision
//! limitation of the fallback path, documented rather than fixed.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::classify::model::Category;

/// Evidence for the `task` category.
static TASK_KEYWORDS: &[&str] = &[
    "assignment",
    "submit",
    "homework",
    "due",
    "deadline",
    "complete",
    "finish",
    "todo",
    "to-do",
    "to do",
    "project",
    "task",
    "deliver",
    "pending",
    "must do",
];

/// Evidence for the `reminder` category.
static REMINDER_KEYWORDS: &[&str] = &[
    "remind",
    "remember",
    "don't forget",
    "appointment",
    "meeting",
    "schedule",
    "calendar",
    "event",
    "tomorrow",
    "today",
    "tonight",
    "next week",
    "attend",
];

/// Evidence for the `expense` category.
static EXPENSE_KEYWORDS: &[&str] = &[
    "₹",
    "$",
    "rs",
    "rupee",
    "dollar",
    "paid",
    "payment",
    "upi",
    "transaction",
    "receipt",
    "invoice",
    "bill",
    "amount",
    "total",
    "price",
    "debit",
    "credit",
    "gpay",
    "paytm",
    "phonepe",
    "purchase",
    "cost",
];

/// Evidence for the `link` category.
static LINK_KEYWORDS: &[&str] = &[
    "http://",
    "https://",
    "www.",
    ".com",
    ".org",
    ".in",
    ".io",
    ".dev",
    ".net",
    "github",
    "linkedin",
    "youtube",
    "url",
    "website",
    "visit",
    "click here",
];

/// Keyword evidence for a category. `Note` has none — it is the default that
/// arises when no other category scores.
pub fn keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::Task => TASK_KEYWORDS,
        Category::Reminder => REMINDER_KEYWORDS,
        Category::Expense => EXPENSE_KEYWORDS,
        Category::Link => LINK_KEYWORDS,
        Category::Note => &[],
    }
}

/// Numeric dates (`5/10/2024`, `5-10-24`) and month-name forms
/// (`Jan 5, 2024`, `5 January 2024`).
pub static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(
        r"\b(\d{1,2}[-/]\d{1,2}[-/]\d{2,4}|(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+\d{1,2}(?:,?\s+\d{2,4})?|\d{1,2}\s+(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+\d{2,4})\b",
    )
    .case_insensitive(true)
    .build()
    .unwrap()
});

/// Amounts with an optional currency symbol or word. Deliberately permissive:
/// a bare number still matches.
pub static MONEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"(?:[₹$]|\b(?:rs|inr|usd)\.?)?\s*\d+[,.]?\d*(?:\.\d{1,2})?")
        .case_insensitive(true)
        .build()
        .unwrap()
});

/// `http(s)://` or `www.` tokens up to the next whitespace.
pub static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"https?://\S+|www\.\S+")
        .case_insensitive(true)
        .build()
        .unwrap()
});
