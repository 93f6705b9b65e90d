//! ScreenLens — screenshot content classification engine.
//!
//! Turns a captured screenshot into a structured, actionable record: a
//! category, a title, a summary, a key extracted detail, and a suggested
//! next action. A vision model does the heavy lifting when configured; a
//! deterministic keyword classifier always stands behind it, so analysis
//! never fails.

pub mod analyzer;
pub mod classify;
pub mod config;
pub mod error;
pub mod ocr;
pub mod record;
pub mod vision;
