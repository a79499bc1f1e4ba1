//! View derivations over pitch analysis results.
//!
//! This crate is UI-framework agnostic so both the Leptos client and the
//! terminal client can render the same sections, statistics, and filters.
//! Nothing here performs I/O.

pub mod dashboard;
pub mod draft;
pub mod loading;
pub mod practice;
pub mod results;

pub use dashboard::{DashboardStats, dashboard_stats, filter_entries};
pub use draft::{DraftError, MAX_PITCH_CHARS, can_submit, validate_pitch};
pub use practice::PracticeSession;
pub use results::{ResultsTab, ResultsView, ScoreAxis, score_axes};

/// Presence check for optional list sections: `None` when empty.
#[must_use]
pub fn non_empty<T>(items: &[T]) -> Option<&[T]> {
    if items.is_empty() { None } else { Some(items) }
}

/// Presence check for optional text sections: `None` when absent or blank.
#[must_use]
pub fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

/// Render a score as reported, without a trailing `.0`.
#[must_use]
pub fn format_score(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
