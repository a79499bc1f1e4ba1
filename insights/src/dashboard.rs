//! Library statistics and search over the user's analysis history.

use pitch::HistoryEntry;

use crate::format_score;

/// Headline numbers shown above the history grid.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DashboardStats {
    pub total: usize,
    /// Mean overall score; `None` when there is no history.
    pub average: Option<f64>,
    /// Highest overall score; `None` when there is no history.
    pub best: Option<f64>,
}

impl DashboardStats {
    #[must_use]
    pub fn total_label(&self) -> String {
        self.total.to_string()
    }

    /// Average with one decimal, `0` when empty.
    #[must_use]
    pub fn average_label(&self) -> String {
        self.average.map_or_else(|| "0".to_owned(), |avg| format!("{avg:.1}"))
    }

    #[must_use]
    pub fn best_label(&self) -> String {
        self.best.map_or_else(|| "0".to_owned(), format_score)
    }
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn dashboard_stats(entries: &[HistoryEntry]) -> DashboardStats {
    if entries.is_empty() {
        return DashboardStats::default();
    }
    let scores = entries.iter().map(|e| e.analysis.overall_score);
    let sum: f64 = scores.clone().sum();
    let best = scores.fold(f64::NEG_INFINITY, f64::max);
    DashboardStats {
        total: entries.len(),
        average: Some(sum / entries.len() as f64),
        best: Some(best),
    }
}

/// Entries whose original pitch contains `query`, case-insensitively.
/// A blank query keeps everything.
#[must_use]
pub fn filter_entries<'a>(entries: &'a [HistoryEntry], query: &str) -> Vec<&'a HistoryEntry> {
    let needle = query.trim().to_lowercase();
    entries
        .iter()
        .filter(|e| needle.is_empty() || e.original_pitch.to_lowercase().contains(&needle))
        .collect()
}

/// First `max_chars` characters of a pitch, with an ellipsis when cut.
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", trimmed[..idx].trim_end()),
        None => trimmed.to_owned(),
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
