use pitch::AnalysisResult;

use super::*;

fn entry(id: &str, pitch: &str, overall: f64) -> HistoryEntry {
    HistoryEntry {
        id: id.to_owned(),
        original_pitch: pitch.to_owned(),
        analysis: AnalysisResult {
            overall_score: overall,
            ..AnalysisResult::default()
        },
        created_at: "2025-01-01T00:00:00Z".to_owned(),
    }
}

// =============================================================
// Stats
// =============================================================

#[test]
fn empty_history_shows_zeros() {
    let stats = dashboard_stats(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.total_label(), "0");
    assert_eq!(stats.average_label(), "0");
    assert_eq!(stats.best_label(), "0");
}

#[test]
fn stats_average_and_best() {
    let entries = vec![entry("a", "one", 4.0), entry("b", "two", 9.0), entry("c", "three", 6.0)];
    let stats = dashboard_stats(&entries);
    assert_eq!(stats.total_label(), "3");
    assert_eq!(stats.average_label(), "6.3");
    assert_eq!(stats.best_label(), "9");
}

#[test]
fn best_keeps_fraction() {
    let entries = vec![entry("a", "one", 7.5)];
    assert_eq!(dashboard_stats(&entries).best_label(), "7.5");
}

#[test]
fn best_is_not_rounded_while_average_is() {
    let entries = vec![entry("a", "one", 7.25), entry("b", "two", 4.0), entry("c", "three", 5.0)];
    let stats = dashboard_stats(&entries);
    assert_eq!(stats.best_label(), "7.25");
    assert_eq!(stats.average_label(), "5.4");
}

// =============================================================
// Search
// =============================================================

#[test]
fn filter_is_case_insensitive_substring() {
    let entries = vec![
        entry("a", "Solar panels for rural schools", 5.0),
        entry("b", "AI tutor for kids", 6.0),
    ];
    let hits = filter_entries(&entries, "SOLAR");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "a");
}

#[test]
fn blank_query_keeps_all() {
    let entries = vec![entry("a", "x", 1.0), entry("b", "y", 2.0)];
    assert_eq!(filter_entries(&entries, "").len(), 2);
    assert_eq!(filter_entries(&entries, "   ").len(), 2);
}

#[test]
fn filter_without_match_is_empty() {
    let entries = vec![entry("a", "x", 1.0)];
    assert!(filter_entries(&entries, "zzz").is_empty());
}

#[test]
fn excerpt_cuts_on_char_boundary() {
    assert_eq!(excerpt("short", 10), "short");
    assert_eq!(excerpt("Vākya helps founders", 5), "Vākya...");
}
