//! Plain-text rendering of analyses, history, and identity for the terminal.

use std::fmt::Write as _;

use insights::dashboard::excerpt;
use insights::results::{GrowthView, ResultsView, confidence_width};
use insights::{DashboardStats, ResultsTab};
use pitch::token::UserClaims;
use pitch::{AnalysisResult, HistoryEntry, RoadmapStatus};

const EXCERPT_CHARS: usize = 60;
const BAR_WIDTH: usize = 20;

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{title}\n{}", "-".repeat(title.chars().count()));
}

fn bullets(out: &mut String, title: &str, items: Option<&[String]>) {
    if let Some(items) = items {
        let _ = writeln!(out, "{title}:");
        for item in items {
            let _ = writeln!(out, "  - {item}");
        }
    }
}

/// Horizontal bar for a value out of `max`.
#[must_use]
pub fn bar(value: f64, max: f64) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = (ratio * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

fn roadmap_marker(status: RoadmapStatus) -> &'static str {
    match status {
        RoadmapStatus::Completed => "[x]",
        RoadmapStatus::InProgress => "[~]",
        RoadmapStatus::Pending => "[ ]",
    }
}

/// Full report for one analysis, sections in tab order.
#[must_use]
pub fn render_analysis(result: &AnalysisResult, original_pitch: &str) -> String {
    let view = ResultsView::new(result, original_pitch);
    let mut out = String::new();
    let _ = writeln!(out, "Overall score: {} / 10", view.overall);

    if !view.axes.is_empty() {
        let width = view.axes.iter().map(|a| a.label.chars().count()).max().unwrap_or(0);
        for axis in &view.axes {
            let _ = writeln!(
                out,
                "  {:<width$}  {}  {}",
                axis.label,
                bar(axis.value, axis.full_mark),
                insights::format_score(axis.value)
            );
        }
    }

    for tab in view.tabs() {
        heading(&mut out, tab.label());
        match tab {
            ResultsTab::Insights => render_insights(&mut out, &view),
            ResultsTab::Refinement => render_refinement(&mut out, &view),
            ResultsTab::Deck => render_deck(&mut out, &view),
            ResultsTab::Growth => {
                if let Some(growth) = &view.growth {
                    render_growth(&mut out, growth);
                }
            }
        }
    }
    out
}

fn render_insights(out: &mut String, view: &ResultsView<'_>) {
    bullets(out, "Strengths", view.strengths);
    bullets(out, "Weaknesses", view.weaknesses);
    bullets(out, "Suggestions", view.suggestions);
    if let Some(checklist) = view.checklist {
        let _ = writeln!(out, "Checklist:");
        for item in checklist {
            let mark = if item.status { "[x]" } else { "[ ]" };
            let _ = writeln!(out, "  {mark} {}", item.label);
        }
    }
}

fn render_refinement(out: &mut String, view: &ResultsView<'_>) {
    if let Some(improved) = view.improved_pitch {
        let _ = writeln!(out, "Original:\n  {}", view.original_pitch);
        let _ = writeln!(out, "Improved:\n  {improved}");
    }
    if let Some(badges) = &view.improvement {
        let line: Vec<String> = badges.iter().map(|b| format!("{} {}", b.value, b.label)).collect();
        let _ = writeln!(out, "Improvement: {}", line.join(", "));
    }
    if let Some(cards) = &view.summaries {
        for card in cards {
            let _ = writeln!(out, "{}:\n  {}", card.kind.label(), card.text);
        }
    }
}

fn render_deck(out: &mut String, view: &ResultsView<'_>) {
    for (idx, slide) in view.slides.unwrap_or_default().iter().enumerate() {
        let _ = writeln!(out, "Slide {}: {}", idx + 1, slide.title);
        for point in &slide.content {
            let _ = writeln!(out, "  - {point}");
        }
    }
}

fn render_growth(out: &mut String, growth: &GrowthView<'_>) {
    if let Some(confidence) = growth.confidence {
        let pct = confidence_width(confidence);
        let _ = writeln!(out, "Confidence: {}  {pct}%", bar(f64::from(pct), 100.0));
    }
    if let Some(words) = growth.filler_words {
        let list: Vec<String> = words.iter().map(|w| format!("{} x{}", w.word, w.count)).collect();
        let _ = writeln!(out, "Filler words: {}", list.join(", "));
    }
    if let Some(steps) = growth.roadmap {
        let _ = writeln!(out, "Roadmap:");
        for step in steps {
            let _ = writeln!(out, "  {} {}: {}", roadmap_marker(step.status), step.title, step.description);
        }
    }
    if let Some(questions) = growth.practice_questions {
        let _ = writeln!(out, "Practice questions:");
        for (idx, q) in questions.iter().enumerate() {
            let _ = writeln!(out, "  {}. {q}", idx + 1);
        }
    }
    if let Some(groups) = &growth.resources {
        let _ = writeln!(out, "Resources:");
        for group in groups {
            let _ = writeln!(out, "  {}", group.category.label());
            for item in &group.items {
                let _ = writeln!(out, "    {} ({}): {}", item.title, group.category.action(), item.url);
            }
        }
    }
}

/// Stats header plus one line per entry.
#[must_use]
pub fn render_history(stats: &DashboardStats, entries: &[&HistoryEntry]) -> String {
    let mut out = format!(
        "Total analyzed: {}   Avg score: {}   Best score: {}\n",
        stats.total_label(),
        stats.average_label(),
        stats.best_label()
    );
    if entries.is_empty() {
        out.push_str("No analyses found.\n");
        return out;
    }
    for entry in entries {
        let _ = writeln!(
            out,
            "{}  {}  {:>4}  {}",
            entry.id,
            entry.created_date(),
            insights::format_score(entry.analysis.overall_score),
            excerpt(&entry.original_pitch, EXCERPT_CHARS)
        );
    }
    out
}

/// Header for a single archived analysis.
#[must_use]
pub fn render_entry(entry: &HistoryEntry) -> String {
    format!(
        "Archive ID: {}   Created: {}\n\n{}",
        entry.short_id(),
        entry.created_at,
        render_analysis(&entry.analysis, &entry.original_pitch)
    )
}

/// Local identity summary from decoded claims.
#[must_use]
pub fn render_claims(claims: &UserClaims, now_secs: i64) -> String {
    let remaining = claims.exp - now_secs;
    let expiry = if remaining >= 3600 {
        format!("expires in {}h {}m", remaining / 3600, (remaining % 3600) / 60)
    } else {
        format!("expires in {}m", remaining.max(0) / 60)
    };
    format!("{} ({}) {expiry}", claims.display_name(), claims.sub)
}

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;
