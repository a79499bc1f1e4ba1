use pitch::{ImprovementMetrics, Summaries};
use serde_json::json;

use super::*;

fn minimal() -> AnalysisResult {
    serde_json::from_value(json!({ "overall_score": 7, "scores": { "clarity": 8 } })).unwrap()
}

fn resource(title: &str, category: &str) -> Resource {
    Resource {
        title: title.to_owned(),
        url: format!("https://example.com/{title}"),
        category: category.to_owned(),
    }
}

// =============================================================
// Radar
// =============================================================

#[test]
fn humanize_dimension_title_cases_words() {
    assert_eq!(humanize_dimension("clarity"), "Clarity");
    assert_eq!(humanize_dimension("problem_definition"), "Problem Definition");
    assert_eq!(humanize_dimension("logical_flow"), "Logical Flow");
}

#[test]
fn score_axes_clamp_to_full_mark() {
    let scores = BTreeMap::from([("innovation".to_owned(), 14.0), ("impact".to_owned(), -2.0)]);
    let axes = score_axes(&scores);
    assert_eq!(axes.len(), 2);
    assert_eq!(axes[0].label, "Impact");
    assert!((axes[0].value - 0.0).abs() < f64::EPSILON);
    assert!((axes[1].value - 10.0).abs() < f64::EPSILON);
    assert!(axes.iter().all(|a| (a.full_mark - 10.0).abs() < f64::EPSILON));
}

#[test]
fn minimal_result_shows_overall_and_single_axis() {
    let result = minimal();
    let view = ResultsView::new(&result, "We help X do Y");
    assert_eq!(view.overall, "7");
    assert_eq!(view.axes.len(), 1);
    assert_eq!(view.axes[0].label, "Clarity");
    assert_eq!(view.original_pitch, "We help X do Y");
}

#[test]
fn fractional_overall_is_shown_unrounded() {
    let mut result = minimal();
    result.overall_score = 7.25;
    assert_eq!(ResultsView::new(&result, "p").overall, "7.25");
}

// =============================================================
// Optional sections
// =============================================================

#[test]
fn minimal_result_has_no_optional_sections() {
    let result = minimal();
    let view = ResultsView::new(&result, "p");
    assert!(view.strengths.is_none());
    assert!(view.checklist.is_none());
    assert!(view.improved_pitch.is_none());
    assert!(view.improvement.is_none());
    assert!(view.summaries.is_none());
    assert!(view.slides.is_none());
    assert!(view.growth.is_none());
    assert!(view.tabs().is_empty());
    assert_eq!(view.resolve_tab(ResultsTab::Insights), None);
}

#[test]
fn blank_improved_pitch_is_absent() {
    let mut result = minimal();
    result.improved_pitch = Some("  ".to_owned());
    assert!(ResultsView::new(&result, "p").improved_pitch.is_none());
}

#[test]
fn tabs_follow_present_sections() {
    let mut result = minimal();
    result.strengths = vec!["clear".to_owned()];
    result.slides = vec![Slide {
        title: "Intro".to_owned(),
        content: vec![],
    }];
    let view = ResultsView::new(&result, "p");
    assert_eq!(view.tabs(), vec![ResultsTab::Insights, ResultsTab::Deck]);
    assert_eq!(view.resolve_tab(ResultsTab::Growth), Some(ResultsTab::Insights));
    assert_eq!(view.resolve_tab(ResultsTab::Deck), Some(ResultsTab::Deck));
}

#[test]
fn summaries_skip_blank_cards() {
    let mut result = minimal();
    result.summaries = Some(Summaries {
        elevator: "Short".to_owned(),
        linkedin: String::new(),
        email: "Dear investor".to_owned(),
    });
    let view = ResultsView::new(&result, "p");
    let cards = view.summaries.unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].kind.label(), "Elevator Pitch");
    assert_eq!(cards[1].kind.label(), "Formal Outreach");
}

#[test]
fn all_blank_summaries_are_absent() {
    let mut result = minimal();
    result.summaries = Some(Summaries {
        elevator: String::new(),
        linkedin: " ".to_owned(),
        email: String::new(),
    });
    assert!(ResultsView::new(&result, "p").summaries.is_none());
}

#[test]
fn improvement_badges_are_signed() {
    let mut result = minimal();
    result.improvement_metrics = Some(ImprovementMetrics {
        clarity_delta: 2,
        persuasion_delta: -1,
        overall_delta: 1.5,
    });
    let view = ResultsView::new(&result, "p");
    let badges = view.improvement.as_ref().unwrap();
    assert_eq!(badges[0].value, "+2");
    assert!(badges[0].positive);
    assert_eq!(badges[1].value, "-1");
    assert!(!badges[1].positive);
    assert_eq!(badges[2].value, "+1.5");
    assert!(view.tabs().contains(&ResultsTab::Refinement));
}

#[test]
fn confidence_alone_enables_growth() {
    let mut result = minimal();
    result.confidence_score = Some(0);
    let view = ResultsView::new(&result, "p");
    let growth = view.growth.unwrap();
    assert_eq!(growth.confidence, Some(0));
    assert!(growth.filler_words.is_none());
    assert!(growth.resources.is_none());
}

#[test]
fn confidence_width_caps_at_hundred() {
    assert_eq!(confidence_width(80), 80);
    assert_eq!(confidence_width(140), 100);
}

// =============================================================
// Resources
// =============================================================

#[test]
fn resources_group_in_fixed_order_and_drop_unknown() {
    let resources = vec![
        resource("deck", "Pitch Deck"),
        resource("vid", "YouTube"),
        resource("misc", "General"),
        resource("post", "Blog"),
        resource("vid2", "YouTube"),
    ];
    let groups = group_resources(&resources);
    let cats: Vec<_> = groups.iter().map(|g| g.category).collect();
    assert_eq!(
        cats,
        vec![ResourceCategory::YouTube, ResourceCategory::Blog, ResourceCategory::PitchDeck]
    );
    assert_eq!(groups[0].items.len(), 2);
}

#[test]
fn resources_of_unknown_category_only_hide_growth() {
    let mut result = minimal();
    result.suggested_resources = vec![resource("misc", "General")];
    assert!(ResultsView::new(&result, "p").growth.is_none());
}

#[test]
fn resource_category_actions() {
    assert_eq!(ResourceCategory::YouTube.action(), "Watch Tutorial");
    assert_eq!(ResourceCategory::Documentation.action(), "Read Publication");
    assert_eq!(ResourceCategory::from_label("Pitch Deck"), Some(ResourceCategory::PitchDeck));
    assert_eq!(ResourceCategory::from_label("pitch deck"), None);
}
