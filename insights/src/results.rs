//! Results view model: score radar, tabbed optional sections, resources.
//!
//! DESIGN
//! ======
//! Every optional analysis field is resolved once into an `Option` here, so
//! renderers only branch on presence and never inspect raw emptiness.

use std::collections::BTreeMap;

use pitch::{AnalysisResult, ChecklistItem, FillerWord, Resource, RoadmapStep, Slide};

use crate::{format_score, non_blank, non_empty};

/// Upper bound of every score dimension.
pub const SCORE_FULL_MARK: f64 = 10.0;

/// One spoke of the performance radar.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreAxis {
    pub key: String,
    pub label: String,
    pub value: f64,
    pub full_mark: f64,
}

/// `problem_definition` -> `Problem Definition`.
#[must_use]
pub fn humanize_dimension(key: &str) -> String {
    key.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Radar axes in dimension-name order, values clamped to `0..=10`.
#[must_use]
pub fn score_axes(scores: &BTreeMap<String, f64>) -> Vec<ScoreAxis> {
    scores
        .iter()
        .map(|(key, value)| ScoreAxis {
            key: key.clone(),
            label: humanize_dimension(key),
            value: value.clamp(0.0, SCORE_FULL_MARK),
            full_mark: SCORE_FULL_MARK,
        })
        .collect()
}

/// Tabs partitioning the optional result sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResultsTab {
    #[default]
    Insights,
    Refinement,
    Deck,
    Growth,
}

impl ResultsTab {
    pub const ALL: [Self; 4] = [Self::Insights, Self::Refinement, Self::Deck, Self::Growth];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Insights => "Insights",
            Self::Refinement => "Refinement",
            Self::Deck => "Deck",
            Self::Growth => "Growth",
        }
    }
}

/// Signed delta badge such as `+2 Clarity`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeltaBadge {
    pub label: &'static str,
    pub value: String,
    pub positive: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummaryKind {
    Elevator,
    Linkedin,
    Email,
}

impl SummaryKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Elevator => "Elevator Pitch",
            Self::Linkedin => "LinkedIn Hook",
            Self::Email => "Formal Outreach",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryCard<'a> {
    pub kind: SummaryKind,
    pub text: &'a str,
}

/// Known resource categories, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceCategory {
    YouTube,
    Blog,
    Documentation,
    PitchDeck,
}

impl ResourceCategory {
    pub const ALL: [Self; 4] = [Self::YouTube, Self::Blog, Self::Documentation, Self::PitchDeck];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::YouTube => "YouTube",
            Self::Blog => "Blog",
            Self::Documentation => "Documentation",
            Self::PitchDeck => "Pitch Deck",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Call-to-action shown under each link.
    #[must_use]
    pub fn action(self) -> &'static str {
        match self {
            Self::YouTube => "Watch Tutorial",
            _ => "Read Publication",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceGroup<'a> {
    pub category: ResourceCategory,
    pub items: Vec<&'a Resource>,
}

/// Group resources by known category; unknown categories are dropped and
/// empty groups omitted.
#[must_use]
pub fn group_resources(resources: &[Resource]) -> Vec<ResourceGroup<'_>> {
    ResourceCategory::ALL
        .into_iter()
        .map(|category| ResourceGroup {
            category,
            items: resources
                .iter()
                .filter(|r| ResourceCategory::from_label(&r.category) == Some(category))
                .collect(),
        })
        .filter(|group| !group.items.is_empty())
        .collect()
}

/// Delivery and learning material shown on the Growth tab.
#[derive(Clone, Debug, PartialEq)]
pub struct GrowthView<'a> {
    pub confidence: Option<u32>,
    pub filler_words: Option<&'a [FillerWord]>,
    pub roadmap: Option<&'a [RoadmapStep]>,
    pub practice_questions: Option<&'a [String]>,
    pub resources: Option<Vec<ResourceGroup<'a>>>,
}

impl GrowthView<'_> {
    fn is_empty(&self) -> bool {
        self.confidence.is_none()
            && self.filler_words.is_none()
            && self.roadmap.is_none()
            && self.practice_questions.is_none()
            && self.resources.is_none()
    }
}

/// Confidence clamped to a 0–100 bar width.
#[must_use]
pub fn confidence_width(confidence: u32) -> u32 {
    confidence.min(100)
}

/// Everything the results screen renders, resolved from one analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultsView<'a> {
    pub overall: String,
    pub axes: Vec<ScoreAxis>,
    pub strengths: Option<&'a [String]>,
    pub weaknesses: Option<&'a [String]>,
    pub suggestions: Option<&'a [String]>,
    pub checklist: Option<&'a [ChecklistItem]>,
    pub original_pitch: &'a str,
    pub improved_pitch: Option<&'a str>,
    pub improvement: Option<Vec<DeltaBadge>>,
    pub summaries: Option<Vec<SummaryCard<'a>>>,
    pub slides: Option<&'a [Slide]>,
    pub growth: Option<GrowthView<'a>>,
}

impl<'a> ResultsView<'a> {
    #[must_use]
    pub fn new(result: &'a AnalysisResult, original_pitch: &'a str) -> Self {
        let improvement = result.improvement_metrics.as_ref().map(|m| {
            vec![
                int_delta("Clarity", m.clarity_delta),
                int_delta("Persuasion", m.persuasion_delta),
                float_delta("Overall", m.overall_delta),
            ]
        });

        let summaries = result.summaries.as_ref().and_then(|s| {
            let cards: Vec<SummaryCard<'a>> = [
                (SummaryKind::Elevator, s.elevator.as_str()),
                (SummaryKind::Linkedin, s.linkedin.as_str()),
                (SummaryKind::Email, s.email.as_str()),
            ]
            .into_iter()
            .filter_map(|(kind, text)| non_blank(Some(text)).map(|text| SummaryCard { kind, text }))
            .collect();
            if cards.is_empty() { None } else { Some(cards) }
        });

        let resources = group_resources(&result.suggested_resources);
        let growth = GrowthView {
            confidence: result.confidence_score,
            filler_words: non_empty(&result.filler_words),
            roadmap: non_empty(&result.personalized_roadmap),
            practice_questions: non_empty(&result.practice_questions),
            resources: if resources.is_empty() { None } else { Some(resources) },
        };

        Self {
            overall: format_score(result.overall_score),
            axes: score_axes(&result.scores),
            strengths: non_empty(&result.strengths),
            weaknesses: non_empty(&result.weaknesses),
            suggestions: non_empty(&result.suggestions),
            checklist: non_empty(&result.checklist),
            original_pitch,
            improved_pitch: non_blank(result.improved_pitch.as_deref()),
            improvement,
            summaries,
            slides: non_empty(&result.slides),
            growth: if growth.is_empty() { None } else { Some(growth) },
        }
    }

    /// Whether `tab` has at least one section to show.
    #[must_use]
    pub fn has_tab(&self, tab: ResultsTab) -> bool {
        match tab {
            ResultsTab::Insights => {
                self.strengths.is_some()
                    || self.weaknesses.is_some()
                    || self.suggestions.is_some()
                    || self.checklist.is_some()
            }
            ResultsTab::Refinement => {
                self.improved_pitch.is_some() || self.improvement.is_some() || self.summaries.is_some()
            }
            ResultsTab::Deck => self.slides.is_some(),
            ResultsTab::Growth => self.growth.is_some(),
        }
    }

    /// Tabs worth offering, in display order.
    #[must_use]
    pub fn tabs(&self) -> Vec<ResultsTab> {
        ResultsTab::ALL.into_iter().filter(|tab| self.has_tab(*tab)).collect()
    }

    /// `requested` if it has content, otherwise the first tab that does.
    #[must_use]
    pub fn resolve_tab(&self, requested: ResultsTab) -> Option<ResultsTab> {
        if self.has_tab(requested) {
            Some(requested)
        } else {
            self.tabs().into_iter().next()
        }
    }
}

fn int_delta(label: &'static str, value: i64) -> DeltaBadge {
    DeltaBadge {
        label,
        value: if value > 0 { format!("+{value}") } else { value.to_string() },
        positive: value > 0,
    }
}

fn float_delta(label: &'static str, value: f64) -> DeltaBadge {
    let rendered = format_score(value);
    DeltaBadge {
        label,
        value: if value > 0.0 { format!("+{rendered}") } else { rendered },
        positive: value > 0.0,
    }
}

#[cfg(test)]
#[path = "results_test.rs"]
mod tests;
