//! Delivery coaching: confidence, filler words, roadmap, practice, resources.
//!
//! Each block renders only when its data is present.

use insights::results::{GrowthView, confidence_width};
use leptos::prelude::*;
use pitch::{AnalysisResult, RoadmapStatus};

use crate::components::practice_mode::PracticeMode;

fn status_class(status: RoadmapStatus) -> &'static str {
    match status {
        RoadmapStatus::Pending => "roadmap__step roadmap__step--pending",
        RoadmapStatus::InProgress => "roadmap__step roadmap__step--in-progress",
        RoadmapStatus::Completed => "roadmap__step roadmap__step--completed",
    }
}

/// Growth tab body. Expects a result whose growth view is present; renders
/// nothing for one without.
#[component]
pub fn GrowthSection(result: AnalysisResult) -> impl IntoView {
    let Some(growth) = insights::ResultsView::new(&result, "").growth else {
        return ().into_any();
    };
    let GrowthView {
        confidence,
        filler_words,
        roadmap,
        practice_questions,
        resources,
    } = growth;

    let confidence = confidence.map(|value| {
        let width = confidence_width(value);
        view! {
            <section class="growth__confidence">
                <h4>"Delivery Confidence"</h4>
                <div class="growth__meter">
                    <div class="growth__meter-fill" style=format!("width: {width}%")></div>
                </div>
                <span class="growth__meter-value">{format!("{width}%")}</span>
            </section>
        }
    });

    let fillers = filler_words.map(|words| {
        let chips = words
            .iter()
            .map(|w| {
                view! {
                    <li class="growth__chip">
                        <span>{w.word.clone()}</span>
                        <span class="growth__chip-count">{format!("×{}", w.count)}</span>
                    </li>
                }
            })
            .collect_view();
        view! {
            <section class="growth__fillers">
                <h4>"Filler Words"</h4>
                <ul>{chips}</ul>
            </section>
        }
    });

    let roadmap = roadmap.map(|steps| {
        let items = steps
            .iter()
            .map(|step| {
                view! {
                    <li class=status_class(step.status)>
                        <h5>{step.title.clone()}</h5>
                        <p>{step.description.clone()}</p>
                    </li>
                }
            })
            .collect_view();
        view! {
            <section class="roadmap">
                <h4>"Personalized Roadmap"</h4>
                <ol>{items}</ol>
            </section>
        }
    });

    let practice = practice_questions.map(|questions| {
        view! {
            <section class="growth__practice">
                <h4>"Practice Mode"</h4>
                <PracticeMode questions=questions.to_vec()/>
            </section>
        }
    });

    let resources = resources.map(|groups| {
        let blocks = groups
            .into_iter()
            .map(|group| {
                let action = group.category.action();
                let links = group
                    .items
                    .into_iter()
                    .map(|r| {
                        view! {
                            <li class="resources__item">
                                <a href=r.url.clone() target="_blank" rel="noopener noreferrer">
                                    <span class="resources__name">{r.title.clone()}</span>
                                    <span class="resources__action">{action}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view();
                view! {
                    <div class="resources__group">
                        <h5>{group.category.label()}</h5>
                        <ul>{links}</ul>
                    </div>
                }
            })
            .collect_view();
        view! {
            <section class="resources">
                <h4>"Learning Resources"</h4>
                {blocks}
            </section>
        }
    });

    view! {
        <div class="growth">
            {confidence}
            {fillers}
            {roadmap}
            {practice}
            {resources}
        </div>
    }
    .into_any()
}
