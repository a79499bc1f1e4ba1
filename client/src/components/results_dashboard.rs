//! Full results view for one analysis: score header, radar, tabbed sections.
//!
//! DESIGN
//! ======
//! Section presence and tab availability come from `insights::ResultsView`;
//! this component only renders. A tab with no content is never offered, and
//! a result with no optional sections shows just the score header.

use std::sync::Arc;

use insights::{ResultsTab, ResultsView};
use leptos::prelude::*;
use pitch::AnalysisResult;

use crate::components::analysis_card::AnalysisCard;
use crate::components::checklist_section::ChecklistSection;
use crate::components::growth_section::GrowthSection;
use crate::components::presentation_section::PresentationSection;
use crate::components::score_chart::ScoreChart;
use crate::components::summaries_section::SummariesSection;

fn insights_tab(results: &ResultsView<'_>) -> impl IntoView + use<> {
    let card = |title: &'static str, items: Option<&[String]>, tone: &'static str| {
        items.map(|items| view! { <AnalysisCard title=title items=items.to_vec() tone=tone/> })
    };
    view! {
        <div class="results__cards">
            {card("Strengths", results.strengths, "positive")}
            {card("Weaknesses", results.weaknesses, "negative")}
            {card("Suggestions", results.suggestions, "neutral")}
        </div>
        {results.checklist.map(|items| view! { <ChecklistSection items=items.to_vec()/> })}
    }
}

fn refinement_tab(results: &ResultsView<'_>) -> impl IntoView + use<> {
    let comparison = results.improved_pitch.map(|improved| {
        view! {
            <div class="refinement__compare">
                <section class="refinement__original">
                    <h4>"Original"</h4>
                    <p>{results.original_pitch.to_owned()}</p>
                </section>
                <section class="refinement__improved">
                    <h4>"Refined"</h4>
                    <p>{improved.to_owned()}</p>
                </section>
            </div>
        }
    });
    let deltas = results.improvement.clone().map(|badges| {
        view! {
            <ul class="refinement__deltas">
                {badges
                    .into_iter()
                    .map(|b| {
                        view! {
                            <li class="refinement__delta" class:refinement__delta--up=b.positive>
                                <strong>{b.value}</strong>
                                " "
                                {b.label}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
    });
    let summaries = results.summaries.as_ref().map(|cards| {
        let cards: Vec<_> = cards.iter().map(|c| (c.kind, c.text.to_owned())).collect();
        view! { <SummariesSection cards=cards/> }
    });
    view! {
        {comparison}
        {deltas}
        {summaries}
    }
}

#[component]
pub fn ResultsDashboard(result: AnalysisResult, original_pitch: String) -> impl IntoView {
    let data = Arc::new((result, original_pitch));
    let (overall, axes, tabs) = {
        let results = ResultsView::new(&data.0, &data.1);
        let tabs = results.tabs();
        (results.overall, results.axes, tabs)
    };
    let requested = RwSignal::new(ResultsTab::default());

    let tab_buttons = tabs
        .iter()
        .map(|&tab| {
            let data = data.clone();
            let is_active = move || ResultsView::new(&data.0, &data.1).resolve_tab(requested.get()) == Some(tab);
            view! {
                <button
                    class="results__tab"
                    class:results__tab--active=is_active
                    role="tab"
                    on:click=move |_| requested.set(tab)
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view();
    let tab_bar = (!tabs.is_empty()).then(|| view! { <nav class="results__tabs" role="tablist">{tab_buttons}</nav> });

    let body = move || {
        let results = ResultsView::new(&data.0, &data.1);
        match results.resolve_tab(requested.get()) {
            Some(ResultsTab::Insights) => insights_tab(&results).into_any(),
            Some(ResultsTab::Refinement) => refinement_tab(&results).into_any(),
            Some(ResultsTab::Deck) => results
                .slides
                .map(|slides| view! { <PresentationSection slides=slides.to_vec()/> })
                .into_any(),
            Some(ResultsTab::Growth) => view! { <GrowthSection result=data.0.clone()/> }.into_any(),
            None => ().into_any(),
        }
    };

    view! {
        <div class="results">
            <header class="results__header">
                <div class="results__overall">
                    <span class="results__overall-value">{overall}</span>
                    <span class="results__overall-max">" / 10"</span>
                </div>
                <ScoreChart axes=axes/>
            </header>
            {tab_bar}
            <div class="results__body">{body}</div>
        </div>
    }
}
