//! SVG radar chart of per-dimension scores.
//!
//! DESIGN
//! ======
//! Geometry is computed in plain functions so it can be tested natively; the
//! component only emits SVG. The first axis points straight up and axes
//! proceed clockwise.

#[cfg(test)]
#[path = "score_chart_test.rs"]
mod score_chart_test;

use std::f64::consts::{FRAC_PI_2, TAU};

use insights::ScoreAxis;
use leptos::prelude::*;

const SIZE: f64 = 320.0;
const CENTER: f64 = SIZE / 2.0;
const RADIUS: f64 = SIZE * 0.36;
const LABEL_RADIUS: f64 = RADIUS + 22.0;
const GRID_LEVELS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];

/// Point at `fraction` of the radius along axis `idx` of `count`.
fn point(idx: usize, count: usize, fraction: f64, radius: f64) -> (f64, f64) {
    #[allow(clippy::cast_precision_loss)]
    let angle = TAU * idx as f64 / count.max(1) as f64 - FRAC_PI_2;
    (CENTER + radius * fraction * angle.cos(), CENTER + radius * fraction * angle.sin())
}

fn points_attr(points: impl Iterator<Item = (f64, f64)>) -> String {
    points
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `points` attribute of the filled score polygon.
pub fn score_polygon(axes: &[ScoreAxis]) -> String {
    let count = axes.len();
    points_attr(
        axes.iter()
            .enumerate()
            .map(|(idx, axis)| point(idx, count, axis.value / axis.full_mark, RADIUS)),
    )
}

/// `points` attribute of one concentric grid ring.
pub fn grid_ring(count: usize, fraction: f64) -> String {
    points_attr((0..count).map(|idx| point(idx, count, fraction, RADIUS)))
}

fn label_anchor(x: f64) -> &'static str {
    if (x - CENTER).abs() < 1.0 {
        "middle"
    } else if x > CENTER {
        "start"
    } else {
        "end"
    }
}

#[component]
pub fn ScoreChart(axes: Vec<ScoreAxis>) -> impl IntoView {
    let count = axes.len();
    let polygon = score_polygon(&axes);
    let spokes = (0..count)
        .map(|idx| {
            let (x, y) = point(idx, count, 1.0, RADIUS);
            view! {
                <line
                    class="radar__spoke"
                    x1=CENTER.to_string()
                    y1=CENTER.to_string()
                    x2=format!("{x:.1}")
                    y2=format!("{y:.1}")
                ></line>
            }
        })
        .collect_view();
    let rings = GRID_LEVELS
        .into_iter()
        .map(|level| view! { <polygon class="radar__ring" points=grid_ring(count, level)></polygon> })
        .collect_view();
    let labels = axes
        .into_iter()
        .enumerate()
        .map(|(idx, axis)| {
            let (x, y) = point(idx, count, 1.0, LABEL_RADIUS);
            let title = format!("{}: {}", axis.label, insights::format_score(axis.value));
            view! {
                <text
                    class="radar__label"
                    x=format!("{x:.1}")
                    y=format!("{y:.1}")
                    text-anchor=label_anchor(x)
                    dominant-baseline="middle"
                >
                    <title>{title}</title>
                    {axis.label}
                </text>
            }
        })
        .collect_view();

    view! {
        <figure class="radar">
            <svg viewBox=format!("0 0 {SIZE} {SIZE}") role="img" aria-label="Score radar">
                {rings}
                {spokes}
                <polygon class="radar__score" points=polygon></polygon>
                {labels}
            </svg>
        </figure>
    }
}
