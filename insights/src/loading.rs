//! Staged progress messages shown while an analysis is in flight.
//!
//! The steps are cosmetic. They advance on a fixed cadence and stop at the
//! last one; they never reflect real backend progress.

/// Milliseconds between step advances.
pub const STEP_INTERVAL_MS: u32 = 1500;

/// One progress message and the icon drawn beside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadingStep {
    pub text: &'static str,
    pub icon: &'static str,
}

pub const LOADING_STEPS: [LoadingStep; 6] = [
    LoadingStep { text: "Initializing VākyaAI Engine...", icon: "cpu" },
    LoadingStep { text: "Analyzing Pitch Clarity...", icon: "search" },
    LoadingStep { text: "Evaluating Impact & Reach...", icon: "zap" },
    LoadingStep { text: "Checking Logical Structure...", icon: "shield" },
    LoadingStep { text: "Optimizing Persuasion Metrics...", icon: "bar-chart" },
    LoadingStep { text: "Finalizing Report...", icon: "check" },
];

/// Index after `current`, saturating at the final step.
#[must_use]
pub fn next_step(current: usize) -> usize {
    (current + 1).min(LOADING_STEPS.len() - 1)
}

/// Progress bar width for step `current`, 0 to 100.
#[must_use]
pub fn progress_percent(current: usize) -> u32 {
    let last = LOADING_STEPS.len() - 1;
    let step = u32::try_from(current.min(last)).unwrap_or(0);
    let last = u32::try_from(last).unwrap_or(1);
    (step + 1) * 100 / (last + 1)
}

/// Whether step `idx` has completed relative to `current`.
#[must_use]
pub fn step_done(idx: usize, current: usize) -> bool {
    idx < current
}

#[cfg(test)]
#[path = "loading_test.rs"]
mod tests;
