//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the analyze flow and the results sections. Result
//! sections are pure functions of their props; only `pitch_input`,
//! `loading_screen`, and `practice_mode` keep local state.

pub mod analysis_card;
pub mod checklist_section;
pub mod growth_section;
pub mod loading_screen;
pub mod navbar;
pub mod pitch_input;
pub mod practice_mode;
pub mod presentation_section;
pub mod protected_route;
pub mod results_dashboard;
pub mod score_chart;
pub mod summaries_section;
