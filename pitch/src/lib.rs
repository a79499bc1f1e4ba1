//! Shared backend contract for the Vākya pitch analysis clients.
//!
//! This crate owns the JSON wire representation used by both the browser
//! `client` and the terminal `cli`, plus the session/token logic they share.
//! It is UI-framework agnostic and compiles for native and `wasm32` targets.

pub mod detail;
pub mod session;
pub mod token;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default API base when no override is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

/// Request timeout applied by every API client.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Backend endpoint paths, relative to the API base.
pub mod paths {
    pub const REGISTER: &str = "/auth/register";
    pub const LOGIN: &str = "/auth/login";
    pub const ME: &str = "/user/me";
    pub const ANALYZE: &str = "/analyze";
    pub const MY_ANALYSES: &str = "/my-analyses";

    /// Path of a single history entry.
    #[must_use]
    pub fn analysis(id: &str) -> String {
        format!("/analysis/{id}")
    }
}

/// Join an API base and an endpoint path without doubling slashes.
#[must_use]
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

// =============================================================================
// Auth
// =============================================================================

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub job_role: Option<String>,
    pub password: String,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// A registered user as returned by `/auth/register` and `/user/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub job_role: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Roles offered on the registration form.
pub const JOB_ROLES: [&str; 4] = ["Founder", "Student", "Developer", "Executive"];

// =============================================================================
// Analysis
// =============================================================================

/// Audience the pitch is tuned for. Serialized as its display label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Audience {
    #[default]
    #[serde(rename = "General Investor")]
    GeneralInvestor,
    #[serde(rename = "Investor")]
    Investor,
    #[serde(rename = "Technical Jury")]
    TechnicalJury,
    #[serde(rename = "Professor")]
    Professor,
    #[serde(rename = "Hackathon Judge")]
    HackathonJudge,
}

impl Audience {
    pub const ALL: [Self; 5] = [
        Self::GeneralInvestor,
        Self::Investor,
        Self::TechnicalJury,
        Self::Professor,
        Self::HackathonJudge,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::GeneralInvestor => "General Investor",
            Self::Investor => "Investor",
            Self::TechnicalJury => "Technical Jury",
            Self::Professor => "Professor",
            Self::HackathonJudge => "Hackathon Judge",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown audience label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown audience: {0}")]
pub struct UnknownAudience(pub String);

impl FromStr for Audience {
    type Err = UnknownAudience;

    /// Accepts the display label or its kebab/snake form, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|a| a.label().to_ascii_lowercase() == wanted)
            .ok_or_else(|| UnknownAudience(s.to_owned()))
    }
}

/// Body of `POST /analyze`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub pitch_text: String,
    pub target_audience: Audience,
}

/// Score deltas between the submitted and the rewritten pitch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImprovementMetrics {
    pub clarity_delta: i64,
    pub persuasion_delta: i64,
    pub overall_delta: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub label: String,
    pub status: bool,
}

/// One slide of the suggested deck outline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub content: Vec<String>,
}

/// Short-form rewrites of the pitch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summaries {
    #[serde(default)]
    pub elevator: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
    #[serde(default = "default_resource_category")]
    pub category: String,
}

fn default_resource_category() -> String {
    "General".to_owned()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadmapStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub status: RoadmapStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillerWord {
    pub word: String,
    pub count: u32,
}

/// Scoring output for one pitch.
///
/// Only `scores` and `overall_score` are guaranteed; every other field is
/// optional on the wire and defaults to empty/absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Dimension name (e.g. `problem_definition`) to a 0–10 score.
    pub scores: BTreeMap<String, f64>,
    pub overall_score: f64,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub improved_pitch: Option<String>,
    #[serde(default)]
    pub improvement_metrics: Option<ImprovementMetrics>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default)]
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub summaries: Option<Summaries>,
    /// Delivery confidence as a percentage.
    #[serde(default)]
    pub confidence_score: Option<u32>,
    #[serde(default)]
    pub filler_words: Vec<FillerWord>,
    #[serde(default)]
    pub suggested_resources: Vec<Resource>,
    #[serde(default)]
    pub practice_questions: Vec<String>,
    #[serde(default)]
    pub personalized_roadmap: Vec<RoadmapStep>,
}

/// Response of `POST /analyze`.
///
/// The backend also echoes `id` and `created_at`; they are ignored here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisResult,
    pub original_pitch: String,
}

/// A persisted analysis as listed by `/my-analyses` and `/analysis/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub original_pitch: String,
    pub analysis: AnalysisResult,
    pub created_at: String,
}

impl HistoryEntry {
    /// Calendar date portion of `created_at` (`YYYY-MM-DD`).
    #[must_use]
    pub fn created_date(&self) -> &str {
        self.created_at
            .split_once('T')
            .map_or(self.created_at.as_str(), |(date, _)| date)
    }

    /// Last six characters of the id, used as a short archive label.
    #[must_use]
    pub fn short_id(&self) -> &str {
        let start = self
            .id
            .char_indices()
            .rev()
            .nth(5)
            .map_or(0, |(idx, _)| idx);
        &self.id[start..]
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
