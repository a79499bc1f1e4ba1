//! Submission lifecycle of the analyze screen.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use pitch::AnalyzeResponse;

use crate::net::api::ApiError;

/// Message shown for any failed analysis request.
pub const ANALYSIS_FAILED: &str = "Our scribes faced an interruption. Please try again.";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum AnalysisStatus {
    #[default]
    Idle,
    Loading,
    Success(AnalyzeResponse),
    Error(String),
}

impl AnalysisStatus {
    /// Map a finished request onto the next status.
    pub fn from_outcome(outcome: Result<AnalyzeResponse, ApiError>) -> Self {
        match outcome {
            Ok(resp) => Self::Success(resp),
            Err(ApiError::Draft(err)) => Self::Error(err.to_string()),
            Err(_) => Self::Error(ANALYSIS_FAILED.to_owned()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
