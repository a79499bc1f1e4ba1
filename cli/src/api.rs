//! HTTP client for the analysis backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request reads the session store right before it is sent and attaches
//! `Authorization: Bearer <token>` when a token is present, so a login or
//! logout between two calls is always honored.
//!
//! ERROR HANDLING
//! ==============
//! Failures propagate unmodified: transport errors as [`ApiError::Http`],
//! non-2xx responses as [`ApiError::Status`] with the decoded JSON body (or
//! `null`). Nothing retries.

use std::time::Duration;

use pitch::session::SessionStore;
use pitch::{
    AnalyzeRequest, AnalyzeResponse, Audience, HistoryEntry, LoginRequest, RegisterRequest, TokenResponse,
    UserProfile, endpoint, paths,
};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: Value },
    #[error("refusing to send pitch: {0}")]
    Draft(#[from] insights::DraftError),
}

impl ApiError {
    /// HTTP status of a non-2xx response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// User-facing message from the response `detail`, else `fallback`.
    #[must_use]
    pub fn detail_or(&self, fallback: &str) -> String {
        match self {
            Self::Status { body, .. } => pitch::detail::message_or(body, fallback),
            _ => fallback.to_owned(),
        }
    }
}

/// Backend client bound to one base URL and one session store.
#[derive(Debug)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    base_url: String,
    store: S,
}

impl<S: SessionStore> ApiClient<S> {
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration, store: S) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            store,
        })
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = endpoint(&self.base_url, path);
        tracing::debug!(%method, %url, "api request");
        let request = self.http.request(method, url);
        match self.store.read() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            tracing::debug!(status = status.as_u16(), %body, "api request rejected");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Transport failure or a non-2xx response.
    pub async fn register_user(&self, body: &RegisterRequest) -> Result<UserProfile, ApiError> {
        Self::send(self.request(Method::POST, paths::REGISTER).json(body)).await
    }

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Transport failure or a non-2xx response.
    pub async fn login_user(&self, body: &LoginRequest) -> Result<TokenResponse, ApiError> {
        Self::send(self.request(Method::POST, paths::LOGIN).json(body)).await
    }

    /// `POST /analyze`. Blank or oversized pitches are rejected locally and
    /// never reach the network.
    ///
    /// # Errors
    ///
    /// [`ApiError::Draft`] for an invalid pitch, otherwise transport failure or
    /// a non-2xx response.
    pub async fn analyze_pitch(&self, pitch_text: &str, audience: Audience) -> Result<AnalyzeResponse, ApiError> {
        let pitch_text = insights::validate_pitch(pitch_text)?;
        let body = AnalyzeRequest {
            pitch_text: pitch_text.to_owned(),
            target_audience: audience,
        };
        Self::send(self.request(Method::POST, paths::ANALYZE).json(&body)).await
    }

    /// `GET /my-analyses`.
    ///
    /// # Errors
    ///
    /// Transport failure or a non-2xx response.
    pub async fn get_my_analyses(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        Self::send(self.request(Method::GET, paths::MY_ANALYSES)).await
    }

    /// `GET /user/me`.
    ///
    /// # Errors
    ///
    /// Transport failure or a non-2xx response.
    pub async fn get_me(&self) -> Result<UserProfile, ApiError> {
        Self::send(self.request(Method::GET, paths::ME)).await
    }

    /// `GET /analysis/{id}`.
    ///
    /// # Errors
    ///
    /// Transport failure or a non-2xx response.
    pub async fn get_analysis(&self, id: &str) -> Result<HistoryEntry, ApiError> {
        Self::send(self.request(Method::GET, &paths::analysis(id))).await
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
