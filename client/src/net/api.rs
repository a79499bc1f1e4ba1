//! REST API helpers for communicating with the analysis backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each bounded by the
//! shared request timeout and carrying `Authorization: Bearer <token>` when
//! `localStorage` holds one. Server-side (SSR): every call resolves to
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures propagate to the calling page unmodified; pages decide on the
//! user-facing text. Nothing retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use pitch::{
    AnalyzeRequest, AnalyzeResponse, Audience, HistoryEntry, LoginRequest, RegisterRequest, TokenResponse,
    UserProfile, paths,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Backend base URL, fixed at build time via `VAKYA_API_URL`.
pub fn api_base() -> &'static str {
    option_env!("VAKYA_API_URL").unwrap_or(pitch::DEFAULT_API_URL)
}

#[cfg(any(test, feature = "hydrate"))]
const TIMEOUT_MS: u32 = pitch::REQUEST_TIMEOUT_SECS as u32 * 1000;

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server returned HTTP {status}")]
    Status { status: u16, body: Value },
    #[error(transparent)]
    Draft(#[from] insights::DraftError),
    #[error("not available during server rendering")]
    Unavailable,
}

impl ApiError {
    /// User-facing message from the response `detail`, else `fallback`.
    pub fn detail_or(&self, fallback: &str) -> String {
        match self {
            Self::Status { body, .. } => pitch::detail::message_or(body, fallback),
            _ => fallback.to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
}

async fn call<T, B>(verb: Verb, path: &str, body: Option<&B>) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};
        use gloo_net::http::{Method, RequestBuilder};
        use pitch::session::SessionStore as _;

        let url = pitch::endpoint(api_base(), path);
        let method = match verb {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
        };
        let mut builder = RequestBuilder::new(&url).method(method).header("Accept", "application/json");
        if let Some(token) = crate::util::storage::LocalStorageStore.read() {
            builder = builder.header("Authorization", &bearer(&token));
        }
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let send = Box::pin(request.send());
        let timer = Box::pin(gloo_timers::future::TimeoutFuture::new(TIMEOUT_MS));
        let response = match select(send, timer).await {
            Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string()))?,
            Either::Right(_) => {
                log::warn!("request to {url} timed out");
                return Err(ApiError::Network("request timed out".to_owned()));
            }
        };

        if !response.ok() {
            let status = response.status();
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            log::warn!("request to {url} failed: HTTP {status}");
            return Err(ApiError::Status { status, body });
        }
        response.json::<T>().await.map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, body);
        Err(ApiError::Unavailable)
    }
}

/// `POST /auth/register`.
///
/// # Errors
///
/// Transport failure or a non-2xx response.
pub async fn register_user(body: &RegisterRequest) -> Result<UserProfile, ApiError> {
    call(Verb::Post, paths::REGISTER, Some(body)).await
}

/// `POST /auth/login`.
///
/// # Errors
///
/// Transport failure or a non-2xx response.
pub async fn login_user(body: &LoginRequest) -> Result<TokenResponse, ApiError> {
    call(Verb::Post, paths::LOGIN, Some(body)).await
}

/// `POST /analyze`. Blank pitches fail with [`ApiError::Draft`] before any
/// request is made.
///
/// # Errors
///
/// Invalid draft, transport failure, or a non-2xx response.
pub async fn analyze_pitch(pitch_text: &str, audience: Audience) -> Result<AnalyzeResponse, ApiError> {
    let pitch_text = insights::validate_pitch(pitch_text)?;
    let body = AnalyzeRequest {
        pitch_text: pitch_text.to_owned(),
        target_audience: audience,
    };
    call(Verb::Post, paths::ANALYZE, Some(&body)).await
}

/// `GET /my-analyses`.
///
/// # Errors
///
/// Transport failure or a non-2xx response.
pub async fn get_my_analyses() -> Result<Vec<HistoryEntry>, ApiError> {
    call::<_, ()>(Verb::Get, paths::MY_ANALYSES, None).await
}

/// `GET /user/me`.
///
/// # Errors
///
/// Transport failure or a non-2xx response.
pub async fn get_me() -> Result<UserProfile, ApiError> {
    call::<_, ()>(Verb::Get, paths::ME, None).await
}

/// `GET /analysis/{id}`.
///
/// # Errors
///
/// Transport failure or a non-2xx response.
pub async fn get_analysis(id: &str) -> Result<HistoryEntry, ApiError> {
    call::<_, ()>(Verb::Get, &paths::analysis(id), None).await
}
