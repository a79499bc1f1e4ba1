use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use pitch::session::MemoryStore;
use serde_json::json;

use super::*;

/// Requests observed by the stub backend: (path, Authorization header, body).
type Seen = Arc<Mutex<Vec<(String, Option<String>, Value)>>>;

fn record(seen: &Seen, path: &str, headers: &HeaderMap, body: Value) {
    let auth = headers
        .get("authorization")
        .map(|v| v.to_str().unwrap().to_owned());
    seen.lock().unwrap().push((path.to_owned(), auth, body));
}

async fn analyze(State(seen): State<Seen>, headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    let original = body["pitch_text"].clone();
    record(&seen, "/analyze", &headers, body);
    Json(json!({
        "id": "65f1a2b3c4d5e6f7a8b9c0d1",
        "analysis": { "overall_score": 7, "scores": { "clarity": 8 } },
        "original_pitch": original,
        "created_at": "2025-03-04T10:11:12Z"
    }))
}

async fn me(State(seen): State<Seen>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    record(&seen, "/user/me", &headers, Value::Null);
    if headers.contains_key("authorization") {
        (
            StatusCode::OK,
            Json(json!({ "id": "u1", "email": "ada@example.com", "full_name": "Ada" })),
        )
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Not authenticated" })))
    }
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["password"] == "correct horse" {
        (StatusCode::OK, Json(json!({ "access_token": "a.b.c", "token_type": "bearer" })))
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Incorrect email or password" })))
    }
}

async fn register() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "detail": [{ "loc": ["body", "email"], "msg": "value is not a valid email address" }] })),
    )
}

async fn history() -> Json<Value> {
    Json(json!([
        {
            "id": "a1",
            "original_pitch": "Solar for schools",
            "analysis": { "overall_score": 6, "scores": { "clarity": 6 } },
            "created_at": "2025-01-01T00:00:00Z"
        }
    ]))
}

async fn one_analysis(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    if id == "a1" {
        (
            StatusCode::OK,
            Json(json!({
                "id": "a1",
                "original_pitch": "Solar for schools",
                "analysis": { "overall_score": 6, "scores": {} },
                "created_at": "2025-01-01T00:00:00Z"
            })),
        )
    } else {
        (StatusCode::NOT_FOUND, Json(json!({ "detail": "Analysis not found" })))
    }
}

async fn spawn_stub() -> (String, Seen) {
    let seen = Seen::default();
    let app = Router::new()
        .route("/api/analyze", post(analyze))
        .route("/api/user/me", get(me))
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/my-analyses", get(history))
        .route("/api/analysis/{id}", get(one_analysis))
        .with_state(seen.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/api"), seen)
}

fn client(base: &str, store: MemoryStore) -> ApiClient<MemoryStore> {
    ApiClient::new(base, Duration::from_secs(5), store).unwrap()
}

// =============================================================
// Analyze
// =============================================================

#[tokio::test]
async fn analyze_pitch_result_renders_overall_and_single_axis() {
    let (base, seen) = spawn_stub().await;
    let api = client(&base, MemoryStore::with_token("tok"));

    let resp = api.analyze_pitch("We help X do Y", Audience::Investor).await.unwrap();
    let view = insights::ResultsView::new(&resp.analysis, &resp.original_pitch);
    assert_eq!(view.overall, "7");
    assert_eq!(view.axes.len(), 1);
    assert_eq!(view.axes[0].label, "Clarity");
    assert_eq!(resp.original_pitch, "We help X do Y");

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].2, json!({ "pitch_text": "We help X do Y", "target_audience": "Investor" }));
}

#[tokio::test]
async fn blank_pitch_never_reaches_backend() {
    let (base, seen) = spawn_stub().await;
    let api = client(&base, MemoryStore::default());

    let err = api.analyze_pitch("   \n", Audience::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::Draft(insights::DraftError::Empty)));
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn pitch_is_trimmed_before_sending() {
    let (base, seen) = spawn_stub().await;
    let api = client(&base, MemoryStore::default());
    api.analyze_pitch("  padded  ", Audience::Professor).await.unwrap();
    assert_eq!(seen.lock().unwrap()[0].2["pitch_text"], "padded");
}

// =============================================================
// Authorization header
// =============================================================

#[tokio::test]
async fn empty_store_sends_no_authorization_header() {
    let (base, seen) = spawn_stub().await;
    let api = client(&base, MemoryStore::default());

    let err = api.get_me().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(seen.lock().unwrap()[0].1, None);
}

#[tokio::test]
async fn stored_token_is_sent_as_bearer() {
    let (base, seen) = spawn_stub().await;
    let api = client(&base, MemoryStore::with_token("tok-123"));

    let me = api.get_me().await.unwrap();
    assert_eq!(me.email, "ada@example.com");
    assert_eq!(seen.lock().unwrap()[0].1.as_deref(), Some("Bearer tok-123"));
}

#[tokio::test]
async fn store_is_read_per_request() {
    let (base, seen) = spawn_stub().await;
    let api = client(&base, MemoryStore::default());

    api.get_me().await.unwrap_err();
    api.store().save("late");
    api.get_me().await.unwrap();
    api.store().clear();
    api.get_me().await.unwrap_err();

    let auths: Vec<_> = seen.lock().unwrap().iter().map(|(_, a, _)| a.clone()).collect();
    assert_eq!(auths, vec![None, Some("Bearer late".to_owned()), None]);
}

// =============================================================
// Auth endpoints and error bodies
// =============================================================

#[tokio::test]
async fn login_returns_access_token() {
    let (base, _) = spawn_stub().await;
    let api = client(&base, MemoryStore::default());
    let body = LoginRequest {
        email: "ada@example.com".to_owned(),
        password: "correct horse".to_owned(),
    };
    let token = api.login_user(&body).await.unwrap();
    assert_eq!(token.access_token, "a.b.c");
    assert_eq!(token.token_type.as_deref(), Some("bearer"));
}

#[tokio::test]
async fn login_failure_keeps_detail_string() {
    let (base, _) = spawn_stub().await;
    let api = client(&base, MemoryStore::default());
    let body = LoginRequest {
        email: "ada@example.com".to_owned(),
        password: "wrong".to_owned(),
    };
    let err = api.login_user(&body).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.detail_or("Invalid email or password"), "Incorrect email or password");
}

#[tokio::test]
async fn register_validation_error_uses_first_msg() {
    let (base, _) = spawn_stub().await;
    let api = client(&base, MemoryStore::default());
    let body = RegisterRequest {
        full_name: "Ada".to_owned(),
        email: "nope".to_owned(),
        job_role: None,
        password: "12345678".to_owned(),
    };
    let err = api.register_user(&body).await.unwrap_err();
    assert_eq!(err.status(), Some(422));
    assert_eq!(
        err.detail_or("Registration failed. Please try again."),
        "value is not a valid email address"
    );
}

#[tokio::test]
async fn transport_failure_is_not_a_status() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let api = client(&format!("http://{addr}/api"), MemoryStore::default());

    let err = api.get_my_analyses().await.unwrap_err();
    assert!(matches!(err, ApiError::Http(_)));
    assert_eq!(err.status(), None);
    assert_eq!(err.detail_or("fallback"), "fallback");
}

// =============================================================
// History
// =============================================================

#[tokio::test]
async fn history_lists_entries() {
    let (base, _) = spawn_stub().await;
    let api = client(&base, MemoryStore::with_token("tok"));
    let entries = api.get_my_analyses().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].created_date(), "2025-01-01");
}

#[tokio::test]
async fn get_analysis_by_id() {
    let (base, _) = spawn_stub().await;
    let api = client(&base, MemoryStore::with_token("tok"));
    let entry = api.get_analysis("a1").await.unwrap();
    assert_eq!(entry.original_pitch, "Solar for schools");

    let err = api.get_analysis("missing").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.detail_or("x"), "Analysis not found");
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let api = client("http://127.0.0.1:9/api/", MemoryStore::default());
    assert_eq!(api.base_url(), "http://127.0.0.1:9/api");
}
