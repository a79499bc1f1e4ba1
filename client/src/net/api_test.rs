use serde_json::json;

use super::*;

#[test]
fn api_base_defaults_to_local_backend() {
    if option_env!("VAKYA_API_URL").is_none() {
        assert_eq!(api_base(), "http://127.0.0.1:8000/api");
    }
}

#[test]
fn timeout_is_thirty_seconds() {
    assert_eq!(TIMEOUT_MS, 30_000);
}

#[test]
fn bearer_formats_header_value() {
    assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn detail_or_reads_validation_list() {
    let err = ApiError::Status {
        status: 422,
        body: json!({ "detail": [{ "msg": "field required" }] }),
    };
    assert_eq!(err.detail_or("Registration failed. Please try again."), "field required");
}

#[test]
fn detail_or_falls_back_for_other_failures() {
    let err = ApiError::Status {
        status: 500,
        body: json!({ "error": "boom" }),
    };
    assert_eq!(err.detail_or("Invalid email or password"), "Invalid email or password");
    assert_eq!(ApiError::Network("offline".to_owned()).detail_or("fb"), "fb");
    assert_eq!(ApiError::Unavailable.detail_or("fb"), "fb");
}

#[test]
fn blank_pitch_fails_before_any_request() {
    let outcome = block_on_ready(analyze_pitch("   ", Audience::Investor));
    assert_eq!(outcome, Err(ApiError::Draft(insights::DraftError::Empty)));
}

#[test]
fn server_side_calls_are_unavailable() {
    let outcome = block_on_ready(get_me());
    assert_eq!(outcome, Err(ApiError::Unavailable));
}

/// Drive a future that never awaits real I/O (no hydrate feature in tests).
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
