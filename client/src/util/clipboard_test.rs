use super::*;

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

#[test]
fn server_rendering_reports_unavailable_instead_of_silently_succeeding() {
    assert_eq!(block_on_ready(write_text("copy me")), Err(ClipboardError::Unavailable));
}

#[test]
fn rejection_message_carries_browser_reason() {
    let err = ClipboardError::Rejected("NotAllowedError".to_owned());
    assert_eq!(err.to_string(), "clipboard write rejected: NotAllowedError");
}
