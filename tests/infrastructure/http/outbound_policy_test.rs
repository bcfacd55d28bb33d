use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use tokio::net::TcpListener;

use mulberry::infrastructure::http::OutboundPolicy;

/// Fails the first `failures` calls with 503, then answers 200. Optionally stalls.
async fn start_flaky_server(failures: usize, delay: Duration) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    let app = Router::new().route(
        "/call",
        post(move || {
            let counter = Arc::clone(&counter);
            async move {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(delay).await;
                if n < failures {
                    StatusCode::SERVICE_UNAVAILABLE
                } else {
                    StatusCode::OK
                }
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    (format!("http://{}/call", addr), hits)
}

#[tokio::test]
async fn given_default_policy_when_call_fails_then_makes_single_attempt() {
    let (url, hits) = start_flaky_server(1, Duration::ZERO).await;
    let client = reqwest::Client::new();

    let response = OutboundPolicy::default()
        .send(|| client.post(&url))
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_retry_once_when_first_call_fails_then_second_attempt_succeeds() {
    let (url, hits) = start_flaky_server(1, Duration::ZERO).await;
    let client = reqwest::Client::new();
    let policy = OutboundPolicy {
        retry_once: true,
        retry_jitter: Duration::from_millis(10),
        ..Default::default()
    };

    let response = policy.send(|| client.post(&url)).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn given_retry_once_when_both_calls_fail_then_returns_last_failure() {
    let (url, hits) = start_flaky_server(5, Duration::ZERO).await;
    let client = reqwest::Client::new();
    let policy = OutboundPolicy {
        retry_once: true,
        retry_jitter: Duration::ZERO,
        ..Default::default()
    };

    let response = policy.send(|| client.post(&url)).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn given_timeout_when_server_stalls_then_returns_timeout_error() {
    let (url, _hits) = start_flaky_server(0, Duration::from_millis(500)).await;
    let client = reqwest::Client::new();
    let policy = OutboundPolicy {
        timeout: Some(Duration::from_millis(50)),
        ..Default::default()
    };

    let result = policy.send(|| client.post(&url)).await;

    assert!(result.unwrap_err().is_timeout());
}

#[test]
fn given_policies_when_counting_attempts_then_retry_adds_one() {
    assert_eq!(OutboundPolicy::default().max_attempts(), 1);
    let retrying = OutboundPolicy {
        retry_once: true,
        ..Default::default()
    };
    assert_eq!(retrying.max_attempts(), 2);
}
