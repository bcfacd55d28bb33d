use std::time::Duration;

use rand::Rng;
use reqwest::{RequestBuilder, Response};

pub const DEFAULT_RETRY_JITTER: Duration = Duration::from_millis(250);

/// Timeout and retry behaviour for calls to external speech services.
///
/// The default is a single attempt with no timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutboundPolicy {
    pub timeout: Option<Duration>,
    pub retry_once: bool,
    pub retry_jitter: Duration,
}

impl Default for OutboundPolicy {
    fn default() -> Self {
        Self {
            timeout: None,
            retry_once: false,
            retry_jitter: DEFAULT_RETRY_JITTER,
        }
    }
}

impl OutboundPolicy {
    pub fn max_attempts(&self) -> u32 {
        if self.retry_once { 2 } else { 1 }
    }

    /// Sends the request built by `build`, rebuilding it for the retry.
    pub async fn send<B>(&self, build: B) -> Result<Response, reqwest::Error>
    where
        B: Fn() -> RequestBuilder,
    {
        let mut attempt = 1;

        loop {
            let mut request = build();
            if let Some(timeout) = self.timeout {
                request = request.timeout(timeout);
            }

            let result = request.send().await;

            if attempt >= self.max_attempts() || !is_retryable(&result) {
                return result;
            }

            let delay = self.jitter();
            tracing::warn!(
                attempt = attempt,
                delay_ms = delay.as_millis() as u64,
                "Outbound call failed, retrying"
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    fn jitter(&self) -> Duration {
        let max_ms = self.retry_jitter.as_millis() as u64;
        if max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::rng().random_range(0..=max_ms))
    }
}

fn is_retryable(result: &Result<Response, reqwest::Error>) -> bool {
    match result {
        Ok(response) => {
            let status = response.status();
            status.is_server_error() || status.as_u16() == 429
        }
        Err(e) => e.is_timeout() || e.is_connect(),
    }
}
