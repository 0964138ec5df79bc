//! Upstream page fetching with bounded retries.
//!
//! Timeouts, connection failures and 5xx/408/429 responses are retried with
//! exponential backoff. Other client errors fail immediately.

use std::time::Duration;

use reqwest::{Client, StatusCode, header::HeaderMap};

use crate::error::ProviderError;

/// Retry settings for upstream requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts after the first one; zero disables retrying.
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(2, 500, 5_000)
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, initial_delay_ms: u64, max_delay_ms: u64) -> Self {
        Self {
            max_retries,
            initial_delay: Duration::from_millis(initial_delay_ms),
            max_delay: Duration::from_millis(max_delay_ms),
        }
    }

    pub fn none() -> Self {
        Self::new(0, 0, 0)
    }

    /// Delay before retry number `attempt` (zero-based): `initial * 2^attempt`, capped.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.initial_delay.saturating_mul(factor).min(self.max_delay)
    }
}

/// Build the shared HTTP client with a per-request timeout.
pub fn build_client(timeout: Duration) -> Result<Client, ProviderError> {
    Client::builder().timeout(timeout).build().map_err(ProviderError::Client)
}

/// GET `url` and return the body as text.
pub async fn fetch_text(
    http: &Client,
    url: &str,
    headers: HeaderMap,
    retry: &RetryPolicy,
) -> Result<String, ProviderError> {
    let mut attempt = 0;
    loop {
        match fetch_once(http, url, headers.clone()).await {
            Ok(body) => return Ok(body),
            Err(err) if attempt < retry.max_retries && is_retryable(&err) => {
                let delay = retry.delay_for_attempt(attempt);
                tracing::warn!(
                    url,
                    attempt = attempt + 1,
                    delay_ms = delay.as_millis() as u64,
                    "Upstream request failed, retrying: {err}"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

async fn fetch_once(http: &Client, url: &str, headers: HeaderMap) -> Result<String, ProviderError> {
    tracing::debug!(url, "GET");

    let res = http
        .get(url)
        .headers(headers)
        .send()
        .await
        .map_err(|source| ProviderError::Fetch { url: url.to_string(), source })?;

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|source| ProviderError::Fetch { url: url.to_string(), source })?;

    if !status.is_success() {
        return Err(ProviderError::Status {
            url: url.to_string(),
            status,
            body: truncate_body(&body),
        });
    }

    Ok(body)
}

fn is_retryable(err: &ProviderError) -> bool {
    match err {
        ProviderError::Fetch { source, .. } => source.is_timeout() || source.is_connect(),
        ProviderError::Status { status, .. } => is_retryable_status(*status),
        _ => false,
    }
}

fn is_retryable_status(status: StatusCode) -> bool {
    status.is_server_error()
        || status == StatusCode::TOO_MANY_REQUESTS
        || status == StatusCode::REQUEST_TIMEOUT
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_and_caps() {
        let policy = RetryPolicy::new(5, 100, 1_000);
        assert_eq!(policy.delay_for_attempt(0), Duration::from_millis(100));
        assert_eq!(policy.delay_for_attempt(1), Duration::from_millis(200));
        assert_eq!(policy.delay_for_attempt(3), Duration::from_millis(800));
        assert_eq!(policy.delay_for_attempt(4), Duration::from_millis(1_000));
        assert_eq!(policy.delay_for_attempt(40), Duration::from_millis(1_000));
    }

    #[test]
    fn server_errors_are_retryable_client_errors_are_not() {
        assert!(is_retryable_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable_status(StatusCode::REQUEST_TIMEOUT));
        assert!(!is_retryable_status(StatusCode::NOT_FOUND));
        assert!(!is_retryable_status(StatusCode::FORBIDDEN));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let long = "я".repeat(300);
        let short = truncate_body(&long);
        assert_eq!(short.chars().count(), 203);
        assert!(short.ends_with("..."));
        assert_eq!(truncate_body("ok"), "ok");
    }
}
