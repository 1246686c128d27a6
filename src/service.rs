//! Client side of the remote summarization service.
//!
//! The controller only sees [`SummaryService`]; [`HttpSummaryService`] is the
//! production implementation that talks JSON over HTTP.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{Duration, Instant};

use crate::config::ServiceConfig;
use crate::error::ServiceError;

/// A single-shot summarization call.
///
/// Implementations make exactly one attempt per call. Retry or backoff, if
/// ever wanted, belongs in a wrapper around this trait.
#[async_trait]
pub trait SummaryService: Send + Sync + 'static {
    /// Summarize already-validated, trimmed text.
    async fn summarize(&self, text: &str) -> Result<String, ServiceError>;
}

/// Request body sent to the service.
#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    text: &'a str,
}

/// Error body the service returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// JSON-over-HTTP summarization client.
pub struct HttpSummaryService {
    client: Client,
    endpoint: String,
}

impl HttpSummaryService {
    /// Build a client from service config.
    ///
    /// `timeout_seconds = 0` leaves the request without a deadline.
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64));
        if config.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_seconds as u64));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SummaryService for HttpSummaryService {
    async fn summarize(&self, text: &str) -> Result<String, ServiceError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            chars = text.chars().count(),
            "Sending summarization request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&SummarizeRequest { text })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .map(|b| b.error);
            tracing::warn!(
                status = status.as_u16(),
                latency_ms,
                detail = detail.as_deref().unwrap_or(""),
                "Summarization service returned an error status"
            );
            return Err(ServiceError::HttpStatus {
                status: status.as_u16(),
                detail,
            });
        }

        let summary = parse_summary(&body)?;
        tracing::debug!(latency_ms, summary_len = summary.len(), "Summary received");
        Ok(summary)
    }
}

/// Pull the `summary` string out of a successful response body.
///
/// Missing, `null`, empty, or non-string values all count as "no summary".
pub fn parse_summary(body: &str) -> Result<String, ServiceError> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        tracing::debug!(error = %e, "Response body is not JSON");
        ServiceError::InvalidResponse
    })?;

    match value.get("summary") {
        Some(Value::String(summary)) if !summary.is_empty() => Ok(summary.clone()),
        _ => Err(ServiceError::NoSummary),
    }
}
