//! Recognition — client for the handwriting recognition/evaluation service.
//!
//! DESIGN
//! ======
//! The service is an opaque HTTP collaborator. `Recognizer` is the seam the
//! session talks to, so tests can substitute a canned implementation;
//! `HttpRecognizer` is the real reqwest-backed client. A submission is sent
//! exactly once: nothing here retries, and failures are returned to the
//! caller untouched.

pub mod types;

use std::time::Duration;

pub use types::{CalculateRequest, RecognizeError, ResultItem, parse_response};

use crate::config::BoardConfig;

/// Path of the evaluation endpoint, appended to the configured base URL.
pub const CALCULATE_PATH: &str = "/calculate";

/// Async trait for the recognition service. Enables mocking in tests.
#[async_trait::async_trait]
pub trait Recognizer: Send + Sync {
    /// Submit one drawing and return the detected expressions in service order.
    ///
    /// # Errors
    ///
    /// Returns a [`RecognizeError`] if the transport fails, the service
    /// answers with a non-success status, or the body cannot be parsed.
    async fn recognize(&self, request: &CalculateRequest) -> Result<Vec<ResultItem>, RecognizeError>;
}

/// reqwest-backed [`Recognizer`] for `POST {base_url}/calculate`.
pub struct HttpRecognizer {
    http: reqwest::Client,
    base_url: String,
}

impl HttpRecognizer {
    /// Build a client from typed config.
    ///
    /// # Errors
    ///
    /// Returns [`RecognizeError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn from_config(config: &BoardConfig) -> Result<Self, RecognizeError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| RecognizeError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.api_url.trim_end_matches('/').to_string() })
    }

    /// Build a client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is missing or invalid, or the HTTP client fails to build.
    pub fn from_env() -> Result<Self, RecognizeError> {
        let config = BoardConfig::from_env()?;
        Self::from_config(&config)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send_json(&self, request: &CalculateRequest) -> Result<String, RecognizeError> {
        let url = format!("{}{CALCULATE_PATH}", self.base_url);
        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| RecognizeError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RecognizeError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(RecognizeError::Status { status: status.as_u16(), body: text });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl Recognizer for HttpRecognizer {
    async fn recognize(&self, request: &CalculateRequest) -> Result<Vec<ResultItem>, RecognizeError> {
        tracing::debug!(
            base_url = %self.base_url,
            vars = request.dict_of_vars.len(),
            image_bytes = request.image.len(),
            "sending recognition request"
        );
        let body = self.send_json(request).await?;
        parse_response(&body)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
