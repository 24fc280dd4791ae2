//! Recognition types — wire format, result items, and errors.
//!
//! The service contract is a single JSON POST:
//! request `{ image, dict_of_vars }`, response `{ data: [{ expr, result, assign }] }`.

use serde::{Deserialize, Serialize};

use crate::bindings::VariableBindings;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by recognition client operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecognizeError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The service base URL is not configured.
    #[error("missing recognition service URL: env var {var} not set")]
    MissingBaseUrl { var: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (connect, timeout, body read).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success HTTP status.
    #[error("recognition service returned status {status}")]
    Status { status: u16, body: String },

    /// The response body does not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl RecognizeError {
    /// Stable machine-readable code for the host UI.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::MissingBaseUrl { .. } => "E_MISSING_BASE_URL",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::Network(_) => "E_NETWORK",
            Self::Status { .. } => "E_STATUS",
            Self::MalformedResponse(_) => "E_MALFORMED_RESPONSE",
        }
    }

    /// Whether a manual retry by the user has a chance of succeeding.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// REQUEST
// =============================================================================

/// Body of `POST /calculate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculateRequest {
    /// The drawing as a `data:image/png;base64,…` URL.
    pub image: String,
    /// Variables assigned by earlier responses in this session.
    pub dict_of_vars: VariableBindings,
}

// =============================================================================
// RESPONSE
// =============================================================================

/// One expression detected in the drawing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultItem {
    /// The expression as recognized (or the variable name, for assignments).
    pub expression: String,
    /// The evaluated value.
    pub result: String,
    /// Whether this item defines a variable instead of being a standalone expression.
    pub is_assignment: bool,
}

impl ResultItem {
    /// Text shown in the overlay label for this item.
    #[must_use]
    pub fn label_text(&self) -> String {
        format!("{} = {}", self.expression, self.result)
    }
}

#[derive(Deserialize)]
struct CalculateResponse {
    data: Vec<WireItem>,
}

#[derive(Deserialize)]
struct WireItem {
    expr: String,
    result: Scalar,
    assign: bool,
}

/// Services disagree on whether `result` is a string or a number; accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl From<WireItem> for ResultItem {
    fn from(item: WireItem) -> Self {
        let result = match item.result {
            Scalar::Text(s) => s,
            Scalar::Number(n) => n.to_string(),
        };
        Self { expression: item.expr, result, is_assignment: item.assign }
    }
}

/// Parse a `/calculate` response body into result items, in service order.
///
/// # Errors
///
/// Returns [`RecognizeError::MalformedResponse`] if the body is not the expected shape.
pub fn parse_response(body: &str) -> Result<Vec<ResultItem>, RecognizeError> {
    let parsed: CalculateResponse =
        serde_json::from_str(body).map_err(|e| RecognizeError::MalformedResponse(e.to_string()))?;
    Ok(parsed.data.into_iter().map(ResultItem::from).collect())
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
