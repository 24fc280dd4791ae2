//! Board configuration parsed from environment variables.

use std::env::VarError;

use crate::recognize::RecognizeError;

pub const API_URL_VAR: &str = "MATHBOARD_API_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "MATHBOARD_REQUEST_TIMEOUT_SECS";
pub const CONNECT_TIMEOUT_VAR: &str = "MATHBOARD_CONNECT_TIMEOUT_SECS";
pub const CLEAR_INK_VAR: &str = "MATHBOARD_CLEAR_INK_ON_RESULT";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Recognition service base URL, without a trailing slash.
    pub api_url: String,
    pub timeouts: Timeouts,
    /// Wipe the ink once a batch of results has been placed.
    pub clear_ink_on_result: bool,
}

impl BoardConfig {
    /// Config with defaults for everything but the service URL.
    #[must_use]
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            timeouts: Timeouts::default(),
            clear_ink_on_result: true,
        }
    }

    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `MATHBOARD_API_URL`
    ///
    /// Optional:
    /// - `MATHBOARD_REQUEST_TIMEOUT_SECS`: default 30
    /// - `MATHBOARD_CONNECT_TIMEOUT_SECS`: default 10
    /// - `MATHBOARD_CLEAR_INK_ON_RESULT`: default `true`
    ///
    /// # Errors
    ///
    /// Returns [`RecognizeError::MissingBaseUrl`] when the URL is unset and
    /// [`RecognizeError::ConfigParse`] for malformed optional values.
    pub fn from_env() -> Result<Self, RecognizeError> {
        Self::from_lookup(|key| var_value(key, std::env::var(key)))
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// The lookup returns `Ok(None)` for an unset key and an error for a value
    /// it cannot read.
    ///
    /// # Errors
    ///
    /// Same as [`BoardConfig::from_env`], plus any error the lookup returns.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RecognizeError>
    where
        F: Fn(&str) -> Result<Option<String>, RecognizeError>,
    {
        let api_url = lookup(API_URL_VAR)?
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| RecognizeError::MissingBaseUrl { var: API_URL_VAR.into() })?;

        let timeouts = Timeouts {
            request_secs: parse_secs(REQUEST_TIMEOUT_VAR, lookup(REQUEST_TIMEOUT_VAR)?, DEFAULT_REQUEST_TIMEOUT_SECS)?,
            connect_secs: parse_secs(CONNECT_TIMEOUT_VAR, lookup(CONNECT_TIMEOUT_VAR)?, DEFAULT_CONNECT_TIMEOUT_SECS)?,
        };
        let clear_ink_on_result = parse_bool(CLEAR_INK_VAR, lookup(CLEAR_INK_VAR)?, true)?;

        Ok(Self { timeouts, clear_ink_on_result, ..Self::new(api_url.trim()) })
    }
}

/// Unset is `None`; a set but non-UTF-8 value is a parse error.
fn var_value(key: &str, var: Result<String, VarError>) -> Result<Option<String>, RecognizeError> {
    match var {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => {
            Err(RecognizeError::ConfigParse(format!("{key} is not valid UTF-8: {}", raw.to_string_lossy())))
        }
    }
}

fn parse_secs(key: &str, raw: Option<String>, default: u64) -> Result<u64, RecognizeError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(RecognizeError::ConfigParse(format!("{key} must be a positive integer, got '{raw}'"))),
    }
}

fn parse_bool(key: &str, raw: Option<String>, default: bool) -> Result<bool, RecognizeError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(RecognizeError::ConfigParse(format!("{key} must be true/false/1/0, got '{raw}'"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
