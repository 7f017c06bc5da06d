// Error types for the e2e harness

use std::time::Duration;
use thiserror::Error;

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the API or the browser
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request could not be completed (connection refused, TLS, body read)
    ///
    /// Network-level failures are terminal for the test that hit them.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// WebDriver command failed (driver crash, lost session, bad command)
    #[error("WebDriver command failed: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    /// Response status did not match the expectation
    ///
    /// Carries the observed body so a failing test reports what the
    /// remote service actually said.
    #[error(
        "unexpected status for {method} {url}: expected {expected}, got {actual}\nbody: {body}"
    )]
    UnexpectedStatus {
        method: &'static str,
        url: String,
        expected: reqwest::StatusCode,
        actual: reqwest::StatusCode,
        body: String,
    },

    /// Response body did not match the expectation
    #[error("body mismatch for {url}: expected {expected}, got: {body}")]
    BodyMismatch {
        url: String,
        expected: String,
        body: String,
    },

    /// A bounded wait elapsed before its condition held
    #[error("timed out after {timeout:?} waiting for {what}")]
    WaitTimeout { what: String, timeout: Duration },

    /// No locator with this logical name is configured
    #[error("no locator named '{0}' is configured")]
    UnknownElement(String),

    /// Base URL or joined path could not be parsed
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Invalid argument provided to a harness operation
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A page was not in the state the workflow requires
    #[error("unexpected page state: {0}")]
    PageState(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// TOML configuration could not be parsed
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
