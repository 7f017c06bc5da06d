// ApiResponse - Assertable view of one HTTP response
//
// Assertions consume self and chain, so a test reads as the sequence
// of expectations it makes. Any mismatch is a typed error carrying the
// observed body.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Error, Result};

/// Status and full body of a completed request.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    method: &'static str,
    url: Url,
    status: StatusCode,
    body: String,
}

impl ApiResponse {
    /// Drains a reqwest response into an assertable value, logging the
    /// body for inspection. Logging has no effect on pass/fail.
    pub(crate) async fn read(
        method: &'static str,
        url: Url,
        response: reqwest::Response,
    ) -> Result<Self> {
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("{} {} -> {}: {}", method, url, status, body);
        Ok(Self {
            method,
            url,
            status,
            body,
        })
    }

    #[cfg(test)]
    fn stub(status: StatusCode, body: &str) -> Self {
        Self {
            method: "GET",
            url: Url::parse("http://localhost/posts").unwrap(),
            status,
            body: body.to_string(),
        }
    }

    /// Observed status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Observed body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Asserts the exact status code.
    pub fn expect_status(self, expected: StatusCode) -> Result<Self> {
        if self.status != expected {
            return Err(Error::UnexpectedStatus {
                method: self.method,
                url: self.url.to_string(),
                expected,
                actual: self.status,
                body: self.body,
            });
        }
        Ok(self)
    }

    /// Asserts any 2xx status.
    pub fn expect_success(self) -> Result<Self> {
        if !self.status.is_success() {
            return Err(Error::UnexpectedStatus {
                method: self.method,
                url: self.url.to_string(),
                expected: StatusCode::OK,
                actual: self.status,
                body: self.body,
            });
        }
        Ok(self)
    }

    /// Asserts the body is non-empty.
    pub fn expect_body_not_empty(self) -> Result<Self> {
        if self.body.is_empty() {
            return Err(Error::BodyMismatch {
                url: self.url.to_string(),
                expected: "a non-empty body".to_string(),
                body: self.body,
            });
        }
        Ok(self)
    }

    /// Asserts the body contains `needle`.
    pub fn expect_body_contains(self, needle: &str) -> Result<Self> {
        if !self.body.contains(needle) {
            return Err(Error::BodyMismatch {
                url: self.url.to_string(),
                expected: format!("a body containing {needle:?}"),
                body: self.body,
            });
        }
        Ok(self)
    }

    /// Asserts the exact body.
    pub fn expect_body(self, exact: &str) -> Result<Self> {
        if self.body != exact {
            return Err(Error::BodyMismatch {
                url: self.url.to_string(),
                expected: format!("exactly {exact:?}"),
                body: self.body,
            });
        }
        Ok(self)
    }

    /// Asserts the body matches a regex pattern.
    pub fn expect_body_matches(self, pattern: &str) -> Result<Self> {
        let re = regex::Regex::new(pattern)
            .map_err(|e| Error::InvalidArgument(format!("invalid regex: {e}")))?;
        if !re.is_match(&self.body) {
            return Err(Error::BodyMismatch {
                url: self.url.to_string(),
                expected: format!("a body matching /{pattern}/"),
                body: self.body,
            });
        }
        Ok(self)
    }

    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
