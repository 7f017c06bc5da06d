//! agdata-e2e: end-to-end suites for a marketing site and a REST API
//!
//! Two independent, stateless harnesses:
//!
//! - the **API assertion harness** issues single requests against a
//!   fixed base URL and asserts on status codes and response bodies;
//! - the **browser harness** drives a real browser through a fixed
//!   navigation path using page objects and bounded explicit waits.
//!
//! # Examples
//!
//! ## API assertions
//!
//! ```ignore
//! use agdata_e2e::{ApiClient, NewPost, StatusCode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new("https://jsonplaceholder.typicode.com/")?;
//!
//!     client
//!         .get("posts")
//!         .await?
//!         .expect_status(StatusCode::OK)?
//!         .expect_body_not_empty()?;
//!
//!     client
//!         .post("posts", &NewPost::new("foo", "bar", 1))
//!         .await?
//!         .expect_status(StatusCode::CREATED)?
//!         .expect_body_contains("foo")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Browser workflow
//!
//! ```ignore
//! use agdata_e2e::{HarnessConfig, run_company_overview};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Requires a running chromedriver (see WEBDRIVER_URL).
//!     let config = HarnessConfig::load()?;
//!     let report = run_company_overview(&config.site).await?;
//!     assert!(!report.values_headings.is_empty());
//!     Ok(())
//! }
//! ```

mod api;
mod browser;
mod config;
mod error;
mod locator;
pub mod pages;
mod wait;
mod workflow;

// Re-export error types
pub use error::{Error, Result};

// Re-export the API harness
pub use api::{ApiClient, ApiResponse, Comment, NewComment, NewPost, Post, UpdatedPost};

// Re-export configuration
pub use config::{
    ApiConfig, DEFAULT_API_BASE_URL, DEFAULT_SITE_URL, DEFAULT_WEBDRIVER_URL, HarnessConfig,
    SiteConfig, WaitSettings, elements,
};

// Re-export locators and waits
pub use locator::{Locator, SelectorStrategy};
pub use wait::{DEFAULT_POLL_INTERVAL, DEFAULT_WAIT_TIMEOUT, WaitPolicy, poll_until};

// Re-export the browser harness
pub use browser::query::ElementQuery;
pub use browser::session::{SessionOptions, connect, with_session};

// Re-export workflow orchestration
pub use workflow::{WorkflowReport, run_company_overview};

// Status codes used by the assertion surface
pub use reqwest::StatusCode;
