// Locator - Declarative element selectors
//
// A Locator is configuration, not code: the workflow and page objects
// refer to logical element names, and the strategy/value pair for each
// name lives in the harness config where it can be updated when the
// site under test changes.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thirtyfour::By;

/// How a selector value is interpreted by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectorStrategy {
    /// CSS selector, e.g. `h3`
    Css,
    /// XPath expression over the rendered document tree
    #[serde(rename = "xpath")]
    XPath,
    /// Fixed DOM id
    Id,
    /// Exact visible link text
    LinkText,
}

impl fmt::Display for SelectorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SelectorStrategy::Css => "css",
            SelectorStrategy::XPath => "xpath",
            SelectorStrategy::Id => "id",
            SelectorStrategy::LinkText => "link-text",
        };
        f.write_str(name)
    }
}

/// A declarative element locator with an optional per-element timeout.
///
/// Deserializes from a config record such as:
///
/// ```toml
/// strategy = "xpath"
/// value = "//nav//a[text()='Company']"
/// timeout_ms = 15000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locator {
    pub strategy: SelectorStrategy,
    pub value: String,

    /// Overrides the harness wait timeout for this element only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl Locator {
    /// Creates a CSS selector locator.
    pub fn css(value: impl Into<String>) -> Self {
        Self {
            strategy: SelectorStrategy::Css,
            value: value.into(),
            timeout_ms: None,
        }
    }

    /// Creates an XPath locator.
    pub fn xpath(value: impl Into<String>) -> Self {
        Self {
            strategy: SelectorStrategy::XPath,
            value: value.into(),
            timeout_ms: None,
        }
    }

    /// Creates a DOM-id locator.
    pub fn id(value: impl Into<String>) -> Self {
        Self {
            strategy: SelectorStrategy::Id,
            value: value.into(),
            timeout_ms: None,
        }
    }

    /// Creates a visible-link-text locator.
    pub fn link_text(value: impl Into<String>) -> Self {
        Self {
            strategy: SelectorStrategy::LinkText,
            value: value.into(),
            timeout_ms: None,
        }
    }

    /// Sets the per-element timeout override.
    pub fn with_timeout_ms(mut self, ms: u64) -> Self {
        self.timeout_ms = Some(ms);
        self
    }

    /// Per-element timeout override, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Converts this locator to the driver's `By` selector.
    pub fn by(&self) -> By {
        match self.strategy {
            SelectorStrategy::Css => By::Css(self.value.clone()),
            SelectorStrategy::XPath => By::XPath(self.value.clone()),
            SelectorStrategy::Id => By::Id(self.value.clone()),
            SelectorStrategy::LinkText => By::LinkText(self.value.clone()),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.strategy, self.value)
    }
}
