// ElementQuery - Explicit waits over declarative locators
//
// A query re-locates its elements on every poll, so a match found
// after a navigation or animation is the element as currently
// rendered, never a cached handle.

use std::fmt;

use thirtyfour::prelude::*;

use crate::error::Result;
use crate::locator::Locator;
use crate::wait::{self, WaitPolicy};

/// Named conditions an element can be waited on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Condition {
    Visible,
    Clickable,
}

impl Condition {
    async fn holds(self, element: &WebElement) -> Result<bool> {
        match self {
            Condition::Visible => Ok(element.is_displayed().await?),
            Condition::Clickable => Ok(element.is_clickable().await?),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Condition::Visible => "visible",
            Condition::Clickable => "clickable",
        })
    }
}

/// One locator bound to a driver handle and a wait policy.
pub struct ElementQuery {
    driver: WebDriver,
    locator: Locator,
    policy: WaitPolicy,
}

impl ElementQuery {
    /// Creates a query. A per-locator `timeout_ms` overrides the
    /// policy's timeout for this element only.
    pub fn new(driver: &WebDriver, locator: Locator, policy: WaitPolicy) -> Self {
        let policy = match locator.timeout() {
            Some(timeout) => policy.with_timeout(timeout),
            None => policy,
        };
        Self {
            driver: driver.clone(),
            locator,
            policy,
        }
    }

    /// Waits until a matching element is displayed and returns it.
    pub async fn visible(self) -> Result<WebElement> {
        self.first_match(Condition::Visible).await
    }

    /// Waits until a matching element is clickable and returns it.
    pub async fn clickable(self) -> Result<WebElement> {
        self.first_match(Condition::Clickable).await
    }

    /// Waits until at least one match is displayed, then returns the
    /// text of every match in document order.
    pub async fn texts(self) -> Result<Vec<String>> {
        let what = format!("any element {} to be visible", self.locator);
        let driver = self.driver.clone();
        let by = self.locator.by();

        let elements = wait::poll_until(self.policy, &what, move || {
            let driver = driver.clone();
            let by = by.clone();
            async move {
                let elements = driver.find_all(by).await?;
                let mut any_displayed = false;
                for element in &elements {
                    if element.is_displayed().await? {
                        any_displayed = true;
                        break;
                    }
                }
                Ok(if any_displayed { Some(elements) } else { None })
            }
        })
        .await?;

        let mut texts = Vec::with_capacity(elements.len());
        for element in &elements {
            texts.push(element.text().await?);
        }
        tracing::debug!("{}: collected {} texts", self.locator, texts.len());
        Ok(texts)
    }

    async fn first_match(self, condition: Condition) -> Result<WebElement> {
        let what = format!("element {} to be {}", self.locator, condition);
        let driver = self.driver.clone();
        let by = self.locator.by();

        wait::poll_until(self.policy, &what, move || {
            let driver = driver.clone();
            let by = by.clone();
            async move {
                for element in driver.find_all(by).await? {
                    if condition.holds(&element).await? {
                        return Ok(Some(element));
                    }
                }
                Ok(None)
            }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_names_match_wait_vocabulary() {
        assert_eq!(Condition::Visible.to_string(), "visible");
        assert_eq!(Condition::Clickable.to_string(), "clickable");
    }
}
