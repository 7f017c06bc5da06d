// CompanyPage - company overview screen

use async_trait::async_trait;
use thirtyfour::prelude::*;

use crate::browser::query::ElementQuery;
use crate::config::{SiteConfig, elements};
use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::pages::PageObject;
use crate::wait::WaitPolicy;

/// The company overview page: the "Our Values" section and the
/// call-to-action into the contact page.
pub struct CompanyPage {
    driver: WebDriver,
    wait: WaitPolicy,
    values_heading: Locator,
    get_started: Locator,
}

impl CompanyPage {
    pub fn new(driver: &WebDriver, site: &SiteConfig) -> Result<Self> {
        Ok(Self {
            driver: driver.clone(),
            wait: site.wait_policy(),
            values_heading: site.locator(elements::COMPANY_VALUES_HEADING)?,
            get_started: site.locator(elements::COMPANY_GET_STARTED)?,
        })
    }

    /// Returns the "Our Values" section headings in document order.
    pub async fn our_values_headings(&self) -> Result<Vec<String>> {
        let headings = self.query(&self.values_heading).texts().await?;
        tracing::debug!("company: values headings {:?}", headings);
        Ok(headings)
    }

    /// Clicks the "Let's Get Started" call-to-action.
    pub async fn click_lets_get_started(&self) -> Result<()> {
        let button = self.query(&self.get_started).clickable().await?;
        button.click().await?;
        tracing::debug!("company: clicked call-to-action");
        Ok(())
    }

    fn query(&self, locator: &Locator) -> ElementQuery {
        ElementQuery::new(&self.driver, locator.clone(), self.wait)
    }
}

#[async_trait]
impl PageObject for CompanyPage {
    fn name(&self) -> &'static str {
        "company"
    }

    async fn is_displayed(&self) -> Result<bool> {
        match self.query(&self.values_heading).visible().await {
            Ok(_) => Ok(true),
            Err(Error::WaitTimeout { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }
}
