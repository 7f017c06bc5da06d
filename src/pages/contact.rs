// ContactPage - terminal screen of the overview workflow

use async_trait::async_trait;
use thirtyfour::prelude::*;

use crate::browser::query::ElementQuery;
use crate::config::{SiteConfig, elements};
use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::pages::PageObject;
use crate::wait::WaitPolicy;

/// The contact page, identified by two independent markers: the
/// "GET IN TOUCH WITH US" heading and the contact form element.
pub struct ContactPage {
    driver: WebDriver,
    wait: WaitPolicy,
    heading: Locator,
    form: Locator,
}

impl ContactPage {
    pub fn new(driver: &WebDriver, site: &SiteConfig) -> Result<Self> {
        Ok(Self {
            driver: driver.clone(),
            wait: site.wait_policy(),
            heading: site.locator(elements::CONTACT_HEADING)?,
            form: site.locator(elements::CONTACT_FORM)?,
        })
    }

    fn query(&self, locator: &Locator) -> ElementQuery {
        ElementQuery::new(&self.driver, locator.clone(), self.wait)
    }
}

#[async_trait]
impl PageObject for ContactPage {
    fn name(&self) -> &'static str {
        "contact"
    }

    /// Waits for each marker, then requires both to be displayed at
    /// the same moment.
    async fn is_displayed(&self) -> Result<bool> {
        let heading = match self.query(&self.heading).visible().await {
            Ok(element) => element,
            Err(Error::WaitTimeout { .. }) => return Ok(false),
            Err(err) => return Err(err),
        };
        let form = match self.query(&self.form).visible().await {
            Ok(element) => element,
            Err(Error::WaitTimeout { .. }) => return Ok(false),
            Err(err) => return Err(err),
        };

        let both = heading.is_displayed().await? && form.is_displayed().await?;
        tracing::debug!("contact: both markers displayed = {}", both);
        Ok(both)
    }
}
