// HomePage - entry screen with the top navigation

use async_trait::async_trait;
use thirtyfour::prelude::*;

use crate::browser::query::ElementQuery;
use crate::config::{SiteConfig, elements};
use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::pages::PageObject;
use crate::wait::WaitPolicy;

/// The site's landing page. Owns the navigation into the company
/// overview.
pub struct HomePage {
    driver: WebDriver,
    wait: WaitPolicy,
    company_menu: Locator,
    overview_link: Locator,
}

impl HomePage {
    /// Binds the page to a driver handle, resolving its locators from
    /// the site config.
    pub fn new(driver: &WebDriver, site: &SiteConfig) -> Result<Self> {
        Ok(Self {
            driver: driver.clone(),
            wait: site.wait_policy(),
            company_menu: site.locator(elements::HOME_COMPANY_MENU)?,
            overview_link: site.locator(elements::HOME_OVERVIEW_LINK)?,
        })
    }

    /// Opens the Company menu and follows its Overview link.
    pub async fn navigate_to_overview(&self) -> Result<()> {
        let menu = self.query(&self.company_menu).visible().await?;
        menu.click().await?;

        let overview = self.query(&self.overview_link).clickable().await?;
        overview.click().await?;

        tracing::debug!("home: navigated to company overview");
        Ok(())
    }

    fn query(&self, locator: &Locator) -> ElementQuery {
        ElementQuery::new(&self.driver, locator.clone(), self.wait)
    }
}

#[async_trait]
impl PageObject for HomePage {
    fn name(&self) -> &'static str {
        "home"
    }

    async fn is_displayed(&self) -> Result<bool> {
        match self.query(&self.company_menu).visible().await {
            Ok(_) => Ok(true),
            Err(Error::WaitTimeout { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }
}
