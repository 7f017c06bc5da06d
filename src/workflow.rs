// Workflow orchestration - the company overview user journey
//
// One scenario, strictly sequential: home -> company overview ->
// contact. The browser session is scoped to the run and released on
// every exit path.

use crate::browser::session::{SessionOptions, with_session};
use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::pages::{CompanyPage, ContactPage, HomePage, PageObject};

/// What the company-overview journey observed.
#[derive(Debug, Clone)]
pub struct WorkflowReport {
    /// "Our Values" section headings, in document order.
    pub values_headings: Vec<String>,
}

/// Drives the journey: open the start URL, navigate to the company
/// overview, read the values headings, follow the call-to-action, and
/// require the contact page's two markers.
///
/// Intermediate states are asserted here; an empty heading list or a
/// missing contact marker fails the run with a typed error. The
/// session is quit even when an assertion fails.
pub async fn run_company_overview(site: &SiteConfig) -> Result<WorkflowReport> {
    let options = SessionOptions::from_site(site);

    with_session(&options, |driver| async move {
        driver.goto(&site.start_url).await?;
        tracing::info!("opened {}", site.start_url);

        let home = HomePage::new(&driver, site)?;
        home.navigate_to_overview().await?;

        let company = CompanyPage::new(&driver, site)?;
        let values_headings = company.our_values_headings().await?;
        if values_headings.is_empty() {
            return Err(Error::PageState(
                "the Our Values section has no headings".to_string(),
            ));
        }
        company.click_lets_get_started().await?;

        let contact = ContactPage::new(&driver, site)?;
        if !contact.is_displayed().await? {
            return Err(Error::PageState(format!(
                "the {} page's markers are not both visible",
                contact.name()
            )));
        }

        tracing::info!("company overview workflow complete");
        Ok(WorkflowReport { values_headings })
    })
    .await
}
