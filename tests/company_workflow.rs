// Live browser suite: the company overview workflow
//
// Drives a real browser against the live marketing site. Needs a
// running chromedriver (default http://localhost:9515, override with
// WEBDRIVER_URL) and network access, so the suite is ignored by
// default. Run with: cargo test --test company_workflow -- --ignored

use anyhow::Result;

use agdata_e2e::pages::{CompanyPage, ContactPage, HomePage, PageObject};
use agdata_e2e::{
    Error, HarnessConfig, SessionOptions, run_company_overview, with_session,
};

fn site_config() -> Result<agdata_e2e::SiteConfig> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    Ok(HarnessConfig::load()?.site)
}

#[tokio::test]
#[ignore] // Requires a running chromedriver and network access to the live site
async fn test_company_overview_workflow() -> Result<()> {
    let site = site_config()?;

    let report = run_company_overview(&site).await?;

    assert!(
        !report.values_headings.is_empty(),
        "The Our Values section should have headings"
    );
    for heading in &report.values_headings {
        println!("✓ values heading: {heading}");
    }
    Ok(())
}

#[tokio::test]
#[ignore] // Requires a running chromedriver and network access to the live site
async fn test_company_overview_step_by_step() -> Result<()> {
    let site = site_config()?;
    let options = SessionOptions::from_site(&site);

    let headings = with_session(&options, |driver| async move {
        driver.goto(&site.start_url).await?;

        // Start with navigating to the company overview
        let home = HomePage::new(&driver, &site)?;
        home.navigate_to_overview().await?;
        println!("✓ navigated home -> company overview");

        // Fetch headings from the Our Values section
        let company = CompanyPage::new(&driver, &site)?;
        let headings = company.our_values_headings().await?;

        // Click the call-to-action
        company.click_lets_get_started().await?;
        println!("✓ clicked the call-to-action");

        // Both contact markers must be visible at once
        let contact = ContactPage::new(&driver, &site)?;
        if !contact.is_displayed().await? {
            return Err(Error::PageState(
                "contact page markers are not both visible".to_string(),
            ));
        }
        println!("✓ contact page displayed (heading + form)");

        Ok(headings)
    })
    .await?;

    assert!(!headings.is_empty(), "Expected at least one values heading");
    Ok(())
}

#[tokio::test]
#[ignore] // Requires a running chromedriver
async fn test_session_is_released_when_the_scenario_fails() -> Result<()> {
    let site = site_config()?;
    let options = SessionOptions::from_site(&site);

    // The scenario fails on purpose; the session must still be quit
    // and the scenario's error must be the one reported.
    let outcome: agdata_e2e::Result<()> = with_session(&options, |_driver| async {
        Err(Error::PageState("deliberate failure".to_string()))
    })
    .await;

    match outcome {
        Err(Error::PageState(message)) => assert_eq!(message, "deliberate failure"),
        other => panic!("Expected the scenario's own error, got {other:?}"),
    }
    println!("✓ session released on the failure path");
    Ok(())
}
