// Browser session lifecycle
//
// A session is a scoped external resource: with_session() opens it,
// runs the scenario, and quits the browser on every exit path,
// including scenario failure.

use std::future::Future;

use thirtyfour::prelude::*;

use crate::config::SiteConfig;
use crate::error::Result;
use crate::wait::WaitPolicy;

/// Options for opening a browser session.
///
/// All fields have defaults matching the suite's fixed environment:
/// a local chromedriver and a maximized window.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    /// WebDriver endpoint to connect to
    pub webdriver_url: String,

    /// Arguments passed to the browser instance
    pub args: Vec<String>,

    /// Run the browser without a visible window
    pub headless: bool,

    /// Wait policy handed to page objects created for this session
    pub wait: WaitPolicy,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            webdriver_url: crate::config::DEFAULT_WEBDRIVER_URL.to_string(),
            args: vec!["--start-maximized".to_string()],
            headless: false,
            wait: WaitPolicy::default(),
        }
    }
}

impl SessionOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds options from the site config (driver endpoint, headless
    /// flag, wait tuning).
    pub fn from_site(site: &SiteConfig) -> Self {
        Self {
            webdriver_url: site.webdriver_url.clone(),
            headless: site.headless,
            wait: site.wait_policy(),
            ..Self::default()
        }
    }

    /// Sets the WebDriver endpoint.
    pub fn webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.webdriver_url = url.into();
        self
    }

    /// Appends a browser argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Runs the browser headless.
    pub fn headless(mut self, enabled: bool) -> Self {
        self.headless = enabled;
        self
    }

    /// Sets the wait policy for this session.
    pub fn wait(mut self, policy: WaitPolicy) -> Self {
        self.wait = policy;
        self
    }
}

/// Opens a new browser session against the configured endpoint.
pub async fn connect(options: &SessionOptions) -> Result<WebDriver> {
    let mut caps = DesiredCapabilities::chrome();
    for arg in &options.args {
        caps.add_arg(arg)?;
    }
    if options.headless {
        caps.set_headless()?;
    }

    tracing::debug!("opening browser session via {}", options.webdriver_url);
    let driver = WebDriver::new(&options.webdriver_url, caps).await?;
    Ok(driver)
}

/// Runs `scenario` inside a browser session that is released on every
/// exit path.
///
/// The scenario receives a cloneable driver handle. After it resolves,
/// the session is quit; a scenario failure takes precedence over a
/// failure to quit, which is only logged.
pub async fn with_session<F, Fut, T>(options: &SessionOptions, scenario: F) -> Result<T>
where
    F: FnOnce(WebDriver) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let driver = connect(options).await?;
    let handle = driver.clone();

    let outcome = scenario(driver).await;

    let quit = handle.quit().await;
    tracing::debug!("browser session released");

    match outcome {
        Ok(value) => {
            quit?;
            Ok(value)
        }
        Err(err) => {
            if let Err(quit_err) = quit {
                tracing::warn!("failed to quit browser session: {}", quit_err);
            }
            Err(err)
        }
    }
}
