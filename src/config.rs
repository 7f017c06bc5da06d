// Harness configuration
//
// Defaults reproduce the fixed literals the suites were written
// against; a TOML file overrides them field-wise, and element entries
// merge over the seeded locator registry so a config only needs to name
// the locators that drifted.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::wait::WaitPolicy;

/// REST API under test
pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com/";

/// Marketing site under test
pub const DEFAULT_SITE_URL: &str = "https://www.agdata.com";

/// Local chromedriver endpoint
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

/// Environment variable overriding the WebDriver endpoint
pub const WEBDRIVER_URL_ENV: &str = "WEBDRIVER_URL";

/// Environment variable forcing headless browser sessions (`1`/`true`)
pub const HEADLESS_ENV: &str = "AGDATA_E2E_HEADLESS";

/// Top-level harness configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub api: ApiConfig,
    pub site: SiteConfig,
}

/// Settings for the API assertion suite.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

/// Settings for the browser suite: entry URL, driver endpoint, wait
/// policy, and the logical-name locator registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub start_url: String,
    pub webdriver_url: String,
    pub headless: bool,
    pub wait: WaitSettings,
    pub elements: HashMap<String, Locator>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            start_url: DEFAULT_SITE_URL.to_string(),
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            headless: false,
            wait: WaitSettings::default(),
            elements: default_elements(),
        }
    }
}

impl SiteConfig {
    /// Looks up a locator by logical name.
    pub fn locator(&self, name: &str) -> Result<Locator> {
        self.elements
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownElement(name.to_string()))
    }

    /// The harness-level wait policy.
    pub fn wait_policy(&self) -> WaitPolicy {
        self.wait.policy()
    }
}

/// Wait tuning in config-friendly units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitSettings {
    pub timeout_secs: u64,
    pub poll_interval_ms: u64,
}

impl Default for WaitSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            poll_interval_ms: 500,
        }
    }
}

impl WaitSettings {
    pub fn policy(&self) -> WaitPolicy {
        WaitPolicy::new(Duration::from_secs(self.timeout_secs))
            .with_poll_interval(Duration::from_millis(self.poll_interval_ms))
    }
}

/// Logical element names used by the page objects.
pub mod elements {
    pub const HOME_COMPANY_MENU: &str = "home.company-menu";
    pub const HOME_OVERVIEW_LINK: &str = "home.overview-link";
    pub const COMPANY_VALUES_HEADING: &str = "company.values-heading";
    pub const COMPANY_GET_STARTED: &str = "company.get-started";
    pub const CONTACT_HEADING: &str = "contact.heading";
    pub const CONTACT_FORM: &str = "contact.form";
}

fn default_elements() -> HashMap<String, Locator> {
    HashMap::from([
        (
            elements::HOME_COMPANY_MENU.to_string(),
            Locator::xpath("//nav//a[text()='Company']"),
        ),
        (
            elements::HOME_OVERVIEW_LINK.to_string(),
            Locator::xpath("//nav//a[text()='Overview']"),
        ),
        (
            elements::COMPANY_VALUES_HEADING.to_string(),
            Locator::css("h3"),
        ),
        (
            elements::COMPANY_GET_STARTED.to_string(),
            Locator::xpath("//a[text()=\"Let's Get Started\"]"),
        ),
        (
            elements::CONTACT_HEADING.to_string(),
            Locator::xpath("//h1[text()='GET IN TOUCH WITH US']"),
        ),
        (elements::CONTACT_FORM.to_string(), Locator::id("gform_1")),
    ])
}

impl HarnessConfig {
    /// Parses a config from TOML, merging the seeded locator registry
    /// under any entries the file provides.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let mut config: HarnessConfig = toml::from_str(raw)?;
        for (name, locator) in default_elements() {
            config.site.elements.entry(name).or_insert(locator);
        }
        Ok(config)
    }

    /// Reads a config file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }

    /// Builds the effective config: defaults, then an optional file
    /// named by `AGDATA_E2E_CONFIG`, then environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var("AGDATA_E2E_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Applies `WEBDRIVER_URL` and `AGDATA_E2E_HEADLESS` overrides.
    pub fn apply_env(&mut self) {
        if let Ok(endpoint) = std::env::var(WEBDRIVER_URL_ENV) {
            if !endpoint.is_empty() {
                self.site.webdriver_url = endpoint;
            }
        }
        if let Ok(flag) = std::env::var(HEADLESS_ENV) {
            self.site.headless = matches!(flag.as_str(), "1" | "true" | "yes");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::SelectorStrategy;
    use std::io::Write;

    #[test]
    fn test_defaults_reproduce_suite_literals() {
        let config = HarnessConfig::default();
        assert_eq!(config.api.base_url, "https://jsonplaceholder.typicode.com/");
        assert_eq!(config.site.start_url, "https://www.agdata.com");
        assert_eq!(config.site.webdriver_url, "http://localhost:9515");
        assert!(!config.site.headless);
        assert_eq!(config.site.wait.timeout_secs, 10);

        let form = config
            .site
            .locator(elements::CONTACT_FORM)
            .expect("Contact form locator should be seeded");
        assert_eq!(form.strategy, SelectorStrategy::Id);
        assert_eq!(form.value, "gform_1");
    }

    #[test]
    fn test_unknown_element_is_a_typed_error() {
        let config = SiteConfig::default();
        let err = config
            .locator("contact.submit-button")
            .expect_err("Unseeded name should fail");
        assert!(matches!(err, Error::UnknownElement(name) if name == "contact.submit-button"));
    }

    #[test]
    fn test_toml_overrides_merge_over_seeded_elements() {
        let config = HarnessConfig::from_toml_str(
            r#"
            [site]
            headless = true

            [site.wait]
            timeout_secs = 20

            [site.elements."company.values-heading"]
            strategy = "css"
            value = "section.values h3"
            "#,
        )
        .expect("Failed to parse config");

        // Overridden entries win.
        assert!(config.site.headless);
        assert_eq!(config.site.wait.timeout_secs, 20);
        let heading = config
            .site
            .locator(elements::COMPANY_VALUES_HEADING)
            .unwrap();
        assert_eq!(heading.value, "section.values h3");

        // Untouched fields and entries keep their defaults.
        assert_eq!(config.site.start_url, DEFAULT_SITE_URL);
        assert_eq!(config.site.wait.poll_interval_ms, 500);
        let menu = config.site.locator(elements::HOME_COMPANY_MENU).unwrap();
        assert_eq!(menu.value, "//nav//a[text()='Company']");
    }

    #[test]
    fn test_from_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        writeln!(
            file,
            r#"
            [api]
            base_url = "http://localhost:8080/"

            [site]
            webdriver_url = "http://localhost:4444"
            "#
        )
        .expect("Failed to write temp config");

        let config = HarnessConfig::from_file(file.path()).expect("Failed to read config file");
        assert_eq!(config.api.base_url, "http://localhost:8080/");
        assert_eq!(config.site.webdriver_url, "http://localhost:4444");
    }

    #[test]
    fn test_wait_settings_convert_to_policy() {
        let settings = WaitSettings {
            timeout_secs: 3,
            poll_interval_ms: 50,
        };
        let policy = settings.policy();
        assert_eq!(policy.timeout, Duration::from_secs(3));
        assert_eq!(policy.poll_interval, Duration::from_millis(50));
    }
}
