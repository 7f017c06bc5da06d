// Page objects for the marketing site
//
// One type per logical screen. Operations name intentions
// ("navigate to overview"), and every selector comes from the
// configured locator registry, never from the workflow code.

mod company;
mod contact;
mod home;

pub use company::CompanyPage;
pub use contact::ContactPage;
pub use home::HomePage;

use async_trait::async_trait;

use crate::error::Result;

/// A logical screen a test may assert on.
#[async_trait]
pub trait PageObject {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Whether the screen's identifying marker(s) are currently
    /// visible. A wait timeout reports `false`; driver failures
    /// propagate.
    async fn is_displayed(&self) -> Result<bool>;
}
