//! Channel display-name lookup through a headless browser.

use std::time::Duration;

use chanscrape_core::{BrowserConfig, ChannelName};

use crate::browser::{ChromeBrowser, HeadlessBrowser, PageSession};
use crate::error::ScraperError;

/// Reads the channel title out of the rendered page header.
pub struct NameResolver<B> {
    browser: B,
    selector: String,
    timeout: Duration,
}

impl NameResolver<ChromeBrowser> {
    /// Resolver backed by a real Chrome session built from `config`.
    #[must_use]
    pub fn chrome(config: &BrowserConfig) -> Self {
        Self::new(ChromeBrowser::new(config.clone()), config)
    }
}

impl<B: HeadlessBrowser> NameResolver<B> {
    #[must_use]
    pub fn new(browser: B, config: &BrowserConfig) -> Self {
        Self {
            browser,
            selector: config.header_selector.clone(),
            timeout: Duration::from_secs(config.element_timeout_secs),
        }
    }

    /// Returns the channel's display name, or [`ChannelName::unknown`] if any
    /// step of the lookup fails. Never returns an error.
    pub async fn resolve(&self, url: &str) -> ChannelName {
        match self.try_resolve(url).await {
            Ok(name) => name,
            Err(e) => {
                tracing::error!(url, error = %e, "error getting channel name");
                ChannelName::unknown()
            }
        }
    }

    /// One navigation attempt; the session is shut down on every path.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError`] if the browser cannot be launched, navigation
    /// fails, or the header element does not appear within the timeout.
    /// Errors from shutting the session down are logged and dropped.
    pub async fn try_resolve(&self, url: &str) -> Result<ChannelName, ScraperError> {
        let session = self.browser.launch().await?;
        let header = read_header(&session, url, &self.selector, self.timeout).await;

        if let Err(e) = session.shutdown().await {
            tracing::debug!(error = %e, "browser teardown failed");
        }

        header.map(|text| ChannelName::from_header_text(&text))
    }
}

async fn read_header<S: PageSession>(
    session: &S,
    url: &str,
    selector: &str,
    timeout: Duration,
) -> Result<String, ScraperError> {
    session.goto(url).await?;
    session.wait_for_text(selector, timeout).await
}

#[cfg(test)]
#[path = "name_test.rs"]
mod tests;
