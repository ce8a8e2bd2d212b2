use std::time::Duration;

use election_core::{DiscoveryResult, Discoverer, PageDocument, SiteConfig};
use scrape_logging::scrape_info;

use crate::decode::decode_body;
use crate::fetch::Fetcher;
use crate::page::HtmlPage;
use crate::FetchError;

/// Sequential page retrieval with a politeness delay after every successful
/// fetch, plus overview discovery on top of it.
pub struct ElectionScraper<F> {
    fetcher: F,
    discoverer: Discoverer,
    delay: Duration,
}

impl<F: Fetcher> ElectionScraper<F> {
    pub fn new(fetcher: F, config: SiteConfig, delay: Duration) -> Self {
        Self {
            fetcher,
            discoverer: Discoverer::new(config),
            delay,
        }
    }

    pub fn discoverer(&self) -> &Discoverer {
        &self.discoverer
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn fetch_page(&self, url: &str) -> Result<HtmlPage, FetchError> {
        let output = self.fetcher.fetch(url).await?;
        let decoded = decode_body(&output.bytes, output.metadata.content_type.as_deref());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(HtmlPage::parse(&decoded.text))
    }

    pub async fn discover_state_pages(&self, year: u32) -> Result<DiscoveryResult, FetchError> {
        let overview_url = self.discoverer.config().overview_url(year);
        let overview = self.fetch_page(overview_url.as_str()).await?;
        let result = self.discoverer.discover(&overview, year);
        scrape_info!(
            "[overview] discovered {} state pages for {} ({})",
            result.len(),
            year,
            overview_url
        );
        Ok(result)
    }

    pub async fn fetch_state_page(&self, url: &str) -> Result<HtmlPage, FetchError> {
        let page = self.fetch_page(url).await?;
        scrape_info!("[state] {}", url);
        if let Some(title) = page.title() {
            scrape_info!("        <title> {}", title);
        }
        Ok(page)
    }
}
