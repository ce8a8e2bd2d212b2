use std::io::{self, Write};

use anyhow::Context;
use election_core::{DiscoveryResult, SiteConfig};
use election_engine::{ElectionScraper, FetchSettings, ReqwestFetcher};

use crate::cli::Cli;

/// Entries printed after discovery.
pub const PREVIEW_LIMIT: usize = 5;

/// Either fetch `--state-url` alone, or discover the year's state pages,
/// print the first few, and fetch the first one.
pub async fn run<W: Write>(cli: &Cli, config: SiteConfig, out: &mut W) -> anyhow::Result<()> {
    let fetcher =
        ReqwestFetcher::new(FetchSettings::default()).context("building HTTP client")?;
    let scraper = ElectionScraper::new(fetcher, config, cli.delay);

    if let Some(url) = cli.state_url.as_deref() {
        scraper
            .fetch_state_page(url)
            .await
            .with_context(|| format!("fetching state page {url}"))?;
        return Ok(());
    }

    let pages = scraper
        .discover_state_pages(cli.year)
        .await
        .with_context(|| format!("discovering state pages for {}", cli.year))?;
    write_preview(out, &pages)?;

    if let Some(first) = pages.first() {
        scraper
            .fetch_state_page(first.url.as_str())
            .await
            .with_context(|| format!("fetching state page {}", first.url))?;
    }
    Ok(())
}

pub fn write_preview<W: Write>(out: &mut W, pages: &DiscoveryResult) -> io::Result<()> {
    for page in pages.iter().take(PREVIEW_LIMIT) {
        writeln!(out, "- {}: {} → {}", page.state, page.race_label, page.url)?;
    }
    out.flush()
}
