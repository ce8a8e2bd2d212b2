use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};
use std::time::{Duration, Instant};

use election_core::{PageDocument, RaceKind, SiteConfig};
use election_engine::{
    ElectionScraper, FailureKind, FetchError, FetchMetadata, FetchOutput, FetchSettings, Fetcher,
    ReqwestFetcher,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const OVERVIEW_HTML: &str = r#"<html><head><title>U.S. Senate elections, 2022</title></head>
<body>
  <ul>
    <li><a href="/United_States_Senate_election_in_Ohio,_2022">Ohio</a></li>
    <li><a href="/United_States_Senate_special_election_in_Oklahoma,_2022?action=edit">Oklahoma</a></li>
    <li><a href="/United_States_Senate_election_in_Ohio,_2022/amp">Ohio (AMP)</a></li>
    <li><a href="/United_States_Senate_election_in_Ohio,_2020">Ohio 2020</a></li>
    <li><a href="/Main_Page">Main page</a></li>
  </ul>
</body></html>"#;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(scrape_logging::initialize_for_tests);
}

/// Serves canned bodies and records requested URLs.
#[derive(Default)]
struct StaticFetcher {
    pages: HashMap<String, String>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl StaticFetcher {
    fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }
}

#[async_trait::async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        let Some(html) = self.pages.get(url) else {
            return Err(FetchError {
                kind: FailureKind::HttpStatus(404),
                message: format!("404 Not Found for {url}"),
            });
        };
        Ok(FetchOutput {
            bytes: html.as_bytes().to_vec(),
            metadata: FetchMetadata {
                original_url: url.to_string(),
                final_url: url.to_string(),
                status: 200,
                content_type: Some("text/html; charset=utf-8".to_string()),
                byte_len: html.len() as u64,
            },
        })
    }
}

#[tokio::test]
async fn discovery_fetches_the_overview_for_the_year() {
    init_logging();
    let fetcher = StaticFetcher::default().with_page(
        "https://ballotpedia.org/United_States_Senate_elections,_2022",
        OVERVIEW_HTML,
    );
    let requested = fetcher.requested.clone();
    let scraper = ElectionScraper::new(fetcher, SiteConfig::default(), Duration::ZERO);

    let result = scraper.discover_state_pages(2022).await.expect("discovery ok");

    let entries: Vec<_> = result
        .iter()
        .map(|page| (page.state.as_str(), page.kind, page.url.as_str()))
        .collect();
    assert_eq!(
        entries,
        vec![
            (
                "Ohio",
                RaceKind::Regular,
                "https://ballotpedia.org/United_States_Senate_election_in_Ohio,_2022"
            ),
            (
                "Oklahoma",
                RaceKind::Special,
                "https://ballotpedia.org/United_States_Senate_special_election_in_Oklahoma,_2022"
            ),
        ]
    );
    assert_eq!(
        *requested.lock().unwrap(),
        vec!["https://ballotpedia.org/United_States_Senate_elections,_2022".to_string()]
    );
}

#[tokio::test]
async fn overview_fetch_failure_is_propagated() {
    init_logging();
    let scraper = ElectionScraper::new(
        StaticFetcher::default(),
        SiteConfig::default(),
        Duration::ZERO,
    );

    let err = scraper.discover_state_pages(2030).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn fetch_waits_for_the_delay_after_success() {
    init_logging();
    let url = "https://ballotpedia.org/United_States_Senate_election_in_Ohio,_2022";
    let fetcher = StaticFetcher::default().with_page(url, "<title>Ohio</title>");
    let delay = Duration::from_millis(60);
    let scraper = ElectionScraper::new(fetcher, SiteConfig::default(), delay);

    let started = Instant::now();
    let page = scraper.fetch_state_page(url).await.expect("fetch ok");

    assert!(started.elapsed() >= delay);
    assert_eq!(page.title().as_deref(), Some("Ohio"));
}

#[tokio::test]
async fn end_to_end_against_http_server() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/United_States_Senate_elections,_2022"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(OVERVIEW_HTML, "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/United_States_Senate_election_in_Ohio,_2022"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            "<html><head><title>United States Senate election in Ohio, 2022</title></head></html>",
            "text/html",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let config = SiteConfig::builder()
        .base_url(server.uri())
        .build()
        .expect("config");
    let fetcher = ReqwestFetcher::new(FetchSettings::default()).expect("client");
    let scraper = ElectionScraper::new(fetcher, config, Duration::from_millis(1));

    let result = scraper.discover_state_pages(2022).await.expect("discovery ok");
    assert_eq!(result.len(), 2);
    let first = result.first().expect("one page");
    assert_eq!(
        first.url.as_str(),
        format!(
            "{}/United_States_Senate_election_in_Ohio,_2022",
            server.uri()
        )
    );
    assert_eq!(first.race_label, "U.S. Senate (regular)");

    let page = scraper
        .fetch_state_page(first.url.as_str())
        .await
        .expect("state page");
    assert_eq!(
        page.title().as_deref(),
        Some("United States Senate election in Ohio, 2022")
    );
}
