use election_core::{normalize_whitespace, PageDocument, RawLink};
use scraper::{Html, Selector};

/// A parsed HTML page exposing only anchors and title.
pub struct HtmlPage {
    document: Html,
}

impl HtmlPage {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    pub fn html(&self) -> &Html {
        &self.document
    }
}

impl PageDocument for HtmlPage {
    fn anchors(&self) -> Vec<RawLink> {
        let Ok(selector) = Selector::parse("a[href]") else {
            return Vec::new();
        };
        self.document
            .select(&selector)
            .filter_map(|anchor| {
                let href = anchor.value().attr("href")?;
                Some(RawLink::new(href, anchor.text().collect::<String>()))
            })
            .collect()
    }

    fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.document
            .select(&selector)
            .next()
            .map(|title| normalize_whitespace(&title.text().collect::<String>()))
            .filter(|title| !title.is_empty())
    }
}

impl std::fmt::Debug for HtmlPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlPage")
            .field("title", &self.title())
            .finish_non_exhaustive()
    }
}
