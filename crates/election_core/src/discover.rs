use std::collections::HashSet;

use regex::Regex;
use scrape_logging::scrape_debug;

use crate::canon::{CanonicalUrl, Canonicalizer};
use crate::config::SiteConfig;
use crate::document::{normalize_whitespace, PageDocument, RawLink};
use crate::race::RaceKind;

pub const UNKNOWN_STATE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePageRef {
    pub state: String,
    pub kind: RaceKind,
    pub race_label: String,
    pub url: CanonicalUrl,
}

/// Unique state pages in discovery order, keyed on state and race.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiscoveryResult {
    pages: Vec<StatePageRef>,
}

impl DiscoveryResult {
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn first(&self) -> Option<&StatePageRef> {
        self.pages.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StatePageRef> {
        self.pages.iter()
    }

    pub fn as_slice(&self) -> &[StatePageRef] {
        &self.pages
    }

    pub fn into_vec(self) -> Vec<StatePageRef> {
        self.pages
    }
}

impl IntoIterator for DiscoveryResult {
    type Item = StatePageRef;
    type IntoIter = std::vec::IntoIter<StatePageRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiscoveryResult {
    type Item = &'a StatePageRef;
    type IntoIter = std::slice::Iter<'a, StatePageRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Discoverer {
    canonicalizer: Canonicalizer,
}

impl Discoverer {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            canonicalizer: Canonicalizer::new(config),
        }
    }

    pub fn canonicalizer(&self) -> &Canonicalizer {
        &self.canonicalizer
    }

    pub fn config(&self) -> &SiteConfig {
        self.canonicalizer.config()
    }

    pub fn discover<D>(&self, document: &D, year: u32) -> DiscoveryResult
    where
        D: PageDocument + ?Sized,
    {
        self.discover_links(document.anchors(), year)
    }

    /// Canonicalize, classify and dedupe `links`; the first link wins a key.
    pub fn discover_links<I>(&self, links: I, year: u32) -> DiscoveryResult
    where
        I: IntoIterator<Item = RawLink>,
    {
        let config = self.config();
        let state_pattern = state_segment_pattern(year);

        let mut scanned = 0usize;
        let mut found = Vec::new();
        for link in links {
            scanned += 1;
            let Some(url) = self.canonicalizer.canonicalize(&link.href, year) else {
                continue;
            };
            let state = derive_state(state_pattern.as_ref(), &url, &link.text);
            let kind = RaceKind::classify(url.as_str(), config.special_marker());
            found.push(StatePageRef {
                state,
                kind,
                race_label: config.race_label(kind),
                url,
            });
        }

        let accepted = found.len();
        let pages = dedupe_first_wins(found);
        scrape_debug!(
            "discover year={} anchors={} canonical={} unique={}",
            year,
            scanned,
            accepted,
            pages.len()
        );
        DiscoveryResult { pages }
    }
}

fn state_segment_pattern(year: u32) -> Option<Regex> {
    Regex::new(&format!(r"_in_([^,]+),_{}", regex::escape(&year.to_string()))).ok()
}

/// URL segment first, then anchor text, then [`UNKNOWN_STATE`].
fn derive_state(pattern: Option<&Regex>, url: &CanonicalUrl, anchor_text: &str) -> String {
    let from_url = pattern
        .and_then(|re| re.captures(url.as_str()))
        .and_then(|caps| caps.get(1))
        .map(|segment| segment.as_str().replace('_', " "))
        .filter(|state| !state.trim().is_empty());
    if let Some(state) = from_url {
        return state;
    }

    let text = normalize_whitespace(anchor_text);
    if text.is_empty() {
        UNKNOWN_STATE.to_string()
    } else {
        text
    }
}

fn dedupe_first_wins(found: Vec<StatePageRef>) -> Vec<StatePageRef> {
    let mut seen = HashSet::new();
    found
        .into_iter()
        .filter(|page| seen.insert((page.state.clone(), page.kind)))
        .collect()
}
