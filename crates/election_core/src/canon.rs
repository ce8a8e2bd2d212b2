use std::fmt;

use url::Url;

use crate::config::SiteConfig;

/// Absolute http(s) URL of a state page for one election year, with query and
/// fragment removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalUrl(String);

impl CanonicalUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Maps raw hrefs to canonical state-page URLs. Pure: no I/O, no clock.
#[derive(Debug, Clone, Default)]
pub struct Canonicalizer {
    config: SiteConfig,
}

impl Canonicalizer {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Returns `None` for anything that is not the canonical page for `year`.
    pub fn canonicalize(&self, raw_href: &str, year: u32) -> Option<CanonicalUrl> {
        let raw = raw_href.trim();
        if raw.is_empty() {
            return None;
        }

        let mut url = self.resolve(raw)?;
        if self.config.is_denied(&url.as_str().to_lowercase()) {
            return None;
        }

        url.set_query(None);
        url.set_fragment(None);
        let clean = url.as_str();
        if self.config.is_denied(&clean.to_lowercase()) {
            return None;
        }

        let path = url.path();
        if !self.config.canonical_path().is_match(path) {
            return None;
        }
        if !path.ends_with(&format!(",_{year}")) {
            return None;
        }

        Some(CanonicalUrl(clean.to_string()))
    }

    fn resolve(&self, raw: &str) -> Option<Url> {
        let lower = raw.to_ascii_lowercase();
        let url = if lower.starts_with("http://") || lower.starts_with("https://") {
            Url::parse(raw).ok()?
        } else if raw.starts_with('/') && !raw.starts_with("//") {
            self.config.base().join(raw).ok()?
        } else {
            return None;
        };
        url.host_str()?;
        Some(url)
    }
}
