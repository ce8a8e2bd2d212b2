use regex::Regex;
use thiserror::Error;
use url::Url;

use crate::race::RaceKind;

pub const DEFAULT_BASE_URL: &str = "https://ballotpedia.org/";
pub const DEFAULT_OVERVIEW_TEMPLATE: &str = "United_States_Senate_elections,_{year}";
pub const DEFAULT_RACE_LABEL: &str = "U.S. Senate";
pub const DEFAULT_SPECIAL_MARKER: &str = "United_States_Senate_special_election_in_";
pub const DEFAULT_CANONICAL_PATTERN: &str =
    r"/United_States_Senate_(?:special_)?election_in_[^,]+,_\d{4}$";
pub const DEFAULT_DENYLIST: &[&str] = &["/index.php?", "/amp", ":amp", "printable", "mobileaction"];

const YEAR_PLACEHOLDER: &str = "{year}";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBase { url: String, reason: String },
    #[error("invalid canonical path pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("overview template {0:?} has no {{year}} placeholder")]
    MissingYearPlaceholder(String),
}

/// Site-specific constants: where the overview lives, what a state page path
/// looks like, and which renderings of it are not canonical.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    base: Url,
    overview_template: String,
    race_label: String,
    special_marker: String,
    canonical_path: Regex,
    denylist: Vec<String>,
}

impl SiteConfig {
    pub fn builder() -> SiteConfigBuilder {
        SiteConfigBuilder::default()
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn overview_template(&self) -> &str {
        &self.overview_template
    }

    pub fn special_marker(&self) -> &str {
        &self.special_marker
    }

    pub fn canonical_path(&self) -> &Regex {
        &self.canonical_path
    }

    /// Lowercased denylist substrings.
    pub fn denylist(&self) -> &[String] {
        &self.denylist
    }

    pub fn overview_url(&self, year: u32) -> Url {
        let path = self
            .overview_template
            .replace(YEAR_PLACEHOLDER, &year.to_string());
        // The base is a validated http(s) URL, so joining a path cannot fail.
        self.base.join(&path).unwrap_or_else(|_| self.base.clone())
    }

    pub fn race_label(&self, kind: RaceKind) -> String {
        format!("{} ({})", self.race_label, kind.as_str())
    }

    pub(crate) fn is_denied(&self, lowered_url: &str) -> bool {
        self.denylist
            .iter()
            .any(|needle| lowered_url.contains(needle.as_str()))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base: Url::parse(DEFAULT_BASE_URL).expect("default base url"),
            overview_template: DEFAULT_OVERVIEW_TEMPLATE.to_string(),
            race_label: DEFAULT_RACE_LABEL.to_string(),
            special_marker: DEFAULT_SPECIAL_MARKER.to_string(),
            canonical_path: Regex::new(DEFAULT_CANONICAL_PATTERN).expect("default pattern"),
            denylist: DEFAULT_DENYLIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Builder for [`SiteConfig`]; unset fields keep the Ballotpedia defaults.
#[derive(Debug, Clone, Default)]
pub struct SiteConfigBuilder {
    base_url: Option<String>,
    overview_template: Option<String>,
    race_label: Option<String>,
    special_marker: Option<String>,
    canonical_pattern: Option<String>,
    denylist: Option<Vec<String>>,
}

impl SiteConfigBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn overview_template(mut self, template: impl Into<String>) -> Self {
        self.overview_template = Some(template.into());
        self
    }

    pub fn race_label(mut self, label: impl Into<String>) -> Self {
        self.race_label = Some(label.into());
        self
    }

    pub fn special_marker(mut self, marker: impl Into<String>) -> Self {
        self.special_marker = Some(marker.into());
        self
    }

    pub fn canonical_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.canonical_pattern = Some(pattern.into());
        self
    }

    pub fn denylist<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.denylist = Some(entries.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> Result<SiteConfig, ConfigError> {
        let defaults = SiteConfig::default();

        let base = match self.base_url {
            Some(raw) => parse_base(&raw)?,
            None => defaults.base,
        };

        let overview_template = self.overview_template.unwrap_or(defaults.overview_template);
        if !overview_template.contains(YEAR_PLACEHOLDER) {
            return Err(ConfigError::MissingYearPlaceholder(overview_template));
        }

        let canonical_path = match self.canonical_pattern {
            Some(pattern) => Regex::new(&pattern)?,
            None => defaults.canonical_path,
        };

        let denylist = match self.denylist {
            Some(entries) => entries
                .into_iter()
                .map(|entry| entry.to_lowercase())
                .filter(|entry| !entry.is_empty())
                .collect(),
            None => defaults.denylist,
        };

        Ok(SiteConfig {
            base,
            overview_template,
            race_label: self.race_label.unwrap_or(defaults.race_label),
            special_marker: self.special_marker.unwrap_or(defaults.special_marker),
            canonical_path,
            denylist,
        })
    }
}

fn parse_base(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBase {
        url: raw.to_string(),
        reason,
    };
    let mut url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(invalid("not a base url".to_string()));
    }
    // Only the origin matters; relative hrefs are site-absolute paths.
    url.set_path("/");
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
