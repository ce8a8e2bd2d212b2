//! Site constants loaded from a RON file.
//!
//! Every field is optional; anything omitted keeps the built-in Ballotpedia
//! value. Example:
//!
//! ```ron
//! (
//!     base_url: "https://ballotpedia.org/",
//!     race_label: "U.S. Senate",
//!     denylist: ["/index.php?", "/amp", ":amp", "printable", "mobileaction"],
//! )
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use election_core::{
    SiteConfig, DEFAULT_BASE_URL, DEFAULT_CANONICAL_PATTERN, DEFAULT_DENYLIST,
    DEFAULT_OVERVIEW_TEMPLATE, DEFAULT_RACE_LABEL, DEFAULT_SPECIAL_MARKER,
};
use scrape_logging::scrape_info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SiteFile {
    base_url: String,
    overview_template: String,
    race_label: String,
    special_marker: String,
    canonical_pattern: String,
    denylist: Vec<String>,
}

impl Default for SiteFile {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            overview_template: DEFAULT_OVERVIEW_TEMPLATE.to_string(),
            race_label: DEFAULT_RACE_LABEL.to_string(),
            special_marker: DEFAULT_SPECIAL_MARKER.to_string(),
            canonical_pattern: DEFAULT_CANONICAL_PATTERN.to_string(),
            denylist: DEFAULT_DENYLIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Built-in configuration when `path` is `None`.
pub fn load(path: Option<&Path>) -> anyhow::Result<SiteConfig> {
    let Some(path) = path else {
        return Ok(SiteConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading site config {}", path.display()))?;
    let config =
        parse(&text).with_context(|| format!("loading site config {}", path.display()))?;
    scrape_info!("Loaded site config from {:?} (base {})", path, config.base());
    Ok(config)
}

pub fn parse(text: &str) -> anyhow::Result<SiteConfig> {
    let file: SiteFile = ron::from_str(text)?;
    let config = SiteConfig::builder()
        .base_url(file.base_url)
        .overview_template(file.overview_template)
        .race_label(file.race_label)
        .special_marker(file.special_marker)
        .canonical_pattern(file.canonical_pattern)
        .denylist(file.denylist)
        .build()?;
    Ok(config)
}
