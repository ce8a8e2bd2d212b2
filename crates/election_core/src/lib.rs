//! Election core: pure link discovery and URL canonicalization for per-state
//! election pages.
mod canon;
mod config;
mod discover;
mod document;
mod race;

pub use canon::{CanonicalUrl, Canonicalizer};
pub use config::{
    ConfigError, SiteConfig, SiteConfigBuilder, DEFAULT_BASE_URL, DEFAULT_CANONICAL_PATTERN,
    DEFAULT_DENYLIST, DEFAULT_OVERVIEW_TEMPLATE, DEFAULT_RACE_LABEL, DEFAULT_SPECIAL_MARKER,
};
pub use discover::{Discoverer, DiscoveryResult, StatePageRef, UNKNOWN_STATE};
pub use document::{normalize_whitespace, PageDocument, RawLink};
pub use race::RaceKind;
