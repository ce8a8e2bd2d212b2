//! Election engine: HTTP fetching, decoding and parsing around the pure core.
mod decode;
mod fetch;
mod page;
mod session;
mod types;

pub use decode::{decode_body, DecodedBody};
pub use fetch::{
    FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_ACCEPT, DEFAULT_ACCEPT_LANGUAGE,
    DEFAULT_USER_AGENT,
};
pub use page::HtmlPage;
pub use session::ElectionScraper;
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput};
