/// An anchor as found on a page: its `href` and visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLink {
    pub href: String,
    pub text: String,
}

impl RawLink {
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
        }
    }
}

/// The slice of a parsed HTML document the discoverer needs.
pub trait PageDocument {
    /// Every anchor carrying an `href`, in document order.
    fn anchors(&self) -> Vec<RawLink>;

    fn title(&self) -> Option<String>;
}

impl PageDocument for [RawLink] {
    fn anchors(&self) -> Vec<RawLink> {
        self.to_vec()
    }

    fn title(&self) -> Option<String> {
        None
    }
}

impl PageDocument for Vec<RawLink> {
    fn anchors(&self) -> Vec<RawLink> {
        self.clone()
    }

    fn title(&self) -> Option<String> {
        None
    }
}

/// Collapse whitespace runs into single spaces and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
