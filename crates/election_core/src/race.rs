use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RaceKind {
    Regular,
    Special,
}

impl RaceKind {
    /// Special if the canonical URL carries the special-election path marker.
    pub fn classify(canonical_url: &str, special_marker: &str) -> Self {
        if !special_marker.is_empty() && canonical_url.contains(special_marker) {
            RaceKind::Special
        } else {
            RaceKind::Regular
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RaceKind::Regular => "regular",
            RaceKind::Special => "special",
        }
    }
}

impl fmt::Display for RaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
