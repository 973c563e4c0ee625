use serde::{Deserialize, Serialize};

/// Display name used when the channel header cannot be read.
pub const UNKNOWN_CHANNEL: &str = "Unknown Channel";

/// Title used for entries the extractor reported without one.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Display name of a channel, resolved once per run.
///
/// A failed lookup is its own variant; it renders as [`UNKNOWN_CHANNEL`] but
/// never compares equal to a channel that is actually titled that way.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChannelName {
    Resolved(String),
    Unknown,
}

impl ChannelName {
    /// Wraps header text scraped from the channel page, trimming surrounding whitespace.
    #[must_use]
    pub fn from_header_text(text: &str) -> Self {
        Self::Resolved(text.trim().to_string())
    }

    /// The fallback name for a failed lookup.
    #[must_use]
    pub fn unknown() -> Self {
        Self::Unknown
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Resolved(name) => name,
            Self::Unknown => UNKNOWN_CHANNEL,
        }
    }
}

impl std::fmt::Display for ChannelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the output CSV. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub channel_name: String,
    pub video_name: String,
    pub views_count: u64,
}

impl VideoRecord {
    /// Builds a record for `channel`, applying the title and view-count defaults.
    #[must_use]
    pub fn new(channel: &ChannelName, title: Option<String>, view_count: Option<u64>) -> Self {
        Self {
            channel_name: channel.as_str().to_string(),
            video_name: title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            views_count: view_count.unwrap_or(0),
        }
    }
}
