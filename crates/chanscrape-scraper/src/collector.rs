//! Maps extracted playlist entries to [`VideoRecord`]s.

use chanscrape_core::{ChannelName, ExtractorConfig, VideoRecord};
use serde_json::Value;

use crate::error::CollectError;
use crate::extractor::{EntrySource, YtDlp};

pub struct VideoCollector<E> {
    source: E,
}

impl VideoCollector<YtDlp> {
    #[must_use]
    pub fn yt_dlp(config: &ExtractorConfig) -> Self {
        Self::new(YtDlp::new(config.clone()))
    }
}

impl<E: EntrySource> VideoCollector<E> {
    #[must_use]
    pub fn new(source: E) -> Self {
        Self { source }
    }

    /// Collects one record per non-empty entry, in extractor order, all
    /// attributed to `channel`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::Extraction`] if the extraction call itself
    /// failed and [`CollectError::NoEntries`] if it succeeded without a single
    /// usable entry. Both are logged here; no partial records are returned.
    pub async fn collect(
        &self,
        url: &str,
        channel: &ChannelName,
    ) -> Result<Vec<VideoRecord>, CollectError> {
        let entries = match self.source.extract_entries(url).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!(url, error = %e, "error scraping channel");
                return Err(e.into());
            }
        };

        let records: Vec<VideoRecord> = entries
            .iter()
            .filter_map(|entry| entry_to_record(entry, channel))
            .collect();

        if records.is_empty() {
            tracing::error!(url, entries = entries.len(), "no usable video entries");
            return Err(CollectError::NoEntries {
                url: url.to_string(),
            });
        }

        tracing::info!(url, records = records.len(), "collected video entries");
        Ok(records)
    }
}

/// `None` for placeholders the extractor could not resolve (`null`, `{}`,
/// or anything that is not an object).
pub(crate) fn entry_to_record(entry: &Value, channel: &ChannelName) -> Option<VideoRecord> {
    let fields = entry.as_object().filter(|m| !m.is_empty())?;
    let title = fields
        .get("title")
        .and_then(Value::as_str)
        .map(str::to_string);
    let view_count = fields.get("view_count").and_then(Value::as_u64);
    Some(VideoRecord::new(channel, title, view_count))
}

#[cfg(test)]
#[path = "collector_test.rs"]
mod tests;
