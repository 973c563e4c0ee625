//! CSV report for one scraped channel.
//!
//! The report is never kept around: it is written once, summarised on the
//! console, and dropped.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::channel::{ChannelName, VideoRecord};
use crate::error::ReportError;

const CSV_HEADER: [&str; 3] = ["channel_name", "video_name", "views_count"];

/// What [`write_report`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReport {
    pub filename: String,
    pub path: PathBuf,
    pub rows: usize,
    pub total_views: u64,
}

/// Sum of `views_count` across all records.
#[must_use]
pub fn total_views(records: &[VideoRecord]) -> u64 {
    records
        .iter()
        .fold(0u64, |acc, r| acc.saturating_add(r.views_count))
}

/// Keeps only the alphanumeric characters of the channel name, in order.
#[must_use]
pub fn safe_stem(channel: &ChannelName) -> String {
    channel
        .as_str()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// `<stem>_videos_<YYYYMMDD>.csv`
#[must_use]
pub fn report_filename(channel: &ChannelName, date: NaiveDate) -> String {
    format!("{}_videos_{}.csv", safe_stem(channel), date.format("%Y%m%d"))
}

/// Renders `n` with a comma between every group of three digits.
#[must_use]
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `<channel> = <total> views`
#[must_use]
pub fn summary_line(channel: &ChannelName, total_views: u64) -> String {
    format!("{channel} = {} views", format_thousands(total_views))
}

/// Writes `records` as CSV into `dir`, replacing any file of the same name.
///
/// Rows keep the input order. The header is always written, even for an
/// empty slice.
///
/// # Errors
///
/// Returns [`ReportError`] if the file cannot be created or a row cannot be
/// serialized.
pub fn write_report(
    records: &[VideoRecord],
    channel: &ChannelName,
    dir: &Path,
    date: NaiveDate,
) -> Result<WrittenReport, ReportError> {
    let filename = report_filename(channel, date);
    let path = dir.join(&filename);
    let shown = path.display().to_string();

    let csv_err = |source: csv::Error| ReportError::Csv {
        path: shown.clone(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .map_err(csv_err)?;
    writer.write_record(CSV_HEADER).map_err(csv_err)?;
    for record in records {
        writer.serialize(record).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| ReportError::Io {
        path: shown.clone(),
        source,
    })?;

    tracing::debug!(path = %shown, rows = records.len(), "report written");

    Ok(WrittenReport {
        filename,
        path,
        rows: records.len(),
        total_views: total_views(records),
    })
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
