//! One scrape run: resolve the name, collect videos, write the report.

use std::io::Write;
use std::path::Path;

use chanscrape_core::report::{summary_line, write_report};
use chanscrape_core::WrittenReport;
use chanscrape_scraper::{EntrySource, HeadlessBrowser, NameResolver, VideoCollector};
use chrono::NaiveDate;

pub(crate) const SUCCESS_BANNER: &str = "Scraping completed successfully!";
pub(crate) const FAILURE_BANNER: &str = "Failed to scrape channel data.";

/// Runs the pipeline for `url` and prints progress and the final banner to `out`.
///
/// Returns `Ok(None)` when collection produced nothing; no file is written
/// in that case.
///
/// # Errors
///
/// Returns an error if the report cannot be written or console output fails.
pub(crate) async fn scrape_channel<B, E, W>(
    resolver: &NameResolver<B>,
    collector: &VideoCollector<E>,
    url: &str,
    output_dir: &Path,
    date: NaiveDate,
    out: &mut W,
) -> anyhow::Result<Option<WrittenReport>>
where
    B: HeadlessBrowser,
    E: EntrySource,
    W: Write,
{
    let channel = resolver.resolve(url).await;
    writeln!(out, "\nScraping channel: {channel}")?;

    let Ok(records) = collector.collect(url, &channel).await else {
        writeln!(out, "\n{FAILURE_BANNER}")?;
        return Ok(None);
    };

    let report = write_report(&records, &channel, output_dir, date)?;
    writeln!(out, "Data saved to {}", report.filename)?;
    writeln!(out, "\nChannel Summary:")?;
    writeln!(out, "{}", summary_line(&channel, report.total_views))?;
    writeln!(out, "\n{SUCCESS_BANNER}")?;

    Ok(Some(report))
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
