//! Flat playlist extraction through the `yt-dlp` CLI.
//!
//! Invokes `yt-dlp --dump-single-json --flat-playlist ... -- <url>` as a
//! subprocess and reads the `entries` array of the JSON document it prints.
//! Nothing is downloaded.

use std::ffi::OsString;
use std::future::Future;
use std::process::Stdio;

use chanscrape_core::ExtractorConfig;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ScraperError;

/// Source of raw playlist entries for a channel URL.
///
/// Entries are returned exactly as reported, `null` placeholders included,
/// in enumeration order.
pub trait EntrySource {
    fn extract_entries(&self, url: &str) -> impl Future<Output = Result<Vec<Value>, ScraperError>>;
}

#[derive(Deserialize)]
struct PlaylistDocument {
    #[serde(default)]
    entries: Option<Vec<Value>>,
}

#[derive(Debug, Clone)]
pub struct YtDlp {
    config: ExtractorConfig,
}

impl YtDlp {
    #[must_use]
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Full argument list for one extraction of `url`.
    #[must_use]
    pub fn args(&self, url: &str) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["--dump-single-json".into()];
        if self.config.flat {
            args.push("--flat-playlist".into());
        }
        if self.config.force_generic {
            args.push("--force-generic-extractor".into());
        }
        if self.config.ignore_errors {
            args.push("--ignore-errors".into());
        }
        if self.config.quiet {
            args.push("--quiet".into());
            args.push("--no-warnings".into());
        }
        args.push("--".into());
        args.push(url.into());
        args
    }
}

impl EntrySource for YtDlp {
    /// # Errors
    ///
    /// Returns [`ScraperError::Spawn`] if `yt-dlp` cannot be started,
    /// [`ScraperError::ExtractorFailed`] if it printed nothing, and
    /// [`ScraperError::Deserialize`] / [`ScraperError::MissingEntries`] if the
    /// output is not a playlist document. A non-zero exit with a usable
    /// document is only logged, since skipped entries make `yt-dlp` exit 1.
    async fn extract_entries(&self, url: &str) -> Result<Vec<Value>, ScraperError> {
        let output = tokio::process::Command::new(&self.config.yt_dlp_path)
            .args(self.args(url))
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| ScraperError::Spawn {
                program: self.config.yt_dlp_path.display().to_string(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if output.stdout.iter().all(u8::is_ascii_whitespace) {
            return Err(ScraperError::ExtractorFailed {
                status: output.status.to_string(),
                stderr,
            });
        }

        if !output.status.success() {
            tracing::warn!(
                url,
                status = %output.status,
                stderr = stderr.as_str(),
                "yt-dlp returned non-zero exit"
            );
        }

        parse_playlist(&output.stdout, url)
    }
}

/// Pulls the `entries` array out of a `--dump-single-json` document.
pub(crate) fn parse_playlist(stdout: &[u8], url: &str) -> Result<Vec<Value>, ScraperError> {
    let document: PlaylistDocument =
        serde_json::from_slice(stdout).map_err(|source| ScraperError::Deserialize {
            context: format!("yt-dlp output for {url}"),
            source,
        })?;
    document.entries.ok_or_else(|| ScraperError::MissingEntries {
        url: url.to_string(),
    })
}
