//! Integration tests for `VideoCollector` over the real `YtDlp` subprocess path.
//!
//! Each test writes a small shell script that stands in for `yt-dlp`: it
//! records its arguments next to itself and prints a canned JSON document,
//! so no network traffic is made.
#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use chanscrape_core::{ChannelName, ExtractorConfig};
use chanscrape_scraper::{CollectError, ScraperError, VideoCollector};
use tempfile::TempDir;

/// Serialises script creation and execution so no test forks while another
/// still holds a freshly written script open for writing.
static SCRIPT_LOCK: tokio::sync::Mutex<()> = tokio::sync::Mutex::const_new(());

const URL: &str = "https://www.youtube.com/@stub/videos";

fn write_stub(dir: &Path, stdout: &str, exit_code: i32) -> PathBuf {
    let path = dir.join("yt-dlp");
    let script = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$@\" > \"$(dirname \"$0\")/args.txt\"\ncat <<'JSON'\n{stdout}\nJSON\nexit {exit_code}\n"
    );
    std::fs::write(&path, script).expect("write stub script");
    let mut perms = std::fs::metadata(&path).expect("stat stub").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("chmod stub");
    path
}

fn collector_for(path: PathBuf) -> VideoCollector<chanscrape_scraper::YtDlp> {
    VideoCollector::yt_dlp(&ExtractorConfig {
        yt_dlp_path: path,
        ..ExtractorConfig::default()
    })
}

fn recorded_args(dir: &TempDir) -> Vec<String> {
    std::fs::read_to_string(dir.path().join("args.txt"))
        .expect("stub recorded its arguments")
        .lines()
        .map(str::to_string)
        .collect()
}

fn channel() -> ChannelName {
    ChannelName::from_header_text("Stub Channel")
}

// ---------------------------------------------------------------------------
// Happy path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn collects_records_from_flat_playlist_json() {
    let _guard = SCRIPT_LOCK.lock().await;
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(
        dir.path(),
        r#"{"_type": "playlist", "entries": [
            {"title": "One", "view_count": 1000},
            null,
            {"title": "Two"},
            {"view_count": 7}
        ]}"#,
        0,
    );

    let records = collector_for(stub).collect(URL, &channel()).await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].video_name, "One");
    assert_eq!(records[0].views_count, 1000);
    assert_eq!(records[1].video_name, "Two");
    assert_eq!(records[1].views_count, 0);
    assert_eq!(records[2].video_name, "Unknown Title");
    assert_eq!(records[2].views_count, 7);
    assert!(records.iter().all(|r| r.channel_name == "Stub Channel"));
}

#[tokio::test]
async fn passes_non_downloading_flat_options_and_url() {
    let _guard = SCRIPT_LOCK.lock().await;
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), r#"{"entries": [{"title": "x"}]}"#, 0);

    collector_for(stub).collect(URL, &channel()).await.unwrap();

    let args = recorded_args(&dir);
    for flag in [
        "--dump-single-json",
        "--flat-playlist",
        "--force-generic-extractor",
        "--ignore-errors",
    ] {
        assert!(args.iter().any(|a| a == flag), "missing {flag} in {args:?}");
    }
    assert_eq!(args.last().map(String::as_str), Some(URL));
}

#[tokio::test]
async fn non_zero_exit_with_document_is_tolerated() {
    let _guard = SCRIPT_LOCK.lock().await;
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(
        dir.path(),
        r#"{"entries": [null, {"title": "Survivor", "view_count": 3}]}"#,
        1,
    );

    let records = collector_for(stub).collect(URL, &channel()).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].video_name, "Survivor");
}

// ---------------------------------------------------------------------------
// Failure paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_output_is_extraction_failure() {
    let _guard = SCRIPT_LOCK.lock().await;
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "", 1);

    let err = collector_for(stub).collect(URL, &channel()).await.unwrap_err();
    assert!(
        matches!(
            err,
            CollectError::Extraction(ScraperError::ExtractorFailed { .. })
        ),
        "expected ExtractorFailed, got: {err:?}"
    );
}

#[tokio::test]
async fn document_without_entries_is_extraction_failure() {
    let _guard = SCRIPT_LOCK.lock().await;
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), r#"{"_type": "url", "title": "x"}"#, 0);

    let err = collector_for(stub).collect(URL, &channel()).await.unwrap_err();
    assert!(
        matches!(
            err,
            CollectError::Extraction(ScraperError::MissingEntries { .. })
        ),
        "expected MissingEntries, got: {err:?}"
    );
}

#[tokio::test]
async fn only_placeholder_entries_is_no_entries() {
    let _guard = SCRIPT_LOCK.lock().await;
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), r#"{"entries": [null, {}, null]}"#, 0);

    let err = collector_for(stub).collect(URL, &channel()).await.unwrap_err();
    assert!(
        matches!(err, CollectError::NoEntries { .. }),
        "expected NoEntries, got: {err:?}"
    );
}
