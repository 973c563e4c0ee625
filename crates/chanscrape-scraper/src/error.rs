use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("chromedriver did not become ready: {reason}")]
    DriverStartup { reason: String },

    #[error("WebDriver session could not be created: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),

    #[error("WebDriver command failed: {0}")]
    WebDriver(#[source] fantoccini::error::CmdError),

    #[error("element {selector:?} not present after {timeout_secs}s")]
    ElementTimeout { selector: String, timeout_secs: u64 },

    #[error("yt-dlp exited with {status} and no output: {stderr}")]
    ExtractorFailed { status: String, stderr: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("extractor result for {url} has no entries list")]
    MissingEntries { url: String },
}

/// Why a collection produced nothing to report.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("extraction failed: {0}")]
    Extraction(#[from] ScraperError),

    #[error("no usable video entries found for {url}")]
    NoEntries { url: String },
}
