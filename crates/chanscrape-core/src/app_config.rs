use std::path::PathBuf;

/// CSS path to the title span inside the channel page header.
pub const CHANNEL_HEADER_SELECTOR: &str = "#page-header > yt-page-header-renderer > yt-page-header-view-model > div > div.page-header-view-model-wiz__page-header-headline > div > yt-dynamic-text-view-model > h1 > span";

/// How the headless browser session is launched and how long the header lookup may wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    pub chromedriver_path: PathBuf,
    pub chrome_binary: Option<PathBuf>,
    pub headless: bool,
    pub no_sandbox: bool,
    pub disable_dev_shm_usage: bool,
    /// Ceiling for the header element to appear after navigation.
    pub element_timeout_secs: u64,
    /// Ceiling for chromedriver to report that it is listening.
    pub driver_startup_timeout_secs: u64,
    pub header_selector: String,
}

impl BrowserConfig {
    /// Command-line switches handed to Chrome through `goog:chromeOptions`.
    #[must_use]
    pub fn chrome_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.headless {
            args.push("--headless=new".to_string());
        }
        if self.no_sandbox {
            args.push("--no-sandbox".to_string());
        }
        if self.disable_dev_shm_usage {
            args.push("--disable-dev-shm-usage".to_string());
        }
        args
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            chromedriver_path: PathBuf::from("chromedriver"),
            chrome_binary: None,
            headless: true,
            no_sandbox: true,
            disable_dev_shm_usage: true,
            element_timeout_secs: 10,
            driver_startup_timeout_secs: 10,
            header_selector: CHANNEL_HEADER_SELECTOR.to_string(),
        }
    }
}

/// Options for the `yt-dlp` metadata extraction. Nothing is ever downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    pub yt_dlp_path: PathBuf,
    /// List playlist entries without resolving each video's own page.
    pub flat: bool,
    pub force_generic: bool,
    /// Skip unresolvable entries instead of aborting the whole extraction.
    pub ignore_errors: bool,
    pub quiet: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            yt_dlp_path: PathBuf::from("yt-dlp"),
            flat: true,
            force_generic: true,
            ignore_errors: true,
            quiet: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub browser: BrowserConfig,
    pub extractor: ExtractorConfig,
    pub output_dir: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            browser: BrowserConfig::default(),
            extractor: ExtractorConfig::default(),
            output_dir: PathBuf::from("."),
            log_level: "warn".to_string(),
        }
    }
}
