//! Domain types, configuration, and CSV reporting for channel scrapes.

pub mod app_config;
pub mod channel;
pub mod config;
pub mod error;
pub mod report;

pub use app_config::{AppConfig, BrowserConfig, ExtractorConfig};
pub use channel::{ChannelName, VideoRecord, UNKNOWN_CHANNEL, UNKNOWN_TITLE};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, ReportError};
pub use report::{
    format_thousands, report_filename, safe_stem, summary_line, total_views, write_report,
    WrittenReport,
};
