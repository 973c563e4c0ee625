use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load configuration from the environment, reading a `.env` file first if present.
///
/// # Errors
///
/// Returns `ConfigError` if a recognised variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load configuration from variables already in the process environment.
///
/// # Errors
///
/// Returns `ConfigError` if a recognised variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// Only tool locations, the output directory, and the log level can be
/// overridden. Everything else keeps the defaults from [`AppConfig`].
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let optional = |var: &str| -> Result<Option<String>, ConfigError> {
        match lookup(var) {
            Ok(raw) if raw.trim().is_empty() => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must not be empty".to_string(),
            }),
            Ok(raw) => Ok(Some(raw.trim().to_string())),
            Err(_) => Ok(None),
        }
    };

    let mut config = AppConfig::default();

    if let Some(path) = optional("CHANSCRAPE_CHROMEDRIVER")? {
        config.browser.chromedriver_path = PathBuf::from(path);
    }
    config.browser.chrome_binary = optional("CHANSCRAPE_CHROME_BINARY")?.map(PathBuf::from);
    if let Some(path) = optional("CHANSCRAPE_YT_DLP")? {
        config.extractor.yt_dlp_path = PathBuf::from(path);
    }
    if let Some(dir) = optional("CHANSCRAPE_OUTPUT_DIR")? {
        config.output_dir = PathBuf::from(dir);
    }
    if let Some(level) = optional("CHANSCRAPE_LOG_LEVEL")? {
        config.log_level = level;
    }

    Ok(config)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
