mod prompt;
mod run;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chanscrape_scraper::{NameResolver, VideoCollector};

#[derive(Debug, Parser)]
#[command(name = "chanscrape", version)]
#[command(about = "Save a YouTube channel's video titles and view counts to CSV")]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    let config = chanscrape_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    let url = prompt::read_line(
        &mut std::io::stdin().lock(),
        &mut std::io::stdout(),
        prompt::URL_PROMPT,
    )?;

    let resolver = NameResolver::chrome(&config.browser);
    let collector = VideoCollector::yt_dlp(&config.extractor);
    let today = chrono::Local::now().date_naive();

    run::scrape_channel(
        &resolver,
        &collector,
        &url,
        &config.output_dir,
        today,
        &mut std::io::stdout(),
    )
    .await?;

    Ok(())
}
