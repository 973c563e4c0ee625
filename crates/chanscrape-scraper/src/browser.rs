//! Headless Chrome sessions driven over WebDriver.
//!
//! A session owns a private `chromedriver` process on a free loopback port.
//! The process is spawned with `kill_on_drop`, so it goes away even when a
//! session is dropped without [`PageSession::shutdown`].

use std::future::Future;
use std::net::{Ipv4Addr, SocketAddr, TcpListener};
use std::process::Stdio;
use std::time::Duration;

use chanscrape_core::BrowserConfig;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::{json, Map, Value};
use tokio::process::{Child, Command};
use tokio::time::{sleep, Instant};

use crate::error::ScraperError;

const READY_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Something that can open a fresh, isolated page session.
pub trait HeadlessBrowser {
    type Session: PageSession;

    fn launch(&self) -> impl Future<Output = Result<Self::Session, ScraperError>>;
}

/// The narrow set of page operations the name lookup needs.
pub trait PageSession {
    fn goto(&self, url: &str) -> impl Future<Output = Result<(), ScraperError>>;

    /// Waits up to `timeout` for `selector` to be present and returns its visible text.
    fn wait_for_text(
        &self,
        selector: &str,
        timeout: Duration,
    ) -> impl Future<Output = Result<String, ScraperError>>;

    /// Ends the session and releases the browser.
    fn shutdown(self) -> impl Future<Output = Result<(), ScraperError>>;
}

/// Launches Chrome through a dedicated `chromedriver` per session.
#[derive(Debug, Clone)]
pub struct ChromeBrowser {
    config: BrowserConfig,
}

impl ChromeBrowser {
    #[must_use]
    pub fn new(config: BrowserConfig) -> Self {
        Self { config }
    }

    /// WebDriver capabilities carrying the configured Chrome switches.
    #[must_use]
    pub fn capabilities(&self) -> Map<String, Value> {
        let mut chrome_options = Map::new();
        chrome_options.insert("args".to_string(), json!(self.config.chrome_args()));
        if let Some(binary) = &self.config.chrome_binary {
            chrome_options.insert(
                "binary".to_string(),
                Value::String(binary.display().to_string()),
            );
        }

        let mut caps = Map::new();
        caps.insert("browserName".to_string(), json!("chrome"));
        caps.insert("goog:chromeOptions".to_string(), Value::Object(chrome_options));
        caps
    }

    async fn spawn_driver(&self) -> Result<(Child, u16), ScraperError> {
        let port = free_port().map_err(|e| ScraperError::DriverStartup {
            reason: format!("no free local port: {e}"),
        })?;

        let program = self.config.chromedriver_path.display().to_string();
        let mut child = Command::new(&self.config.chromedriver_path)
            .arg(format!("--port={port}"))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ScraperError::Spawn { program, source })?;

        let deadline =
            Instant::now() + Duration::from_secs(self.config.driver_startup_timeout_secs);
        let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));
        loop {
            if tokio::net::TcpStream::connect(addr).await.is_ok() {
                break;
            }
            if let Ok(Some(status)) = child.try_wait() {
                return Err(ScraperError::DriverStartup {
                    reason: format!("chromedriver exited early with {status}"),
                });
            }
            if Instant::now() >= deadline {
                return Err(ScraperError::DriverStartup {
                    reason: format!(
                        "port {port} not accepting connections after {}s",
                        self.config.driver_startup_timeout_secs
                    ),
                });
            }
            sleep(READY_POLL_INTERVAL).await;
        }

        tracing::debug!(port, "chromedriver ready");
        Ok((child, port))
    }
}

impl HeadlessBrowser for ChromeBrowser {
    type Session = ChromeSession;

    async fn launch(&self) -> Result<ChromeSession, ScraperError> {
        let (driver, port) = self.spawn_driver().await?;

        let mut builder = ClientBuilder::native();
        builder.capabilities(self.capabilities());
        // `driver` is dropped (and killed) if the session cannot be created.
        let client = builder.connect(&format!("http://127.0.0.1:{port}")).await?;

        Ok(ChromeSession { client, driver })
    }
}

/// One WebDriver session plus the `chromedriver` process serving it.
pub struct ChromeSession {
    client: Client,
    driver: Child,
}

impl PageSession for ChromeSession {
    async fn goto(&self, url: &str) -> Result<(), ScraperError> {
        self.client.goto(url).await.map_err(ScraperError::WebDriver)
    }

    async fn wait_for_text(&self, selector: &str, timeout: Duration) -> Result<String, ScraperError> {
        let element = self
            .client
            .wait()
            .at_most(timeout)
            .for_element(Locator::Css(selector))
            .await
            .map_err(|e| wait_error(e, selector, timeout))?;
        element.text().await.map_err(ScraperError::WebDriver)
    }

    async fn shutdown(self) -> Result<(), ScraperError> {
        let Self { client, mut driver } = self;
        let closed = client.close().await.map_err(ScraperError::WebDriver);
        if let Err(e) = driver.kill().await {
            tracing::debug!(error = %e, "chromedriver already gone");
        }
        closed
    }
}

/// A wait that ran out of time is an element timeout; anything else is a WebDriver failure.
fn wait_error(err: CmdError, selector: &str, timeout: Duration) -> ScraperError {
    match err {
        CmdError::WaitTimeout => ScraperError::ElementTimeout {
            selector: selector.to_string(),
            timeout_secs: timeout.as_secs(),
        },
        other => ScraperError::WebDriver(other),
    }
}

fn free_port() -> std::io::Result<u16> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))?;
    Ok(listener.local_addr()?.port())
}
