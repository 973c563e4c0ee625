//! Channel page scraping: display-name lookup and video enumeration.

pub mod browser;
pub mod collector;
pub mod error;
pub mod extractor;
pub mod name;

pub use browser::{ChromeBrowser, HeadlessBrowser, PageSession};
pub use collector::VideoCollector;
pub use error::{CollectError, ScraperError};
pub use extractor::{EntrySource, YtDlp};
pub use name::NameResolver;
