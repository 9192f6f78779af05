// ABOUTME: Configuration for a scrape run: source URL, output path and HTTP settings.
// ABOUTME: ScraperBuilder provides a fluent API for constructing Scraper instances with custom settings.

use std::path::PathBuf;
use std::time::Duration;

use crate::pipeline::Scraper;

/// The Telegram Bot API reference page.
pub const DEFAULT_URL: &str = "https://core.telegram.org/bots/api";

/// Where the catalog is written unless told otherwise.
pub const DEFAULT_OUTPUT: &str = "api.json";

/// Configuration options for a scrape run.
#[derive(Debug, Clone)]
pub struct Options {
    pub url: String,
    pub output: PathBuf,
    pub user_agent: String,
    /// Request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            user_agent: format!("botapi-scrape/{}", env!("CARGO_PKG_VERSION")),
            timeout: None,
        }
    }
}

/// Builder for constructing Scraper instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct ScraperBuilder {
    opts: Options,
}

impl ScraperBuilder {
    /// Create a new ScraperBuilder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the documentation page to fetch.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.opts.url = url.into();
        self
    }

    /// Set the catalog output path.
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.opts.output = output.into();
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Scraper {
        Scraper::new(self.opts)
    }
}
