// ABOUTME: Fatal error type for a scrape run.
// ABOUTME: Separates unrecoverable failures (fetch, unexpected table shape, I/O) from soft diagnostics.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::EntityKind;

/// Errors that abort a scrape run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The configured documentation URL is not a usable http(s) URL.
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The HTTP request failed or returned a non-success status.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The page has no documentation content root.
    #[error("documentation content `{selector}` not found in page")]
    MissingContent { selector: String },

    /// A table row has a cell count the entity kind does not allow.
    ///
    /// The page layout changed in a way the scraper cannot interpret.
    #[error("unexpected table shape in {kind} {entity}: {cells} cells in row {row:?}")]
    TableShape {
        entity: String,
        kind: EntityKind,
        cells: usize,
        row: Vec<String>,
    },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ScrapeError {
    pub fn fetch(url: impl Into<String>, source: reqwest::Error) -> Self {
        ScrapeError::Fetch {
            url: url.into(),
            source,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScrapeError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this is a TableShape error.
    pub fn is_table_shape(&self) -> bool {
        matches!(self, ScrapeError::TableShape { .. })
    }

    /// Returns true if this is a Fetch error.
    pub fn is_fetch(&self) -> bool {
        matches!(self, ScrapeError::Fetch { .. })
    }
}
