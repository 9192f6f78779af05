// ABOUTME: The Scraper ties the stages together: fetch, walk, check, write.
// ABOUTME: Returns the catalog and collected diagnostics; only fatal problems are errors.

use crate::catalog::Catalog;
use crate::check::check_catalog;
use crate::diagnostics::Diagnostic;
use crate::error::ScrapeError;
use crate::fetch::{fetch_page, http_client};
use crate::options::{Options, ScraperBuilder};
use crate::output::write_catalog;
use crate::walker::walk_document;

/// Result of a successful scrape.
#[derive(Debug, Clone, Default)]
pub struct ScrapeReport {
    pub catalog: Catalog,
    /// Walk findings first, then consistency findings.
    pub diagnostics: Vec<Diagnostic>,
}

/// Scrapes one documentation page into a catalog.
#[derive(Debug, Clone)]
pub struct Scraper {
    opts: Options,
}

impl Scraper {
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }

    pub fn builder() -> ScraperBuilder {
        ScraperBuilder::new()
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Downloads the configured page.
    pub fn fetch(&self) -> Result<String, ScrapeError> {
        let client = http_client(&self.opts.user_agent, self.opts.timeout)
            .map_err(|e| ScrapeError::fetch(&self.opts.url, e))?;
        fetch_page(&client, &self.opts.url)
    }

    /// Builds and checks a catalog from already-fetched HTML.
    pub fn scrape_html(&self, html: &str) -> Result<ScrapeReport, ScrapeError> {
        let walk = walk_document(html)?;
        if walk.catalog.is_empty() {
            tracing::warn!("no types or methods found in page");
        }
        let mut diagnostics = walk.diagnostics;
        diagnostics.extend(check_catalog(&walk.catalog));
        Ok(ScrapeReport {
            catalog: walk.catalog,
            diagnostics,
        })
    }

    /// Fetches the configured page and scrapes it.
    pub fn scrape(&self) -> Result<ScrapeReport, ScrapeError> {
        let html = self.fetch()?;
        self.scrape_html(&html)
    }

    /// Writes a report's catalog to the configured output path.
    pub fn write(&self, report: &ScrapeReport) -> Result<(), ScrapeError> {
        write_catalog(&report.catalog, &self.opts.output)
    }

    /// Fetch, scrape and write in one go.
    pub fn run(&self) -> Result<ScrapeReport, ScrapeError> {
        let report = self.scrape()?;
        self.write(&report)?;
        tracing::info!(
            types = report.catalog.types.len(),
            methods = report.catalog.methods.len(),
            diagnostics = report.diagnostics.len(),
            output = %self.opts.output.display(),
            "scrape finished"
        );
        Ok(report)
    }
}
