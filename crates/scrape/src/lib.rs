// ABOUTME: Library entry point for the Bot API documentation scraper.
// ABOUTME: Re-exports the public API: Scraper, ScraperBuilder, Catalog, Diagnostic, ScrapeError.

//! botapi-scrape - turns the Telegram Bot API reference page into a JSON catalog.
//!
//! The page is walked header by header; every type and method becomes an
//! entry with its description paragraphs and field table, and methods get a
//! best-effort return type inferred from their first paragraph. The catalog
//! is then checked for dangling type references, with findings reported as
//! [`Diagnostic`]s rather than errors.
//!
//! # Example
//!
//! ```no_run
//! use botapi_scrape::{ScrapeError, Scraper};
//!
//! fn main() -> Result<(), ScrapeError> {
//!     let scraper = Scraper::builder().output("api.json").build();
//!     let report = scraper.run()?;
//!     for diagnostic in &report.diagnostics {
//!         println!("{}", diagnostic);
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod check;
pub mod diagnostics;
pub mod error;
pub mod fetch;
pub mod fields;
pub mod options;
pub mod output;
pub mod pipeline;
pub mod returns;
pub mod text;
pub mod types;
pub mod walker;

pub use crate::catalog::{Catalog, EntityKind, MethodEntry, MethodParam, TypeEntry, TypeField};
pub use crate::check::check_catalog;
pub use crate::diagnostics::Diagnostic;
pub use crate::error::ScrapeError;
pub use crate::options::{Options, ScraperBuilder, DEFAULT_OUTPUT, DEFAULT_URL};
pub use crate::output::{catalog_to_json, write_catalog};
pub use crate::pipeline::{ScrapeReport, Scraper};
pub use crate::returns::extract_return_types;
pub use crate::types::normalize_type;
pub use crate::walker::{walk_document, Walk};
