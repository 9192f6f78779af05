// ABOUTME: Serializes the catalog as pretty-printed JSON.
// ABOUTME: Writes the output file in one shot, truncating whatever was there before.

use std::fs;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::ScrapeError;

/// Renders the catalog with 2-space indentation and a trailing newline.
pub fn catalog_to_json(catalog: &Catalog) -> Result<String, ScrapeError> {
    let mut out = serde_json::to_string_pretty(catalog)?;
    out.push('\n');
    Ok(out)
}

/// Writes the catalog to `path`, replacing any existing file.
pub fn write_catalog(catalog: &Catalog, path: &Path) -> Result<(), ScrapeError> {
    let json = catalog_to_json(catalog)?;
    fs::write(path, json).map_err(|e| ScrapeError::io(path, e))?;
    tracing::debug!(path = %path.display(), "wrote catalog");
    Ok(())
}
