// ABOUTME: Parses a field or parameter table that follows an entity header.
// ABOUTME: Type tables must have 3 cells per row, method tables 4; anything else aborts the scrape.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

use crate::catalog::{EntityFields, EntityKind, MethodParam, TypeField};
use crate::error::ScrapeError;
use crate::text::{clean_description, element_text};
use crate::types::normalize_type;

static TBODY: Lazy<Selector> = Lazy::new(|| Selector::parse("tbody").unwrap());
static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());

/// Cells per body row for each entity kind.
pub fn expected_cells(kind: EntityKind) -> usize {
    match kind {
        EntityKind::Type => 3,
        EntityKind::Method => 4,
    }
}

/// Extracts one record per body row of `table`.
///
/// Header rows live in `thead` and are skipped. A row with the wrong
/// number of cells for `kind` is a [`ScrapeError::TableShape`]; rows are
/// never guessed at or dropped.
pub fn parse_table(
    table: ElementRef<'_>,
    entity: &str,
    kind: EntityKind,
) -> Result<EntityFields, ScrapeError> {
    let rows: Vec<Vec<String>> = match table.select(&TBODY).next() {
        Some(body) => body
            .select(&ROW)
            .map(|tr| tr.select(&CELL).map(|td| element_text(&td)).collect())
            .collect(),
        None => Vec::new(),
    };

    for cells in &rows {
        if cells.len() != expected_cells(kind) {
            return Err(ScrapeError::TableShape {
                entity: entity.to_string(),
                kind,
                cells: cells.len(),
                row: cells.clone(),
            });
        }
    }

    let fields = match kind {
        EntityKind::Type => EntityFields::Type(
            rows.into_iter()
                .map(|cells| TypeField {
                    field: cells[0].clone(),
                    types: normalize_type(&cells[1]),
                    description: clean_description(&cells[2]),
                })
                .collect(),
        ),
        EntityKind::Method => EntityFields::Method(
            rows.into_iter()
                .map(|cells| MethodParam {
                    parameter: cells[0].clone(),
                    types: normalize_type(&cells[1]),
                    required: cells[2].clone(),
                    description: clean_description(&cells[3]),
                })
                .collect(),
        ),
    };
    Ok(fields)
}
