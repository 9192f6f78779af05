// ABOUTME: Walks the documentation page's top-level nodes and builds the catalog.
// ABOUTME: Tracks the current entity in an explicit WalkerState; drives the table parser and return-type inference.

//! Section walking.
//!
//! The documentation body is a flat run of sibling nodes: `h3` opens a
//! section, `h4` names an entity, and the `p`/`table` nodes that follow
//! belong to that entity until the next header. The walker keeps the
//! current entity in a [`WalkerState`]:
//!
//! - `h3` clears the state; nothing is attributed until the next entity.
//! - `h4` whose anchor name contains `-` is a sub-heading and leaves the
//!   state untouched. Any other `h4` starts a new entity and clears the
//!   description buffer. A header with no text names nothing, so it clears
//!   the state like `h3`.
//! - `p` and `table` nodes only count while an entity is active.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::catalog::{Catalog, EntityKind};
use crate::diagnostics::Diagnostic;
use crate::error::ScrapeError;
use crate::fields::parse_table;
use crate::returns::extract_return_types;
use crate::text::element_text;

/// Selector for the element holding the documentation body.
pub const CONTENT_ROOT: &str = "div#dev_page_content";

static CONTENT: Lazy<Selector> = Lazy::new(|| Selector::parse(CONTENT_ROOT).unwrap());
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// The entity the walker is currently attributing nodes to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkerState {
    pub name: String,
    pub kind: Option<EntityKind>,
    pub description: Vec<String>,
}

impl WalkerState {
    /// Clears name, kind and description. Applied at every section break.
    pub fn reset(&mut self) {
        self.name.clear();
        self.kind = None;
        self.description.clear();
    }

    /// Makes `name` the active entity with an empty description.
    pub fn enter(&mut self, kind: EntityKind, name: &str) {
        self.name = name.to_string();
        self.kind = Some(kind);
        self.description.clear();
    }

    /// The active entity, if any.
    pub fn active(&self) -> Option<(EntityKind, &str)> {
        match self.kind {
            Some(kind) if !self.name.is_empty() => Some((kind, self.name.as_str())),
            _ => None,
        }
    }
}

/// Output of a walk: the catalog plus findings recorded along the way.
#[derive(Debug, Clone, Default)]
pub struct Walk {
    pub catalog: Catalog,
    pub diagnostics: Vec<Diagnostic>,
}

/// Builds a catalog from one documentation page.
pub fn walk_document(html: &str) -> Result<Walk, ScrapeError> {
    let doc = Html::parse_document(html);
    let root = doc
        .select(&CONTENT)
        .next()
        .ok_or_else(|| ScrapeError::MissingContent {
            selector: CONTENT_ROOT.to_string(),
        })?;

    let mut walker = Walker::default();
    for node in root.children().filter_map(ElementRef::wrap) {
        walker.visit(node)?;
    }

    tracing::debug!(
        types = walker.walk.catalog.types.len(),
        methods = walker.walk.catalog.methods.len(),
        "walked documentation page"
    );
    Ok(walker.walk)
}

#[derive(Debug, Default)]
struct Walker {
    state: WalkerState,
    walk: Walk,
}

impl Walker {
    fn visit(&mut self, el: ElementRef<'_>) -> Result<(), ScrapeError> {
        match el.value().name() {
            "h3" => self.state.reset(),
            "h4" => self.header(el),
            "p" => self.paragraph(el),
            "table" => self.table(el)?,
            _ => {}
        }
        Ok(())
    }

    fn header(&mut self, el: ElementRef<'_>) {
        let anchor = el
            .select(&ANCHOR)
            .next()
            .and_then(|a| a.value().attr("name"));
        if anchor.is_some_and(|name| name.contains('-')) {
            return;
        }

        let text = element_text(&el);
        let name = text.trim();
        let Some(kind) = EntityKind::classify(name) else {
            tracing::debug!(anchor = anchor.unwrap_or_default(), "skipping empty entity header");
            self.state.reset();
            return;
        };

        self.walk.catalog.start_entity(kind, name);
        self.state.enter(kind, name);
    }

    fn paragraph(&mut self, el: ElementRef<'_>) {
        let Some((kind, name)) = self.state.active() else {
            return;
        };
        let text = element_text(&el);

        if kind == EntityKind::Method && self.state.description.is_empty() {
            match extract_return_types(&text) {
                Some(returns) => self.walk.catalog.set_returns(name, returns),
                None => {
                    let diagnostic = Diagnostic::ReturnTypeNotFound {
                        method: name.to_string(),
                    };
                    diagnostic.log();
                    self.walk.diagnostics.push(diagnostic);
                }
            }
        }

        self.state.description.push(text);
        self.walk
            .catalog
            .set_description(kind, &self.state.name, self.state.description.clone());
    }

    fn table(&mut self, el: ElementRef<'_>) -> Result<(), ScrapeError> {
        let Some((kind, name)) = self.state.active() else {
            return Ok(());
        };
        let fields = parse_table(el, name, kind)?;
        if fields.is_empty() {
            tracing::debug!(entity = name, %kind, "table has no body rows");
        } else {
            tracing::debug!(entity = name, %kind, rows = fields.len(), "parsed table");
        }
        self.walk.catalog.set_fields(name, fields);
        Ok(())
    }
}
