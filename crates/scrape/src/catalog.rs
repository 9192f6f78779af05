// ABOUTME: Data model for the scraped API catalog: entity kinds, type and method entries, field records.
// ABOUTME: Serializes to the two-key {"types", "methods"} JSON shape consumed by code generators.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The two kinds of documented entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Type,
    Method,
}

impl EntityKind {
    /// Classifies a header by its first character: uppercase names are types.
    ///
    /// Returns `None` for an empty header.
    pub fn classify(header: &str) -> Option<Self> {
        let first = header.chars().next()?;
        if first.is_uppercase() {
            Some(EntityKind::Type)
        } else {
            Some(EntityKind::Method)
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Type => "type",
            EntityKind::Method => "method",
        };
        write!(f, "{}", s)
    }
}

/// One row of a type's field table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeField {
    pub field: String,
    pub types: Vec<String>,
    pub description: String,
}

/// One row of a method's parameter table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodParam {
    pub parameter: String,
    pub types: Vec<String>,
    /// Raw cell text, usually "Yes" or "Optional".
    pub required: String,
    pub description: String,
}

/// A documented data structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
    pub description: Vec<String>,
    pub fields: Vec<TypeField>,
}

/// A documented callable operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodEntry {
    pub description: Vec<String>,
    pub fields: Vec<MethodParam>,
    /// Inferred return types; empty when inference failed.
    pub returns: Vec<String>,
}

/// Rows parsed out of one table, shaped by the owning entity's kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityFields {
    Type(Vec<TypeField>),
    Method(Vec<MethodParam>),
}

impl EntityFields {
    pub fn len(&self) -> usize {
        match self {
            EntityFields::Type(rows) => rows.len(),
            EntityFields::Method(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Every type and method found on one documentation page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub types: BTreeMap<String, TypeEntry>,
    pub methods: BTreeMap<String, MethodEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an empty entity, replacing any earlier entity with the same name and kind.
    pub fn start_entity(&mut self, kind: EntityKind, name: &str) {
        match kind {
            EntityKind::Type => {
                self.types.insert(name.to_string(), TypeEntry::default());
            }
            EntityKind::Method => {
                self.methods.insert(name.to_string(), MethodEntry::default());
            }
        }
    }

    pub fn set_description(&mut self, kind: EntityKind, name: &str, description: Vec<String>) {
        match kind {
            EntityKind::Type => {
                if let Some(entry) = self.types.get_mut(name) {
                    entry.description = description;
                }
            }
            EntityKind::Method => {
                if let Some(entry) = self.methods.get_mut(name) {
                    entry.description = description;
                }
            }
        }
    }

    /// Replaces the field list of a named entity.
    ///
    /// Rows whose shape does not match the stored entity's kind are ignored.
    pub fn set_fields(&mut self, name: &str, fields: EntityFields) {
        match fields {
            EntityFields::Type(rows) => {
                if let Some(entry) = self.types.get_mut(name) {
                    entry.fields = rows;
                }
            }
            EntityFields::Method(rows) => {
                if let Some(entry) = self.methods.get_mut(name) {
                    entry.fields = rows;
                }
            }
        }
    }

    pub fn set_returns(&mut self, method: &str, returns: Vec<String>) {
        if let Some(entry) = self.methods.get_mut(method) {
            entry.returns = returns;
        }
    }

    /// True when `name` is a documented type.
    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.methods.is_empty()
    }
}
