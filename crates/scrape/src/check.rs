// ABOUTME: Consistency checks over a scraped catalog.
// ABOUTME: Reports unknown referenced types and methods without exactly one return type; never rejects the catalog.

use crate::catalog::Catalog;
use crate::diagnostics::Diagnostic;
use crate::types::{is_primitive, strip_array};

/// Checks every field, parameter and return type in `catalog`.
///
/// Each finding is logged, then all are returned in catalog order:
/// type fields first, then methods.
pub fn check_catalog(catalog: &Catalog) -> Vec<Diagnostic> {
    let mut found = Vec::new();
    check_type_fields(catalog, &mut found);
    check_methods(catalog, &mut found);
    for diagnostic in &found {
        diagnostic.log();
    }
    found
}

/// True when `name`, minus any "Array of " prefixes, is a documented type or a primitive.
pub fn is_known_type(catalog: &Catalog, name: &str) -> bool {
    let inner = strip_array(name);
    catalog.has_type(inner) || is_primitive(inner)
}

fn check_type_fields(catalog: &Catalog, found: &mut Vec<Diagnostic>) {
    for (owner, entry) in &catalog.types {
        for field in &entry.fields {
            for type_name in &field.types {
                if !is_known_type(catalog, type_name) {
                    found.push(Diagnostic::UnknownFieldType {
                        owner: owner.clone(),
                        field: field.field.clone(),
                        type_name: strip_array(type_name).to_string(),
                    });
                }
            }
        }
    }
}

fn check_methods(catalog: &Catalog, found: &mut Vec<Diagnostic>) {
    for (method, entry) in &catalog.methods {
        if entry.returns.is_empty() {
            found.push(Diagnostic::NoReturnTypes {
                method: method.clone(),
            });
        } else if entry.returns.len() > 1 {
            found.push(Diagnostic::MultipleReturnTypes {
                method: method.clone(),
                returns: entry.returns.clone(),
            });
        }

        for param in &entry.fields {
            for type_name in &param.types {
                if !is_known_type(catalog, type_name) {
                    found.push(Diagnostic::UnknownParamType {
                        method: method.clone(),
                        parameter: param.parameter.clone(),
                        type_name: strip_array(type_name).to_string(),
                    });
                }
            }
        }

        for type_name in &entry.returns {
            if !is_known_type(catalog, type_name) {
                found.push(Diagnostic::UnknownReturnType {
                    method: method.clone(),
                    type_name: strip_array(type_name).to_string(),
                });
            }
        }
    }
}
