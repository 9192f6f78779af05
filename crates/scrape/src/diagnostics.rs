// ABOUTME: Soft findings reported during a scrape: failed return-type inference and catalog inconsistencies.
// ABOUTME: Diagnostics are logged and collected for the caller but never stop the run.

use std::fmt;

/// A reported, non-blocking problem with the scraped catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The first paragraph of a method matched no return-type pattern.
    ReturnTypeNotFound { method: String },
    UnknownFieldType {
        owner: String,
        field: String,
        type_name: String,
    },
    UnknownParamType {
        method: String,
        parameter: String,
        type_name: String,
    },
    UnknownReturnType { method: String, type_name: String },
    NoReturnTypes { method: String },
    /// More than one return type was inferred; generators expect exactly one.
    MultipleReturnTypes { method: String, returns: Vec<String> },
}

impl Diagnostic {
    /// The type or method name the finding is about.
    pub fn subject(&self) -> &str {
        match self {
            Diagnostic::UnknownFieldType { type_name, .. }
            | Diagnostic::UnknownParamType { type_name, .. }
            | Diagnostic::UnknownReturnType { type_name, .. } => type_name,
            Diagnostic::ReturnTypeNotFound { method }
            | Diagnostic::NoReturnTypes { method }
            | Diagnostic::MultipleReturnTypes { method, .. } => method,
        }
    }

    /// Returns true for the unknown-type variants.
    pub fn is_unknown_type(&self) -> bool {
        matches!(
            self,
            Diagnostic::UnknownFieldType { .. }
                | Diagnostic::UnknownParamType { .. }
                | Diagnostic::UnknownReturnType { .. }
        )
    }

    pub(crate) fn log(&self) {
        tracing::warn!(subject = self.subject(), "{}", self);
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ReturnTypeNotFound { method } => {
                write!(f, "failed to get return type for {}", method)
            }
            Diagnostic::UnknownFieldType {
                owner,
                field,
                type_name,
            } => write!(f, "unknown field type {} ({}.{})", type_name, owner, field),
            Diagnostic::UnknownParamType {
                method,
                parameter,
                type_name,
            } => write!(f, "unknown param type {} ({}.{})", type_name, method, parameter),
            Diagnostic::UnknownReturnType { method, type_name } => {
                write!(f, "unknown return type {} ({})", type_name, method)
            }
            Diagnostic::NoReturnTypes { method } => write!(f, "{} has no return types", method),
            Diagnostic::MultipleReturnTypes { method, returns } => {
                write!(f, "{} has multiple return types: {}", method, returns.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_subject() {
        let d = Diagnostic::UnknownParamType {
            method: "sendMessage".to_string(),
            parameter: "reply_markup".to_string(),
            type_name: "ForceReply".to_string(),
        };
        assert_eq!(d.to_string(), "unknown param type ForceReply (sendMessage.reply_markup)");
        assert_eq!(d.subject(), "ForceReply");
        assert!(d.is_unknown_type());
    }

    #[test]
    fn multiple_returns_lists_all() {
        let d = Diagnostic::MultipleReturnTypes {
            method: "editMessageText".to_string(),
            returns: vec!["Message".to_string(), "Boolean".to_string()],
        };
        assert_eq!(
            d.to_string(),
            "editMessageText has multiple return types: Message, Boolean"
        );
        assert_eq!(d.subject(), "editMessageText");
        assert!(!d.is_unknown_type());
    }
}
