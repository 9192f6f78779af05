// ABOUTME: Heuristic return-type inference from a method's first description paragraph.
// ABOUTME: Matches "returns ... / on success, ..." or "... is returned" phrases and keeps capitalized words.

//! Return-type inference.
//!
//! The documentation states results in prose ("On success, the sent
//! Message is returned."), so inference is pattern based and best-effort:
//!
//! 1. Find the result phrase after `returns` / `on success,`, or else the
//!    phrase before `is returned`. Neither matching means no result.
//! 2. If the phrase says `array of X` (any number of times), the result is
//!    `Array of X` for each normalized `X`.
//! 3. Otherwise every whitespace token that starts with an uppercase letter
//!    is stripped of punctuation and normalized.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{normalize_type, ARRAY_PREFIX};

static RETURNS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:on success,|returns)([^.]*)(?:on success)?").unwrap());
static IS_RETURNED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)([^.]*)is returned").unwrap());
static ARRAY_OF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(?:array of )+(\w*)").unwrap());

/// Locates the phrase describing the result, trimmed.
pub fn find_return_phrase(paragraph: &str) -> Option<&str> {
    RETURNS_RE
        .captures(paragraph)
        .or_else(|| IS_RETURNED_RE.captures(paragraph))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Infers return types from a method's first paragraph.
///
/// Returns `None` when no result phrase is found.
pub fn extract_return_types(paragraph: &str) -> Option<Vec<String>> {
    find_return_phrase(paragraph).map(types_in_phrase)
}

/// Pulls type names out of a result phrase.
pub fn types_in_phrase(phrase: &str) -> Vec<String> {
    if let Some(inner) = ARRAY_OF_RE.captures(phrase).and_then(|caps| caps.get(1)) {
        return normalize_type(inner.as_str())
            .into_iter()
            .map(|t| format!("{}{}", ARRAY_PREFIX, t))
            .collect();
    }

    phrase
        .split_whitespace()
        .filter(|word| word.chars().next().is_some_and(char::is_uppercase))
        .flat_map(|word| {
            let bare: String = word.chars().filter(|c| !c.is_ascii_punctuation()).collect();
            normalize_type(&bare)
        })
        .collect()
}
