// ABOUTME: Text helpers for documentation nodes.
// ABOUTME: Collects element text the way a browser would render it and straightens typographic quotes.

use scraper::ElementRef;

/// Concatenates every descendant text node of `el`, untrimmed.
pub fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect()
}

/// Replaces curly double quotes with plain ASCII quotes.
pub fn clean_description(s: &str) -> String {
    s.replace(['\u{201C}', '\u{201D}'], "\"")
}
