//! Markdown summary helpers.
//!
//! # Responsibility
//! - Strip markdown syntax down to plain text for card previews.
//! - Estimate reading time for long-form entries.
//!
//! # Invariants
//! - Helpers are pure text transforms; rendering markdown to HTML belongs
//!   to the presentation layer.
//! - `estimate_reading_time` never returns zero for non-empty text.

use once_cell::sync::Lazy;
use regex::Regex;

static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*]\(([^)]+)\)").expect("valid image regex"));
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));
static SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\*_`#>~\-\[\]\(\)!]+"#).expect("valid symbol regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Words-per-minute assumption for reading-time estimates.
const READING_WPM: usize = 200;

/// Maximum preview length in characters.
const PREVIEW_MAX_CHARS: usize = 160;

/// Reduces markdown to plain text.
///
/// Images are removed entirely, links keep their visible text, structural
/// symbols are dropped and whitespace is collapsed to single spaces.
pub fn strip_markdown(text: &str) -> String {
    let without_images = IMAGE_RE.replace_all(text, "");
    let without_links = LINK_RE.replace_all(&without_images, "$1");
    let without_symbols = SYMBOL_RE.replace_all(&without_links, " ");
    WHITESPACE_RE
        .replace_all(&without_symbols, " ")
        .trim()
        .to_string()
}

/// Derives a short plain-text preview from a markdown body.
///
/// Returns `None` when the stripped body is empty.
pub fn derive_preview(text: &str) -> Option<String> {
    let stripped = strip_markdown(text);
    if stripped.is_empty() {
        return None;
    }

    let mut preview: String = stripped.chars().take(PREVIEW_MAX_CHARS).collect();
    if stripped.chars().count() > PREVIEW_MAX_CHARS {
        preview.push_str("...");
    }
    Some(preview)
}

/// Estimates reading time in whole minutes, with a floor of one minute.
pub fn estimate_reading_time(text: &str) -> u32 {
    let words = strip_markdown(text).split_whitespace().count();
    let minutes = words.div_ceil(READING_WPM);
    minutes.max(1) as u32
}
