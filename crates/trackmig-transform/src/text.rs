//! Source-tracker markup translation and URL extraction.
//!
//! Jira wiki markup is rewritten to Markdown with a handful of regex passes.
//! This is a lossy text filter, not a parser: nested or unbalanced markers
//! come out best-effort.

use std::sync::LazyLock;

use regex::Regex;
use trackmig_model::{NO_DESCRIPTION, UrlPattern};

/// `h3.`/`h4.` heading followed by a bold marker. Group 1 holds the bold
/// text when the span closes on the same line.
static HEADING_BOLD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"h[34]\.\s*\*(?:([^*\n]*)\*)?").expect("Invalid heading regex")
});

/// `*text*` emphasis span, shortest match, single line.
static EMPHASIS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("Invalid emphasis regex"));

/// Newline, whitespace-only run, newline.
static BLANK_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("Invalid blank line regex"));

static URL_WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https://[^\s]+").expect("Invalid URL regex"));

static URL_WHITESPACE_SEMICOLON_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https://[^\s;]+").expect("Invalid URL regex"));

/// Translates source markup to Markdown.
///
/// Blank input yields [`NO_DESCRIPTION`]. Otherwise, in order:
///
/// 1. `h3. *Title:*` / `h4. *Title:*` becomes `**Title:**` (an unclosed
///    heading marker becomes a bare `**`)
/// 2. remaining `*text*` spans become `_text_`
/// 3. `#` becomes `-`
/// 4. blank lines are removed
/// 5. surrounding whitespace is trimmed
///
/// Heading output from step 1 is not touched by step 2.
pub fn normalize_markup(text: &str) -> String {
    if text.trim().is_empty() {
        return NO_DESCRIPTION.to_string();
    }

    let emphasized = translate_emphasis(text);
    let listed = emphasized.replace('#', "-");
    let collapsed = BLANK_LINE_REGEX.replace_all(&listed, "\n");
    collapsed.trim().to_string()
}

/// Headings first, then emphasis on the text between them.
fn translate_emphasis(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;

    for caps in HEADING_BOLD_REGEX.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&EMPHASIS_REGEX.replace_all(&text[last..whole.start()], "_${1}_"));
        out.push_str("**");
        if let Some(title) = caps.get(1) {
            out.push_str(title.as_str());
            out.push_str("**");
        }
        last = whole.end();
    }

    out.push_str(&EMPHASIS_REGEX.replace_all(&text[last..], "_${1}_"));
    out
}

/// Finds `https://` URLs in order of appearance, duplicates included.
pub fn extract_urls(text: &str, pattern: UrlPattern) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let regex = match pattern {
        UrlPattern::Whitespace => &*URL_WHITESPACE_REGEX,
        UrlPattern::WhitespaceOrSemicolon => &*URL_WHITESPACE_SEMICOLON_REGEX,
    };
    regex
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
