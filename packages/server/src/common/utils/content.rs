/// Pure utility functions for content manipulation
///
/// These functions contain NO side effects - they take inputs and return outputs
/// without touching the filesystem or the network.
use lazy_static::lazy_static;
use pulldown_cmark::{html, Options, Parser};
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^a-z0-9-]").unwrap();
}

/// Render a markdown body to HTML for display
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

/// URL-friendly slug from a display name ("Jane Doe" -> "jane-doe")
///
/// Characters outside `[a-z0-9-]` are dropped, not transliterated.
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    let dashed = WHITESPACE_RUN.replace_all(&lower, "-");
    NON_SLUG_CHARS.replace_all(&dashed, "").into_owned()
}

/// Escape text for interpolation into hand-built HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
