//! HTML to plain-text normalization.
//!
//! Parsing goes through `scraper` (html5ever), which recovers from malformed
//! markup instead of failing, so every input yields some text, possibly empty.
//!
//! Text nodes are concatenated as they appear, so inline markup inside a word
//! (`grè<b>ve</b>`, drop caps) never splits it. A space is inserted only at
//! block-level element boundaries and around skipped elements, then
//! whitespace runs (including non-breaking spaces) collapse to one space.

use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static BODY_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("body").unwrap());
static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());

/// Elements whose text content is never article prose.
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Elements that start a new line of text when rendered.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "caption", "dd", "details", "div", "dl",
    "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "summary", "table", "tbody",
    "td", "tfoot", "th", "thead", "tr", "ul",
];

/// Title and body text of one parsed page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageText {
    /// Contents of `<title>`, empty when absent.
    pub title: String,
    /// Visible text of `<body>`.
    pub text: String,
}

/// Parse `html` once and extract both its title and its visible body text.
pub fn normalize(html: &str) -> PageText {
    if html.trim().is_empty() {
        return PageText::default();
    }
    let document = Html::parse_document(html);
    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(collect_text)
        .unwrap_or_default();
    let body = document
        .select(&BODY_SELECTOR)
        .next()
        .unwrap_or_else(|| document.root_element());
    PageText {
        title,
        text: collect_text(body),
    }
}

fn collect_text(root: ElementRef<'_>) -> String {
    let mut raw = String::new();
    push_children(root, &mut raw);
    raw.split_whitespace().join(" ")
}

fn push_children(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child) = ElementRef::wrap(child) {
            let name = child.value().name();
            if SKIPPED_ELEMENTS.contains(&name) {
                out.push(' ');
                continue;
            }
            let block = BLOCK_ELEMENTS.contains(&name);
            if block {
                out.push(' ');
            }
            push_children(child, out);
            if block {
                out.push(' ');
            }
        }
    }
}
