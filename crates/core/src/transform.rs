//! Ordered Markdown-to-HTML rewrite pipeline.
//!
//! The transform is a fixed sequence of whole-text rewrites; each stage
//! runs on the output of the previous one, so the ordering is part of
//! the contract. Load-bearing orderings:
//!
//! - link cards before plain links (the plain pattern is a strict
//!   subset and would eat the card match, dropping the description)
//! - bold before italic (`**` is a strict prefix collision with `*`)
//! - the unordered-list wrap runs once, non-globally: only the first
//!   maximal run of adjacent `<li>` lines gets a `<ul>` container,
//!   later runs stay bare
//!
//! The pipeline is total: malformed input degrades into literal
//! paragraph text, it never fails. No HTML escaping is performed;
//! captured text lands in the output verbatim.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::links::link_item_marker;
use crate::table::render_tables;

/// `[title](url) - description`; the description is the rest of the line.
static LINK_CARD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)\s*-\s*(.+)").expect("link card pattern compiles")
});

/// `[text](url)`.
static PLAIN_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern compiles"));

static H3: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^### (.+)$").expect("h3 pattern compiles"));

static H4: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#### (.+)$").expect("h4 pattern compiles"));

/// Non-greedy, so `**a** and **b**` stays two spans.
static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern compiles"));

static ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*(.+?)\*").expect("italic pattern compiles"));

/// Triple-backtick span, may cross lines; contents pass through as-is.
static CODE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(.*?)```").expect("code block pattern compiles"));

static INLINE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`]+)`").expect("inline code pattern compiles"));

/// One blockquote element per quoted line; consecutive lines never merge.
static BLOCKQUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^> (.+)$").expect("blockquote pattern compiles"));

static BULLET_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[-*+] (.+)$").expect("bullet pattern compiles"));

/// A maximal run of adjacent `<li>` lines.
static LIST_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:<li>.*</li>\n)*<li>.*</li>").expect("list run pattern compiles")
});

static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\d+\. (.+)$").expect("ordered pattern compiles"));

static NEWLINE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n+").expect("newline pattern compiles"));

/// Renders one section body to an HTML fragment.
pub fn render_html(body: &str) -> String {
    // Card syntax first: the plain-link pattern below is a strict
    // subset of it.
    let html = LINK_CARD.replace_all(body, |caps: &Captures<'_>| {
        link_item_marker(&caps[1], &caps[2], &caps[3])
    });
    let html = PLAIN_LINK.replace_all(&html, r#"<a href="${2}" target="_blank">${1}</a>"#);

    let html = H3.replace_all(&html, "<h3>${1}</h3>");
    let html = H4.replace_all(&html, "<h4>${1}</h4>");

    let html = render_tables(&html);

    let html = BOLD.replace_all(&html, "<strong>${1}</strong>");
    let html = ITALIC.replace_all(&html, "<em>${1}</em>");

    let html = CODE_BLOCK.replace_all(&html, "<pre><code>${1}</code></pre>");
    let html = INLINE_CODE.replace_all(&html, "<code>${1}</code>");

    let html = BLOCKQUOTE.replace_all(&html, "<blockquote>${1}</blockquote>");

    let html = BULLET_ITEM.replace_all(&html, "<li>${1}</li>");
    // Single non-global wrap: later bullet runs stay bare. Ordered items
    // are rewritten after this, so they are never wrapped at all.
    let html = LIST_RUN.replace(&html, "<ul>${0}</ul>");
    let html = ORDERED_ITEM.replace_all(&html, "<li>${1}</li>");

    let html = wrap_paragraphs(&html);
    cleanup(&html)
}

/// Whole-line prefix test against the element tags the earlier stages
/// produce. Anything else gets paragraph-wrapped.
fn starts_with_block_tag(line: &str) -> bool {
    line.starts_with("<h")
        || line.starts_with("<u")
        || line.starts_with("<l")
        || line.starts_with("<blockquote")
        || line.starts_with("<pre")
        || line.starts_with("<div")
}

fn wrap_paragraphs(html: &str) -> String {
    let mut out = String::with_capacity(html.len() + 16);
    for (i, line) in html.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if line.is_empty() || starts_with_block_tag(line) {
            out.push_str(line);
        } else {
            out.push_str("<p>");
            out.push_str(line);
            out.push_str("</p>");
        }
    }
    out
}

/// Blanks whitespace-only lines, collapses newline runs, trims the ends.
fn cleanup(html: &str) -> String {
    let blanked = html
        .split('\n')
        .map(|line| if line.trim().is_empty() { "" } else { line })
        .collect::<Vec<_>>()
        .join("\n");
    NEWLINE_RUNS.replace_all(&blanked, "\n").trim().to_string()
}
