//! Link-item marker model for the card syntax.
//!
//! The `[title](url) - description` syntax is rewritten by the transform
//! pipeline into a self-describing placeholder element embedded in the
//! HTML fragment. The rendering collaborator later swaps each marker for
//! a visual card; this module owns the marker format plus the extraction
//! helpers that collaborator needs.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One entry of the `[title](url) - description` card syntax.
///
/// All fields carry the captured source text verbatim, unescaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    /// Link label.
    pub title: String,
    /// Link target.
    pub url: String,
    /// Free text after the ` - ` separator.
    pub description: String,
}

/// Marker pattern; attribute order is fixed because this crate is the
/// only emitter.
static MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"<div class="link-item" data-title="([^"]*)" data-url="([^"]*)" data-desc="([^"]*)"></div>"#,
    )
    .expect("marker pattern compiles")
});

/// Formats the embedded marker for one link item. Values are inserted
/// verbatim; a quote inside a captured value corrupts the marker, an
/// accepted limitation of the unescaped format.
pub(crate) fn link_item_marker(title: &str, url: &str, desc: &str) -> String {
    format!(
        r#"<div class="link-item" data-title="{title}" data-url="{url}" data-desc="{desc}"></div>"#
    )
}

/// Extracts every link-item marker from an HTML fragment, in document
/// order.
pub fn extract_link_items(html: &str) -> Vec<LinkItem> {
    MARKER
        .captures_iter(html)
        .map(|caps| LinkItem {
            title: caps[1].to_string(),
            url: caps[2].to_string(),
            description: caps[3].to_string(),
        })
        .collect()
}

/// Removes every link-item marker, leaving the surrounding prose for the
/// collaborator to insert alongside the rendered cards.
pub fn strip_link_items(html: &str) -> String {
    MARKER.replace_all(html, "").into_owned()
}
