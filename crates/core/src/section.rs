//! Section records and the level-2 heading splitter.
//!
//! A document is scanned line by line; every trimmed line starting with
//! `## ` opens a new section and closes the previous one. Lines before
//! the first heading are discarded on purpose: content preceding the
//! first level-2 heading is never surfaced.

use serde::{Deserialize, Serialize};

use crate::error::MarknavError;
use crate::slug::section_id;
use crate::transform::render_html;

/// One navigable unit of content, bounded by level-2 headings.
///
/// Sections are plain value objects; the caller owns them outright once
/// returned. Ids are derived from titles and NOT deduplicated, so equal
/// titles yield equal ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Identifier derived from `title`, unique only as far as titles are.
    pub id: String,
    /// Heading text with the `## ` marker stripped and trimmed.
    pub title: String,
    /// HTML fragment produced by the transform pipeline, possibly
    /// containing embedded link-item markers.
    pub content: String,
}

fn finalize(id: String, title: String, body: &[&str]) -> Section {
    Section {
        id,
        title,
        content: render_html(&body.join("\n")),
    }
}

/// Splits a document into sections, in document order.
///
/// Lines are trimmed for boundary detection only; body lines keep their
/// original whitespace. A document without any `## ` heading yields an
/// empty vector.
pub fn split_sections(markdown: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<(String, String)> = None;
    let mut body: Vec<&str> = Vec::new();

    for raw_line in markdown.split('\n') {
        if let Some(rest) = raw_line.trim().strip_prefix("## ") {
            if let Some((id, title)) = current.take() {
                sections.push(finalize(id, title, &body));
            }
            let title = rest.trim().to_string();
            current = Some((section_id(&title), title));
            body.clear();
        } else if current.is_some() {
            body.push(raw_line);
        }
    }

    if let Some((id, title)) = current {
        sections.push(finalize(id, title, &body));
    }

    sections
}

/// Splits a document and treats an empty result as a hard error.
///
/// This is the seam the rendering collaborator calls: zero sections
/// means there is nothing to navigate, surfaced as
/// [`MarknavError::EmptyDocument`].
pub fn parse_document(markdown: &str) -> Result<Vec<Section>, MarknavError> {
    let sections = split_sections(markdown);
    if sections.is_empty() {
        return Err(MarknavError::EmptyDocument);
    }
    Ok(sections)
}
