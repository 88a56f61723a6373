//! Core error type.
//!
//! Malformed Markdown never fails: unmatched syntax degrades into literal
//! paragraph text. The only condition surfaced as an error is a document
//! that produced no sections at all.

use thiserror::Error;

/// Errors raised at the parsing seam.
#[derive(Debug, Error)]
pub enum MarknavError {
    /// Parsing completed but yielded no sections (no level-2 headings,
    /// or empty input).
    #[error("no sections found: the document contains no level-2 (`## `) headings")]
    EmptyDocument,
}
