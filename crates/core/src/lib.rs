#![deny(missing_docs)]
//! Marknav core: section splitting and line-oriented Markdown-to-HTML rewriting.

/// Core error type.
pub mod error;
/// Link-item marker model for the card syntax.
pub mod links;
/// Section records and the level-2 heading splitter.
pub mod section;
/// Section identifier generation.
pub mod slug;
/// Pipe-table sub-parser.
pub mod table;
/// Ordered Markdown-to-HTML rewrite pipeline.
pub mod transform;

pub use error::MarknavError;
pub use links::{LinkItem, extract_link_items, strip_link_items};
pub use section::{Section, parse_document, split_sections};
pub use slug::section_id;
pub use table::render_tables;
pub use transform::render_html;
