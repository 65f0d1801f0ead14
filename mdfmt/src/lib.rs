pub mod block;
pub mod document;
pub mod parser;

pub use crate::block::{Block, BlockKind};
pub use crate::document::Document;

/// Parse source text into a Document.
///
/// Never fails: malformed heading lines are recovered as paragraphs and
/// any other non-blank text becomes a paragraph or list.
pub fn parse(source: &str) -> Document {
    parser::Parser::new(source, 0).parse()
}

/// Parse and re-render source text in canonical form.
pub fn format(source: &str) -> String {
    parse(source).to_string()
}
