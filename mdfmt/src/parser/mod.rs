pub mod error;
mod scanner;

pub use error::ParseError;

use crate::document::Document;

/// Parser entry point.
pub struct Parser<'a> {
    source: &'a str,
    file_id: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, file_id: usize) -> Self {
        Parser { source, file_id }
    }

    /// Parse the source into a Document. Total for every input.
    pub fn parse(&self) -> Document {
        self.parse_with_diagnostics().0
    }

    /// Parse the source and also return a warning for every line the
    /// scanner had to reinterpret. The Document is the same as [`Parser::parse`].
    pub fn parse_with_diagnostics(&self) -> (Document, Vec<ParseError>) {
        scanner::scan_blocks(self.source, self.file_id)
    }
}
