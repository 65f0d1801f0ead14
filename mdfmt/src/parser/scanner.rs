use std::ops::Range;

use log::{debug, trace};

use crate::block::{Heading, Paragraph, UnorderedList};
use crate::document::Document;
use crate::parser::error::ParseError;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Segment source text into blocks, collecting heading-fallback warnings.
pub fn scan_blocks(source: &str, file_id: usize) -> (Document, Vec<ParseError>) {
    let mut state = ScanState::new(source, file_id);
    state.process_lines();
    state.finalize()
}

// ---------------------------------------------------------------------------
// Scan state
// ---------------------------------------------------------------------------

/// A source line without its `\n`, plus its byte offset in the source.
struct Line<'a> {
    text: &'a str,
    start: usize,
}

impl Line<'_> {
    fn span(&self) -> Range<usize> {
        self.start..self.start + self.text.len()
    }

    fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

struct ScanState<'a> {
    lines: Vec<Line<'a>>,
    file_id: usize,
    document: Document,
    warnings: Vec<ParseError>,
}

impl<'a> ScanState<'a> {
    fn new(source: &'a str, file_id: usize) -> Self {
        ScanState {
            lines: split_lines(source),
            file_id,
            document: Document::empty(),
            warnings: Vec::new(),
        }
    }

    fn process_lines(&mut self) {
        let mut i = 0;

        while i < self.lines.len() {
            let line = &self.lines[i];

            if line.is_blank() {
                i += 1;
                continue;
            }

            // Headings take precedence, but a malformed one falls through.
            if line.text.starts_with('#') {
                match Heading::parse(line.text) {
                    Ok(heading) => {
                        debug!("line {}: heading level {}", i + 1, heading.level);
                        self.document.push(heading);
                        i += 1;
                        continue;
                    }
                    Err(err) => {
                        trace!("line {}: not a heading ({}), falling through", i + 1, err);
                        let warning = ParseError::heading_fallback(&err, line.span(), self.file_id);
                        self.warnings.push(warning);
                    }
                }
            }

            let end = self.run_end(i, |line| UnorderedList::is_item(line.text));
            if end > i {
                debug!("lines {}..={}: unordered list", i + 1, end);
                let list = UnorderedList::parse(&self.join(i..end));
                self.document.push(list);
                i = end;
                continue;
            }

            let end = self.run_end(i, |line| !line.is_blank());
            debug!("lines {}..={}: paragraph", i + 1, end);
            let paragraph = Paragraph::parse(&self.join(i..end));
            self.document.push(paragraph);
            i = end;
        }
    }

    /// First index at or after `start` whose line does not satisfy `pred`.
    fn run_end(&self, start: usize, pred: impl Fn(&Line<'a>) -> bool) -> usize {
        self.lines[start..]
            .iter()
            .position(|line| !pred(line))
            .map_or(self.lines.len(), |offset| start + offset)
    }

    fn join(&self, range: Range<usize>) -> String {
        self.lines[range]
            .iter()
            .map(|line| line.text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn finalize(self) -> (Document, Vec<ParseError>) {
        (self.document, self.warnings)
    }
}

/// Split strictly on `\n`; a `\r` stays part of its line.
fn split_lines(source: &str) -> Vec<Line<'_>> {
    let mut start = 0;
    source
        .split('\n')
        .map(|text| {
            let line = Line { text, start };
            start += text.len() + 1;
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;
    use pretty_assertions::assert_eq;

    fn scan(source: &str) -> Vec<Block> {
        scan_blocks(source, 0).0.into_iter().collect()
    }

    #[test]
    fn empty_and_blank_input_has_no_blocks() {
        assert!(scan("").is_empty());
        assert!(scan("\n\n   \n\t\n").is_empty());
    }

    #[test]
    fn mixed_document() {
        assert_eq!(
            scan("# Title\n\nSome text.\n\n- a\n- b"),
            vec![
                Block::from(Heading::new("Title", 1)),
                Block::from(Paragraph::new("Some text.")),
                Block::from(UnorderedList::new(["- a", "- b"])),
            ]
        );
    }

    #[test]
    fn lone_hash_becomes_paragraph() {
        assert_eq!(scan("#"), vec![Block::from(Paragraph::new("#"))]);
    }

    #[test]
    fn failed_heading_absorbs_following_lines() {
        assert_eq!(
            scan("#tag\n- not a list\nmore"),
            vec![Block::from(Paragraph::new("#tag - not a list more"))]
        );
    }

    #[test]
    fn heading_is_always_a_single_line() {
        assert_eq!(
            scan("# One\n## Two\ntext"),
            vec![
                Block::from(Heading::new("One", 1)),
                Block::from(Heading::new("Two", 2)),
                Block::from(Paragraph::new("text")),
            ]
        );
    }

    #[test]
    fn list_run_ends_at_first_non_item() {
        assert_eq!(
            scan("- a\n  * b\ntrailing text\n+ c"),
            vec![
                Block::from(UnorderedList::new(["- a", "* b"])),
                Block::from(Paragraph::new("trailing text + c")),
            ]
        );
    }

    #[test]
    fn paragraph_swallows_list_lines_until_blank() {
        assert_eq!(
            scan("intro\n- one\n\n- two"),
            vec![
                Block::from(Paragraph::new("intro - one")),
                Block::from(UnorderedList::new(["- two"])),
            ]
        );
    }

    #[test]
    fn indented_hash_is_not_tried_as_heading() {
        let (doc, warnings) = scan_blocks("  # Title", 0);
        assert_eq!(doc.blocks(), &[Block::from(Paragraph::new("# Title"))]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn fallback_warning_spans_offending_line() {
        let source = "# ok\n\n#bad\n";
        let (_, warnings) = scan_blocks(source, 7);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].span, 6..10);
        assert_eq!(&source[warnings[0].span.clone()], "#bad");
        assert_eq!(warnings[0].file_id, 7);
        assert_eq!(warnings[0].line_number(source), 3);
    }

    #[test]
    fn carriage_returns_are_content() {
        assert_eq!(
            scan("# Title\r\n\r\nbody  \r\nnext\r\n"),
            vec![
                Block::from(Heading::new("Title\r", 1)),
                Block::from(Paragraph::new("body next")),
            ]
        );
    }
}
