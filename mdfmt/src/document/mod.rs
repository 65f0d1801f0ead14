use std::fmt;
use std::slice;

use crate::block::Block;

/// An ordered sequence of top-level blocks.
/// Block order is document order and is preserved when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn empty() -> Self {
        Document { blocks: Vec::new() }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Canonical text: blocks separated by one blank line.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub(crate) fn push(&mut self, block: impl Into<Block>) {
        self.blocks.push(block.into());
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{}", block)?;
        }
        Ok(())
    }
}

impl FromIterator<Block> for Document {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Document {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl IntoIterator for Document {
    type Item = Block;
    type IntoIter = std::vec::IntoIter<Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Heading, Paragraph, UnorderedList};

    #[test]
    fn empty_document_renders_nothing() {
        assert_eq!(Document::empty().render(), "");
        assert!(Document::default().is_empty());
    }

    #[test]
    fn blocks_are_joined_by_one_blank_line() {
        let doc: Document = vec![
            Block::from(Heading::new("Title", 1)),
            Block::from(Paragraph::new("Some text.")),
            Block::from(UnorderedList::new(["- a", "- b"])),
        ]
        .into_iter()
        .collect();

        assert_eq!(doc.len(), 3);
        assert_eq!(doc.render(), "# Title\n\nSome text.\n\n- a\n- b");
    }
}
