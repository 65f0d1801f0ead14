pub mod heading;
pub mod list;
pub mod paragraph;

use std::fmt;

pub use heading::{BlockParseError, Heading};
pub use list::UnorderedList;
pub use paragraph::Paragraph;

/// A top-level structural unit of a document.
/// Each variant owns its payload; rendering is per-variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(Heading),
    Paragraph(Paragraph),
    UnorderedList(UnorderedList),
}

/// The kind of a block, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Heading,
    Paragraph,
    UnorderedList,
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Heading(_) => BlockKind::Heading,
            Block::Paragraph(_) => BlockKind::Paragraph,
            Block::UnorderedList(_) => BlockKind::UnorderedList,
        }
    }
}

impl BlockKind {
    /// Short name used in fixtures and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Heading => "heading",
            BlockKind::Paragraph => "paragraph",
            BlockKind::UnorderedList => "list",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Heading(heading) => heading.fmt(f),
            Block::Paragraph(paragraph) => paragraph.fmt(f),
            Block::UnorderedList(list) => list.fmt(f),
        }
    }
}

impl From<Heading> for Block {
    fn from(heading: Heading) -> Self {
        Block::Heading(heading)
    }
}

impl From<Paragraph> for Block {
    fn from(paragraph: Paragraph) -> Self {
        Block::Paragraph(paragraph)
    }
}

impl From<UnorderedList> for Block {
    fn from(list: UnorderedList) -> Self {
        Block::UnorderedList(list)
    }
}
