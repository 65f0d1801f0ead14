use std::fmt;

/// Why a `#`-prefixed line was rejected as a heading.
/// The scanner recovers from every variant by treating the line as text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockParseError {
    #[error("heading marker is not followed by a space")]
    MissingSpace,
    #[error("heading marker is empty")]
    EmptyMarker,
    #[error("heading marker contains `{0}`, expected only `#`")]
    InvalidMarker(char),
}

/// An ATX-style heading: `#` repeated `level` times, a space, then text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Everything after the first space, verbatim.
    pub text: String,
    /// Number of `#` characters in the marker, always >= 1.
    pub level: usize,
}

impl Heading {
    pub fn new(text: impl Into<String>, level: usize) -> Self {
        Heading {
            text: text.into(),
            level,
        }
    }

    /// Parse a single line of the form `<1+ "#"> <space> <text>`.
    pub fn parse(line: &str) -> Result<Heading, BlockParseError> {
        let (marker, text) = line
            .split_once(' ')
            .ok_or(BlockParseError::MissingSpace)?;

        if marker.is_empty() {
            return Err(BlockParseError::EmptyMarker);
        }
        if let Some(c) = marker.chars().find(|&c| c != '#') {
            return Err(BlockParseError::InvalidMarker(c));
        }

        Ok(Heading {
            text: text.to_string(),
            level: marker.len(),
        })
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", "#".repeat(self.level), self.text)
    }
}
