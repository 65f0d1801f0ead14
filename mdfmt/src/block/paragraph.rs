use std::fmt;

/// A run of text lines reflowed onto a single line.
/// Hard line breaks survive as embedded `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub text: String,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Paragraph { text: text.into() }
    }

    /// Reflow `\n`-separated lines into a paragraph.
    ///
    /// A line ending in two or more spaces forces a line break; every other
    /// line is joined to the next with a single space. Runs of spaces are
    /// collapsed afterwards.
    pub fn parse(input: &str) -> Paragraph {
        let mut buffer = String::with_capacity(input.len());
        for line in input.split('\n') {
            buffer.push_str(line.trim());
            if line.ends_with("  ") {
                buffer.push('\n');
            } else {
                buffer.push(' ');
            }
        }

        let text = buffer
            .split(' ')
            .filter(|token| !token.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Paragraph { text }
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Hello   world\nfoo", "Hello world foo")]
    #[case("  leading and trailing  ", "leading and trailing\n")]
    #[case("one\n   two\nthree   ", "one two three\n")]
    #[case("single", "single")]
    #[case("tabs\tstay\tput", "tabs\tstay\tput")]
    fn reflows_lines(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Paragraph::parse(input).text, expected);
    }

    #[test]
    fn keeps_hard_breaks() {
        assert_eq!(
            Paragraph::parse("Line one  \nLine two").text,
            "Line one\nLine two"
        );
        assert_eq!(
            Paragraph::parse("a   \n  b    \nc").text,
            "a\nb\nc"
        );
    }

    #[test]
    fn single_trailing_space_is_soft() {
        assert_eq!(Paragraph::parse("soft \nwrap").text, "soft wrap");
    }

    #[test]
    fn carriage_return_defeats_hard_break() {
        assert_eq!(
            Paragraph::parse("Line one  \r\nLine two").text,
            "Line one Line two"
        );
    }

    #[test]
    fn whitespace_only_hard_break_line_yields_empty_segment() {
        // "a " + "\n" + "b " leaves the space before the break in place.
        assert_eq!(Paragraph::parse("a\n    \nb").text, "a \nb");
    }
}
