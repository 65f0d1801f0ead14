use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Optional leading spaces, a marker, one space, then anything.
static LIST_ITEM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ *[-*+] .*$").expect("list item pattern is valid"));

/// A flat bulleted list. Items keep their own marker character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnorderedList {
    /// Each item is `<marker> <content>` with indentation removed.
    pub items: Vec<String>,
}

impl UnorderedList {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        UnorderedList {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a raw line is an unordered list item.
    pub fn is_item(line: &str) -> bool {
        LIST_ITEM_REGEX.is_match(line)
    }

    /// Parse `\n`-separated lines that all satisfy [`UnorderedList::is_item`].
    pub fn parse(input: &str) -> UnorderedList {
        let items = input.split('\n').map(normalize_item).collect();
        UnorderedList { items }
    }

    /// The marker of each item, in order.
    pub fn markers(&self) -> impl Iterator<Item = char> + '_ {
        self.items.iter().filter_map(|item| item.chars().next())
    }
}

fn normalize_item(line: &str) -> String {
    let line = line.trim();
    // "- " trims down to the bare marker.
    let (marker, content) = line.split_once(' ').unwrap_or((line, ""));
    format!("{} {}", marker, content)
}

impl fmt::Display for UnorderedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.items.join("\n"))
    }
}
