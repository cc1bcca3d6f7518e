//! Buffer transforms.
//!
//! Each transform is a pure function from the current buffer to a new one.
//! [`Transform`] names them so callers (CLI arguments, MCP tools, a UI
//! button row) can pick one by value and [`Transform::apply`] it.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TransformError;

/// One or more plain U+0020 spaces.
static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").expect("valid regex"));

/// A named buffer transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Transform {
    /// UPPERCASE every character.
    Upper,
    /// lowercase every character.
    Lower,
    /// Upper-case the first letter of each space-separated word, lower-case the rest.
    Capitalize,
    /// Lower-case everything, then upper-case the first letter of each word.
    Title,
    /// Collapse runs of spaces into one space.
    CollapseSpaces,
    /// Reverse character order.
    Reverse,
    /// Remove ASCII digits.
    RemoveNumbers,
    /// Remove everything except ASCII letters, digits and whitespace.
    RemoveSpecial,
    /// Replace the buffer with the empty string.
    Clear,
}

impl Transform {
    /// Every transform, in the order a toolbar would show them.
    pub const ALL: &[Self] = &[
        Self::Upper,
        Self::Lower,
        Self::Capitalize,
        Self::Title,
        Self::CollapseSpaces,
        Self::Reverse,
        Self::RemoveNumbers,
        Self::RemoveSpecial,
        Self::Clear,
    ];

    /// Returns the kebab-case name used on the command line and in JSON.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Capitalize => "capitalize",
            Self::Title => "title",
            Self::CollapseSpaces => "collapse-spaces",
            Self::Reverse => "reverse",
            Self::RemoveNumbers => "remove-numbers",
            Self::RemoveSpecial => "remove-special",
            Self::Clear => "clear",
        }
    }

    /// Apply this transform to `text`, returning the new buffer.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::Upper => to_upper(text),
            Self::Lower => to_lower(text),
            Self::Capitalize => capitalize(text),
            Self::Title => title_case(text),
            Self::CollapseSpaces => collapse_spaces(text),
            Self::Reverse => reverse(text),
            Self::RemoveNumbers => remove_numbers(text),
            Self::RemoveSpecial => remove_special_chars(text),
            Self::Clear => clear(text),
        }
    }

    fn available() -> String {
        Self::ALL
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transform {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| TransformError::Unknown {
                name: s.to_string(),
                available: Self::available(),
            })
    }
}

/// Upper-case the whole text.
pub fn to_upper(text: &str) -> String {
    text.to_uppercase()
}

/// Lower-case the whole text.
pub fn to_lower(text: &str) -> String {
    text.to_lowercase()
}

/// Replace every run of plain spaces with a single space.
///
/// Tabs and newlines are left alone.
pub fn collapse_spaces(text: &str) -> String {
    SPACE_RUN.replace_all(text, " ").into_owned()
}

/// Always returns the empty string.
pub fn clear(_text: &str) -> String {
    String::new()
}

/// Capitalize each space-separated word: first character upper, rest lower.
pub fn capitalize(text: &str) -> String {
    map_words(text, |word| {
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    })
}

/// Title-case the text: lower-case it, then upper-case each word's first character.
pub fn title_case(text: &str) -> String {
    map_words(&text.to_lowercase(), |word| {
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    })
}

/// Reverse the order of characters.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Remove the ASCII digits `0` through `9`.
pub fn remove_numbers(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// Keep only ASCII letters, ASCII digits and whitespace.
pub fn remove_special_chars(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect()
}

// Words are split on single spaces so runs of spaces survive the round trip.
fn map_words(text: &str, f: impl Fn(&str) -> String) -> String {
    text.split(' ').map(f).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_folding() {
        assert_eq!(to_upper("AbC"), "ABC");
        assert_eq!(to_lower("AbC"), "abc");
        assert_eq!(to_upper("straße"), "STRASSE");
    }

    #[test]
    fn upper_is_idempotent() {
        for input in ["", "AbC", "mixed Case 123", "straße"] {
            let once = to_upper(input);
            assert_eq!(to_upper(&once), once);
        }
    }

    #[test]
    fn collapse_spaces_only_touches_spaces() {
        assert_eq!(collapse_spaces("a  b   c"), "a b c");
        assert_eq!(collapse_spaces("a\t\tb\n\nc"), "a\t\tb\n\nc");
        assert_eq!(collapse_spaces("  lead and trail  "), " lead and trail ");
        assert_eq!(collapse_spaces(""), "");
    }

    #[test]
    fn collapse_spaces_is_idempotent() {
        for input in ["a  b   c", " \t  x  ", "none"] {
            let once = collapse_spaces(input);
            assert_eq!(collapse_spaces(&once), once);
        }
    }

    #[test]
    fn clear_ignores_input() {
        assert_eq!(clear("anything at all"), "");
        assert_eq!(clear(""), "");
    }

    #[test]
    fn capitalize_words() {
        assert_eq!(capitalize("hELLO wORLD"), "Hello World");
        assert_eq!(capitalize("a  b"), "A  B");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn title_case_keeps_rest_lowercase() {
        assert_eq!(title_case("the QUICK brown fox"), "The Quick Brown Fox");
        assert_eq!(title_case("line one\nline two"), "Line One\nline Two");
    }

    #[test]
    fn reverse_chars() {
        assert_eq!(reverse("abc"), "cba");
        assert_eq!(reverse("héllo"), "olléh");
    }

    #[test]
    fn remove_numbers_and_specials() {
        assert_eq!(remove_numbers("r2d2 c3po"), "rd cpo");
        assert_eq!(remove_special_chars("Hi, there! #1\tok?"), "Hi there 1\tok");
        assert_eq!(remove_special_chars("café"), "caf");
    }

    #[test]
    fn apply_dispatches() {
        assert_eq!(Transform::Upper.apply("AbC"), "ABC");
        assert_eq!(Transform::Lower.apply("AbC"), "abc");
        assert_eq!(Transform::CollapseSpaces.apply("a  b"), "a b");
        assert_eq!(Transform::Clear.apply("gone"), "");
    }

    #[test]
    fn parse_by_name() {
        for t in Transform::ALL {
            assert_eq!(t.as_str().parse::<Transform>().unwrap(), *t);
        }
        assert_eq!("COLLAPSE_SPACES".parse::<Transform>().unwrap(), Transform::CollapseSpaces);
    }

    #[test]
    fn unknown_name_lists_available() {
        let err = "shout".parse::<Transform>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("unknown transform: shout"));
        assert!(msg.contains("collapse-spaces"));
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&Transform::RemoveSpecial).unwrap();
        assert_eq!(json, "\"remove-special\"");
    }
}
