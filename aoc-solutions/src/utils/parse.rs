//! Input parsing helpers
//!
//! Puzzle parsers build errors with `anyhow` and surface them as
//! [`ParseError::InvalidFormat`], tagged with the offending line number.

use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

use anyhow::anyhow;
use aoc_solver::ParseError;
use regex::Regex;

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+").expect("integer pattern is valid"));

/// Converts any displayable error into [`ParseError::InvalidFormat`].
pub trait ParseResultExt<T> {
    fn invalid_format(self) -> Result<T, ParseError>;
}

impl<T, E: Display> ParseResultExt<T> for Result<T, E> {
    fn invalid_format(self) -> Result<T, ParseError> {
        self.map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

/// Parses every line with `f`, reporting the first failure with its line number.
pub fn lines_with<'a, T, F>(input: &'a str, mut f: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&'a str) -> anyhow::Result<T>,
{
    input
        .trim_end()
        .lines()
        .enumerate()
        .map(|(line_idx, line)| f(line).map_err(|e| anyhow!("(line {}) {:#}", line_idx + 1, e)))
        .collect::<anyhow::Result<Vec<_>>>()
        .invalid_format()
}

/// Parses one `T` per line.
pub fn lines<T>(input: &str) -> Result<Vec<T>, ParseError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lines_with(input, |line| Ok(line.trim().parse()?))
}

/// Parses a separator-delimited list such as `3,4,3,1,2`.
pub fn separated<T>(input: &str, separator: char) -> Result<Vec<T>, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    input
        .trim()
        .split(separator)
        .map(|item| {
            item.trim()
                .parse()
                .map_err(|e| anyhow!("bad item {item:?}: {e}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()
        .invalid_format()
}

/// Every integer (with optional leading `-`) appearing in `text`, in order.
pub fn integers<T>(text: &str) -> Result<Vec<T>, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    INTEGER
        .find_iter(text)
        .map(|m| {
            m.as_str()
                .parse()
                .map_err(|e| anyhow!("bad integer {:?}: {e}", m.as_str()))
        })
        .collect::<anyhow::Result<Vec<_>>>()
        .invalid_format()
}

/// Exactly `N` integers from `text`.
pub fn integers_array<T, const N: usize>(text: &str) -> Result<[T; N], ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    let found = integers::<T>(text)?;
    let count = found.len();
    found
        .try_into()
        .map_err(|_| ParseError::InvalidFormat(format!("expected {N} integers in {text:?}, found {count}")))
}

/// Blank-line separated blocks.
pub fn blocks(input: &str) -> impl Iterator<Item = &str> {
    input.trim_end().split("\n\n").map(|block| block.trim_matches('\n'))
}

/// Splits `text` once on `separator`, failing with a helpful message.
pub fn split_pair<'a>(text: &'a str, separator: &str) -> Result<(&'a str, &'a str), ParseError> {
    text.split_once(separator)
        .ok_or_else(|| ParseError::InvalidFormat(format!("expected {separator:?} in {text:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lines_reports_line_number() {
        let err = lines::<u32>("1\n2\nx\n").unwrap_err();
        assert!(err.to_string().contains("line 3"), "{err}");
        assert_eq!(lines::<u32>("4\n5\n").unwrap(), vec![4, 5]);
    }

    #[test]
    fn test_integers() {
        assert_eq!(
            integers::<i64>("target area: x=20..30, y=-10..-5").unwrap(),
            vec![20, 30, -10, -5]
        );
        let [a, b]: [u8; 2] = integers_array("move 1 from 2").unwrap();
        assert_eq!((a, b), (1, 2));
        assert!(integers_array::<u8, 3>("move 1 from 2").is_err());
    }

    #[test]
    fn test_blocks_and_separated() {
        let parts: Vec<_> = blocks("a\nb\n\nc\n").collect();
        assert_eq!(parts, vec!["a\nb", "c"]);
        assert_eq!(separated::<u8>("3,4, 3\n", ',').unwrap(), vec![3, 4, 3]);
    }

    proptest! {
        /// Every signed integer embedded in prose comes back in order.
        #[test]
        fn integers_recovers_embedded_values(
            values in prop::collection::vec(any::<i64>(), 0..12),
            filler in "[a-z ,=:.]{1,6}",
        ) {
            let text = values.iter().map(|v| format!("{filler}{v}")).collect::<String>();
            prop_assert_eq!(integers::<i64>(&text).unwrap(), values);
        }
    }
}
