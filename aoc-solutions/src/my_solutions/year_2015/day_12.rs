use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::ParseResultExt;

/// JSAbacusFramework.io
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 12, tags = ["2015", "parsing"])]
pub struct Solver;

/// The subset of JSON the accounting documents use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Json<'a> {
    Number(i64),
    Text(&'a str),
    Array(Vec<Json<'a>>),
    Object(Vec<(&'a str, Json<'a>)>),
}

struct Reader<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn expect(&mut self, byte: u8) -> anyhow::Result<()> {
        match self.peek() {
            Some(b) if b == byte => {
                self.pos += 1;
                Ok(())
            }
            other => bail!(
                "expected {:?} at {}, found {:?}",
                byte as char,
                self.pos,
                other.map(char::from)
            ),
        }
    }

    fn string(&mut self) -> anyhow::Result<&'a str> {
        self.expect(b'"')?;
        let rest = &self.text[self.pos..];
        let end = rest.find('"').ok_or_else(|| anyhow!("unterminated string"))?;
        self.pos += end + 1;
        Ok(&rest[..end])
    }

    /// Items of a `[...]` or `{...}` list; `item` reads one entry.
    fn list<T>(
        &mut self,
        open: u8,
        close: u8,
        mut item: impl FnMut(&mut Self) -> anyhow::Result<T>,
    ) -> anyhow::Result<Vec<T>> {
        self.expect(open)?;
        let mut items = Vec::new();
        if self.peek() == Some(close) {
            self.pos += 1;
            return Ok(items);
        }
        loop {
            items.push(item(self)?);
            match self.peek() {
                Some(b',') => self.pos += 1,
                _ => {
                    self.expect(close)?;
                    return Ok(items);
                }
            }
        }
    }

    fn value(&mut self) -> anyhow::Result<Json<'a>> {
        match self.peek() {
            Some(b'"') => Ok(Json::Text(self.string()?)),
            Some(b'[') => Ok(Json::Array(self.list(b'[', b']', Self::value)?)),
            Some(b'{') => Ok(Json::Object(self.list(b'{', b'}', |r| {
                let key = r.string()?;
                r.expect(b':')?;
                Ok((key, r.value()?))
            })?)),
            Some(b'-' | b'0'..=b'9') => {
                let rest = &self.text[self.pos..];
                let len = rest
                    .char_indices()
                    .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && c == '-')))
                    .map_or(rest.len(), |(i, _)| i);
                self.pos += len;
                Ok(Json::Number(rest[..len].parse()?))
            }
            other => bail!("unexpected {:?} at {}", other.map(char::from), self.pos),
        }
    }
}

fn parse_json(text: &str) -> anyhow::Result<Json<'_>> {
    let mut reader = Reader { text, pos: 0 };
    let value = reader.value()?;
    if reader.pos != text.len() {
        bail!("trailing input at {}", reader.pos);
    }
    Ok(value)
}

/// Sum of every number, skipping objects with a `"red"` value when `skip_red` is set.
fn total(value: &Json<'_>, skip_red: bool) -> i64 {
    match value {
        Json::Number(n) => *n,
        Json::Text(_) => 0,
        Json::Array(items) => items.iter().map(|v| total(v, skip_red)).sum(),
        Json::Object(fields) => {
            if skip_red && fields.iter().any(|(_, v)| *v == Json::Text("red")) {
                0
            } else {
                fields.iter().map(|(_, v)| total(v, skip_red)).sum()
            }
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Json<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_json(input.trim()).invalid_format()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    #[test]
    fn test_all_numbers() {
        assert_eq!(solve::<Solver>("[1,2,3]", 1), "6");
        assert_eq!(solve::<Solver>(r#"{"a":2,"b":4}"#, 1), "6");
        assert_eq!(solve::<Solver>(r#"{"a":{"b":4},"c":-1}"#, 1), "3");
        assert_eq!(solve::<Solver>(r#"{"a":[-1,1]}"#, 1), "0");
        assert_eq!(solve::<Solver>("[]", 1), "0");
    }

    #[test]
    fn test_skip_red() {
        assert_eq!(solve::<Solver>(r#"[1,{"c":"red","b":2},3]"#, 2), "4");
        assert_eq!(solve::<Solver>(r#"{"d":"red","e":[1,2,3,4],"f":5}"#, 2), "0");
        assert_eq!(solve::<Solver>(r#"[1,"red",5]"#, 2), "6");
    }

    #[test]
    fn test_malformed() {
        assert!(parse_json("[1,2").is_err());
        assert!(parse_json(r#"{"a" 1}"#).is_err());
    }
}
