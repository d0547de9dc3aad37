use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Seven Segment Search
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 8, tags = ["2021", "deduction"])]
pub struct Solver;

/// Segments `a..=g` as bits 0..=6.
type Segments = u8;

#[derive(Debug)]
pub struct Entry {
    patterns: [Segments; 10],
    output: [Segments; 4],
}

fn segments(word: &str) -> anyhow::Result<Segments> {
    word.bytes().try_fold(0, |acc, b| {
        ensure!((b'a'..=b'g').contains(&b), "bad segment {:?}", b as char);
        Ok(acc | 1 << (b - b'a'))
    })
}

fn words<const N: usize>(text: &str) -> anyhow::Result<[Segments; N]> {
    let found = text.split_whitespace().map(segments).collect::<anyhow::Result<Vec<_>>>()?;
    let count = found.len();
    found
        .try_into()
        .map_err(|_| anyhow!("expected {N} patterns, found {count}"))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Entry>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines_with(input, |line| {
            let (patterns, output) = line.split_once('|').ok_or_else(|| anyhow!("missing '|'"))?;
            Ok(Entry {
                patterns: words(patterns)?,
                output: words(output)?,
            })
        })
    }
}

fn lit(s: Segments) -> u32 {
    s.count_ones()
}

impl Entry {
    /// Works out which pattern shows which digit, using only the patterns
    /// for 1 and 4 as references.
    fn decode(&self) -> Option<u32> {
        let with_len = |n| self.patterns.iter().copied().find(|&p| lit(p) == n);
        let one = with_len(2)?;
        let four = with_len(4)?;
        let digit = |p: Segments| -> Option<u32> {
            Some(match (lit(p), lit(p & one), lit(p & four)) {
                (2, _, _) => 1,
                (3, _, _) => 7,
                (4, _, _) => 4,
                (7, _, _) => 8,
                (5, 2, _) => 3,
                (5, _, 3) => 5,
                (5, _, 2) => 2,
                (6, _, 4) => 9,
                (6, 2, _) => 0,
                (6, 1, _) => 6,
                _ => return None,
            })
        };
        self.output
            .iter()
            .try_fold(0, |acc, &p| Some(acc * 10 + digit(p)?))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let easy = shared
            .iter()
            .flat_map(|d| d.output)
            .filter(|&p| matches!(lit(p), 2 | 3 | 4 | 7))
            .count();
        Ok(easy.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .map(|d| d.decode().ok_or_else(|| SolveError::failed("inconsistent wiring")))
            .sum::<Result<u32, _>>()
            .map(|total| total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf
acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | ab dab eafb acedgfb
";

    #[test]
    fn test_decode() {
        let entries = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(entries[0].decode(), Some(5353));
        assert_eq!(entries[1].decode(), Some(1748));
    }

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "4");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "7101");
    }
}
