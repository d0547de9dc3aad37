use std::ops::RangeInclusive;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Ticket Translation
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 16, tags = ["2020", "constraint-solving"])]
pub struct Solver;

#[derive(Debug)]
pub struct Field<'a> {
    name: &'a str,
    ranges: [RangeInclusive<u32>; 2],
}

impl Field<'_> {
    fn accepts(&self, value: u32) -> bool {
        self.ranges.iter().any(|r| r.contains(&value))
    }
}

#[derive(Debug)]
pub struct Notes<'a> {
    fields: Vec<Field<'a>>,
    mine: Vec<u32>,
    nearby: Vec<Vec<u32>>,
}

fn parse_range(text: &str) -> anyhow::Result<RangeInclusive<u32>> {
    let (low, high) = text
        .trim()
        .split_once('-')
        .ok_or_else(|| anyhow!("bad range {text:?}"))?;
    Ok(low.parse()?..=high.parse()?)
}

fn parse_field(line: &str) -> anyhow::Result<Field<'_>> {
    let (name, ranges) = line
        .split_once(": ")
        .ok_or_else(|| anyhow!("expected '<name>: <range> or <range>'"))?;
    let (first, second) = ranges
        .split_once(" or ")
        .ok_or_else(|| anyhow!("expected two ranges"))?;
    Ok(Field {
        name,
        ranges: [parse_range(first)?, parse_range(second)?],
    })
}

fn parse_tickets(block: &str, header: &str) -> Result<Vec<Vec<u32>>, ParseError> {
    let body = block
        .strip_prefix(header)
        .ok_or_else(|| ParseError::InvalidFormat(format!("expected {header:?} section")))?;
    body.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse::separated(line, ','))
        .collect()
}

impl AocParser for Solver {
    type SharedData<'a> = Notes<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut blocks = parse::blocks(input);
        let mut section = || {
            blocks
                .next()
                .ok_or_else(|| ParseError::MissingData("expected three sections".into()))
        };
        let fields = parse::lines_with(section()?, parse_field)?;
        let mine = parse_tickets(section()?, "your ticket:")?
            .pop()
            .ok_or_else(|| ParseError::MissingData("missing your ticket".into()))?;
        let nearby = parse_tickets(section()?, "nearby tickets:")?;
        Ok(Notes { fields, mine, nearby })
    }
}

impl Notes<'_> {
    fn invalid_values<'t>(&'t self, ticket: &'t [u32]) -> impl Iterator<Item = u32> + 't {
        ticket
            .iter()
            .copied()
            .filter(|&v| !self.fields.iter().any(|f| f.accepts(v)))
    }

    /// Field name for each ticket position, resolved by repeatedly fixing
    /// the position that only one remaining field fits.
    fn assign_fields(&self) -> anyhow::Result<Vec<&str>> {
        let valid: Vec<&Vec<u32>> = self
            .nearby
            .iter()
            .filter(|t| t.len() == self.fields.len() && self.invalid_values(t).next().is_none())
            .collect();
        // candidates[pos] is a bitmask of fields that accept every value at pos
        let mut candidates: Vec<u64> = (0..self.fields.len())
            .map(|pos| {
                self.fields
                    .iter()
                    .enumerate()
                    .filter(|(_, f)| valid.iter().all(|t| f.accepts(t[pos])))
                    .fold(0, |mask, (i, _)| mask | 1 << i)
            })
            .collect();
        let mut assigned = vec![None; self.fields.len()];
        for _ in 0..self.fields.len() {
            let pos = candidates
                .iter()
                .position(|c| c.count_ones() == 1)
                .ok_or_else(|| anyhow!("field assignment is ambiguous"))?;
            let field = candidates[pos].trailing_zeros() as usize;
            assigned[pos] = Some(self.fields[field].name);
            for c in &mut candidates {
                *c &= !(1 << field);
            }
        }
        assigned
            .into_iter()
            .map(|name| name.ok_or_else(|| anyhow!("field assignment is incomplete")))
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let rate: u32 = shared
            .nearby
            .iter()
            .flat_map(|t| shared.invalid_values(t))
            .sum();
        Ok(rate.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let names = shared
            .assign_fields()
            .map_err(|e| SolveError::failed(e.to_string()))?;
        let product: u64 = names
            .iter()
            .zip(&shared.mine)
            .filter(|(name, _)| name.starts_with("departure"))
            .map(|(_, &v)| u64::from(v))
            .product();
        Ok(product.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
class: 1-3 or 5-7
row: 6-11 or 33-44
seat: 13-40 or 45-50

your ticket:
7,1,14

nearby tickets:
7,3,47
40,4,50
55,2,20
38,6,12
";

    const ASSIGNMENT: &str = "\
class: 0-1 or 4-19
row: 0-5 or 8-19
seat: 0-13 or 16-19

your ticket:
11,12,13

nearby tickets:
3,9,18
15,1,5
5,14,9
";

    #[test]
    fn test_error_rate() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "71");
    }

    #[test]
    fn test_assign_fields() {
        let notes = Solver::parse(ASSIGNMENT).unwrap();
        assert_eq!(notes.assign_fields().unwrap(), vec!["row", "class", "seat"]);
        // no departure fields, so the product is empty
        assert_eq!(solve::<Solver>(ASSIGNMENT, 2), "1");
    }
}
