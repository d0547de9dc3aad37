use std::collections::HashMap;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::{Itertools, MinMaxResult};

use crate::utils::parse;

/// All in a Single Night
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 9, tags = ["2015", "permutations", "tsp"])]
pub struct Solver;

pub struct Routes {
    /// `dist[a][b]`, `None` when the two cities are not connected.
    dist: Vec<Vec<Option<u32>>>,
    lengths: Option<(u32, u32)>,
}

impl Routes {
    /// Shortest and longest route visiting every city once.
    fn lengths(&mut self) -> Result<(u32, u32), SolveError> {
        if let Some(lengths) = self.lengths {
            return Ok(lengths);
        }
        let cities = self.dist.len();
        let totals = (0..cities).permutations(cities).filter_map(|route| {
            route
                .iter()
                .tuple_windows()
                .map(|(&a, &b)| self.dist[a][b])
                .sum::<Option<u32>>()
        });
        let lengths = match totals.minmax() {
            MinMaxResult::NoElements => return Err(SolveError::failed("no route visits every city")),
            MinMaxResult::OneElement(len) => (len, len),
            MinMaxResult::MinMax(min, max) => (min, max),
        };
        self.lengths = Some(lengths);
        Ok(lengths)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Routes;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let legs = parse::lines_with(input, |line| {
            let (cities, dist) = line
                .split_once(" = ")
                .ok_or_else(|| anyhow!("expected '<a> to <b> = <distance>'"))?;
            let (a, b) = cities
                .split_once(" to ")
                .ok_or_else(|| anyhow!("expected '<a> to <b>'"))?;
            Ok((a, b, dist.parse::<u32>()?))
        })?;
        let mut ids: HashMap<&str, usize> = HashMap::new();
        for &(a, b, _) in &legs {
            for city in [a, b] {
                let next = ids.len();
                ids.entry(city).or_insert(next);
            }
        }
        let mut dist = vec![vec![None; ids.len()]; ids.len()];
        for (a, b, d) in legs {
            let (a, b) = (ids[a], ids[b]);
            dist[a][b] = Some(d);
            dist[b][a] = Some(d);
        }
        Ok(Routes { dist, lengths: None })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.lengths()?.0.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.lengths()?.1.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
London to Dublin = 464
London to Belfast = 518
Dublin to Belfast = 141
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "605");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "982");
    }
}
