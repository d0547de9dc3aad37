use std::collections::HashMap;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Passage Pathing
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 12, tags = ["2021", "graph", "dfs"])]
pub struct Solver;

/// Caves are numbered in order of first appearance; visited sets are bitmasks.
#[derive(Debug)]
pub struct Caves {
    neighbors: Vec<Vec<usize>>,
    small: Vec<bool>,
    start: usize,
    end: usize,
}

impl Caves {
    fn id<'a>(&mut self, ids: &mut HashMap<&'a str, usize>, name: &'a str) -> usize {
        *ids.entry(name).or_insert_with(|| {
            self.neighbors.push(Vec::new());
            self.small.push(name.chars().all(|c| c.is_ascii_lowercase()));
            self.small.len() - 1
        })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Caves;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let edges = parse::lines_with(input, |line| {
            line.split_once('-').ok_or_else(|| anyhow!("expected 'a-b'"))
        })?;
        let mut ids = HashMap::new();
        let mut caves = Caves {
            neighbors: Vec::new(),
            small: Vec::new(),
            start: 0,
            end: 0,
        };
        for (a, b) in edges {
            let (a, b) = (caves.id(&mut ids, a), caves.id(&mut ids, b));
            caves.neighbors[a].push(b);
            caves.neighbors[b].push(a);
        }
        caves.start = caves.id(&mut ids, "start");
        caves.end = caves.id(&mut ids, "end");
        if caves.small.len() > 64 {
            return Err(ParseError::InvalidFormat(format!("too many caves: {}", caves.small.len())));
        }
        if caves.neighbors[caves.start].is_empty() {
            return Err(ParseError::MissingData("start is not connected".into()));
        }
        Ok(caves)
    }
}

impl Caves {
    fn paths(&self, at: usize, visited: u64, revisit_left: bool) -> usize {
        if at == self.end {
            return 1;
        }
        self.neighbors[at]
            .iter()
            .map(|&next| {
                let seen = visited & 1 << next != 0;
                if next == self.start {
                    0
                } else if !self.small[next] || !seen {
                    let visited = if self.small[next] { visited | 1 << next } else { visited };
                    self.paths(next, visited, revisit_left)
                } else if revisit_left {
                    self.paths(next, visited, false)
                } else {
                    0
                }
            })
            .sum()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.paths(shared.start, 1 << shared.start, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.paths(shared.start, 1 << shared.start, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
start-A
start-b
A-c
A-b
b-d
A-end
b-end
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "10");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "36");
    }
}
