use std::collections::HashMap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;
use crate::utils::point::Point;

/// Hydrothermal Venture
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 5, tags = ["2021", "geometry"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub struct Line {
    from: Point,
    to: Point,
}

impl Line {
    fn is_diagonal(&self) -> bool {
        self.from.x != self.to.x && self.from.y != self.to.y
    }

    /// Every point covered, endpoints included. Lines are axis-aligned or at 45 degrees.
    fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let step = (self.to - self.from).signum();
        let len = (self.to - self.from).abs().max_element();
        let from = self.from;
        (0..=len).map(move |i| from + step * i)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Line>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|line| {
                let [x1, y1, x2, y2] = parse::integers_array(line)?;
                let line = Line {
                    from: Point::new(x1, y1),
                    to: Point::new(x2, y2),
                };
                let delta = (line.to - line.from).abs();
                if delta.x != 0 && delta.y != 0 && delta.x != delta.y {
                    return Err(ParseError::InvalidFormat(format!("line is not at 45 degrees: {line:?}")));
                }
                Ok(line)
            })
            .collect()
    }
}

fn overlaps<'a>(lines: impl Iterator<Item = &'a Line>) -> usize {
    let mut covered: HashMap<Point, u32> = HashMap::new();
    for p in lines.flat_map(Line::points) {
        *covered.entry(p).or_default() += 1;
    }
    covered.values().filter(|&&n| n >= 2).count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(overlaps(shared.iter().filter(|l| !l.is_diagonal())).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(overlaps(shared.iter()).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
0,9 -> 5,9
8,0 -> 0,8
9,4 -> 3,4
2,2 -> 2,1
7,0 -> 7,4
6,4 -> 2,0
0,9 -> 2,9
3,4 -> 1,4
0,0 -> 8,8
5,5 -> 8,2
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "5");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "12");
    }

    #[test]
    fn test_rejects_skewed_line() {
        assert!(Solver::parse("0,0 -> 2,1").is_err());
    }
}
