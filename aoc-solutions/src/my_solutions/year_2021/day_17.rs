use std::ops::RangeInclusive;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Trick Shot
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 17, tags = ["2021", "simulation", "brute-force"])]
pub struct Solver;

#[derive(Debug)]
pub struct Target {
    x: RangeInclusive<i32>,
    y: RangeInclusive<i32>,
    /// Peak heights of every launch that lands in the target.
    hits: Option<Vec<i32>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Target;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let [x1, x2, y1, y2] = parse::integers_array::<i32, 4>(input)?;
        if x1.min(x2) < 0 || y1.max(y2) >= 0 {
            return Err(ParseError::InvalidFormat(
                "target must be right of and below the launcher".into(),
            ));
        }
        Ok(Target {
            x: x1.min(x2)..=x1.max(x2),
            y: y1.min(y2)..=y1.max(y2),
            hits: None,
        })
    }
}

impl Target {
    /// Peak height of a launch with velocity `(vx, vy)` if it ever lands inside.
    fn launch(&self, mut vx: i32, mut vy: i32) -> Option<i32> {
        let (mut x, mut y, mut peak) = (0, 0, 0);
        while x <= *self.x.end() && y >= *self.y.start() {
            if self.x.contains(&x) && self.y.contains(&y) {
                return Some(peak);
            }
            x += vx;
            y += vy;
            peak = peak.max(y);
            vx -= vx.signum();
            vy -= 1;
        }
        None
    }

    fn hits(&mut self) -> &[i32] {
        if self.hits.is_none() {
            let bottom = *self.y.start();
            let hits = (0..=*self.x.end())
                .flat_map(|vx| (bottom..=-bottom).map(move |vy| (vx, vy)))
                .filter_map(|(vx, vy)| self.launch(vx, vy))
                .collect();
            self.hits = Some(hits);
        }
        self.hits.as_deref().unwrap_or_default()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .hits()
            .iter()
            .max()
            .map(i32::to_string)
            .ok_or_else(|| SolveError::failed("no launch reaches the target"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.hits().len().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "target area: x=20..30, y=-10..-5";

    #[test]
    fn test_launches() {
        let target = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(target.launch(7, 2), Some(3));
        assert_eq!(target.launch(6, 9), Some(45));
        assert_eq!(target.launch(17, -4), None);
    }

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "45");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "112");
    }
}
