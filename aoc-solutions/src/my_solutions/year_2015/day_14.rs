use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Reindeer Olympics
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 14, tags = ["2015", "simulation"])]
pub struct Solver;

const RACE_SECONDS: u32 = 2503;

#[derive(Debug, Clone, Copy)]
pub struct Reindeer {
    speed: u32,
    fly: u32,
    rest: u32,
}

impl Reindeer {
    fn distance(&self, seconds: u32) -> u32 {
        let cycle = self.fly + self.rest;
        let flying = seconds / cycle * self.fly + (seconds % cycle).min(self.fly);
        flying * self.speed
    }
}

/// Points per reindeer after awarding one to every leader each second.
fn points(herd: &[Reindeer], seconds: u32) -> Vec<u32> {
    let mut points = vec![0; herd.len()];
    for t in 1..=seconds {
        let distances: Vec<u32> = herd.iter().map(|r| r.distance(t)).collect();
        let lead = distances.iter().copied().max().unwrap_or(0);
        for (p, d) in points.iter_mut().zip(&distances) {
            if *d == lead {
                *p += 1;
            }
        }
    }
    points
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Reindeer>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines_with(input, |line| {
            let [speed, fly, rest] = parse::integers_array::<u32, 3>(line)?;
            anyhow::ensure!(fly + rest > 0, "reindeer never moves");
            Ok(Reindeer { speed, fly, rest })
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let best = shared.iter().map(|r| r.distance(RACE_SECONDS)).max().unwrap_or(0);
        Ok(best.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let best = points(shared, RACE_SECONDS).into_iter().max().unwrap_or(0);
        Ok(best.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Comet can fly 14 km/s for 10 seconds, but then must rest for 127 seconds.
Dancer can fly 16 km/s for 11 seconds, but then must rest for 162 seconds.
";

    #[test]
    fn test_distance() {
        let herd = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(herd[0].distance(1000), 1120);
        assert_eq!(herd[1].distance(1000), 1056);
    }

    #[test]
    fn test_points() {
        let herd = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(points(&herd, 1000), vec![312, 689]);
    }
}
