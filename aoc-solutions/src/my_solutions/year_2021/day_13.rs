use std::collections::HashSet;

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;
use crate::utils::point::Point;

/// Transparent Origami
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 13, tags = ["2021", "geometry", "ascii-art"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fold {
    Left(i32),
    Up(i32),
}

impl Fold {
    fn apply(self, p: Point) -> Point {
        match self {
            Fold::Left(x) if p.x > x => Point::new(2 * x - p.x, p.y),
            Fold::Up(y) if p.y > y => Point::new(p.x, 2 * y - p.y),
            _ => p,
        }
    }
}

#[derive(Debug)]
pub struct Manual {
    dots: Vec<Point>,
    folds: Vec<Fold>,
}

impl AocParser for Solver {
    type SharedData<'a> = Manual;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let (dots, folds) = parse::split_pair(input.trim(), "\n\n")?;
        let dots = parse::lines_with(dots, |line| {
            let (x, y) = line.trim().split_once(',').ok_or_else(|| anyhow!("expected 'x,y'"))?;
            Ok(Point::new(x.parse()?, y.parse()?))
        })?;
        let folds = parse::lines_with(folds, |line| {
            let (axis, at) = line
                .trim()
                .strip_prefix("fold along ")
                .and_then(|f| f.split_once('='))
                .ok_or_else(|| anyhow!("expected 'fold along <axis>=<n>'"))?;
            let at = at.parse()?;
            Ok(match axis {
                "x" => Fold::Left(at),
                "y" => Fold::Up(at),
                other => bail!("unknown axis {other:?}"),
            })
        })?;
        Ok(Manual { dots, folds })
    }
}

fn fold_all(dots: &[Point], folds: &[Fold]) -> HashSet<Point> {
    dots.iter()
        .map(|&p| folds.iter().fold(p, |p, f| f.apply(p)))
        .collect()
}

/// Draws the dots as `#` on `.`, one row per line.
fn render(dots: &HashSet<Point>) -> String {
    let width = dots.iter().map(|p| p.x).max().unwrap_or(-1) + 1;
    let height = dots.iter().map(|p| p.y).max().unwrap_or(-1) + 1;
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| if dots.contains(&Point::new(x, y)) { '#' } else { '.' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let first = shared
            .folds
            .first()
            .ok_or_else(|| SolveError::failed("no folds"))?;
        Ok(fold_all(&shared.dots, std::slice::from_ref(first)).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(render(&fold_all(&shared.dots, &shared.folds)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
6,10
0,14
9,10
0,3
10,4
4,11
6,0
6,12
4,1
0,13
10,12
3,4
3,0
8,4
1,10
2,14
8,10
9,0

fold along y=7
fold along x=5
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "17");
        assert_eq!(
            solve::<Solver>(EXAMPLE, 2),
            "#####\n#...#\n#...#\n#...#\n#####"
        );
    }
}
