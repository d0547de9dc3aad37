use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;
use crate::utils::point::{Direction, Point, manhattan};

/// Rain Risk
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 12, tags = ["2020", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction, i32),
    /// Quarter turns clockwise.
    Turn(u8),
    Forward(i32),
}

fn parse_action(line: &str) -> anyhow::Result<Action> {
    let mut chars = line.chars();
    let letter = chars.next().ok_or_else(|| anyhow!("empty action"))?;
    let value: i32 = chars.as_str().parse()?;
    let quarters = |degrees: i32| -> anyhow::Result<u8> {
        if degrees % 90 != 0 {
            bail!("turn of {degrees} degrees is not a right angle");
        }
        Ok((degrees / 90).rem_euclid(4) as u8)
    };
    Ok(match letter {
        'F' => Action::Forward(value),
        'R' => Action::Turn(quarters(value)?),
        'L' => Action::Turn(quarters(-value)?),
        other => match Direction::from_char(other) {
            Some(dir) if "NESW".contains(other) => Action::Move(dir, value),
            _ => bail!("unknown action {other:?}"),
        },
    })
}

fn rotate(p: Point, quarters: u8) -> Point {
    (0..quarters).fold(p, |p, _| Point::new(-p.y, p.x))
}

/// Final distance from the start. `waypoint` moves with `Move` actions when
/// `steer_waypoint` is set; otherwise `Move` shifts the ship itself.
fn sail(actions: &[Action], mut waypoint: Point, steer_waypoint: bool) -> i32 {
    let mut ship = Point::ZERO;
    for &action in actions {
        match action {
            Action::Move(dir, n) if steer_waypoint => waypoint += dir.delta() * n,
            Action::Move(dir, n) => ship += dir.delta() * n,
            Action::Turn(q) => waypoint = rotate(waypoint, q),
            Action::Forward(n) => ship += waypoint * n,
        }
    }
    manhattan(ship, Point::ZERO)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Action>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines_with(input, parse_action)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sail(shared, Direction::East.delta(), false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sail(shared, Point::new(10, -1), true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "F10\nN3\nF7\nR90\nF11\n";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "25");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "286");
    }

    #[test]
    fn test_turns() {
        assert_eq!(parse_action("L270").unwrap(), Action::Turn(1));
        assert_eq!(rotate(Point::new(10, -4), 1), Point::new(4, 10));
        assert!(parse_action("R45").is_err());
    }
}
