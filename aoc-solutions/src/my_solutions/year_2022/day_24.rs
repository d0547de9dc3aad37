use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use pathfinding::prelude::bfs;

use crate::utils::grid::Grid;
use crate::utils::point::{NEIGHBORS4, Point};

/// Blizzard Basin
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 24, tags = ["2022", "bfs", "grid"])]
pub struct Solver;

#[derive(Debug)]
pub struct Valley {
    map: Grid<char>,
    entrance: Point,
    exit: Point,
    /// Inner size, walls excluded.
    size: Point,
    /// Blizzard layout repeats with this period.
    period: i32,
}

fn gcd(a: i32, b: i32) -> i32 {
    if b == 0 { a } else { gcd(b, a % b) }
}

impl AocParser for Solver {
    type SharedData<'a> = Valley;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let map = Grid::parse_with(input, |c| "#.><^v".contains(c).then_some(c))?;
        let (w, h) = (map.width() as i32, map.height() as i32);
        if w < 3 || h < 3 {
            return Err(ParseError::InvalidFormat("valley too small".into()));
        }
        let opening = |y: i32| {
            (0..w)
                .map(|x| Point::new(x, y))
                .find(|&p| map[p] == '.')
                .ok_or_else(|| ParseError::MissingData(format!("no opening in row {y}")))
        };
        let (entrance, exit) = (opening(0)?, opening(h - 1)?);
        let size = Point::new(w - 2, h - 2);
        Ok(Valley {
            entrance,
            exit,
            size,
            period: size.x / gcd(size.x, size.y) * size.y,
            map,
        })
    }
}

impl Valley {
    fn is_free(&self, p: Point, time: i32) -> bool {
        if p == self.entrance || p == self.exit {
            return true;
        }
        let inner = p - Point::ONE;
        if inner.x < 0 || inner.y < 0 || inner.x >= self.size.x || inner.y >= self.size.y {
            return false;
        }
        // Blizzards that could be here now started `time` steps upwind.
        let at = |dx: i32, dy: i32| {
            let x = (inner.x + dx * time).rem_euclid(self.size.x);
            let y = (inner.y + dy * time).rem_euclid(self.size.y);
            self.map[Point::new(x, y) + Point::ONE]
        };
        at(-1, 0) != '>' && at(1, 0) != '<' && at(0, -1) != 'v' && at(0, 1) != '^'
    }

    /// Minutes to walk from `from` to `to`, setting off at `start`.
    fn crossing(&self, from: Point, to: Point, start: i32) -> Option<i32> {
        let path = bfs(
            &(from, start % self.period),
            |&(p, phase)| {
                let next = (phase + 1) % self.period;
                std::iter::once(p)
                    .chain(NEIGHBORS4.iter().map(|&d| p + d))
                    .filter(|&q| self.is_free(q, next))
                    .map(|q| (q, next))
                    .collect::<Vec<_>>()
            },
            |&(p, _)| p == to,
        )?;
        Some(path.len() as i32 - 1)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .crossing(shared.entrance, shared.exit, 0)
            .map(|t| t.to_string())
            .ok_or_else(|| SolveError::failed("no way through"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let valley = &*shared;
        let legs = [
            (valley.entrance, valley.exit),
            (valley.exit, valley.entrance),
            (valley.entrance, valley.exit),
        ];
        legs.iter()
            .try_fold(0, |time, &(from, to)| valley.crossing(from, to, time).map(|t| time + t))
            .map(|t| t.to_string())
            .ok_or_else(|| SolveError::failed("no way through"))
    }
}
