use std::collections::HashMap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Pyroclastic Flow
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 17, tags = ["2022", "simulation", "cycle-detection"])]
pub struct Solver;

/// Rock shapes as rows from the bottom up, already two units from the left
/// wall. Bit 6 is the leftmost column.
const ROCKS: [&[u8]; 5] = [
    &[0b0011110],
    &[0b0001000, 0b0011100, 0b0001000],
    &[0b0011100, 0b0000100, 0b0000100],
    &[0b0010000, 0b0010000, 0b0010000, 0b0010000],
    &[0b0011000, 0b0011000],
];
const LEFT_WALL: u8 = 0b1000000;
const RIGHT_WALL: u8 = 0b0000001;
/// Rows compared when looking for a repeating state.
const PROFILE_DEPTH: usize = 32;

impl AocParser for Solver {
    /// `true` pushes left.
    type SharedData<'a> = Vec<bool>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let jets = input
            .trim()
            .chars()
            .map(|c| match c {
                '<' => Ok(true),
                '>' => Ok(false),
                other => Err(ParseError::InvalidFormat(format!("unexpected jet {other:?}"))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if jets.is_empty() {
            return Err(ParseError::MissingData("no jets".into()));
        }
        Ok(jets)
    }
}

struct Chamber<'a> {
    jets: &'a [bool],
    next_jet: usize,
    rows: Vec<u8>,
    dropped: usize,
}

impl<'a> Chamber<'a> {
    fn new(jets: &'a [bool]) -> Self {
        Self {
            jets,
            next_jet: 0,
            rows: Vec::new(),
            dropped: 0,
        }
    }

    fn collides(&self, rock: &[u8], bottom: usize) -> bool {
        rock.iter()
            .enumerate()
            .any(|(i, row)| self.rows.get(bottom + i).is_some_and(|r| r & row != 0))
    }

    fn drop_rock(&mut self) {
        let mut rock = ROCKS[self.dropped % ROCKS.len()].to_vec();
        self.dropped += 1;
        let mut bottom = self.rows.len() + 3;
        loop {
            let left = self.jets[self.next_jet];
            self.next_jet = (self.next_jet + 1) % self.jets.len();
            let pushed: Option<Vec<u8>> = if left {
                rock.iter().all(|r| r & LEFT_WALL == 0).then(|| rock.iter().map(|r| r << 1).collect())
            } else {
                rock.iter().all(|r| r & RIGHT_WALL == 0).then(|| rock.iter().map(|r| r >> 1).collect())
            };
            if let Some(pushed) = pushed.filter(|p| !self.collides(p, bottom)) {
                rock = pushed;
            }
            if bottom == 0 || self.collides(&rock, bottom - 1) {
                break;
            }
            bottom -= 1;
        }
        for (i, row) in rock.iter().enumerate() {
            match self.rows.get_mut(bottom + i) {
                Some(r) => *r |= row,
                None => self.rows.push(*row),
            }
        }
    }

    fn height(&self) -> usize {
        self.rows.len()
    }

    fn state(&self) -> (usize, usize, Vec<u8>) {
        let profile = self.rows.iter().rev().take(PROFILE_DEPTH).copied().collect();
        (self.dropped % ROCKS.len(), self.next_jet, profile)
    }
}

/// Tower height after `rocks` rocks, skipping ahead once the falling pattern
/// repeats.
fn tower_height(jets: &[bool], rocks: usize) -> usize {
    let mut chamber = Chamber::new(jets);
    let mut seen: HashMap<(usize, usize, Vec<u8>), (usize, usize)> = HashMap::new();
    let mut skipped_height = 0;
    while chamber.dropped < rocks {
        chamber.drop_rock();
        if skipped_height > 0 {
            continue;
        }
        if let Some((dropped_then, height_then)) =
            seen.insert(chamber.state(), (chamber.dropped, chamber.height()))
        {
            let period = chamber.dropped - dropped_then;
            let cycles = (rocks - chamber.dropped) / period;
            skipped_height = cycles * (chamber.height() - height_then);
            chamber.dropped += cycles * period;
        }
    }
    chamber.height() + skipped_height
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tower_height(shared, 2022).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tower_height(shared, 1_000_000_000_000).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = ">>><<><>><<<>><>>><<<>>><<<><<<>><>><<>>";

    #[test]
    fn test_first_rocks() {
        let jets = Solver::parse(EXAMPLE).unwrap();
        let mut chamber = Chamber::new(&jets);
        chamber.drop_rock();
        assert_eq!(chamber.rows, vec![0b0011110]);
        chamber.drop_rock();
        assert_eq!(chamber.height(), 4);
    }

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "3068");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "1514285714288");
    }
}
