use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Giant Squid
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 4, tags = ["2021", "simulation"])]
pub struct Solver;

const SIZE: usize = 5;

#[derive(Debug, Clone)]
struct Board {
    numbers: [u32; SIZE * SIZE],
    marked: [bool; SIZE * SIZE],
}

impl Board {
    fn mark(&mut self, drawn: u32) {
        for (n, m) in self.numbers.iter().zip(self.marked.iter_mut()) {
            if *n == drawn {
                *m = true;
            }
        }
    }

    fn has_won(&self) -> bool {
        (0..SIZE).any(|i| {
            (0..SIZE).all(|j| self.marked[i * SIZE + j]) || (0..SIZE).all(|j| self.marked[j * SIZE + i])
        })
    }

    fn unmarked_sum(&self) -> u32 {
        self.numbers
            .iter()
            .zip(self.marked)
            .filter(|(_, m)| !m)
            .map(|(n, _)| n)
            .sum()
    }
}

#[derive(Debug)]
pub struct Game {
    draws: Vec<u32>,
    boards: Vec<Board>,
    /// Final scores in the order boards win.
    scores: Option<Vec<u32>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Game;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut blocks = parse::blocks(input);
        let draws = parse::separated(blocks.next().unwrap_or_default(), ',')?;
        let boards = blocks
            .map(|block| {
                let numbers: [u32; SIZE * SIZE] = parse::integers_array(block)?;
                Ok(Board {
                    numbers,
                    marked: [false; SIZE * SIZE],
                })
            })
            .collect::<Result<Vec<_>, ParseError>>()?;
        if boards.is_empty() {
            return Err(ParseError::MissingData("no boards".into()));
        }
        Ok(Game {
            draws,
            boards,
            scores: None,
        })
    }
}

fn play(game: &mut Game) -> &[u32] {
    game.scores.get_or_insert_with(|| {
        let mut boards = game.boards.clone();
        let mut scores = Vec::with_capacity(boards.len());
        for &drawn in &game.draws {
            for board in &mut boards {
                board.mark(drawn);
            }
            let (won, playing): (Vec<_>, Vec<_>) = boards.into_iter().partition(Board::has_won);
            scores.extend(won.iter().map(|b| b.unmarked_sum() * drawn));
            boards = playing;
            if boards.is_empty() {
                break;
            }
        }
        scores
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        play(shared)
            .first()
            .map(u32::to_string)
            .ok_or_else(|| SolveError::failed("no board wins"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        play(shared)
            .last()
            .map(u32::to_string)
            .ok_or_else(|| SolveError::failed("no board wins"))
    }
}
