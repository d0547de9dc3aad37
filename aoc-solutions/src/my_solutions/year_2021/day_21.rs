use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
use crate::utils::parse;

/// Dirac Dice
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 21, tags = ["2021", "dynamic-programming"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = [u8; 2];

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let starts = parse::lines_with(input, |line| {
            let (_, pos) = line
                .split_once("starting position:")
                .ok_or_else(|| anyhow!("expected 'Player N starting position: P'"))?;
            let pos: u8 = pos.trim().parse()?;
            ensure!((1..=10).contains(&pos), "position {pos} off the board");
            Ok(pos)
        })?;
        starts
            .try_into()
            .map_err(|_| ParseError::InvalidFormat("expected two players".into()))
    }
}

fn advance(pos: u8, steps: u32) -> u8 {
    ((u32::from(pos) - 1 + steps) % 10 + 1) as u8
}

fn practice_game(starts: [u8; 2]) -> u32 {
    let mut pos = starts;
    let mut score = [0u32; 2];
    let mut rolls = 0;
    let mut die = (1..=100).cycle();
    loop {
        for player in 0..2 {
            let roll: u32 = die.by_ref().take(3).sum();
            rolls += 3;
            pos[player] = advance(pos[player], roll);
            score[player] += u32::from(pos[player]);
            if score[player] >= 1000 {
                return score[1 - player] * rolls;
            }
        }
    }
}

/// Three-roll totals of the Dirac die with how many universes produce each.
const SPLITS: [(u32, u64); 7] = [(3, 1), (4, 3), (5, 6), (6, 7), (7, 6), (8, 3), (9, 1)];

const DIRAC_GOAL: u8 = 21;

/// `(mover position, mover score, other position, other score)`.
type Turn = (u8, u8, u8, u8);

/// Each split either wins outright or hands the turn to the other player.
fn outcomes((pos, score, other_pos, other_score): Turn) -> impl Iterator<Item = (u64, Option<Turn>)> {
    SPLITS.into_iter().map(move |(roll, universes)| {
        let pos = advance(pos, roll);
        let score = score + pos;
        if score >= DIRAC_GOAL {
            (universes, None)
        } else {
            (universes, Some((other_pos, other_score, pos, score)))
        }
    })
}

/// Wins for (mover, other) from a turn state.
struct DiracGame;

impl DpProblem<Turn, (u64, u64)> for DiracGame {
    fn deps(&self, turn: &Turn) -> Vec<Turn> {
        outcomes(*turn).filter_map(|(_, next)| next).collect()
    }

    fn compute(&self, turn: &Turn, deps: Vec<(u64, u64)>) -> (u64, u64) {
        let mut deps = deps.into_iter();
        outcomes(*turn).fold((0, 0), |(mine, theirs), (universes, next)| match next {
            None => (mine + universes, theirs),
            Some(_) => {
                let (their_wins, my_wins) = deps.next().unwrap_or_default();
                (mine + universes * my_wins, theirs + universes * their_wins)
            }
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(practice_game(*shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let cache = DpCache::with_problem(HashMapBackend::new(), DiracGame);
        let (first, second) = cache.get(&(shared[0], 0, shared[1], 0));
        Ok(first.max(second).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "Player 1 starting position: 4\nPlayer 2 starting position: 8\n";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "739785");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "444356092776315");
    }

    #[test]
    fn test_rejects_off_board() {
        assert!(Solver::parse("Player 1 starting position: 11\nPlayer 2 starting position: 1").is_err());
    }
}
