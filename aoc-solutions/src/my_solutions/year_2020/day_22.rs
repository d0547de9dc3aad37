use std::collections::{HashSet, VecDeque};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{self, ParseResultExt};

/// Crab Combat
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 22, tags = ["2020", "simulation", "recursion"])]
pub struct Solver;

type Deck = VecDeque<u8>;

impl AocParser for Solver {
    type SharedData<'a> = [Deck; 2];

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let decks = parse::blocks(input)
            .map(|block| {
                block
                    .lines()
                    .skip(1)
                    .map(|card| card.trim().parse())
                    .collect::<Result<Deck, _>>()
                    .invalid_format()
            })
            .collect::<Result<Vec<_>, _>>()?;
        decks
            .try_into()
            .map_err(|_| ParseError::InvalidFormat("expected exactly two players".into()))
    }
}

fn score(deck: &Deck) -> u64 {
    deck.iter()
        .rev()
        .zip(1..)
        .map(|(&card, rank)| u64::from(card) * rank)
        .sum()
}

/// Plays a game and returns the winner (0 or 1).
fn play(decks: &mut [Deck; 2], recursive: bool) -> usize {
    let mut seen: HashSet<[Deck; 2]> = HashSet::new();
    loop {
        let (a, b) = match (decks[0].front(), decks[1].front()) {
            (Some(&a), Some(&b)) => (a, b),
            (_, None) => return 0,
            (None, _) => return 1,
        };
        if recursive && !seen.insert(decks.clone()) {
            return 0;
        }
        decks[0].pop_front();
        decks[1].pop_front();
        let winner = if recursive && decks[0].len() >= a as usize && decks[1].len() >= b as usize {
            let mut sub = [
                decks[0].iter().take(a as usize).copied().collect(),
                decks[1].iter().take(b as usize).copied().collect(),
            ];
            play(&mut sub, true)
        } else {
            usize::from(b > a)
        };
        let (top, bottom) = if winner == 0 { (a, b) } else { (b, a) };
        decks[winner].extend([top, bottom]);
    }
}

fn combat(decks: &[Deck; 2], recursive: bool) -> String {
    let mut decks = decks.clone();
    let winner = play(&mut decks, recursive);
    score(&decks[winner]).to_string()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(combat(shared, false))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(combat(shared, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
Player 1:
9
2
6
3
1

Player 2:
5
8
4
7
10
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "306");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "291");
    }

    #[test]
    fn test_infinite_game_terminates() {
        let mut decks = [Deck::from([43, 19]), Deck::from([2, 29, 14])];
        assert_eq!(play(&mut decks, true), 0);
    }
}
