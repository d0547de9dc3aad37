use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use num_modular::ModularPow;

use crate::utils::parse;

/// Combo Breaker
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2020, day = 25, tags = ["2020", "number-theory"])]
pub struct Solver;

const MODULUS: u64 = 20201227;
const SUBJECT: u64 = 7;

impl AocParser for Solver {
    /// Card and door public keys.
    type SharedData<'a> = [u64; 2];

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let keys: Vec<u64> = parse::lines(input)?;
        keys.try_into()
            .map_err(|_| ParseError::InvalidFormat("expected two public keys".into()))
    }
}

/// Smallest loop size that transforms the subject number into `public_key`.
fn loop_size(public_key: u64) -> Option<u64> {
    let mut value = 1;
    (1..MODULUS).find(|_| {
        value = value * SUBJECT % MODULUS;
        value == public_key
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let [card, door] = *shared;
        let card_loop =
            loop_size(card).ok_or_else(|| SolveError::failed("card key is not a power of 7"))?;
        Ok(door.powm(card_loop, &MODULUS).to_string())
    }
}
