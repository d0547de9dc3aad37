use std::collections::HashMap;

use anyhow::{anyhow, bail, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Docking Data
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 14, tags = ["2020", "bitmask"])]
pub struct Solver;

const WORD_BITS: usize = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mask { ones: u64, floating: u64 },
    Write { address: u64, value: u64 },
}

fn parse_instruction(line: &str) -> anyhow::Result<Instruction> {
    let (target, value) = line
        .split_once(" = ")
        .ok_or_else(|| anyhow!("expected '<target> = <value>'"))?;
    if target == "mask" {
        ensure!(value.len() == WORD_BITS, "mask must be {WORD_BITS} bits");
        let (mut ones, mut floating) = (0, 0);
        for c in value.chars() {
            ones <<= 1;
            floating <<= 1;
            match c {
                '1' => ones |= 1,
                'X' => floating |= 1,
                '0' => {}
                other => bail!("unexpected {other:?} in mask"),
            }
        }
        return Ok(Instruction::Mask { ones, floating });
    }
    let address = target
        .strip_prefix("mem[")
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| anyhow!("unknown target {target:?}"))?
        .parse()?;
    Ok(Instruction::Write {
        address,
        value: value.parse()?,
    })
}

/// Every value `floating` can take on, including zero.
fn subsets(floating: u64) -> impl Iterator<Item = u64> {
    let mut next = Some(floating);
    std::iter::from_fn(move || {
        let sub = next?;
        next = (sub != 0).then(|| (sub - 1) & floating);
        Some(sub)
    })
}

/// Runs the program; `decode` stores a write into memory under the current mask.
fn run<F>(program: &[Instruction], mut decode: F) -> u64
where
    F: FnMut(&mut HashMap<u64, u64>, (u64, u64), u64, u64),
{
    let mut memory = HashMap::new();
    let (mut ones, mut floating) = (0, (1 << WORD_BITS) - 1);
    for &instruction in program {
        match instruction {
            Instruction::Mask { ones: o, floating: f } => (ones, floating) = (o, f),
            Instruction::Write { address, value } => {
                decode(&mut memory, (ones, floating), address, value)
            }
        }
    }
    memory.values().sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines_with(input, parse_instruction)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total = run(shared, |memory, (ones, floating), address, value| {
            memory.insert(address, value & floating | ones);
        });
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total = run(shared, |memory, (ones, floating), address, value| {
            let base = (address | ones) & !floating;
            for sub in subsets(floating) {
                memory.insert(base | sub, value);
            }
        });
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const VALUE_MASKS: &str = "\
mask = XXXXXXXXXXXXXXXXXXXXXXXXXXXXX1XXXX0X
mem[8] = 11
mem[7] = 101
mem[8] = 0
";

    const ADDRESS_MASKS: &str = "\
mask = 000000000000000000000000000000X1001X
mem[42] = 100
mask = 00000000000000000000000000000000X0XX
mem[26] = 1
";

    #[test]
    fn test_value_masks() {
        assert_eq!(solve::<Solver>(VALUE_MASKS, 1), "165");
    }

    #[test]
    fn test_address_masks() {
        assert_eq!(solve::<Solver>(ADDRESS_MASKS, 2), "208");
    }

    #[test]
    fn test_subsets() {
        let mut subs: Vec<u64> = subsets(0b1010).collect();
        subs.sort_unstable();
        assert_eq!(subs, vec![0, 2, 8, 10]);
        assert_eq!(subsets(0).collect::<Vec<_>>(), vec![0]);
    }
}
