use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Opening the Turing Lock
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 23, tags = ["2015", "interpreter"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Half(usize),
    Triple(usize),
    Increment(usize),
    Jump(i64),
    JumpIfEven(usize, i64),
    JumpIfOne(usize, i64),
}

fn register(name: &str) -> anyhow::Result<usize> {
    match name.trim() {
        "a" => Ok(0),
        "b" => Ok(1),
        other => bail!("unknown register {other:?}"),
    }
}

fn parse_instruction(line: &str) -> anyhow::Result<Instruction> {
    let (op, args) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected '<op> <args>'"))?;
    let conditional = || -> anyhow::Result<(usize, i64)> {
        let (reg, offset) = args
            .split_once(',')
            .ok_or_else(|| anyhow!("expected '<register>, <offset>'"))?;
        Ok((register(reg)?, offset.trim().parse()?))
    };
    Ok(match op {
        "hlf" => Instruction::Half(register(args)?),
        "tpl" => Instruction::Triple(register(args)?),
        "inc" => Instruction::Increment(register(args)?),
        "jmp" => Instruction::Jump(args.trim().parse()?),
        "jie" => {
            let (reg, offset) = conditional()?;
            Instruction::JumpIfEven(reg, offset)
        }
        "jio" => {
            let (reg, offset) = conditional()?;
            Instruction::JumpIfOne(reg, offset)
        }
        other => bail!("unknown instruction {other:?}"),
    })
}

/// Runs until the program counter leaves the program; returns the registers.
fn run(program: &[Instruction], mut registers: [u64; 2]) -> [u64; 2] {
    let mut pc = 0i64;
    while let Some(&ins) = usize::try_from(pc).ok().and_then(|i| program.get(i)) {
        pc += match ins {
            Instruction::Half(r) => {
                registers[r] /= 2;
                1
            }
            Instruction::Triple(r) => {
                registers[r] *= 3;
                1
            }
            Instruction::Increment(r) => {
                registers[r] += 1;
                1
            }
            Instruction::Jump(offset) => offset,
            Instruction::JumpIfEven(r, offset) if registers[r] % 2 == 0 => offset,
            Instruction::JumpIfOne(r, offset) if registers[r] == 1 => offset,
            Instruction::JumpIfEven(..) | Instruction::JumpIfOne(..) => 1,
        };
    }
    registers
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines_with(input, parse_instruction)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run(shared, [0, 0])[1].to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run(shared, [1, 0])[1].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "inc a\njio a, +2\ntpl a\ninc a\n";

    #[test]
    fn test_example() {
        let program = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(run(&program, [0, 0]), [2, 0]);
        // starting at a = 1, `jio` falls through
        assert_eq!(run(&program, [1, 0]), [7, 0]);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            parse_instruction("jie b, -7").unwrap(),
            Instruction::JumpIfEven(1, -7)
        );
        assert!(parse_instruction("inc c").is_err());
    }
}
