use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{self, ParseResultExt};

/// Monkey in the Middle
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 11, tags = ["2022", "simulation", "modular-arithmetic"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add(u64),
    Multiply(u64),
    Square,
}

impl Operation {
    fn apply(self, old: u64) -> u64 {
        match self {
            Operation::Add(n) => old + n,
            Operation::Multiply(n) => old * n,
            Operation::Square => old * old,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Monkey {
    items: Vec<u64>,
    operation: Operation,
    divisor: u64,
    /// Targets when the test passes and when it fails.
    throw_to: [usize; 2],
}

fn field<'a>(lines: &mut impl Iterator<Item = &'a str>, prefix: &str) -> anyhow::Result<&'a str> {
    let line = lines.next().ok_or_else(|| anyhow!("missing '{prefix}'"))?;
    line.trim()
        .strip_prefix(prefix)
        .map(str::trim)
        .ok_or_else(|| anyhow!("expected '{prefix}' in {line:?}"))
}

fn parse_monkey(block: &str) -> anyhow::Result<Monkey> {
    let mut lines = block.lines().skip(1);
    let items = field(&mut lines, "Starting items:")?
        .split(',')
        .map(|item| item.trim().parse())
        .collect::<Result<_, _>>()?;
    let operation = match field(&mut lines, "Operation: new = old")?.split_once(' ') {
        Some(("*", "old")) => Operation::Square,
        Some(("*", n)) => Operation::Multiply(n.parse()?),
        Some(("+", n)) => Operation::Add(n.parse()?),
        _ => bail!("unsupported operation"),
    };
    let divisor = field(&mut lines, "Test: divisible by")?.parse()?;
    let if_true = field(&mut lines, "If true: throw to monkey")?.parse()?;
    let if_false = field(&mut lines, "If false: throw to monkey")?.parse()?;
    Ok(Monkey {
        items,
        operation,
        divisor,
        throw_to: [if_true, if_false],
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Monkey>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let monkeys = parse::blocks(input)
            .enumerate()
            .map(|(i, block)| parse_monkey(block).with_context(|| format!("monkey {i}")))
            .collect::<anyhow::Result<Vec<_>>>()
            .invalid_format()?;
        if let Some(m) = monkeys.iter().find(|m| m.throw_to.iter().any(|&t| t >= monkeys.len())) {
            return Err(ParseError::InvalidFormat(format!("throw target out of range: {:?}", m.throw_to)));
        }
        Ok(monkeys)
    }
}

/// Product of the two highest inspection counts.
fn monkey_business(monkeys: &[Monkey], rounds: usize, relief: bool) -> u64 {
    let mut monkeys = monkeys.to_vec();
    // Every test still sees the same remainder modulo the product of divisors.
    let modulus: u64 = monkeys.iter().map(|m| m.divisor).product();
    let mut inspected = vec![0u64; monkeys.len()];
    for _ in 0..rounds {
        for i in 0..monkeys.len() {
            let items = std::mem::take(&mut monkeys[i].items);
            inspected[i] += items.len() as u64;
            let Monkey { operation, divisor, throw_to, .. } = monkeys[i];
            for item in items {
                let mut worry = operation.apply(item);
                if relief {
                    worry /= 3;
                } else {
                    worry %= modulus;
                }
                let target = throw_to[usize::from(worry % divisor != 0)];
                monkeys[target].items.push(worry);
            }
        }
    }
    inspected.sort_unstable_by(|a, b| b.cmp(a));
    inspected.iter().take(2).product()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(monkey_business(shared, 20, true).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(monkey_business(shared, 10_000, false).to_string())
    }
}
