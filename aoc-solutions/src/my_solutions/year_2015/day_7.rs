use std::collections::HashMap;

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
use crate::utils::parse;

/// Some Assembly Required
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 7, tags = ["2015", "circuit", "dynamic-programming"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<'a> {
    Value(u16),
    Wire(&'a str),
}

impl<'a> Operand<'a> {
    fn parse(text: &'a str) -> Self {
        text.parse().map_or(Operand::Wire(text), Operand::Value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate<'a> {
    Copy(Operand<'a>),
    Not(Operand<'a>),
    And(Operand<'a>, Operand<'a>),
    Or(Operand<'a>, Operand<'a>),
    LShift(Operand<'a>, Operand<'a>),
    RShift(Operand<'a>, Operand<'a>),
}

impl<'a> Gate<'a> {
    fn operands(&self) -> Vec<Operand<'a>> {
        match *self {
            Gate::Copy(a) | Gate::Not(a) => vec![a],
            Gate::And(a, b) | Gate::Or(a, b) | Gate::LShift(a, b) | Gate::RShift(a, b) => {
                vec![a, b]
            }
        }
    }

    fn apply(&self, inputs: &[u16]) -> u16 {
        match (self, inputs) {
            (Gate::Copy(_), [a]) => *a,
            (Gate::Not(_), [a]) => !a,
            (Gate::And(..), [a, b]) => a & b,
            (Gate::Or(..), [a, b]) => a | b,
            (Gate::LShift(..), [a, b]) => a.checked_shl(u32::from(*b)).unwrap_or(0),
            (Gate::RShift(..), [a, b]) => a.checked_shr(u32::from(*b)).unwrap_or(0),
            _ => 0,
        }
    }
}

fn parse_connection(line: &str) -> anyhow::Result<(&str, Gate<'_>)> {
    let (expr, wire) = line
        .split_once(" -> ")
        .ok_or_else(|| anyhow!("expected '<gate> -> <wire>'"))?;
    let words: Vec<&str> = expr.split_whitespace().collect();
    let gate = match words[..] {
        [a] => Gate::Copy(Operand::parse(a)),
        ["NOT", a] => Gate::Not(Operand::parse(a)),
        [a, op, b] => {
            let (a, b) = (Operand::parse(a), Operand::parse(b));
            match op {
                "AND" => Gate::And(a, b),
                "OR" => Gate::Or(a, b),
                "LSHIFT" => Gate::LShift(a, b),
                "RSHIFT" => Gate::RShift(a, b),
                other => bail!("unknown gate {other:?}"),
            }
        }
        _ => bail!("cannot read gate {expr:?}"),
    };
    Ok((wire.trim(), gate))
}

pub type Circuit<'a> = HashMap<&'a str, Gate<'a>>;

/// Signals on wires, computed once each in dependency order.
struct Signals<'c, 'a> {
    circuit: &'c Circuit<'a>,
}

impl<'a> DpProblem<&'a str, u16> for Signals<'_, 'a> {
    fn deps(&self, wire: &&'a str) -> Vec<&'a str> {
        self.circuit
            .get(wire)
            .into_iter()
            .flat_map(|gate| gate.operands())
            .filter_map(|op| match op {
                Operand::Wire(w) => Some(w),
                Operand::Value(_) => None,
            })
            .collect()
    }

    fn compute(&self, wire: &&'a str, deps: Vec<u16>) -> u16 {
        let Some(gate) = self.circuit.get(wire) else {
            return 0;
        };
        let mut resolved = deps.into_iter();
        let inputs: Vec<u16> = gate
            .operands()
            .into_iter()
            .map(|op| match op {
                Operand::Value(v) => v,
                Operand::Wire(_) => resolved.next().unwrap_or(0),
            })
            .collect();
        gate.apply(&inputs)
    }
}

fn signal(circuit: &Circuit<'_>, wire: &str) -> Result<u16, SolveError> {
    let wire = circuit
        .get_key_value(wire)
        .map(|(&w, _)| w)
        .ok_or_else(|| SolveError::failed(format!("no wire named {wire:?}")))?;
    Ok(DpCache::with_problem(HashMapBackend::new(), Signals { circuit }).get(&wire))
}

impl AocParser for Solver {
    type SharedData<'a> = Circuit<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let circuit: Circuit<'_> = parse::lines_with(input, parse_connection)?
            .into_iter()
            .collect();
        let undriven = circuit.values().flat_map(Gate::operands).find_map(|op| match op {
            Operand::Wire(w) if !circuit.contains_key(w) => Some(w),
            _ => None,
        });
        if let Some(wire) = undriven {
            return Err(ParseError::InvalidFormat(format!(
                "wire {wire:?} is read but never driven"
            )));
        }
        Ok(circuit)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(signal(shared, "a")?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let a = signal(shared, "a")?;
        let mut rewired = shared.clone();
        rewired.insert("b", Gate::Copy(Operand::Value(a)));
        Ok(signal(&rewired, "a")?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
123 -> x
456 -> y
x AND y -> d
x OR y -> e
x LSHIFT 2 -> f
y RSHIFT 2 -> g
NOT x -> h
NOT y -> i
";

    #[test]
    fn test_example() {
        let circuit = Solver::parse(EXAMPLE).unwrap();
        let expected = [
            ("d", 72),
            ("e", 507),
            ("f", 492),
            ("g", 114),
            ("h", 65412),
            ("i", 65079),
            ("x", 123),
            ("y", 456),
        ];
        for (wire, value) in expected {
            assert_eq!(signal(&circuit, wire).unwrap(), value, "wire {wire}");
        }
    }

    #[test]
    fn test_override() {
        let input = "b LSHIFT 1 -> a\n1 -> b\n";
        assert_eq!(solve::<Solver>(input, 1), "2");
        assert_eq!(solve::<Solver>(input, 2), "4");
        let circuit = Solver::parse(input).unwrap();
        assert!(signal(&circuit, "z").is_err());
    }

    #[test]
    fn test_undriven_wire_is_rejected() {
        assert!(matches!(
            Solver::parse("q AND 7 -> a\n"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(Solver::parse("NOT a -> b\n").is_err());
    }
}
