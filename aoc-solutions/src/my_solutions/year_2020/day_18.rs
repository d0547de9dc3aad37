use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse;

/// Operation Order
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 18, tags = ["2020", "parsing"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Num(u64),
    Add,
    Mul,
    Open,
    Close,
}

fn tokenize(line: &str) -> anyhow::Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        tokens.push(match c {
            ' ' => continue,
            '+' => Token::Add,
            '*' => Token::Mul,
            '(' => Token::Open,
            ')' => Token::Close,
            d if d.is_ascii_digit() => {
                let mut n = u64::from(d as u8 - b'0');
                while let Some(next) = chars.peek().and_then(|c| c.to_digit(10)) {
                    n = n * 10 + u64::from(next);
                    chars.next();
                }
                Token::Num(n)
            }
            other => bail!("unexpected {other:?} in expression"),
        });
    }
    Ok(tokens)
}

/// Binding strength of the two operators; a higher value binds tighter.
#[derive(Debug, Clone, Copy)]
struct Precedence {
    add: u8,
    mul: u8,
}

const LEFT_TO_RIGHT: Precedence = Precedence { add: 1, mul: 1 };
const ADDITION_FIRST: Precedence = Precedence { add: 2, mul: 1 };

/// Precedence-climbing evaluator over a token slice.
struct Evaluator<'t> {
    tokens: &'t [Token],
    pos: usize,
    precedence: Precedence,
}

impl Evaluator<'_> {
    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).copied();
        self.pos += 1;
        token
    }

    fn operand(&mut self) -> anyhow::Result<u64> {
        match self.next() {
            Some(Token::Num(n)) => Ok(n),
            Some(Token::Open) => {
                let value = self.expression(0)?;
                match self.next() {
                    Some(Token::Close) => Ok(value),
                    _ => bail!("unbalanced parenthesis"),
                }
            }
            other => bail!("expected a number or '(', found {other:?}"),
        }
    }

    fn expression(&mut self, min_strength: u8) -> anyhow::Result<u64> {
        let mut value = self.operand()?;
        loop {
            let strength = match self.tokens.get(self.pos) {
                Some(Token::Add) => self.precedence.add,
                Some(Token::Mul) => self.precedence.mul,
                _ => return Ok(value),
            };
            if strength < min_strength {
                return Ok(value);
            }
            let op = self.next();
            let rhs = self.expression(strength + 1)?;
            value = match op {
                Some(Token::Add) => value + rhs,
                _ => value * rhs,
            };
        }
    }
}

fn evaluate(tokens: &[Token], precedence: Precedence) -> anyhow::Result<u64> {
    let mut evaluator = Evaluator {
        tokens,
        pos: 0,
        precedence,
    };
    let value = evaluator.expression(0)?;
    if evaluator.pos != tokens.len() {
        return Err(anyhow!("trailing tokens after position {}", evaluator.pos));
    }
    Ok(value)
}

fn homework(lines: &[Vec<Token>], precedence: Precedence) -> Result<String, SolveError> {
    let mut total = 0;
    for (idx, tokens) in lines.iter().enumerate() {
        total += evaluate(tokens, precedence)
            .map_err(|e| SolveError::failed(format!("line {}: {e}", idx + 1)))?;
    }
    Ok(total.to_string())
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<Token>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::lines_with(input, tokenize)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        homework(shared, LEFT_TO_RIGHT)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        homework(shared, ADDITION_FIRST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const CASES: [(&str, u64, u64); 6] = [
        ("1 + 2 * 3 + 4 * 5 + 6", 71, 231),
        ("1 + (2 * 3) + (4 * (5 + 6))", 51, 51),
        ("2 * 3 + (4 * 5)", 26, 46),
        ("5 + (8 * 3 + 9 + 3 * 4 * 3)", 437, 1445),
        ("5 * 9 * (7 * 3 * 3 + 9 * 3 + (8 + 6 * 4))", 12240, 669060),
        ("((2 + 4 * 9) * (6 + 9 * 8 + 6) + 6) + 2 + 4 * 2", 13632, 23340),
    ];

    #[test]
    fn test_expressions() {
        for (expr, left_to_right, addition_first) in CASES {
            let tokens = tokenize(expr).unwrap();
            assert_eq!(evaluate(&tokens, LEFT_TO_RIGHT).unwrap(), left_to_right, "{expr}");
            assert_eq!(evaluate(&tokens, ADDITION_FIRST).unwrap(), addition_first, "{expr}");
        }
    }

    #[test]
    fn test_homework_sum() {
        let input = "2 * 3 + (4 * 5)\n5 + (8 * 3 + 9 + 3 * 4 * 3)\n";
        assert_eq!(solve::<Solver>(input, 1), (26 + 437).to_string());
        assert_eq!(solve::<Solver>(input, 2), (46 + 1445).to_string());
    }

    #[test]
    fn test_malformed() {
        assert!(evaluate(&tokenize("(1 + 2").unwrap(), LEFT_TO_RIGHT).is_err());
        assert!(tokenize("1 - 2").is_err());
    }
}
