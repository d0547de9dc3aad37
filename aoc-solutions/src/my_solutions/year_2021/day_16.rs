use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Packet Decoder
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 16, tags = ["2021", "bits", "parsing"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Literal(u64),
    Operator { type_id: u8, children: Vec<Packet> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    version: u8,
    payload: Payload,
}

struct Bits {
    bits: Vec<bool>,
    pos: usize,
}

impl Bits {
    fn from_hex(hex: &str) -> Result<Self, ParseError> {
        let mut bits = Vec::with_capacity(hex.len() * 4);
        for c in hex.chars() {
            let nibble = c
                .to_digit(16)
                .ok_or_else(|| ParseError::InvalidFormat(format!("not a hex digit: {c:?}")))?;
            bits.extend((0..4).rev().map(|i| nibble >> i & 1 == 1));
        }
        Ok(Self { bits, pos: 0 })
    }

    fn take(&mut self, n: usize) -> Result<u64, ParseError> {
        let end = self.pos + n;
        let slice = self
            .bits
            .get(self.pos..end)
            .ok_or_else(|| ParseError::InvalidFormat("transmission ends mid-packet".into()))?;
        self.pos = end;
        Ok(slice.iter().fold(0, |acc, &b| acc << 1 | u64::from(b)))
    }

    fn packet(&mut self) -> Result<Packet, ParseError> {
        let version = self.take(3)? as u8;
        let type_id = self.take(3)? as u8;
        let payload = if type_id == 4 {
            let mut value = 0u64;
            loop {
                let more = self.take(1)? == 1;
                let group = self.take(4)?;
                value = value
                    .checked_mul(16)
                    .map(|v| v | group)
                    .ok_or_else(|| ParseError::InvalidFormat("literal exceeds 64 bits".into()))?;
                if !more {
                    break;
                }
            }
            Payload::Literal(value)
        } else {
            let mut children = Vec::new();
            if self.take(1)? == 0 {
                let length = self.take(15)? as usize;
                let end = self.pos + length;
                while self.pos < end {
                    children.push(self.packet()?);
                }
            } else {
                for _ in 0..self.take(11)? {
                    children.push(self.packet()?);
                }
            }
            Payload::Operator { type_id, children }
        };
        Ok(Packet { version, payload })
    }
}

impl Packet {
    fn version_sum(&self) -> u64 {
        let nested = match &self.payload {
            Payload::Literal(_) => 0,
            Payload::Operator { children, .. } => children.iter().map(Packet::version_sum).sum(),
        };
        u64::from(self.version) + nested
    }

    fn evaluate(&self) -> Result<u64, SolveError> {
        let (type_id, children) = match &self.payload {
            Payload::Literal(value) => return Ok(*value),
            Payload::Operator { type_id, children } => (*type_id, children),
        };
        let values = children.iter().map(Packet::evaluate).collect::<Result<Vec<_>, _>>()?;
        let compare = |f: fn(&u64, &u64) -> bool| match values.as_slice() {
            [a, b] => Ok(u64::from(f(a, b))),
            _ => Err(SolveError::failed("comparison needs exactly two operands")),
        };
        match type_id {
            0 => Ok(values.iter().sum()),
            1 => Ok(values.iter().product()),
            2 => values.iter().min().copied().ok_or_else(|| SolveError::failed("min of nothing")),
            3 => values.iter().max().copied().ok_or_else(|| SolveError::failed("max of nothing")),
            5 => compare(u64::gt),
            6 => compare(u64::lt),
            7 => compare(u64::eq),
            other => Err(SolveError::failed(format!("unknown operator type {other}"))),
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Packet;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Bits::from_hex(input.trim())?.packet()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.version_sum().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.evaluate().map(|v| v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    #[test]
    fn test_literal() {
        assert_eq!(
            Solver::parse("D2FE28").unwrap(),
            Packet {
                version: 6,
                payload: Payload::Literal(2021)
            }
        );
    }

    #[test]
    fn test_literal_width_limit() {
        // sixteen groups of 1111 fill a u64 exactly; a seventeenth overflows
        assert_eq!(
            Solver::parse("13FFFFFFFFFFFFFFFFFFBC").unwrap().payload,
            Payload::Literal(u64::MAX)
        );
        assert!(matches!(
            Solver::parse("13FFFFFFFFFFFFFFFFFFFDE"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_operator_length_types() {
        let by_length = Solver::parse("38006F45291200").unwrap();
        let by_count = Solver::parse("EE00D40C823060").unwrap();
        let literals = |p: &Packet| match &p.payload {
            Payload::Operator { children, .. } => children
                .iter()
                .map(|c| match c.payload {
                    Payload::Literal(v) => v,
                    _ => panic!("expected literal"),
                })
                .collect::<Vec<_>>(),
            _ => panic!("expected operator"),
        };
        assert_eq!(literals(&by_length), vec![10, 20]);
        assert_eq!(literals(&by_count), vec![1, 2, 3]);
    }

    #[test]
    fn test_version_sums() {
        for (hex, sum) in [
            ("8A004A801A8002F478", "16"),
            ("620080001611562C8802118E34", "12"),
            ("C0015000016115A2E0802F182340", "23"),
            ("A0016C880162017C3686B18A3D4780", "31"),
        ] {
            assert_eq!(solve::<Solver>(hex, 1), sum, "{hex}");
        }
    }

    #[test]
    fn test_evaluate() {
        for (hex, value) in [
            ("C200B40A82", "3"),
            ("04005AC33890", "54"),
            ("880086C3E88112", "7"),
            ("CE00C43D881120", "9"),
            ("D8005AC2A8F0", "1"),
            ("F600BC2D8F", "0"),
            ("9C005AC2F8F0", "0"),
            ("9C0141080250320F1802104A08", "1"),
        ] {
            assert_eq!(solve::<Solver>(hex, 2), value, "{hex}");
        }
    }

    #[test]
    fn test_truncated() {
        assert!(Solver::parse("D2F").is_err());
    }
}
