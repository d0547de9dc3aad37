use std::collections::HashMap;
use std::sync::LazyLock;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::parse;

/// Passport Processing
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 4, tags = ["2020", "validation", "regex"])]
pub struct Solver;

const REQUIRED: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];

static HEIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(cm|in)$").expect("height pattern is valid"));
static HAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-f]{6}$").expect("hair pattern is valid"));
static PASSPORT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{9}$").expect("passport id pattern is valid"));

pub type Passport<'a> = HashMap<&'a str, &'a str>;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Passport<'a>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse::blocks(input)
            .map(|block| {
                block
                    .split_whitespace()
                    .map(|field| parse::split_pair(field, ":"))
                    .collect::<Result<Passport<'_>, _>>()
            })
            .collect()
    }
}

fn year_between(value: &str, low: u32, high: u32) -> bool {
    value.len() == 4 && value.parse().is_ok_and(|y| (low..=high).contains(&y))
}

fn field_is_valid(key: &str, value: &str) -> bool {
    match key {
        "byr" => year_between(value, 1920, 2002),
        "iyr" => year_between(value, 2010, 2020),
        "eyr" => year_between(value, 2020, 2030),
        "hgt" => HEIGHT.captures(value).is_some_and(|caps| {
            let height: u32 = caps[1].parse().unwrap_or(0);
            match &caps[2] {
                "cm" => (150..=193).contains(&height),
                _ => (59..=76).contains(&height),
            }
        }),
        "hcl" => HAIR.is_match(value),
        "ecl" => matches!(value, "amb" | "blu" | "brn" | "gry" | "grn" | "hzl" | "oth"),
        "pid" => PASSPORT_ID.is_match(value),
        _ => true,
    }
}

fn has_required(passport: &Passport<'_>) -> bool {
    REQUIRED.iter().all(|key| passport.contains_key(key))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|p| has_required(p)).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let valid = shared
            .iter()
            .filter(|p| has_required(p) && p.iter().all(|(k, v)| field_is_valid(k, v)))
            .count();
        Ok(valid.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
ecl:gry pid:860033327 eyr:2020 hcl:#fffffd
byr:1937 iyr:2017 cid:147 hgt:183cm

iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884
hcl:#cfa07d byr:1929

hcl:#ae17e1 iyr:2013
eyr:2024
ecl:brn pid:760753108 byr:1931
hgt:179cm

hcl:#cfa07d eyr:2025 pid:166559648
iyr:2011 ecl:brn hgt:59in
";

    const INVALID: &str = "\
eyr:1972 cid:100
hcl:#18171d ecl:amb hgt:170 pid:186cm iyr:2018 byr:1926

iyr:2019
hcl:#602927 eyr:1967 hgt:170cm
ecl:grn pid:012533040 byr:1946

hcl:dab227 iyr:2012
ecl:brn hgt:182cm pid:021572410 eyr:2020 byr:1992 cid:277

hgt:59cm ecl:zzz
eyr:2038 hcl:74454a iyr:2023
pid:3556412378 byr:2007
";

    const VALID: &str = "\
pid:087499704 hgt:74in ecl:grn iyr:2012 eyr:2030 byr:1980
hcl:#623a2f

eyr:2029 ecl:blu cid:129 byr:1989
iyr:2014 pid:896056539 hcl:#a97842 hgt:165cm

hcl:#888785
hgt:164cm byr:2001 iyr:2015 cid:88
pid:545766238 ecl:hzl
eyr:2022

iyr:2010 hgt:158cm hcl:#b6652a ecl:blu byr:1944 eyr:2021 pid:093154719
";

    #[test]
    fn test_required_fields() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "2");
    }

    #[test]
    fn test_field_rules() {
        assert!(field_is_valid("byr", "2002"));
        assert!(!field_is_valid("byr", "2003"));
        assert!(field_is_valid("hgt", "60in"));
        assert!(!field_is_valid("hgt", "190in"));
        assert!(!field_is_valid("hgt", "190"));
        assert!(!field_is_valid("hcl", "#123abz"));
        assert!(!field_is_valid("pid", "0123456789"));
    }

    #[test]
    fn test_validation() {
        assert_eq!(solve::<Solver>(INVALID, 2), "0");
        assert_eq!(solve::<Solver>(VALID, 2), "4");
    }
}
