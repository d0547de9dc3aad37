use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::ParseResultExt;

/// No Space Left On Device
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 7, tags = ["2022", "tree", "parsing"])]
pub struct Solver;

const DISK: u64 = 70_000_000;
const NEEDED: u64 = 30_000_000;

/// Total size of every directory visited; the root is first.
fn directory_sizes(session: &str) -> anyhow::Result<Vec<u64>> {
    let mut sizes = vec![0u64];
    let mut cwd = vec![0usize];
    for (n, line) in session.lines().enumerate() {
        let fail = |msg: &str| anyhow!("(line {}) {msg}: {line:?}", n + 1);
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["$", "cd", "/"] => cwd.truncate(1),
            ["$", "cd", ".."] => {
                if cwd.len() == 1 {
                    return Err(fail("cannot leave the root"));
                }
                cwd.pop();
            }
            ["$", "cd", _] => {
                sizes.push(0);
                cwd.push(sizes.len() - 1);
            }
            ["$", "ls"] | ["dir", _] | [] => {}
            [size, _] => {
                let size: u64 = size.parse().map_err(|_| fail("bad file size"))?;
                for &dir in &cwd {
                    sizes[dir] += size;
                }
            }
            _ => return Err(fail("unrecognised output")),
        }
    }
    Ok(sizes)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        directory_sizes(input).invalid_format()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let small: u64 = shared.iter().filter(|&&s| s <= 100_000).sum();
        Ok(small.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let used = shared[0];
        let must_free = (used + NEEDED).saturating_sub(DISK);
        shared
            .iter()
            .filter(|&&s| s >= must_free)
            .min()
            .map(u64::to_string)
            .ok_or_else(|| SolveError::failed("no directory frees enough space"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_solutions::solve;

    const EXAMPLE: &str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
";

    #[test]
    fn test_sizes() {
        assert_eq!(Solver::parse(EXAMPLE).unwrap(), vec![48381165, 94853, 584, 24933642]);
    }

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "95437");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "24933642");
    }

    #[test]
    fn test_cd_above_root() {
        assert!(Solver::parse("$ cd /\n$ cd ..\n").is_err());
    }
}
