use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};

#[derive(Debug, Clone)]
struct SharedData {
    numbers: Vec<i64>,
    sorted: Option<Vec<i64>>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 3)]
struct MedianSolver;

impl AocParser for MedianSolver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let numbers = input
            .split(',')
            .map(|n| {
                n.trim()
                    .parse::<i64>()
                    .map_err(|_| ParseError::InvalidFormat(format!("not a number: {n:?}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SharedData {
            numbers,
            sorted: None,
        })
    }
}

fn sorted(shared: &mut SharedData) -> &[i64] {
    shared.sorted.get_or_insert_with(|| {
        let mut numbers = shared.numbers.clone();
        numbers.sort_unstable();
        numbers
    })
}

impl PartSolver<1> for MedianSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sorted = sorted(shared);
        sorted
            .get(sorted.len() / 2)
            .map(|n| n.to_string())
            .ok_or_else(|| SolveError::failed("empty list"))
    }
}

impl PartSolver<2> for MedianSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sorted(shared).iter().rev().take(2).sum::<i64>().to_string())
    }
}

impl PartSolver<3> for MedianSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.sorted.is_some().to_string())
    }
}

#[test]
fn test_three_parts_dispatch() {
    let mut shared = MedianSolver::parse("16,1,2,0,4,2,7,1,2,14").unwrap();
    assert_eq!(MedianSolver::PARTS, 3);
    assert_eq!(MedianSolver::solve_part(&mut shared, 3).unwrap(), "false");
    assert_eq!(MedianSolver::solve_part(&mut shared, 1).unwrap(), "2");
    assert_eq!(MedianSolver::solve_part(&mut shared, 2).unwrap(), "30");
    assert_eq!(MedianSolver::solve_part(&mut shared, 3).unwrap(), "true");
}

#[test]
fn test_part_two_alone_still_sorts() {
    let mut shared = MedianSolver::parse("3, 9, 5").unwrap();
    assert_eq!(MedianSolver::solve_part(&mut shared, 2).unwrap(), "14");
    assert!(shared.sorted.is_some());
}

#[test]
fn test_unimplemented_part_and_checked_range() {
    let mut shared = MedianSolver::parse("1").unwrap();
    assert!(matches!(
        MedianSolver::solve_part(&mut shared, 4),
        Err(SolveError::PartNotImplemented(4))
    ));
    assert!(matches!(
        MedianSolver::solve_part_checked_range(&mut shared, 0),
        Err(SolveError::PartOutOfRange(0))
    ));
}

#[test]
fn test_parse_error_surface() {
    let err = MedianSolver::parse("1,x").unwrap_err();
    assert!(err.to_string().contains("not a number"));
}
