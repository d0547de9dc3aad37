use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2034, day = 24, tags = ["test", "sums"])]
struct TaggedSolver;

impl AocParser for TaggedSolver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.split_whitespace().collect())
    }
}

impl PartSolver<1> for TaggedSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for TaggedSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.join("-"))
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2034, day = 25)]
struct UntaggedSolver;

impl AocParser for UntaggedSolver {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl PartSolver<1> for UntaggedSolver {
    fn solve(_shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok("done".to_string())
    }
}

#[test]
fn test_plugins_are_collected() {
    let plugins: Vec<_> = aoc_solver::inventory::iter::<aoc_solver::SolverPlugin>()
        .filter(|p| p.year == 2034)
        .map(|p| (p.day, p.tags.to_vec(), p.solver.parts()))
        .collect();

    assert!(plugins.contains(&(24, vec!["test", "sums"], 2)));
    assert!(plugins.contains(&(25, vec![], 1)));
}

#[test]
fn test_register_all_plugins_and_solve() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    let mut solver = registry
        .create_solver(2034, 24, "a b c")
        .expect("solver should be registered");
    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, "3");
    assert_eq!(solver.solve(2).unwrap().answer, "a-b-c");

    let mut solver = registry.create_solver(2034, 25, "").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "done");
}

#[test]
fn test_tag_filtering() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"sums"))
        .unwrap()
        .build();

    assert!(registry.storage().contains(2034, 24));
    assert!(!registry.storage().contains(2034, 25));
}
