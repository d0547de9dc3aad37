//! Parallel executor for running solvers against local inputs

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Outcome of solving one part
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// Set on the first result produced by each parsed solver instance
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: ArcExecutorError) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// A registered year/day and the parts to run for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

pub struct Executor {
    shared: SharedState,
    thread_pool: rayon::ThreadPool,
}

/// State read by every worker
struct SharedState {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            shared: SharedState {
                registry,
                inputs: InputStore::new(config.input_dir.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Registered solvers passing the year/day/part filters, in (year, day) order
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.shared;
        cfg.registry
            .storage()
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: filter_parts(cfg.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Days whose input file is absent
    pub fn missing_inputs(&self, work_items: &[WorkItem]) -> Vec<(u16, u8)> {
        work_items
            .iter()
            .filter(|w| !self.shared.inputs.contains(w.year, w.day))
            .map(|w| (w.year, w.day))
            .collect()
    }

    /// Run all work items, streaming results to `tx` as they complete
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        tracing::info!(
            count = work_items.len(),
            mode = ?self.shared.parallelize_by,
            "executing work items"
        );

        match self.shared.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected: Option<ArcExecutorError> = None;
                for work in &work_items {
                    if let Err(e) = run_work_item(work, &tx, &self.shared) {
                        collected = Some(ArcExecutorError::combine_opt(collected, e));
                    }
                }
                collected.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();
                self.execute_grouped(by_year, &tx)
            }
            // Part differs only inside run_work_item
            ParallelizeBy::Day | ParallelizeBy::Part => {
                self.execute_grouped(work_items.into_iter().map(|w| vec![w]).collect(), &tx)
            }
        }
    }

    /// Each group becomes one pool task; items within a group run in order
    fn execute_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let shared = &self.shared;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    items.iter().fold(None, |err, work| {
                        match run_work_item(work, tx, shared) {
                            Ok(()) => err,
                            Err(e) => Some(ArcExecutorError::combine_opt(err, e)),
                        }
                    })
                })
                .reduce_with(|a, b| match (a, b) {
                    (Some(a), Some(b)) => Some(ArcExecutorError::combine(a, b)),
                    (a, b) => a.or(b),
                })
                .flatten()
                .map_or(Ok(()), Err)
        })
    }
}

/// Narrow `1..=max_parts` by the part filter
#[allow(clippy::reversed_empty_ranges)]
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if p <= max_parts => p..=p,
        Some(_) => 1..=0,
        None => 1..=max_parts,
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}

/// Send the same failure for every requested part of a work item
fn send_failure(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    error: ArcExecutorError,
) -> Result<(), ArcExecutorError> {
    for part in work.parts.clone() {
        send(tx, SolverResult::failed(work.year, work.day, part, error.clone()))?;
    }
    Ok(())
}

fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    shared: &SharedState,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let _span = tracing::debug_span!("work_item", year, day).entered();

    let input = match shared.inputs.load(year, day) {
        Ok(input) => input,
        Err(source) => {
            tracing::warn!(year, day, error = %source, "input unavailable");
            return send_failure(work, tx, ExecutorError::Input { year, day, source }.into());
        }
    };

    if matches!(shared.parallelize_by, ParallelizeBy::Part) {
        run_parts_parallel(work, &input, tx, &shared.registry)
    } else {
        run_parts_sequential(work, &input, tx, &shared.registry)
    }
}

/// Parse once and solve the parts in order on the current thread
fn run_parts_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let mut solver = match registry.create_solver(year, day, input) {
        Ok(solver) => solver,
        Err(e) => return send_failure(work, tx, ExecutorError::Solver(e).into()),
    };

    let mut parse_duration = Some(solver.parse_duration());
    for part in work.parts.clone() {
        let mut result = solve_part(part, &mut *solver);
        result.parse_duration = parse_duration.take();
        send(tx, result)?;
    }
    tracing::debug!(year, day, "work item finished");
    Ok(())
}

/// Each part gets its own solver instance, solved concurrently on the pool;
/// results are re-sent in part order.
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let mut results: Vec<SolverResult> = work
        .parts
        .clone()
        .into_par_iter()
        .map(|part| match registry.create_solver(year, day, input) {
            Ok(mut solver) => {
                let mut result = solve_part(part, &mut *solver);
                result.parse_duration = Some(solver.parse_duration());
                result
            }
            Err(e) => SolverResult::failed(year, day, part, ExecutorError::Solver(e).into()),
        })
        .collect();
    results.sort_by_key(|r| r.part);

    results.into_iter().try_for_each(|result| send(tx, result))
}

fn solve_part(part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    let (year, day) = (solver.year(), solver.day());
    match solver.solve(part) {
        Ok(solved) => SolverResult {
            year,
            day,
            part,
            solve_duration: solved.duration(),
            answer: Ok(solved.answer),
            parse_duration: None,
        },
        Err(e) => {
            tracing::debug!(year, day, part, error = %e, "solve failed");
            SolverResult::failed(
                year,
                day,
                part,
                ExecutorError::Solver(aoc_solver::SolverError::SolveError(e)).into(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
    use std::fs;
    use tempfile::TempDir;

    /// Part 1 sums the lines, part 2 multiplies them
    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 2)]
    struct Arith;

    impl AocParser for Arith {
        type SharedData<'a> = Vec<i64>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input
                .lines()
                .map(|l| {
                    l.trim()
                        .parse()
                        .map_err(|_| ParseError::InvalidFormat(l.to_string()))
                })
                .collect()
        }
    }

    impl PartSolver<1> for Arith {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok(shared.iter().sum::<i64>().to_string())
        }
    }

    impl PartSolver<2> for Arith {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok(shared.iter().product::<i64>().to_string())
        }
    }

    fn executor(dir: &TempDir, mode: ParallelizeBy, part: Option<u8>) -> Executor {
        let registry = SolverRegistryBuilder::new()
            .register_solver::<Arith>(2015, 1)
            .unwrap()
            .register_solver::<Arith>(2015, 2)
            .unwrap()
            .register_solver::<Arith>(2016, 1)
            .unwrap()
            .build();
        let config = Config {
            year_filter: None,
            day_filter: None,
            part_filter: part,
            tags: Vec::new(),
            input_dir: dir.path().to_path_buf(),
            thread_count: 2,
            parallelize_by: mode,
            quiet: true,
        };
        Executor::new(registry, &config).unwrap()
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let (tx, rx) = std::sync::mpsc::channel();
        executor.execute(tx).unwrap();
        let mut results: Vec<_> = rx.into_iter().collect();
        results.sort_by_key(|r| (r.year, r.day, r.part));
        results
    }

    #[test]
    fn test_filter_parts() {
        assert_eq!(filter_parts(None, 2), 1..=2);
        assert_eq!(filter_parts(Some(2), 2), 2..=2);
        assert!(filter_parts(Some(2), 1).is_empty());
    }

    #[test]
    fn test_work_items_respect_filters() {
        let dir = TempDir::new().unwrap();
        let mut exec = executor(&dir, ParallelizeBy::Sequential, Some(2));
        let items = exec.collect_work_items();
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|w| w.parts == (2..=2)));

        exec.shared.year_filter = Some(2015);
        exec.shared.day_filter = Some(2);
        assert_eq!(
            exec.collect_work_items(),
            vec![WorkItem {
                year: 2015,
                day: 2,
                parts: 2..=2
            }]
        );
    }

    #[test]
    fn test_every_mode_produces_same_answers() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("2015_day01.txt"), "2\n3\n4").unwrap();
        fs::write(dir.path().join("2015_day02.txt"), "5\n-1").unwrap();
        fs::write(dir.path().join("2016_day01.txt"), "7").unwrap();

        for mode in [
            ParallelizeBy::Sequential,
            ParallelizeBy::Year,
            ParallelizeBy::Day,
            ParallelizeBy::Part,
        ] {
            let results = run(&executor(&dir, mode, None));
            let answers: Vec<_> = results
                .iter()
                .map(|r| r.answer.as_ref().unwrap().as_str())
                .collect();
            assert_eq!(answers, ["9", "24", "4", "-5", "7", "7"], "{mode:?}");
            assert!(results.iter().any(|r| r.parse_duration.is_some()));
        }
    }

    #[test]
    fn test_missing_and_malformed_inputs_fail_per_part() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("2015_day01.txt"), "1\n2").unwrap();
        fs::write(dir.path().join("2015_day02.txt"), "x").unwrap();

        let exec = executor(&dir, ParallelizeBy::Day, None);
        assert_eq!(exec.missing_inputs(&exec.collect_work_items()), vec![(2016, 1)]);

        let results = run(&exec);
        assert_eq!(results.len(), 6);
        assert_eq!(results[0].answer.as_ref().unwrap(), "3");
        for r in &results[2..4] {
            let err = r.answer.as_ref().unwrap_err();
            assert!(matches!(err.inner(), ExecutorError::Solver(_)));
        }
        for r in &results[4..] {
            let err = r.answer.as_ref().unwrap_err();
            assert!(matches!(err.inner(), ExecutorError::Input { year: 2016, day: 1, .. }));
        }
    }
}
