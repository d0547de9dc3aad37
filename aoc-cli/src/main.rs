//! `aoc`: run the archived Advent of Code solvers against local inputs

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Linked for its inventory submissions
use aoc_solutions as _;

use aggregator::{ResultAggregator, ResultKey};
use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args);
    let registry = build_registry(&config.tags)?;
    let executor =
        Executor::new(registry, &config).map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let missing = executor.missing_inputs(&work_items);
    if !missing.is_empty() && !config.quiet {
        eprintln!(
            "Missing {} input file(s) in {}:",
            missing.len(),
            config.input_dir.display()
        );
        for (year, day) in &missing {
            eprintln!("  - {}_day{:02}.txt", year, day);
        }
    }

    if !config.quiet {
        println!("Running {} solver(s)...", work_items.len());
    }
    let expected = ResultKey::for_work(&work_items);
    let formatter = OutputFormatter::new(config.quiet);

    let (tx, rx) = std::sync::mpsc::channel();
    let results = std::thread::scope(|s| {
        let handle = s.spawn(|| executor.execute(tx));

        let mut aggregator = ResultAggregator::new(expected);
        let mut results = Vec::new();
        for result in rx {
            for ready in aggregator.add(result) {
                formatter.print_result(&ready);
                results.push(ready);
            }
        }
        for ready in aggregator.drain() {
            formatter.print_result(&ready);
            results.push(ready);
        }
        if !aggregator.is_complete() {
            tracing::warn!("not all expected results were received");
        }

        handle
            .join()
            .map_err(|_| CliError::Config("executor thread panicked".to_string()))?
            .map_err(CliError::Executor)?;
        Ok::<_, CliError>(results)
    })?;

    formatter.print_summary(&results);
    Ok(())
}

/// Registry of every linked solver carrying all of `tags`
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();
    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };
    Ok(builder.build())
}
