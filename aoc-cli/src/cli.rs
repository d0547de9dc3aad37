//! Command-line arguments

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How finely the executor splits work across the thread pool
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// Run every solver in order on the calling thread
    Sequential,
    /// One task per year; days and parts of a year run in order
    Year,
    /// One task per year/day; parts run in order (default)
    #[default]
    Day,
    /// One task per year/day, with its parts solved concurrently
    Part,
}

/// Run the archived Advent of Code solvers against local inputs
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers", version)]
pub struct Args {
    /// Year to run (all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Only run solvers carrying every one of these tags (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}_day{dd}.txt` input files
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Worker threads (defaults to the available parallelism)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, year, day, or part
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Print answers only
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["aoc"]).unwrap();
        assert_eq!(args.year, None);
        assert_eq!(args.parallelize_by, ParallelizeBy::Day);
        assert!(args.tags.is_empty());
        assert!(!args.quiet);
    }

    #[test]
    fn test_filters_and_tags() {
        let args = Args::try_parse_from([
            "aoc",
            "--year",
            "2020",
            "-d",
            "7",
            "--tags",
            "2020,graph",
            "--input-dir",
            "/tmp/aoc",
            "--parallelize-by",
            "part",
        ])
        .unwrap();
        assert_eq!(args.year, Some(2020));
        assert_eq!(args.day, Some(7));
        assert_eq!(args.tags, vec!["2020", "graph"]);
        assert_eq!(args.input_dir, PathBuf::from("/tmp/aoc"));
        assert_eq!(args.parallelize_by, ParallelizeBy::Part);
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--part", "3"]).is_err());
    }
}
