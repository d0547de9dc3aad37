//! Runtime configuration resolved from CLI args

use crate::cli::{Args, ParallelizeBy};
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
pub struct Config {
    pub year_filter: Option<u16>,
    pub day_filter: Option<u8>,
    pub part_filter: Option<u8>,
    /// Every tag must be present on a solver for it to run
    pub tags: Vec<String>,
    /// Input directory with `~` already expanded
    pub input_dir: PathBuf,
    pub thread_count: usize,
    pub parallelize_by: ParallelizeBy,
    pub quiet: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        let input_dir = expand_tilde(&args.input_dir);
        let thread_count = args.threads.filter(|&n| n > 0).unwrap_or_else(num_cpus);
        tracing::debug!(input_dir = %input_dir.display(), thread_count, "resolved config");

        Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir,
            thread_count,
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
        }
    }
}

/// Expand a leading `~` to the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(home) = dirs::home_dir()
    {
        if path_str == "~" {
            return home;
        }
        if let Some(rest) = path_str.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_plain_paths_are_untouched() {
        assert_eq!(expand_tilde(Path::new("inputs")), PathBuf::from("inputs"));
        assert_eq!(expand_tilde(Path::new("/data/~x")), PathBuf::from("/data/~x"));
    }

    #[test]
    fn test_tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~")), home);
            assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
        }
    }

    #[test]
    fn test_zero_threads_falls_back() {
        let args = Args::try_parse_from(["aoc", "--threads", "0"]).unwrap();
        assert!(Config::from_args(args).thread_count >= 1);

        let args = Args::try_parse_from(["aoc", "--threads", "3"]).unwrap();
        assert_eq!(Config::from_args(args).thread_count, 3);
    }
}
