//! Error types for the CLI

use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Executor failure (Arc-wrapped so results can be combined cheaply)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    #[error("Input unavailable for {year}/{day:02}: {source}")]
    Input {
        year: u16,
        day: u8,
        #[source]
        source: InputError,
    },

    #[error("Solver execution failed: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    #[error("Channel send error")]
    ChannelSend,

    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Merge two errors into one `Multiple`, flattening nested lists so
    /// that `first`'s errors come before `second`'s.
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                v1.iter().chain(v2).cloned().collect()
            }
            (_, ExecutorError::Multiple(v)) => {
                std::iter::once(first.clone()).chain(v.iter().cloned()).collect()
            }
            (ExecutorError::Multiple(v), _) => {
                v.iter().cloned().chain(std::iter::once(second.clone())).collect()
            }
            _ => vec![first, second],
        };
        ExecutorError::Multiple(errors).into()
    }

    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }

    /// Number of leaf errors carried
    pub fn count(&self) -> usize {
        match self.inner() {
            ExecutorError::Multiple(v) => v.iter().map(ArcExecutorError::count).sum(),
            _ => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("no input file at {0}")]
    Missing(std::path::PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single() -> ArcExecutorError {
        ExecutorError::ChannelSend.into()
    }

    #[test]
    fn test_combine_flattens() {
        let pair = ArcExecutorError::combine(single(), single());
        assert_eq!(pair.count(), 2);

        let three = ArcExecutorError::combine(pair.clone(), single());
        assert!(matches!(three.inner(), ExecutorError::Multiple(v) if v.len() == 3));

        let five = ArcExecutorError::combine(three, pair);
        assert!(matches!(five.inner(), ExecutorError::Multiple(v) if v.len() == 5));
        assert_eq!(five.to_string(), "Multiple errors occurred (5 total)");
    }

    #[test]
    fn test_combine_opt() {
        assert_eq!(ArcExecutorError::combine_opt(None, single()).count(), 1);
        assert_eq!(ArcExecutorError::combine_opt(Some(single()), single()).count(), 2);
    }
}
