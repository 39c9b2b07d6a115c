//! Argument validation
//!
//! Turns the raw user arguments into an [`Invocation`]. A wrong argument
//! count is a usage error; a malformed iteration count is a parse error
//! and is reported separately so callers can let it propagate.

use crate::cli::Cli;
use crate::criteria::CRITERIA;
use crate::digits;
use std::num::ParseIntError;
use thiserror::Error;

/// Usage line printed when the argument count is wrong
pub const USAGE: &str = "Usage: test-vm.py <benchmark> <number-of-iterations>";

/// Number of user-supplied arguments the command line must carry
pub const EXPECTED_ARGS: usize = 2;

#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("{}", USAGE)]
    Usage { given: usize },

    #[error("invalid number of iterations '{value}'")]
    InvalidIterations {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("failed to bind arguments")]
    Binding(#[source] clap::Error),
}

/// A validated run request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub benchmark: String,
    /// Iterations to simulate; zero or negative emits nothing
    pub iterations: i64,
}

impl Invocation {
    pub fn new(benchmark: impl Into<String>, iterations: i64) -> Self {
        Self {
            benchmark: benchmark.into(),
            iterations,
        }
    }

    /// Validate user arguments (program name excluded)
    ///
    /// The count is checked on the raw list before anything is interpreted.
    pub fn from_args<I, S>(args: I) -> Result<Self, InvocationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        if args.len() != EXPECTED_ARGS {
            return Err(InvocationError::Usage { given: args.len() });
        }

        // Two values always bind; an error here is not a usage problem
        let cli = Cli::from_user_args(&args).map_err(InvocationError::Binding)?;
        let iterations = parse_iterations(&cli.iterations)?;

        tracing::debug!(benchmark = %cli.benchmark, iterations, "invocation accepted");
        Ok(Self {
            benchmark: cli.benchmark,
            iterations,
        })
    }

    /// Total lines this invocation emits
    pub fn expected_line_count(&self) -> u64 {
        CRITERIA
            .iter()
            .map(|c| c.report_count(self.iterations))
            .sum()
    }
}

/// Parse an iteration count
///
/// Accepts surrounding whitespace, a leading sign, single underscores
/// between digits and decimal digits from any script.
pub fn parse_iterations(value: &str) -> Result<i64, InvocationError> {
    digits::normalize(value)
        .parse::<i64>()
        .map_err(|source| InvocationError::InvalidIterations {
            value: value.to_string(),
            source,
        })
}
