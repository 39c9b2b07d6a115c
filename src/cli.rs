//! CLI argument parsing for test-vm
//!
//! The command line is strictly positional: `test-vm <benchmark> <iterations>`.
//! There are no flags, so `--help` or `-5` are ordinary values.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "test-vm")]
#[command(about = "Synthetic benchmark-output generator", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Benchmark name printed as the prefix of every line
    #[arg(value_name = "BENCHMARK")]
    pub benchmark: String,

    /// Number of iterations to simulate
    #[arg(value_name = "NUMBER_OF_ITERATIONS")]
    pub iterations: String,
}

impl Cli {
    /// Bind user-supplied arguments (program name excluded) to the positionals
    ///
    /// A leading `--` is injected so every token, including a literal `--`,
    /// is taken as a value.
    pub fn from_user_args<I, S>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let argv = ["test-vm".to_string(), "--".to_string()]
            .into_iter()
            .chain(args.into_iter().map(|a| a.as_ref().to_string()));
        Self::try_parse_from(argv)
    }
}
