use anyhow::Result;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use test_vm::{emitter, Invocation, InvocationError, USAGE};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber when RUST_LOG is set
///
/// Diagnostics go to stderr; stdout carries only measurement lines.
fn init_tracing() {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
}

fn main() -> Result<ExitCode> {
    init_tracing();

    let args = std::env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned());

    let invocation = match Invocation::from_args(args) {
        Ok(invocation) => invocation,
        Err(InvocationError::Usage { given }) => {
            tracing::debug!(given, "wrong argument count");
            println!("{USAGE}");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    emitter::emit(&invocation, &mut out)?;
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}
