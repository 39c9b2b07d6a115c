//! Measurement line emitter
//!
//! Walks iterations `1..=n` and, for each, the criteria table in order,
//! producing one line per criterion that reports at that iteration:
//!
//! ```text
//! <benchmark>: <criterion>: <iteration><unit>
//! ```

use crate::criteria::{Criterion, CRITERIA};
use crate::invocation::Invocation;
use std::fmt;
use std::io::{self, Write};

/// One simulated measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement<'a> {
    pub benchmark: &'a str,
    pub criterion: &'static Criterion,
    pub iteration: i64,
}

impl fmt::Display for Measurement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}: {}{}",
            self.benchmark, self.criterion.name, self.iteration, self.criterion.unit
        )
    }
}

/// Lazily enumerate measurements in emission order
pub fn measurements(invocation: &Invocation) -> impl Iterator<Item = Measurement<'_>> {
    let benchmark = invocation.benchmark.as_str();
    (1..=invocation.iterations).flat_map(move |iteration| {
        CRITERIA
            .iter()
            .filter(move |c| c.reports_at(iteration))
            .map(move |criterion| Measurement {
                benchmark,
                criterion,
                iteration,
            })
    })
}

/// Write every measurement line to `out`, returning the number of lines
pub fn emit<W: Write>(invocation: &Invocation, out: &mut W) -> io::Result<u64> {
    tracing::debug!(
        benchmark = %invocation.benchmark,
        iterations = invocation.iterations,
        "emitting measurements"
    );

    let mut lines = 0u64;
    for m in measurements(invocation) {
        writeln!(out, "{m}")?;
        lines += 1;
    }

    tracing::debug!(lines, "emission complete");
    Ok(lines)
}

/// Render all lines into a string
pub fn render(invocation: &Invocation) -> String {
    measurements(invocation).map(|m| format!("{m}\n")).collect()
}
