//! Fixed criteria table
//!
//! Each criterion is a simulated measurement category with a unit and a
//! reporting step. A criterion reports at iteration `i` when `i` is a
//! multiple of its step.

/// A named measurement category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criterion {
    /// Criterion name as it appears in output ("mem", "compile", "total")
    pub name: &'static str,
    /// Unit suffix appended directly to the value
    pub unit: &'static str,
    /// Reporting cadence in iterations (always > 0)
    pub step: u64,
}

impl Criterion {
    /// Whether this criterion reports at the given iteration
    ///
    /// Iterations are 1-based; anything below 1 never reports.
    pub fn reports_at(&self, iteration: i64) -> bool {
        iteration >= 1 && (iteration as u64) % self.step == 0
    }

    /// Number of reports this criterion makes over `1..=iterations`
    pub fn report_count(&self, iterations: i64) -> u64 {
        if iterations < 1 {
            return 0;
        }
        iterations as u64 / self.step
    }
}

/// Criteria in emission order
pub static CRITERIA: [Criterion; 3] = [
    Criterion {
        name: "mem",
        unit: "MB",
        step: 3,
    },
    Criterion {
        name: "compile",
        unit: "ms",
        step: 7,
    },
    Criterion {
        name: "total",
        unit: "ms",
        step: 1,
    },
];

/// Look up a criterion by name
pub fn lookup(name: &str) -> Option<&'static Criterion> {
    CRITERIA.iter().find(|c| c.name == name)
}
