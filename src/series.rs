//! Expected measurement series
//!
//! A harness that ingests the emitted lines ends up with one value series
//! per criterion, indexed by iteration, with nulls where the criterion did
//! not report. This module builds the expected series and checks a
//! reconstructed one against it.
//!
//! The JSON shape is a list of objects:
//!
//! ```json
//! [{"criterion": "mem", "values": [null, null, 3, null, null, 6]}]
//! ```

use crate::criteria::{self, Criterion};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Per-iteration values for one criterion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub criterion: String,
    pub values: Vec<Option<i64>>,
}

/// A single position where a series disagrees with the expectation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{criterion} at {iteration}: Expected {}, got {}", Nullable(.expected), Nullable(.actual))]
pub struct SeriesMismatch {
    pub criterion: String,
    pub iteration: i64,
    pub expected: Option<i64>,
    pub actual: Option<i64>,
}

/// Displays `None` as `null`
struct Nullable<'a>(&'a Option<i64>);

impl fmt::Display for Nullable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("null"),
        }
    }
}

impl Series {
    /// Expected series of `iterations` values for `criterion`
    ///
    /// Zero or negative counts give an empty series.
    pub fn expected(criterion: &Criterion, iterations: i64) -> Self {
        let values = (1..=iterations)
            .map(|i| criterion.reports_at(i).then_some(i))
            .collect();
        Self {
            criterion: criterion.name.to_string(),
            values,
        }
    }

    /// Expected series for every criterion, in table order
    pub fn expected_all(iterations: i64) -> Vec<Self> {
        criteria::CRITERIA
            .iter()
            .map(|c| Self::expected(c, iterations))
            .collect()
    }

    /// Compare against the expectation for this series' own length
    ///
    /// Returns an empty list for unknown criteria.
    pub fn mismatches(&self) -> Vec<SeriesMismatch> {
        let Some(criterion) = criteria::lookup(&self.criterion) else {
            tracing::trace!(criterion = %self.criterion, "skipping unknown criterion");
            return Vec::new();
        };

        self.values
            .iter()
            .zip(1i64..)
            .filter_map(|(&actual, iteration)| {
                let expected = criterion.reports_at(iteration).then_some(iteration);
                (actual != expected).then(|| SeriesMismatch {
                    criterion: self.criterion.clone(),
                    iteration,
                    expected,
                    actual,
                })
            })
            .collect()
    }

    pub fn from_json(json: &str) -> serde_json::Result<Vec<Self>> {
        serde_json::from_str(json)
    }

    pub fn to_json(series: &[Self]) -> serde_json::Result<String> {
        serde_json::to_string(series)
    }
}

/// Check every series, collecting all mismatches
pub fn check(series: &[Series]) -> Result<(), Vec<SeriesMismatch>> {
    let mismatches: Vec<_> = series.iter().flat_map(Series::mismatches).collect();
    if mismatches.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = mismatches.len(), "series mismatches found");
        Err(mismatches)
    }
}
