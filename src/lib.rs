//! test-vm - Synthetic benchmark-output generator
//!
//! Emits deterministic measurement lines (`mem`, `compile`, `total`) at fixed
//! cadences so a benchmark harness's output parsing can be exercised without
//! running a real benchmark.
//!
//! ```
//! use test_vm::{emitter, Invocation};
//!
//! let out = emitter::render(&Invocation::new("mybench", 3));
//! assert_eq!(
//!     out,
//!     "mybench: total: 1ms\nmybench: total: 2ms\nmybench: mem: 3MB\nmybench: total: 3ms\n"
//! );
//! ```

pub mod cli;
pub mod criteria;
pub mod digits;
pub mod emitter;
pub mod invocation;
pub mod series;

pub use criteria::{Criterion, CRITERIA};
pub use invocation::{Invocation, InvocationError, USAGE};
pub use series::{Series, SeriesMismatch};
