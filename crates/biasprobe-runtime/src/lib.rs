//! Biasprobe Runtime: the sequential generation loop.
//!
//! Each sample runs generate (with retry), extract, post-process, append,
//! then waits out the cooldown. One request is in flight at a time.

pub mod generation;
pub mod retry;

pub use generation::{GenerationJob, GenerationLoop, RunReport, SampleOutcome};
pub use retry::RetryPolicy;
