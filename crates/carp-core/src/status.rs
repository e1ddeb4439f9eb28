//! Terminal status of a completed (or partially completed) kernel run.

use serde::{Deserialize, Serialize};

use crate::errors::ErrorInfo;

/// Outcome of a `run_carp`/`run_cbass` invocation.
///
/// `MaxIterReached`, `Cancelled`, and `NumericalOverflow` all accompany a
/// valid, usable partial path (everything recorded before the condition was
/// observed); `MultiMerge` accompanies a complete path in which one or more
/// internal nodes merge more than two components at once. Per the solver's
/// error-handling policy, only setup/fatal conditions (`InvalidInput`,
/// `LinAlg`) are returned as `Err`; every data-dependent condition reaching
/// this far is a status on a successful `Result::Ok`, this one included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail")]
pub enum RunStatus {
    /// All edges fused before `max_iter` was reached.
    Completed,
    /// The iteration cap was hit before full fusion.
    MaxIterReached,
    /// Cooperative cancellation was observed.
    Cancelled,
    /// An iterate developed a non-finite entry; the path up to (but not
    /// including) the offending step is still valid and returned.
    NumericalOverflow(ErrorInfo),
    /// VIZ bisection could not isolate a single fusion at the listed steps.
    MultiMerge {
        /// Path-column indices at which more than one edge fused simultaneously.
        events: Vec<usize>,
    },
}

impl RunStatus {
    /// Returns whether the run reached full fusion (ignoring `MultiMerge` tags).
    pub fn is_complete(&self) -> bool {
        matches!(self, RunStatus::Completed | RunStatus::MultiMerge { .. })
    }
}
