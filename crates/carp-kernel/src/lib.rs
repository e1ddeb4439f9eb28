#![deny(missing_docs)]
#![doc = "CARP and CARP-VIZ ADMM path kernels for the convex clustering solver."]

/// Growable path storage.
pub mod buffers;
/// `run_carp` entry point.
pub mod kernel;
/// Run summary and result types.
pub mod report;
/// Single ADMM step shared by both kernel variants.
pub mod step;
/// CARP-VIZ back-tracking state machine.
pub mod viz;

pub use buffers::PathBuffers;
pub use kernel::run_carp;
pub use report::{PathResult, RunReport};
pub use step::{admm_step, KernelState, Scratch};
pub use viz::{VizOutcome, VizPhase, VizState};
