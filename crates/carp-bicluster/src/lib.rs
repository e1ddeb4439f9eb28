#![deny(missing_docs)]
#![doc = "CBASS biclustering path kernel: two fusion graphs coupled through a shared primal."]

/// One-shot sparse factorization of the combined row/column operator.
pub mod factor;
/// `run_cbass` entry point.
pub mod kernel;
/// Combined ADMM step shared by both kernel variants.
pub mod step;
/// Observation-major / variable-major primal re-layouts.
pub mod transpose;

pub use factor::BiFactor;
pub use kernel::{run_cbass, BiPathResult};
pub use step::{cbass_step, BiState, Scratch};
