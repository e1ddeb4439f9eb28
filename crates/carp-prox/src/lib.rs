#![deny(missing_docs)]
#![doc = "L2 group and L1 element soft-thresholding proximal operators for the CARP/CBASS path solver."]

/// Fusion (exact-zero) detection over split blocks.
pub mod fusion;
/// Proximal operators.
pub mod prox;

pub use fusion::scan as scan_fusions;
pub use prox::{apply_l1, apply_l2};
