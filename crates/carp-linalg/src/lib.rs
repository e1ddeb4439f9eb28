#![deny(missing_docs)]
#![doc = "Implicit differencing operators and sparse factorization of A = I + rho * D^T D."]

/// One-shot sparse factorization of `A`.
pub mod factor;
/// Implicit `D`/`Dᵀ` operators.
pub mod operator;

pub use factor::CarpFactor;
pub use operator::{apply_d, apply_dt};
