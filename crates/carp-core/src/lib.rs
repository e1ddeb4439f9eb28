#![deny(missing_docs)]
#![doc = "Structured error types, configuration, and shared primitives for the CARP/CBASS path solver."]

/// Cooperative cancellation handle.
pub mod cancel;
/// Serde-derived run configuration.
pub mod config;
/// Structured error types.
pub mod errors;
/// Canonical report hashing.
pub mod hash;
/// Index/shape primitives.
pub mod shape;
/// Run status sum type.
pub mod status;

pub use cancel::CancelToken;
pub use config::{PenaltyKind, RunConfig, Variant, VizConfig};
pub use errors::{CarpError, ErrorInfo};
pub use shape::{Index, Shape};
pub use status::RunStatus;
