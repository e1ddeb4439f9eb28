//! Canonical content-addressed hashing of structured reports.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::errors::{CarpError, ErrorInfo};

/// Computes the canonical SHA-256 hash of a report's JSON serialization.
///
/// This is the solver's only "audit trail": rather than emit log lines, every
/// run report can be stamped with a hash of itself so two runs can be
/// compared for bit-identical output (testable property 6 in the spec)
/// without writing anything to disk.
pub fn hash_report<T: Serialize>(value: &T) -> Result<String, CarpError> {
    let json = serde_json::to_vec(value).map_err(|err| {
        CarpError::InvalidInput(ErrorInfo::new("report-serialize", err.to_string()))
    })?;
    let mut hasher = Sha256::new();
    hasher.update(json);
    Ok(format!("{:x}", hasher.finalize()))
}
