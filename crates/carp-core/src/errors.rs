//! Structured error types shared across CARP/CBASS crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`CarpError`] variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (identifiers, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for the CARP/CBASS path solver.
///
/// Per the solver's error-handling policy, `MaxIterReached`, `Cancelled`,
/// and `MultiMerge` are status values carried on a successful result, not
/// members of this enum: only setup/fatal conditions are errors here.
/// `NumericalOverflow` is a member of this enum because the low-level
/// `admm_step`/`cbass_step` functions have no partial-path state to fall
/// back to and must fail outright; `run_carp`/`run_cbass` catch it at the
/// run-loop level and surface it as `RunStatus::NumericalOverflow` alongside
/// whatever partial path was already recorded, never propagating it as `Err`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum CarpError {
    /// Inputs are structurally inconsistent (bad sizes, non-positive weights,
    /// non-positive `gamma0`, `t <= 1`, `burn_in >= max_iter`, ...).
    #[error("invalid input: {0}")]
    InvalidInput(ErrorInfo),
    /// Factorization of `A = I + rho * D^T D` failed.
    #[error("linear algebra error: {0}")]
    LinAlg(ErrorInfo),
    /// An iterate developed a non-finite entry.
    #[error("numerical overflow: {0}")]
    NumericalOverflow(ErrorInfo),
}

impl CarpError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            CarpError::InvalidInput(info)
            | CarpError::LinAlg(info)
            | CarpError::NumericalOverflow(info) => info,
        }
    }
}
