//! Configuration governing a CARP/CBASS path run.

use serde::{Deserialize, Serialize};

use crate::errors::{CarpError, ErrorInfo};

/// Proximal operator variant applied per edge block during the V-step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PenaltyKind {
    /// Group soft-threshold over the whole p-block (edge fuses as a unit).
    L2,
    /// Element-wise soft-threshold (coordinates may fuse independently).
    L1,
}

/// Which kernel drives the regularization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Classic CARP: fixed burn-in then geometric growth of `gamma`.
    Plain,
    /// CARP-VIZ: back-tracking schedule guaranteeing one fusion per step.
    Viz,
}

/// Back-tracking parameters used only when `variant == Variant::Viz`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VizConfig {
    /// Coarse multiplicative step applied while searching for the next fusion.
    #[serde(default = "default_t_coarse")]
    pub t_coarse: f64,
    /// Fine multiplicative step used while bisecting toward exactly one fusion.
    #[serde(default = "default_t_switch")]
    pub t_switch: f64,
    /// Maximum number of bisection attempts before committing a `MultiMerge`.
    #[serde(default = "default_bisection_budget")]
    pub bisection_budget: usize,
}

fn default_t_coarse() -> f64 {
    10.0
}

fn default_t_switch() -> f64 {
    1.01
}

fn default_bisection_budget() -> usize {
    50
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            t_coarse: default_t_coarse(),
            t_switch: default_t_switch(),
            bisection_budget: default_bisection_budget(),
        }
    }
}

/// Full configuration for a `run_carp`/`run_cbass` invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Initial regularization level (small, e.g. `1e-8`).
    #[serde(default = "default_gamma0")]
    pub gamma0: f64,
    /// Geometric growth factor applied after burn-in (`Plain` variant only).
    #[serde(default = "default_t")]
    pub t: f64,
    /// ADMM penalty parameter.
    #[serde(default = "default_rho")]
    pub rho: f64,
    /// Hard iteration cap.
    #[serde(default = "default_max_iter")]
    pub max_iter: usize,
    /// Number of iterations held at fixed `gamma0` before the schedule starts.
    #[serde(default = "default_burn_in")]
    pub burn_in: usize,
    /// Stride at which a column is recorded even absent a fusion change (`Plain` only).
    #[serde(default = "default_keep")]
    pub keep: usize,
    /// Proximal operator selection.
    #[serde(default = "default_penalty")]
    pub penalty: PenaltyKind,
    /// Kernel variant selection.
    #[serde(default = "default_variant")]
    pub variant: Variant,
    /// Back-tracking parameters, used only under `Variant::Viz`.
    #[serde(default)]
    pub viz: VizConfig,
    /// Cadence (in iterations) at which the cancellation handle is polled.
    #[serde(default = "default_check_interval")]
    pub check_interval: usize,
}

fn default_gamma0() -> f64 {
    1e-8
}

fn default_t() -> f64 {
    1.05
}

fn default_rho() -> f64 {
    1.0
}

fn default_max_iter() -> usize {
    10_000
}

fn default_burn_in() -> usize {
    50
}

fn default_keep() -> usize {
    1
}

fn default_penalty() -> PenaltyKind {
    PenaltyKind::L2
}

fn default_variant() -> Variant {
    Variant::Plain
}

fn default_check_interval() -> usize {
    50
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            gamma0: default_gamma0(),
            t: default_t(),
            rho: default_rho(),
            max_iter: default_max_iter(),
            burn_in: default_burn_in(),
            keep: default_keep(),
            penalty: default_penalty(),
            variant: default_variant(),
            viz: VizConfig::default(),
            check_interval: default_check_interval(),
        }
    }
}

impl RunConfig {
    /// Validates the configuration, producing `CarpError::InvalidInput` on the
    /// exact conditions enumerated in the solver's error-handling design.
    pub fn validate(&self) -> Result<(), CarpError> {
        let mut info = ErrorInfo::new("invalid-config", "run configuration is invalid");
        let mut bad = false;

        if !(self.gamma0 > 0.0) {
            info = info.with_context("gamma0", self.gamma0.to_string());
            bad = true;
        }
        if !(self.t > 1.0) {
            info = info.with_context("t", self.t.to_string());
            bad = true;
        }
        if !(self.rho > 0.0) {
            info = info.with_context("rho", self.rho.to_string());
            bad = true;
        }
        if self.max_iter == 0 {
            info = info.with_context("max_iter", self.max_iter.to_string());
            bad = true;
        }
        if self.burn_in >= self.max_iter {
            info = info
                .with_context("burn_in", self.burn_in.to_string())
                .with_context("max_iter", self.max_iter.to_string());
            bad = true;
        }
        if self.keep == 0 {
            info = info.with_context("keep", self.keep.to_string());
            bad = true;
        }
        if self.variant == Variant::Viz {
            if !(self.viz.t_coarse > 1.0) {
                info = info.with_context("viz.t_coarse", self.viz.t_coarse.to_string());
                bad = true;
            }
            if !(self.viz.t_switch > 1.0) {
                info = info.with_context("viz.t_switch", self.viz.t_switch.to_string());
                bad = true;
            }
            if self.viz.bisection_budget == 0 {
                info = info.with_context(
                    "viz.bisection_budget",
                    self.viz.bisection_budget.to_string(),
                );
                bad = true;
            }
        }

        if bad {
            Err(CarpError::InvalidInput(info))
        } else {
            Ok(())
        }
    }
}
