//! Health contract and state model.
//!
//! # Design Decisions
//! - `state()` returns a `Result`: when collection itself fails, the
//!   per-check states and the aggregate flag are unreachable, so callers
//!   cannot render stale or invalid health data by accident.
//! - Per-check values are a closed serializable variant rather than an
//!   unconstrained `Value`, keeping the JSON wire shape predictable.
//! - The state type is an associated type so a reporter may carry its own
//!   serializable shape; `CheckStates` is the conventional choice.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Boxed error used at the contract seam, where the concrete failure type
/// belongs to the reporter implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Detailed health state: check name → per-check result.
pub type CheckStates = BTreeMap<String, CheckState>;

/// Result value of a single named check.
///
/// A check may report anything from a bare string to a nested map of
/// sub-results; the variants cover what serializes cleanly to JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CheckState {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<CheckState>),
    Map(BTreeMap<String, CheckState>),
}

impl From<&str> for CheckState {
    fn from(value: &str) -> Self {
        CheckState::Text(value.to_string())
    }
}

impl From<String> for CheckState {
    fn from(value: String) -> Self {
        CheckState::Text(value)
    }
}

impl From<bool> for CheckState {
    fn from(value: bool) -> Self {
        CheckState::Bool(value)
    }
}

/// Capability interface for anything that can report service health.
///
/// Implementations are expected to be cheap and non-blocking; no timeout is
/// enforced here. Both methods must be safe to call concurrently, since an
/// HTTP server dispatches requests in parallel.
pub trait HealthReporter: Send + Sync {
    /// Detailed state shape; serialized as-is into the JSON `details` field.
    type State: Serialize;

    /// True iff the service should currently be considered unhealthy.
    fn failed(&self) -> bool;

    /// Detailed per-check state plus the aggregate failure flag, or an
    /// error when health could not be determined at all. How the aggregate
    /// flag is derived from the states is the implementor's business.
    fn state(&self) -> Result<(Self::State, bool), BoxError>;
}
