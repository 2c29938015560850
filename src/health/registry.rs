//! Reference reporter backed by named check closures.

use std::collections::BTreeMap;
use tracing::warn;

use super::contract::{BoxError, CheckState, CheckStates, HealthReporter};

type CheckFn = dyn Fn() -> Result<CheckState, BoxError> + Send + Sync;

/// A ready-made [`HealthReporter`] that evaluates registered checks
/// synchronously on every call.
///
/// A check that returns `Ok` contributes its value to the state map; a
/// check that returns `Err` is recorded as a failed entry and marks the
/// whole service failed. Registration happens before the registry is
/// shared with the server; evaluation takes `&self` and is safe to run
/// from concurrent requests.
#[derive(Default)]
pub struct CheckRegistry {
    checks: Vec<(String, Box<CheckFn>)>,
}

impl CheckRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named check. Names are expected to be unique; with a
    /// duplicate name the last registration wins in the state map.
    pub fn register<F>(&mut self, name: impl Into<String>, check: F)
    where
        F: Fn() -> Result<CheckState, BoxError> + Send + Sync + 'static,
    {
        self.checks.push((name.into(), Box::new(check)));
    }

    fn evaluate(&self) -> (CheckStates, bool) {
        let mut states = CheckStates::new();
        let mut failed = false;

        for (name, check) in &self.checks {
            match check() {
                Ok(value) => {
                    states.insert(name.clone(), value);
                }
                Err(err) => {
                    warn!(check = %name, error = %err, "health check failed");
                    let mut entry = BTreeMap::new();
                    entry.insert("status".to_string(), CheckState::from("failed"));
                    entry.insert("error".to_string(), CheckState::from(err.to_string()));
                    states.insert(name.clone(), CheckState::Map(entry));
                    failed = true;
                }
            }
        }

        (states, failed)
    }
}

impl HealthReporter for CheckRegistry {
    type State = CheckStates;

    fn failed(&self) -> bool {
        self.evaluate().1
    }

    fn state(&self) -> Result<(CheckStates, bool), BoxError> {
        Ok(self.evaluate())
    }
}
