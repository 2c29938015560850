//! Health state model and contract.
//!
//! # Data Flow
//! ```text
//! Contract (contract.rs):
//!     HealthReporter::failed()  → aggregate bool
//!     HealthReporter::state()   → per-check states + aggregate, or error
//!
//! Reference implementation (registry.rs):
//!     Named check closures
//!     → evaluated synchronously per call
//!     → aggregate failed iff any check errored
//! ```
//!
//! # Design Decisions
//! - The contract is stateless from this crate's perspective: every call
//!   reflects current conditions, never accumulated history
//! - Concrete checks (database pings, disk space) live with the embedding
//!   service; the registry is one convenient implementation, not the only one

pub mod contract;
pub mod registry;

pub use contract::{BoxError, CheckState, CheckStates, HealthReporter};
pub use registry::CheckRegistry;
