//! # graphplan Internal Library
//!
//! Re-exports the core graphplan crates for convenience.

/// Layer 1: STRIPS literals, actions and problems.
pub use graphplan_strips;

/// Layer 2: Planning graph expansion and heuristics.
pub use graphplan_graph;

/// Subscriber configuration for binaries.
pub use graphplan_tracing;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use graphplan_graph::prelude::*;
    pub use graphplan_strips::prelude::*;
}
