//! Planning graphs and admissible heuristics for STRIPS problems.
//!

pub use graphplan_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use graphplan_internal::prelude::*;
}
