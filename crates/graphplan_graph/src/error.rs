//! Error types for planning graph construction and heuristic queries.

use graphplan_strips::Literal;

/// Errors raised by [`PlanningGraph`](crate::graph::PlanningGraph).
///
/// None of these are transient: the computation is deterministic, so the
/// caller has to fix the problem definition rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanningGraphError {
    /// The graph leveled off before the heuristic's condition held.
    #[error("goal unreachable: graph leveled off without satisfying [{}]", join(.goals))]
    UnreachableGoal {
        /// Goal literals that were never satisfied.
        goals: Vec<Literal>,
    },

    /// An action mentions a fluent outside the problem's fluent universe.
    #[error("malformed action '{action}': literal {literal} is not in the fluent universe")]
    MalformedAction {
        /// Name of the offending action.
        action: String,
        /// The literal that could not be resolved.
        literal: Literal,
    },

    /// A goal literal names a fluent outside the problem's fluent universe.
    #[error("invalid goal: literal {literal} is not in the fluent universe")]
    InvalidGoal {
        /// The literal that could not be resolved.
        literal: Literal,
    },

    /// The state vector does not line up with the problem's fluent list.
    #[error("state has {actual} values but the problem declares {expected} fluents")]
    StateLengthMismatch {
        /// Number of declared fluents.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },
}

fn join(literals: &[Literal]) -> String {
    literals
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
