//! Planning graph primitives for graphplan (Layer 2).
//!
//! `graphplan_graph` builds GraphPlan-style planning graphs over STRIPS
//! problems and extracts admissible heuristic estimates from them.
//!
//! # Core Concepts
//!
//! - [`PlanningGraph`] - Alternating literal and action layers rooted at a state
//! - [`Layer`] - One level of the graph, generic over its [`NodeKind`]
//! - [`MutexRule`] - Named pairwise mutual-exclusion tests per node kind
//! - [`Heuristic`] - Level-sum, max-level and set-level estimates
//!
//! # Example
//!
//! ```
//! use graphplan_graph::{Heuristic, PlanningGraph, PlanningGraphConfig};
//! use graphplan_strips::{Action, Fluent, Literal, Problem};
//!
//! let have = Literal::positive("Have(Cake)");
//! let eaten = Literal::positive("Eaten(Cake)");
//! let problem = Problem::new(
//!     vec![Fluent::new("Have(Cake)"), Fluent::new("Eaten(Cake)")],
//!     vec![true, false],
//!     [have.clone(), eaten.clone()],
//!     vec![
//!         Action::new("Eat(Cake)", [have.clone()], [!have.clone(), eaten]),
//!         Action::new("Bake(Cake)", [!have.clone()], [have]),
//!     ],
//! )
//! .unwrap();
//!
//! let mut graph =
//!     PlanningGraph::new(&problem, problem.initial_state(), PlanningGraphConfig::new()).unwrap();
//! assert_eq!(graph.h_levelsum(), Ok(1));
//! assert_eq!(graph.heuristic(Heuristic::SetLevel), Ok(2));
//! ```
//!
//! # Architecture
//!
//! - **Layer 1** (`graphplan_strips`): STRIPS literals, actions and problems
//! - **Layer 2** (`graphplan_graph`): Planning graph and heuristics (this crate)

/// Interned literal and action universe.
pub mod catalogue;

/// Planning graph configuration.
pub mod config;

/// Error types.
pub mod error;

/// Planning graph structure and expansion.
pub mod graph;

/// Heuristic extraction.
pub mod heuristic;

/// Node identifiers.
pub mod id;

/// Generic graph layers.
pub mod layer;

/// Symmetric mutex storage.
pub mod mutex;

/// Mutex rules for action and literal layers.
pub mod rule;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::catalogue::{ActionEntry, Catalogue};
    pub use crate::config::PlanningGraphConfig;
    pub use crate::error::PlanningGraphError;
    pub use crate::graph::PlanningGraph;
    pub use crate::heuristic::{Heuristic, ParseHeuristicError};
    pub use crate::id::{ActionId, LiteralId};
    pub use crate::layer::{ActionKind, ActionLayer, Layer, LiteralKind, LiteralLayer, NodeKind};
    pub use crate::mutex::MutexSet;
    pub use crate::rule::{MutexRule, RuleContext};
}

// Re-export key types at crate root for convenience
pub use config::PlanningGraphConfig;
pub use error::PlanningGraphError;
pub use graph::PlanningGraph;
pub use heuristic::Heuristic;
pub use id::{ActionId, LiteralId};
pub use layer::{ActionLayer, Layer, LiteralLayer, NodeKind};
pub use rule::MutexRule;
