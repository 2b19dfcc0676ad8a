//! STRIPS planning primitives for graphplan (Layer 1).
//!
//! `graphplan_strips` provides the immutable facts the planning graph is
//! built from:
//!
//! - [`Fluent`] - An atomic proposition that can be true or false
//! - [`Literal`] - A fluent in positive or negative polarity
//! - [`Action`] - Preconditions and effects over literals, including no-ops
//! - [`Problem`] - Ordered fluent universe, initial state, goal and actions
//!
//! # Architecture
//!
//! - **Layer 1** (`graphplan_strips`): STRIPS model (this crate)
//! - **Layer 2** (`graphplan_graph`): Planning graph and heuristics
//!
//! # Example
//!
//! ```
//! use graphplan_strips::{Action, Fluent, Literal, Problem};
//!
//! let have = Fluent::new("Have(Cake)");
//! let eaten = Fluent::new("Eaten(Cake)");
//!
//! let eat = Action::new(
//!     "Eat(Cake)",
//!     [Literal::positive(have.clone())],
//!     [Literal::negative(have.clone()), Literal::positive(eaten.clone())],
//! );
//!
//! let problem = Problem::new(
//!     vec![have.clone(), eaten.clone()],
//!     vec![true, false],
//!     [Literal::positive(eaten)],
//!     vec![eat],
//! )
//! .unwrap();
//!
//! assert_eq!(problem.state_map().len(), 2);
//! ```

/// Action definitions and no-op construction.
pub mod action;

/// Error types for problem construction and loading.
pub mod error;

/// Fluents and literals.
pub mod literal;

/// Problem definitions and JSON loading.
pub mod problem;

pub use action::Action;
pub use error::ProblemError;
pub use literal::{Fluent, Literal};
pub use problem::Problem;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::error::ProblemError;
    pub use crate::literal::{Fluent, Literal};
    pub use crate::problem::Problem;
}
