//! Action definitions.
//!
//! An [`Action`] is a named STRIPS operator: a set of precondition literals
//! that must hold before it is taken and a set of effect literals that hold
//! afterwards. No-op actions persist a single literal unchanged.

use core::fmt;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::literal::{Fluent, Literal};

/// A STRIPS action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    name: String,
    #[serde(default)]
    preconditions: BTreeSet<Literal>,
    #[serde(default)]
    effects: BTreeSet<Literal>,
    #[serde(skip)]
    no_op: bool,
}

impl Action {
    /// Creates an ordinary action.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        preconditions: impl IntoIterator<Item = Literal>,
        effects: impl IntoIterator<Item = Literal>,
    ) -> Self {
        Self {
            name: name.into(),
            preconditions: preconditions.into_iter().collect(),
            effects: effects.into_iter().collect(),
            no_op: false,
        }
    }

    /// Creates the no-op action that persists `literal` across one level.
    ///
    /// Its only precondition and only effect are the literal itself.
    #[must_use]
    pub fn no_op(literal: Literal) -> Self {
        Self {
            name: format!("NoOp({literal})"),
            preconditions: BTreeSet::from([literal.clone()]),
            effects: BTreeSet::from([literal]),
            no_op: true,
        }
    }

    /// Creates the two no-ops of a fluent, negative polarity first.
    #[must_use]
    pub fn no_ops(fluent: &Fluent) -> [Self; 2] {
        [
            Self::no_op(Literal::negative(fluent.clone())),
            Self::no_op(Literal::positive(fluent.clone())),
        ]
    }

    /// Returns the action name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the literals that must hold before the action is taken.
    #[must_use]
    pub fn preconditions(&self) -> &BTreeSet<Literal> {
        &self.preconditions
    }

    /// Returns the literals that hold after the action is taken.
    #[must_use]
    pub fn effects(&self) -> &BTreeSet<Literal> {
        &self.effects
    }

    /// Returns `true` for persistence actions created by [`Action::no_op`].
    #[must_use]
    pub fn is_no_op(&self) -> bool {
        self.no_op
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
