//! Problem definitions.
//!
//! A [`Problem`] bundles the ordered fluent universe (the "state map"), an
//! initial boolean state aligned with it, the goal literals and the action
//! catalogue. States elsewhere in the workspace are plain `&[bool]` slices
//! indexed like [`Problem::state_map`].
//!
//! # JSON format
//!
//! ```json
//! {
//!   "fluents": ["Have(Cake)", "Eaten(Cake)"],
//!   "initial": ["Have(Cake)"],
//!   "goal": ["Have(Cake)", "Eaten(Cake)"],
//!   "actions": [
//!     { "name": "Eat(Cake)",
//!       "preconditions": ["Have(Cake)"],
//!       "effects": ["~Have(Cake)", "Eaten(Cake)"] }
//!   ]
//! }
//! ```
//!
//! `initial` lists the fluents that hold; every other fluent starts false.

use std::collections::{BTreeSet, HashSet};
use std::io::Read;

use serde::Deserialize;

use crate::action::Action;
use crate::error::ProblemError;
use crate::literal::{Fluent, Literal};

/// A classical planning problem.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "ProblemDefinition")]
pub struct Problem {
    state_map: Vec<Fluent>,
    initial: Vec<bool>,
    goal: BTreeSet<Literal>,
    actions: Vec<Action>,
}

/// Wire shape of a problem file.
#[derive(Debug, Deserialize)]
struct ProblemDefinition {
    fluents: Vec<Fluent>,
    #[serde(default)]
    initial: Vec<Fluent>,
    #[serde(default)]
    goal: Vec<Literal>,
    #[serde(default)]
    actions: Vec<Action>,
}

impl TryFrom<ProblemDefinition> for Problem {
    type Error = ProblemError;

    fn try_from(def: ProblemDefinition) -> Result<Self, Self::Error> {
        let holds: HashSet<&Fluent> = def.initial.iter().collect();
        if let Some(unknown) = def.initial.iter().find(|f| !def.fluents.contains(f)) {
            return Err(ProblemError::UnknownFluent(unknown.to_string()));
        }
        let initial = def.fluents.iter().map(|f| holds.contains(f)).collect();
        Problem::new(def.fluents, initial, def.goal, def.actions)
    }
}

impl Problem {
    /// Creates a problem.
    ///
    /// Goal and action literals are not checked against the fluent universe
    /// here; the planning graph reports those as construction errors.
    ///
    /// # Errors
    ///
    /// - [`ProblemError::InvalidFluent`] if a fluent name cannot be written
    ///   as a literal string
    /// - [`ProblemError::DuplicateFluent`] if a fluent is declared twice
    /// - [`ProblemError::DuplicateAction`] if two actions share a name, or an
    ///   action is named like a no-op of a declared fluent
    /// - [`ProblemError::StateLengthMismatch`] if `initial` does not have one
    ///   value per fluent
    pub fn new(
        state_map: Vec<Fluent>,
        initial: Vec<bool>,
        goal: impl IntoIterator<Item = Literal>,
        actions: Vec<Action>,
    ) -> Result<Self, ProblemError> {
        let mut seen = HashSet::with_capacity(state_map.len());
        for fluent in &state_map {
            fluent.validate()?;
            if !seen.insert(fluent) {
                return Err(ProblemError::DuplicateFluent(fluent.to_string()));
            }
        }

        // Action names key the catalogue, no-ops included.
        let mut names: HashSet<String> = state_map
            .iter()
            .flat_map(Action::no_ops)
            .map(|no_op| no_op.name().to_string())
            .collect();
        for action in &actions {
            if !names.insert(action.name().to_string()) {
                return Err(ProblemError::DuplicateAction(action.name().to_string()));
            }
        }

        if initial.len() != state_map.len() {
            return Err(ProblemError::StateLengthMismatch {
                expected: state_map.len(),
                actual: initial.len(),
            });
        }
        Ok(Self {
            state_map,
            initial,
            goal: goal.into_iter().collect(),
            actions,
        })
    }

    /// Parses a problem from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemError::Json`] on malformed input or any validation
    /// error from [`Problem::new`] (surfaced through the JSON error).
    pub fn from_json_str(json: &str) -> Result<Self, ProblemError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a problem from a JSON source.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader fails or the JSON is invalid.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, ProblemError> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }

    /// Returns the ordered fluent universe.
    #[must_use]
    pub fn state_map(&self) -> &[Fluent] {
        &self.state_map
    }

    /// Returns the initial state, aligned with [`Problem::state_map`].
    #[must_use]
    pub fn initial_state(&self) -> &[bool] {
        &self.initial
    }

    /// Returns the goal literals.
    #[must_use]
    pub fn goal(&self) -> &BTreeSet<Literal> {
        &self.goal
    }

    /// Returns the ordinary (non no-op) actions.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Builds one no-op per literal of every fluent, in state map order.
    #[must_use]
    pub fn no_op_actions(&self) -> Vec<Action> {
        self.state_map.iter().flat_map(Action::no_ops).collect()
    }
}
