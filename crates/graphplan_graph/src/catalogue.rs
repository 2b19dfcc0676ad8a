//! Interned literal and action universe of one planning problem.
//!
//! The catalogue resolves every literal the problem can mention to a
//! [`LiteralId`] and every action (no-ops first, then the problem's own
//! actions) to an [`ActionId`], with preconditions and effects pre-resolved.
//! Resolution failures surface here, at graph construction time, instead of
//! deep inside expansion.

use graphplan_strips::{Action, Literal, Problem};
use hashbrown::HashMap;

use crate::error::PlanningGraphError;
use crate::id::{ActionId, LiteralId};

/// An action with its literals resolved to ids.
#[derive(Debug, Clone)]
pub struct ActionEntry {
    action: Action,
    preconditions: Vec<LiteralId>,
    effects: Vec<LiteralId>,
}

impl ActionEntry {
    /// Returns the resolved preconditions, sorted.
    #[must_use]
    pub fn preconditions(&self) -> &[LiteralId] {
        &self.preconditions
    }

    /// Returns the resolved effects, sorted.
    #[must_use]
    pub fn effects(&self) -> &[LiteralId] {
        &self.effects
    }

    /// Returns `true` for persistence actions.
    #[must_use]
    pub fn is_no_op(&self) -> bool {
        self.action.is_no_op()
    }
}

/// The interned universe of a problem.
#[derive(Debug, Clone)]
pub struct Catalogue {
    literals: Vec<Literal>,
    literal_ids: HashMap<Literal, LiteralId>,
    actions: Vec<ActionEntry>,
    action_ids: HashMap<String, ActionId>,
}

impl Catalogue {
    /// Interns the literals and actions of `problem`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningGraphError::MalformedAction`] if an action mentions a
    /// fluent that is not in the problem's state map.
    pub fn build(problem: &Problem) -> Result<Self, PlanningGraphError> {
        let mut literals = Vec::with_capacity(problem.state_map().len() * 2);
        let mut literal_ids = HashMap::with_capacity(problem.state_map().len() * 2);
        for (index, fluent) in problem.state_map().iter().enumerate() {
            for positive in [false, true] {
                let literal = Literal::new(fluent.clone(), positive);
                let id = LiteralId::new(index, positive);
                debug_assert_eq!(id.index(), literals.len());
                literal_ids.insert(literal.clone(), id);
                literals.push(literal);
            }
        }

        let mut catalogue = Self {
            literals,
            literal_ids,
            actions: Vec::new(),
            action_ids: HashMap::new(),
        };

        let no_ops = problem.no_op_actions();
        catalogue.actions.reserve(no_ops.len() + problem.actions().len());
        for action in no_ops.into_iter().chain(problem.actions().iter().cloned()) {
            catalogue.intern_action(action)?;
        }

        Ok(catalogue)
    }

    fn intern_action(&mut self, action: Action) -> Result<ActionId, PlanningGraphError> {
        let preconditions = self.resolve_all(&action, action.preconditions())?;
        let effects = self.resolve_all(&action, action.effects())?;
        let id = ActionId::new(self.actions.len());
        // Problem::new guarantees names are unique, no-ops included.
        self.action_ids.insert(action.name().to_string(), id);
        self.actions.push(ActionEntry {
            action,
            preconditions,
            effects,
        });
        Ok(id)
    }

    fn resolve_all<'a>(
        &self,
        action: &Action,
        literals: impl IntoIterator<Item = &'a Literal>,
    ) -> Result<Vec<LiteralId>, PlanningGraphError> {
        let mut ids = literals
            .into_iter()
            .map(|literal| {
                self.literal_id(literal)
                    .ok_or_else(|| PlanningGraphError::MalformedAction {
                        action: action.name().to_string(),
                        literal: literal.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        ids.sort_unstable();
        Ok(ids)
    }

    /// Resolves a literal to its id.
    #[must_use]
    pub fn literal_id(&self, literal: &Literal) -> Option<LiteralId> {
        self.literal_ids.get(literal).copied()
    }

    /// Returns the literal behind an id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this catalogue.
    #[must_use]
    pub fn literal(&self, id: LiteralId) -> &Literal {
        &self.literals[id.index()]
    }

    /// Resolves an action name to its id.
    #[must_use]
    pub fn action_id(&self, name: &str) -> Option<ActionId> {
        self.action_ids.get(name).copied()
    }

    /// Returns the entry behind an action id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this catalogue.
    #[must_use]
    pub fn action(&self, id: ActionId) -> &ActionEntry {
        &self.actions[id.index()]
    }

    /// Returns the number of interned actions, no-ops included.
    #[must_use]
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Iterates over all actions in id order.
    pub fn actions(&self) -> impl Iterator<Item = (ActionId, &ActionEntry)> {
        self.actions
            .iter()
            .enumerate()
            .map(|(index, entry)| (ActionId::new(index), entry))
    }
}
