//! Planning graph structure and expansion.
//!
//! A [`PlanningGraph`] alternates literal layers and action layers:
//!
//! ```text
//!  literal 0 ──▶ action 0 ──▶ literal 1 ──▶ action 1 ──▶ literal 2 ...
//! ```
//!
//! Literal layer 0 holds the literals of the evaluated state. Each call to
//! [`PlanningGraph::extend`] appends one action layer (every catalogue
//! action whose preconditions are all present) and one literal layer (every
//! effect of those actions), then computes both layers' mutexes.
//!
//! # States
//!
//! The graph is either **building** or **leveled**. It levels off when a new
//! literal layer has exactly the nodes and mutexes of its predecessor; from
//! then on expansion is a no-op and every further layer would be identical.

use graphplan_strips::{Literal, Problem};

use crate::catalogue::Catalogue;
use crate::config::PlanningGraphConfig;
use crate::error::PlanningGraphError;
use crate::id::{ActionId, LiteralId};
use crate::layer::{ActionKind, ActionLayer, LiteralKind, LiteralLayer};
use crate::rule::{MutexRule, action_rules, literal_rules};

/// A layered planning graph rooted at one state of a problem.
///
/// The graph owns every layer in two append-only sequences; layers refer to
/// their neighbours by index only. Each instance is independent, so callers
/// evaluating several states in parallel build one graph per state.
///
/// # Example
///
/// ```
/// use graphplan_graph::{PlanningGraph, PlanningGraphConfig};
/// use graphplan_strips::Problem;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let problem = Problem::from_json_str(
///     r#"{
///         "fluents": ["A", "B"],
///         "initial": ["A"],
///         "goal": ["B"],
///         "actions": [{"name": "MakeB", "preconditions": ["A"], "effects": ["B"]}]
///     }"#,
/// )?;
///
/// let mut graph = PlanningGraph::new(&problem, problem.initial_state(), PlanningGraphConfig::new())?;
/// let estimate = graph.h_levelsum()?;
/// assert_eq!(estimate, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PlanningGraph {
    catalogue: Catalogue,
    config: PlanningGraphConfig,
    action_rules: Vec<MutexRule<ActionKind>>,
    literal_rules: Vec<MutexRule<LiteralKind>>,
    goal: Vec<LiteralId>,
    literal_layers: Vec<LiteralLayer>,
    action_layers: Vec<ActionLayer>,
    leveled: bool,
}

impl PlanningGraph {
    /// Builds literal layer 0 for `state` and computes its mutexes.
    ///
    /// `state` is aligned with [`Problem::state_map`]: `true` puts the
    /// positive literal of a fluent in layer 0, `false` the negative one.
    ///
    /// # Errors
    ///
    /// - [`PlanningGraphError::StateLengthMismatch`] if `state` does not have
    ///   one value per fluent
    /// - [`PlanningGraphError::MalformedAction`] if an action mentions an
    ///   unknown fluent
    /// - [`PlanningGraphError::InvalidGoal`] if a goal literal mentions an
    ///   unknown fluent
    pub fn new(
        problem: &Problem,
        state: &[bool],
        config: PlanningGraphConfig,
    ) -> Result<Self, PlanningGraphError> {
        if state.len() != problem.state_map().len() {
            return Err(PlanningGraphError::StateLengthMismatch {
                expected: problem.state_map().len(),
                actual: state.len(),
            });
        }

        let catalogue = Catalogue::build(problem)?;
        let goal = problem
            .goal()
            .iter()
            .map(|literal| {
                catalogue
                    .literal_id(literal)
                    .ok_or_else(|| PlanningGraphError::InvalidGoal {
                        literal: literal.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut root = LiteralLayer::new(0, None);
        for (index, &holds) in state.iter().enumerate() {
            root.add(LiteralId::new(index, holds));
        }

        let mut graph = Self {
            catalogue,
            config,
            action_rules: action_rules(config.serialize),
            literal_rules: literal_rules(),
            goal,
            literal_layers: Vec::new(),
            action_layers: Vec::new(),
            leveled: false,
        };

        if !config.ignore_mutexes {
            // Layer 0 has no producing actions; only the negation rule can fire.
            let no_actions = ActionLayer::new(0, None);
            root.update_mutexes(&graph.literal_rules, &graph.catalogue, &no_actions, None);
        }
        graph.literal_layers.push(root);

        tracing::debug!(
            fluents = problem.state_map().len(),
            actions = graph.catalogue.action_count(),
            goals = graph.goal.len(),
            serialize = config.serialize,
            ignore_mutexes = config.ignore_mutexes,
            "planning graph created"
        );

        Ok(graph)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the literal layers, level 0 first.
    #[must_use]
    pub fn literal_layers(&self) -> &[LiteralLayer] {
        &self.literal_layers
    }

    /// Returns the action layers; action layer `i` sits between literal
    /// layers `i` and `i + 1`.
    #[must_use]
    pub fn action_layers(&self) -> &[ActionLayer] {
        &self.action_layers
    }

    /// Returns the number of literal layers built so far.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.literal_layers.len()
    }

    /// Returns `true` once the graph has reached its fixed point.
    #[must_use]
    pub fn is_leveled(&self) -> bool {
        self.leveled
    }

    /// Returns the interned literal and action universe.
    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Returns the goal literal ids, in goal order.
    #[must_use]
    pub fn goal(&self) -> &[LiteralId] {
        &self.goal
    }

    /// Resolves a literal to its id.
    #[must_use]
    pub fn literal_id(&self, literal: &Literal) -> Option<LiteralId> {
        self.catalogue.literal_id(literal)
    }

    /// Resolves an action name (e.g. `"NoOp(~At(A))"`) to its id.
    #[must_use]
    pub fn action_id(&self, name: &str) -> Option<ActionId> {
        self.catalogue.action_id(name)
    }

    /// Returns the last literal layer.
    #[must_use]
    pub fn last_literal_layer(&self) -> &LiteralLayer {
        // Layer 0 is pushed in `new`, so the sequence is never empty.
        &self.literal_layers[self.literal_layers.len() - 1]
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Expansion
    // ─────────────────────────────────────────────────────────────────────────

    /// Extends the graph until it levels off or `max_levels` extensions have
    /// been performed (`None` for no bound).
    pub fn fill(&mut self, max_levels: Option<usize>) -> &mut Self {
        let mut remaining = max_levels;
        while !self.leveled {
            match remaining {
                Some(0) => break,
                Some(ref mut n) => *n -= 1,
                None => {}
            }
            self.extend();
        }
        self
    }

    /// Appends one action layer and one literal layer.
    ///
    /// Does nothing once the graph is leveled.
    pub fn extend(&mut self) {
        if self.leveled {
            return;
        }

        let level = self.action_layers.len();
        let parent_index = self.literal_layers.len() - 1;
        let parent_literals = &self.literal_layers[parent_index];

        // Actions carry forward; new ones join once their preconditions hold.
        let mut action_layer = ActionLayer::new(level, level.checked_sub(1));
        if let Some(previous) = action_layer.previous().map(|i| &self.action_layers[i]) {
            for action in previous.nodes() {
                action_layer.add(action);
            }
        }
        for (id, entry) in self.catalogue.actions() {
            if !action_layer.contains(id)
                && entry
                    .preconditions()
                    .iter()
                    .all(|&p| parent_literals.contains(p))
            {
                action_layer.add(id);
            }
        }

        let mut literal_layer = LiteralLayer::new(level + 1, Some(parent_index));
        for literal in parent_literals.nodes() {
            literal_layer.add(literal);
        }

        let actions: Vec<ActionId> = action_layer.nodes().collect();
        for &action in &actions {
            let entry = self.catalogue.action(action);
            action_layer.add_inbound_edges(action, entry.preconditions().iter().copied());
            action_layer.add_outbound_edges(action, entry.effects().iter().copied());
            for &effect in entry.effects() {
                literal_layer.add(effect);
                literal_layer.add_inbound_edges(effect, [action]);
            }
        }

        let parent_literals = &mut self.literal_layers[parent_index];
        for &action in &actions {
            for &precondition in self.catalogue.action(action).preconditions() {
                parent_literals.add_outbound_edges(precondition, [action]);
            }
        }

        if !self.config.ignore_mutexes {
            let parent_literals = &self.literal_layers[parent_index];
            let previous_actions = action_layer.previous().map(|i| &self.action_layers[i]);
            let previous_literals = literal_layer.previous().map(|i| &self.literal_layers[i]);
            action_layer.update_mutexes(
                &self.action_rules,
                &self.catalogue,
                parent_literals,
                previous_actions,
            );
            literal_layer.update_mutexes(
                &self.literal_rules,
                &self.catalogue,
                &action_layer,
                previous_literals,
            );
        }

        self.leveled = literal_layer.same_structure(&self.literal_layers[parent_index]);

        tracing::debug!(
            level = level + 1,
            actions = action_layer.len(),
            action_mutexes = action_layer.mutexes().len(),
            literals = literal_layer.len(),
            literal_mutexes = literal_layer.mutexes().len(),
            "planning graph extended"
        );
        if self.leveled {
            tracing::info!(levels = level + 2, "planning graph leveled off");
        }

        self.action_layers.push(action_layer);
        self.literal_layers.push(literal_layer);
    }
}
