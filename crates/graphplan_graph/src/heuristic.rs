//! Heuristic estimates extracted from a planning graph.
//!
//! All three estimates expand the graph lazily, one level at a time, and
//! stop as soon as their condition holds. Layers built by one query are
//! reused by the next, so asking for several estimates on the same graph
//! costs no more than the deepest of them.
//!
//! | Heuristic | Value |
//! |-----------|-------|
//! | [`LevelSum`](Heuristic::LevelSum) | sum of each goal literal's level cost |
//! | [`MaxLevel`](Heuristic::MaxLevel) | largest level cost of any goal literal |
//! | [`SetLevel`](Heuristic::SetLevel) | first level with all goals present and pairwise non-mutex |
//!
//! The level cost of a literal is the index of the first literal layer that
//! contains it, not the number of actions needed to achieve it.

use core::fmt;
use core::str::FromStr;

use graphplan_strips::Literal;

use crate::error::PlanningGraphError;
use crate::graph::PlanningGraph;
use crate::id::LiteralId;

/// Selects one of the planning graph heuristics at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Sum of level costs.
    LevelSum,
    /// Maximum level cost.
    MaxLevel,
    /// First level where the whole goal set holds without mutexes.
    SetLevel,
}

impl Heuristic {
    /// All heuristics, in documentation order.
    pub const ALL: [Heuristic; 3] = [Self::LevelSum, Self::MaxLevel, Self::SetLevel];

    /// Returns the short name used in logs and on the command line.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LevelSum => "levelsum",
            Self::MaxLevel => "maxlevel",
            Self::SetLevel => "setlevel",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when parsing an unknown heuristic name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown heuristic '{0}': expected levelsum, maxlevel or setlevel")]
pub struct ParseHeuristicError(String);

impl FromStr for Heuristic {
    type Err = ParseHeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        Self::ALL
            .into_iter()
            .find(|h| h.name() == normalized)
            .ok_or_else(|| ParseHeuristicError(s.to_string()))
    }
}

impl PlanningGraph {
    /// Evaluates the selected heuristic.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningGraphError::UnreachableGoal`] if the graph levels off
    /// before the heuristic's condition holds.
    pub fn heuristic(&mut self, heuristic: Heuristic) -> Result<usize, PlanningGraphError> {
        let value = match heuristic {
            Heuristic::LevelSum => self.h_levelsum(),
            Heuristic::MaxLevel => self.h_maxlevel(),
            Heuristic::SetLevel => self.h_setlevel(),
        }?;
        tracing::trace!(%heuristic, value, levels = self.level_count(), "heuristic evaluated");
        Ok(value)
    }

    /// Sum of the level costs of all goal literals.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningGraphError::UnreachableGoal`] if some goal literal
    /// never appears before the graph levels off.
    pub fn h_levelsum(&mut self) -> Result<usize, PlanningGraphError> {
        Ok(self.level_costs()?.into_iter().sum())
    }

    /// Largest level cost of any goal literal.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningGraphError::UnreachableGoal`] if some goal literal
    /// never appears before the graph levels off.
    pub fn h_maxlevel(&mut self) -> Result<usize, PlanningGraphError> {
        Ok(self.level_costs()?.into_iter().max().unwrap_or(0))
    }

    /// Index of the first literal layer holding every goal literal with no
    /// two of them mutex.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningGraphError::UnreachableGoal`] if no such layer
    /// exists before the graph levels off.
    pub fn h_setlevel(&mut self) -> Result<usize, PlanningGraphError> {
        let mut level = 0;
        loop {
            while level < self.literal_layers().len() {
                if self.goals_hold_at(level) {
                    return Ok(level);
                }
                level += 1;
            }
            if self.is_leveled() {
                return Err(self.unreachable_at_fixed_point());
            }
            self.extend();
        }
    }

    /// First-appearance level of each goal literal, in goal order.
    fn level_costs(&mut self) -> Result<Vec<usize>, PlanningGraphError> {
        let mut costs: Vec<Option<usize>> = vec![None; self.goal().len()];
        let mut level = 0;
        loop {
            while level < self.literal_layers().len() {
                let layer = &self.literal_layers()[level];
                for (cost, &goal) in costs.iter_mut().zip(self.goal()) {
                    if cost.is_none() && layer.contains(goal) {
                        *cost = Some(level);
                    }
                }
                level += 1;
            }

            if costs.iter().all(Option::is_some) {
                return Ok(costs.into_iter().flatten().collect());
            }
            if self.is_leveled() {
                let goals = costs
                    .iter()
                    .zip(self.goal())
                    .filter(|(cost, _)| cost.is_none())
                    .map(|(_, &goal)| self.literal(goal))
                    .collect();
                return Err(PlanningGraphError::UnreachableGoal { goals });
            }
            self.extend();
        }
    }

    fn goals_hold_at(&self, level: usize) -> bool {
        let layer = &self.literal_layers()[level];
        let goal = self.goal();
        goal.iter().all(|&g| layer.contains(g))
            && goal
                .iter()
                .enumerate()
                .all(|(i, &a)| goal[i + 1..].iter().all(|&b| !layer.is_mutex(a, b)))
    }

    /// Goals missing from the final layer, or the whole goal set when all of
    /// them are present but some pair stays mutex.
    fn unreachable_at_fixed_point(&self) -> PlanningGraphError {
        let last = self.last_literal_layer();
        let mut goals: Vec<Literal> = self
            .goal()
            .iter()
            .filter(|&&g| !last.contains(g))
            .map(|&g| self.literal(g))
            .collect();
        if goals.is_empty() {
            goals = self.goal().iter().map(|&g| self.literal(g)).collect();
        }
        PlanningGraphError::UnreachableGoal { goals }
    }

    fn literal(&self, id: LiteralId) -> Literal {
        self.catalogue().literal(id).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_heuristic_names() {
        assert_eq!("levelsum".parse::<Heuristic>().unwrap(), Heuristic::LevelSum);
        assert_eq!("Max-Level".parse::<Heuristic>().unwrap(), Heuristic::MaxLevel);
        assert_eq!("set_level".parse::<Heuristic>().unwrap(), Heuristic::SetLevel);
        assert!("ff".parse::<Heuristic>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for h in Heuristic::ALL {
            assert_eq!(h.to_string().parse::<Heuristic>().unwrap(), h);
        }
    }
}
