//! Interned identifiers for graph nodes.
//!
//! Every literal and action that can ever appear in a planning graph is
//! interned once in the [`Catalogue`](crate::catalogue::Catalogue). Layers,
//! edges and mutex pairs refer to nodes through these ids instead of holding
//! the literal or action itself.

use core::fmt;

/// Identifier of a literal in the catalogue.
///
/// Literals are interned in pairs: fluent `i` owns ids `2i` (negative) and
/// `2i + 1` (positive), so negation is a single bit flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LiteralId(pub(crate) usize);

impl LiteralId {
    /// Creates the id of a fluent's literal with the given polarity.
    #[must_use]
    pub fn new(fluent_index: usize, positive: bool) -> Self {
        Self(fluent_index * 2 + usize::from(positive))
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn index(&self) -> usize {
        self.0
    }

    /// Returns the index of the fluent in the problem's state map.
    #[must_use]
    pub fn fluent_index(&self) -> usize {
        self.0 / 2
    }

    /// Returns the id of the opposite-polarity literal.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self(self.0 ^ 1)
    }
}

impl fmt::Display for LiteralId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lit_{}", self.0)
    }
}

/// Identifier of an action (ordinary or no-op) in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionId(pub(crate) usize);

impl ActionId {
    /// Creates a new action ID.
    #[must_use]
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "act_{}", self.0)
    }
}
