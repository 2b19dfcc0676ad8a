//! Graph layers.
//!
//! A planning graph alternates literal layers and action layers. Both kinds
//! share one generic [`Layer`] type, parameterized by a [`NodeKind`] marker:
//!
//! - [`LiteralLayer`] = `Layer<LiteralKind>`: literals reachable at a level,
//!   parents are the producing actions of the previous action layer
//! - [`ActionLayer`] = `Layer<ActionKind>`: actions applicable at a level,
//!   parents are the preconditions in the previous literal layer
//!
//! Layers never hold references to each other. Adjacent layers are reached
//! through the owning [`PlanningGraph`](crate::graph::PlanningGraph), and the
//! previous layer of the same kind is recorded by index.
//!
//! The kind-specific behavior lives in the ordered rule lists of
//! [`rule`](crate::rule); [`Layer::update_mutexes`] only drives them.

use core::fmt;
use core::hash::Hash;
use std::collections::BTreeSet;

use hashbrown::HashMap;

use crate::catalogue::Catalogue;
use crate::id::{ActionId, LiteralId};
use crate::mutex::MutexSet;
use crate::rule::{MutexRule, RuleContext};

// ─────────────────────────────────────────────────────────────────────────────
// Node kinds
// ─────────────────────────────────────────────────────────────────────────────

/// Marker trait tying a layer to the kind of node it holds.
pub trait NodeKind: fmt::Debug + 'static {
    /// Identifier of nodes of this kind.
    type Id: Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display;

    /// The kind of the layers on either side of this one.
    type Adjacent: NodeKind;

    /// Human-readable kind name for logs.
    const NAME: &'static str;
}

/// Node kind of action layers.
#[derive(Debug, Clone, Copy)]
pub enum ActionKind {}

/// Node kind of literal layers.
#[derive(Debug, Clone, Copy)]
pub enum LiteralKind {}

impl NodeKind for ActionKind {
    type Id = ActionId;
    type Adjacent = LiteralKind;
    const NAME: &'static str = "action";
}

impl NodeKind for LiteralKind {
    type Id = LiteralId;
    type Adjacent = ActionKind;
    const NAME: &'static str = "literal";
}

/// Id type of the layers adjacent to a `K` layer.
pub type AdjacentId<K> = <<K as NodeKind>::Adjacent as NodeKind>::Id;

/// A layer of action nodes.
pub type ActionLayer = Layer<ActionKind>;

/// A layer of literal nodes.
pub type LiteralLayer = Layer<LiteralKind>;

// ─────────────────────────────────────────────────────────────────────────────
// Layer
// ─────────────────────────────────────────────────────────────────────────────

/// One level of a planning graph.
#[derive(Debug, Clone)]
pub struct Layer<K: NodeKind> {
    /// Position of this layer within its kind's sequence.
    index: usize,
    /// Nodes present at this level, kept ordered for deterministic iteration.
    nodes: BTreeSet<K::Id>,
    /// Inbound edges from the previous adjacent-kind layer.
    parents: HashMap<K::Id, BTreeSet<AdjacentId<K>>>,
    /// Outbound edges into the next adjacent-kind layer.
    children: HashMap<K::Id, BTreeSet<AdjacentId<K>>>,
    /// Index of the previous layer of the same kind.
    previous: Option<usize>,
    mutexes: MutexSet<K::Id>,
}

impl<K: NodeKind> Layer<K> {
    /// Creates an empty layer at `index`, following `previous` if any.
    #[must_use]
    pub fn new(index: usize, previous: Option<usize>) -> Self {
        Self {
            index,
            nodes: BTreeSet::new(),
            parents: HashMap::new(),
            children: HashMap::new(),
            previous,
            mutexes: MutexSet::new(),
        }
    }

    /// Returns the position of this layer within its kind's sequence.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the index of the previous layer of the same kind.
    #[must_use]
    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    /// Returns `true` if `node` is present at this level.
    #[must_use]
    pub fn contains(&self, node: K::Id) -> bool {
        self.nodes.contains(&node)
    }

    /// Inserts a node. Returns `false` if it was already present.
    pub fn add(&mut self, node: K::Id) -> bool {
        self.nodes.insert(node)
    }

    /// Iterates over the nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = K::Id> + '_ {
        self.nodes.iter().copied()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the layer holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if every node of `other` is present here.
    #[must_use]
    pub fn is_superset_of(&self, other: &Layer<K>) -> bool {
        self.nodes.is_superset(&other.nodes)
    }

    /// Records edges from `sources` in the previous adjacent layer into `node`.
    ///
    /// `node` must already be present; repeated calls are idempotent.
    pub fn add_inbound_edges(
        &mut self,
        node: K::Id,
        sources: impl IntoIterator<Item = AdjacentId<K>>,
    ) {
        debug_assert!(self.contains(node), "inbound edge to absent node {node}");
        self.parents.entry(node).or_default().extend(sources);
    }

    /// Records edges from `node` into `targets` in the next adjacent layer.
    ///
    /// `node` must already be present; repeated calls are idempotent.
    pub fn add_outbound_edges(
        &mut self,
        node: K::Id,
        targets: impl IntoIterator<Item = AdjacentId<K>>,
    ) {
        debug_assert!(self.contains(node), "outbound edge from absent node {node}");
        self.children.entry(node).or_default().extend(targets);
    }

    /// Iterates over the parents of `node` in the previous adjacent layer.
    pub fn parents(&self, node: K::Id) -> impl Iterator<Item = AdjacentId<K>> + '_ {
        self.parents.get(&node).into_iter().flatten().copied()
    }

    /// Iterates over the children of `node` in the next adjacent layer.
    pub fn children(&self, node: K::Id) -> impl Iterator<Item = AdjacentId<K>> + '_ {
        self.children.get(&node).into_iter().flatten().copied()
    }

    /// Returns `true` if `a` and `b` are mutex at this level.
    #[must_use]
    pub fn is_mutex(&self, a: K::Id, b: K::Id) -> bool {
        self.mutexes.contains(a, b)
    }

    /// Returns the mutex relation of this layer.
    #[must_use]
    pub fn mutexes(&self) -> &MutexSet<K::Id> {
        &self.mutexes
    }

    /// Marks `a` and `b` as mutex.
    pub fn set_mutex(&mut self, a: K::Id, b: K::Id) {
        self.mutexes.insert(a, b);
    }

    /// Returns `true` if node sets and mutex sets are identical.
    ///
    /// This is the fixed-point test: edges and indices are ignored.
    #[must_use]
    pub fn same_structure(&self, other: &Layer<K>) -> bool {
        self.nodes == other.nodes && self.mutexes == other.mutexes
    }

    /// Recomputes the mutex relation over every unordered pair of nodes.
    ///
    /// A pair is mutex as soon as one of `rules` fires, in order. `parent` is
    /// the adjacent-kind layer this layer's parents live in. `previous` is
    /// this layer's same-kind predecessor: a pair that was present and not
    /// mutex there stays not mutex (mutexes only disappear as the graph
    /// grows), so it is not evaluated again. Pairs that become co-present at
    /// this level are always evaluated.
    pub fn update_mutexes(
        &mut self,
        rules: &[MutexRule<K>],
        catalogue: &Catalogue,
        parent: &Layer<K::Adjacent>,
        previous: Option<&Layer<K>>,
    ) {
        let ctx = RuleContext::new(catalogue, self, parent);
        let nodes: Vec<K::Id> = self.nodes().collect();
        let mut mutexes = MutexSet::new();
        let mut skipped = 0usize;

        for (i, &a) in nodes.iter().enumerate() {
            for &b in &nodes[i + 1..] {
                if let Some(prev) = previous
                    && prev.contains(a)
                    && prev.contains(b)
                    && !prev.is_mutex(a, b)
                {
                    skipped += 1;
                    continue;
                }
                if let Some(rule) = rules.iter().find(|rule| rule.check(&ctx, a, b)) {
                    tracing::trace!(
                        kind = K::NAME,
                        layer = self.index,
                        %a,
                        %b,
                        rule = rule.name(),
                        "mutex"
                    );
                    mutexes.insert(a, b);
                }
            }
        }

        tracing::trace!(
            kind = K::NAME,
            layer = self.index,
            pairs = mutexes.len(),
            skipped,
            "mutexes updated"
        );
        self.mutexes = mutexes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_insert_only() {
        let mut layer = LiteralLayer::new(0, None);
        assert!(layer.add(LiteralId::new(0, true)));
        assert!(!layer.add(LiteralId::new(0, true)));
        assert_eq!(layer.len(), 1);
        assert!(layer.contains(LiteralId::new(0, true)));
        assert!(!layer.contains(LiteralId::new(0, false)));
    }

    #[test]
    fn edges_are_idempotent() {
        let mut layer = ActionLayer::new(0, None);
        let action = ActionId::new(7);
        let pre = LiteralId::new(1, true);
        layer.add(action);

        layer.add_inbound_edges(action, [pre]);
        layer.add_inbound_edges(action, [pre]);
        layer.add_outbound_edges(action, [pre.negated()]);

        assert_eq!(layer.parents(action).collect::<Vec<_>>(), vec![pre]);
        assert_eq!(
            layer.children(action).collect::<Vec<_>>(),
            vec![pre.negated()]
        );
        assert_eq!(layer.parents(ActionId::new(8)).count(), 0);
    }

    #[test]
    fn same_structure_compares_nodes_and_mutexes() {
        let a = LiteralId::new(0, true);
        let b = LiteralId::new(1, true);

        let mut first = LiteralLayer::new(0, None);
        first.add(a);
        first.add(b);
        let mut second = LiteralLayer::new(1, Some(0));
        second.add(b);
        second.add(a);

        assert!(first.same_structure(&second));
        second.set_mutex(b, a);
        assert!(!first.same_structure(&second));
        first.set_mutex(a, b);
        assert!(first.same_structure(&second));
        assert!(second.is_superset_of(&first));
    }
}
