//! Mutex rules for action and literal layers.
//!
//! A [`MutexRule`] is a named boolean test over two distinct nodes of the
//! same layer. Each node kind gets a small ordered rule list; a pair is mutex
//! as soon as one rule fires:
//!
//! | Kind | Rule | Fires when |
//! |------|------|------------|
//! | action | `serialization` | both actions are ordinary (only with `serialize`) |
//! | action | `inconsistent_effects` | an effect of one negates an effect of the other |
//! | action | `interference` | an effect of one negates a precondition of the other |
//! | action | `competing_needs` | some preconditions are mutex in the parent literal layer |
//! | literal | `negation` | one literal is the negation of the other |
//! | literal | `inconsistent_support` | every pair of producers is mutex in the parent action layer |
//!
//! # Example
//!
//! ```
//! use graphplan_graph::rule::{action_rules, literal_rules};
//!
//! let rules = action_rules(false);
//! assert_eq!(rules[0].name(), "inconsistent_effects");
//! assert_eq!(action_rules(true)[0].name(), "serialization");
//! assert_eq!(literal_rules()[0].name(), "negation");
//! ```

use core::fmt;

use crate::catalogue::Catalogue;
use crate::id::{ActionId, LiteralId};
use crate::layer::{ActionKind, Layer, LiteralKind, NodeKind};

/// Everything a rule may look at while testing a pair.
pub struct RuleContext<'a, K: NodeKind> {
    catalogue: &'a Catalogue,
    layer: &'a Layer<K>,
    parent: &'a Layer<K::Adjacent>,
}

impl<'a, K: NodeKind> RuleContext<'a, K> {
    /// Creates a context for the pairs of `layer`.
    #[must_use]
    pub fn new(catalogue: &'a Catalogue, layer: &'a Layer<K>, parent: &'a Layer<K::Adjacent>) -> Self {
        Self {
            catalogue,
            layer,
            parent,
        }
    }

    /// Returns the interned problem universe.
    #[must_use]
    pub fn catalogue(&self) -> &'a Catalogue {
        self.catalogue
    }

    /// Returns the layer whose pairs are being tested.
    #[must_use]
    pub fn layer(&self) -> &'a Layer<K> {
        self.layer
    }

    /// Returns the adjacent-kind layer this layer's parents live in.
    #[must_use]
    pub fn parent(&self) -> &'a Layer<K::Adjacent> {
        self.parent
    }
}

/// Signature of a rule test.
pub type RuleFn<K> = fn(&RuleContext<'_, K>, <K as NodeKind>::Id, <K as NodeKind>::Id) -> bool;

/// A named mutex test for nodes of kind `K`.
pub struct MutexRule<K: NodeKind> {
    name: &'static str,
    func: RuleFn<K>,
}

impl<K: NodeKind> MutexRule<K> {
    /// Creates a rule from a name and a test function.
    #[must_use]
    pub const fn new(name: &'static str, func: RuleFn<K>) -> Self {
        Self { name, func }
    }

    /// Returns the rule name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Tests the pair `(a, b)`.
    #[must_use]
    pub fn check(&self, ctx: &RuleContext<'_, K>, a: K::Id, b: K::Id) -> bool {
        (self.func)(ctx, a, b)
    }
}

impl<K: NodeKind> Clone for MutexRule<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: NodeKind> Copy for MutexRule<K> {}

impl<K: NodeKind> fmt::Debug for MutexRule<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutexRule")
            .field("kind", &K::NAME)
            .field("name", &self.name)
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Action rules
// ─────────────────────────────────────────────────────────────────────────────

/// Builds the ordered action rule list.
///
/// With `serialize`, any two ordinary actions are mutex, so at most one
/// non-persistence action is taken per level.
#[must_use]
pub fn action_rules(serialize: bool) -> Vec<MutexRule<ActionKind>> {
    let mut rules = Vec::with_capacity(4);
    if serialize {
        rules.push(MutexRule::new("serialization", serialization));
    }
    rules.extend([
        MutexRule::new("inconsistent_effects", inconsistent_effects),
        MutexRule::new("interference", interference),
        MutexRule::new("competing_needs", competing_needs),
    ]);
    rules
}

fn serialization(ctx: &RuleContext<'_, ActionKind>, a: ActionId, b: ActionId) -> bool {
    let catalogue = ctx.catalogue();
    !catalogue.action(a).is_no_op() && !catalogue.action(b).is_no_op()
}

/// Any effect of `a` against any effect of `b`, full cross product.
fn inconsistent_effects(ctx: &RuleContext<'_, ActionKind>, a: ActionId, b: ActionId) -> bool {
    let catalogue = ctx.catalogue();
    let effects_b = catalogue.action(b).effects();
    catalogue
        .action(a)
        .effects()
        .iter()
        .any(|effect| effects_b.binary_search(&effect.negated()).is_ok())
}

fn interference(ctx: &RuleContext<'_, ActionKind>, a: ActionId, b: ActionId) -> bool {
    let catalogue = ctx.catalogue();
    let (a, b) = (catalogue.action(a), catalogue.action(b));
    let negates = |effects: &[LiteralId], preconditions: &[LiteralId]| {
        effects
            .iter()
            .any(|effect| preconditions.binary_search(&effect.negated()).is_ok())
    };
    negates(a.effects(), b.preconditions()) || negates(b.effects(), a.preconditions())
}

fn competing_needs(ctx: &RuleContext<'_, ActionKind>, a: ActionId, b: ActionId) -> bool {
    let catalogue = ctx.catalogue();
    let literals = ctx.parent();
    let needs_b = catalogue.action(b).preconditions();
    catalogue.action(a).preconditions().iter().any(|&p| {
        needs_b
            .iter()
            .any(|&q| literals.is_mutex(p, q))
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Literal rules
// ─────────────────────────────────────────────────────────────────────────────

/// Builds the ordered literal rule list.
#[must_use]
pub fn literal_rules() -> Vec<MutexRule<LiteralKind>> {
    vec![
        MutexRule::new("negation", negation),
        MutexRule::new("inconsistent_support", inconsistent_support),
    ]
}

fn negation(_ctx: &RuleContext<'_, LiteralKind>, a: LiteralId, b: LiteralId) -> bool {
    a.negated() == b
}

/// Needs at least one producer on each side; an action producing both
/// literals is never mutex with itself, so shared support defeats the rule.
fn inconsistent_support(ctx: &RuleContext<'_, LiteralKind>, a: LiteralId, b: LiteralId) -> bool {
    let actions = ctx.parent();
    let support_b: Vec<ActionId> = ctx.layer().parents(b).collect();
    let mut support_a = ctx.layer().parents(a).peekable();
    if support_a.peek().is_none() || support_b.is_empty() {
        return false;
    }
    support_a.all(|x| support_b.iter().all(|&y| actions.is_mutex(x, y)))
}
