//! Tests for graph expansion and leveling off.
//!
//! These tests verify the structural guarantees of a filled graph:
//! - Layers only grow
//! - Mutex relations are symmetric
//! - A literal and its negation are always mutex
//! - Leveled graphs stop changing
//! - Edges only connect nodes of adjacent layers

mod test_utils;

use graphplan_graph::{LiteralId, PlanningGraph};
use test_utils::{air_cargo, graph, have_cake, id, two_chains, unreachable};

fn filled(mut g: PlanningGraph) -> PlanningGraph {
    g.fill(None);
    g
}

fn all_graphs() -> Vec<PlanningGraph> {
    vec![
        filled(graph(&have_cake())),
        filled(graph(&two_chains())),
        filled(graph(&unreachable())),
        filled(graph(&air_cargo())),
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// Invariants
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn layers_are_monotonic() {
    for g in all_graphs() {
        for pair in g.literal_layers().windows(2) {
            assert!(pair[1].is_superset_of(&pair[0]));
        }
        for pair in g.action_layers().windows(2) {
            assert!(pair[1].is_superset_of(&pair[0]));
        }
    }
}

#[test]
fn mutexes_are_symmetric() {
    for g in all_graphs() {
        for layer in g.literal_layers() {
            for a in layer.nodes() {
                for b in layer.nodes() {
                    assert_eq!(layer.is_mutex(a, b), layer.is_mutex(b, a));
                }
            }
        }
        for layer in g.action_layers() {
            for a in layer.nodes() {
                for b in layer.nodes() {
                    assert_eq!(layer.is_mutex(a, b), layer.is_mutex(b, a));
                }
            }
        }
    }
}

#[test]
fn negations_are_mutex_wherever_both_appear() {
    for g in all_graphs() {
        for layer in g.literal_layers() {
            for literal in layer.nodes() {
                if layer.contains(literal.negated()) {
                    assert!(layer.is_mutex(literal, literal.negated()));
                }
            }
        }
    }
}

#[test]
fn mutexes_only_disappear_as_the_graph_grows() {
    for g in all_graphs() {
        for pair in g.literal_layers().windows(2) {
            for (a, b) in pair[1].mutexes().iter() {
                if pair[0].contains(a) && pair[0].contains(b) {
                    assert!(pair[0].is_mutex(a, b), "{a} / {b} became mutex again");
                }
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fixed Point
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn extend_after_leveling_is_a_no_op() {
    for mut g in all_graphs() {
        assert!(g.is_leveled());
        let literals = g.literal_layers().len();
        let actions = g.action_layers().len();
        let last = g.last_literal_layer().clone();

        g.extend();
        g.fill(None);

        assert_eq!(g.literal_layers().len(), literals);
        assert_eq!(g.action_layers().len(), actions);
        assert!(g.last_literal_layer().same_structure(&last));
    }
}

#[test]
fn leveled_layer_matches_its_predecessor() {
    for g in all_graphs() {
        let layers = g.literal_layers();
        let n = layers.len();
        assert!(n >= 2);
        assert!(layers[n - 1].same_structure(&layers[n - 2]));
        for pair in layers[..n - 1].windows(2) {
            assert!(!pair[1].same_structure(&pair[0]));
        }
    }
}

#[test]
fn have_cake_levels_off_at_level_two() {
    let g = filled(graph(&have_cake()));
    // Level 2 frees Have/Eaten; level 3 adds nothing new.
    assert_eq!(g.level_count(), 4);

    let (have, eaten) = (id(&g, "Have(Cake)"), id(&g, "Eaten(Cake)"));
    assert!(g.literal_layers()[1].is_mutex(have, eaten));
    assert!(!g.literal_layers()[2].is_mutex(have, eaten));
}

// ─────────────────────────────────────────────────────────────────────────────
// Edges
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn edges_connect_present_nodes_only() {
    for g in all_graphs() {
        for (i, actions) in g.action_layers().iter().enumerate() {
            let below = &g.literal_layers()[i];
            let above = &g.literal_layers()[i + 1];
            for action in actions.nodes() {
                let entry = g.catalogue().action(action);
                let parents: Vec<LiteralId> = actions.parents(action).collect();
                let children: Vec<LiteralId> = actions.children(action).collect();

                assert_eq!(parents, entry.preconditions());
                assert_eq!(children, entry.effects());
                assert!(parents.iter().all(|&p| below.contains(p)));
                assert!(children.iter().all(|&c| above.contains(c)));
                assert!(parents.iter().all(|&p| below.children(p).any(|a| a == action)));
                assert!(children.iter().all(|&c| above.parents(c).any(|a| a == action)));
            }
        }
    }
}

#[test]
fn every_literal_past_the_root_has_a_producer() {
    for g in all_graphs() {
        for layer in &g.literal_layers()[1..] {
            for literal in layer.nodes() {
                assert!(layer.parents(literal).next().is_some(), "{literal}");
            }
        }
    }
}
