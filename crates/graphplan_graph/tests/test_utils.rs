//! Shared test utilities for `graphplan_graph` integration tests.
//!
//! Import via `mod test_utils;` in test files.

#![allow(
    dead_code,
    missing_docs,
    reason = "not every helper is used by every test binary"
)]

use graphplan_graph::{LiteralId, PlanningGraph, PlanningGraphConfig};
use graphplan_strips::{Action, Fluent, Literal, Problem};

// ═══════════════════════════════════════════════════════════════════════════════
// LITERAL HELPERS
// ═══════════════════════════════════════════════════════════════════════════════

/// Parses `"F"` / `"~F"` into a literal.
pub fn lit(s: &str) -> Literal {
    s.parse().expect("valid literal")
}

/// Resolves a literal string to its id in `graph`.
pub fn id(graph: &PlanningGraph, s: &str) -> LiteralId {
    graph.literal_id(&lit(s)).expect("literal in universe")
}

/// Builds an action from literal strings.
pub fn action(name: &str, pre: &[&str], eff: &[&str]) -> Action {
    Action::new(
        name,
        pre.iter().map(|s| lit(s)),
        eff.iter().map(|s| lit(s)),
    )
}

/// Builds a problem whose initial state sets exactly `initial` to true.
pub fn problem(fluents: &[&str], initial: &[&str], goal: &[&str], actions: Vec<Action>) -> Problem {
    let state = fluents.iter().map(|f| initial.contains(f)).collect();
    Problem::new(
        fluents.iter().map(|f| Fluent::new(*f)).collect(),
        state,
        goal.iter().map(|s| lit(s)),
        actions,
    )
    .expect("valid problem")
}

/// Builds a graph at the problem's initial state.
pub fn graph(problem: &Problem) -> PlanningGraph {
    graph_with(problem, PlanningGraphConfig::new())
}

/// Builds a graph at the problem's initial state with `config`.
pub fn graph_with(problem: &Problem, config: PlanningGraphConfig) -> PlanningGraph {
    PlanningGraph::new(problem, problem.initial_state(), config).expect("graph construction")
}

// ═══════════════════════════════════════════════════════════════════════════════
// PROBLEMS
// ═══════════════════════════════════════════════════════════════════════════════

/// Have cake and eat cake too (Russell & Norvig 10.3).
pub fn have_cake() -> Problem {
    problem(
        &["Have(Cake)", "Eaten(Cake)"],
        &["Have(Cake)"],
        &["Have(Cake)", "Eaten(Cake)"],
        vec![
            action("Eat(Cake)", &["Have(Cake)"], &["~Have(Cake)", "Eaten(Cake)"]),
            action("Bake(Cake)", &["~Have(Cake)"], &["Have(Cake)"]),
        ],
    )
}

/// Two independent chains: `A2` first appears at level 2, `B3` at level 3.
pub fn two_chains() -> Problem {
    problem(
        &["A0", "A1", "A2", "B0", "B1", "B2", "B3"],
        &["A0", "B0"],
        &["A2", "B3"],
        vec![
            action("MakeA1", &["A0"], &["A1"]),
            action("MakeA2", &["A1"], &["A2"]),
            action("MakeB1", &["B0"], &["B1"]),
            action("MakeB2", &["B1"], &["B2"]),
            action("MakeB3", &["B2"], &["B3"]),
        ],
    )
}

/// `C` is never produced by any action.
pub fn unreachable() -> Problem {
    problem(
        &["A", "B", "C"],
        &["A"],
        &["B", "C"],
        vec![action("MakeB", &["A"], &["B"])],
    )
}

/// A small cargo problem in JSON form, two planes and two cargos.
pub const AIR_CARGO_JSON: &str = r#"{
    "fluents": [
        "At(C1, SFO)", "At(C1, JFK)", "At(C2, SFO)", "At(C2, JFK)",
        "At(P1, SFO)", "At(P1, JFK)", "At(P2, SFO)", "At(P2, JFK)",
        "In(C1, P1)", "In(C1, P2)", "In(C2, P1)", "In(C2, P2)"
    ],
    "initial": ["At(C1, SFO)", "At(C2, JFK)", "At(P1, SFO)", "At(P2, JFK)"],
    "goal": ["At(C1, JFK)", "At(C2, SFO)"],
    "actions": [
        {"name": "Load(C1, P1, SFO)", "preconditions": ["At(C1, SFO)", "At(P1, SFO)"], "effects": ["In(C1, P1)", "~At(C1, SFO)"]},
        {"name": "Load(C2, P2, JFK)", "preconditions": ["At(C2, JFK)", "At(P2, JFK)"], "effects": ["In(C2, P2)", "~At(C2, JFK)"]},
        {"name": "Fly(P1, SFO, JFK)", "preconditions": ["At(P1, SFO)"], "effects": ["At(P1, JFK)", "~At(P1, SFO)"]},
        {"name": "Fly(P2, JFK, SFO)", "preconditions": ["At(P2, JFK)"], "effects": ["At(P2, SFO)", "~At(P2, JFK)"]},
        {"name": "Unload(C1, P1, JFK)", "preconditions": ["In(C1, P1)", "At(P1, JFK)"], "effects": ["At(C1, JFK)", "~In(C1, P1)"]},
        {"name": "Unload(C2, P2, SFO)", "preconditions": ["In(C2, P2)", "At(P2, SFO)"], "effects": ["At(C2, SFO)", "~In(C2, P2)"]}
    ]
}"#;

pub fn air_cargo() -> Problem {
    Problem::from_json_str(AIR_CARGO_JSON).expect("valid air cargo problem")
}
