//! Example heuristic evaluation built with graphplan.
//!
//! Loads a STRIPS problem (from JSON, or the built-in "have cake" problem),
//! builds one planning graph at its initial state and evaluates every
//! heuristic against it. Later heuristics reuse the layers the earlier ones
//! expanded.
//!
//! # Problem Format
//!
//! ```json
//! {
//!     "fluents": ["Have(Cake)", "Eaten(Cake)"],
//!     "initial": ["Have(Cake)"],
//!     "goal": ["Have(Cake)", "Eaten(Cake)"],
//!     "actions": [
//!         {"name": "Eat(Cake)", "preconditions": ["Have(Cake)"], "effects": ["~Have(Cake)", "Eaten(Cake)"]},
//!         {"name": "Bake(Cake)", "preconditions": ["~Have(Cake)"], "effects": ["Have(Cake)"]}
//!     ]
//! }
//! ```

pub mod problems;
pub mod settings;

use graphplan_graph::{Heuristic, PlanningGraph, PlanningGraphConfig, PlanningGraphError};
use graphplan_strips::{Problem, ProblemError};
use graphplan_tracing::ParseTracingFormatError;
use serde_json::{Value, json};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Errors surfaced by the demo binary.
#[derive(Debug, thiserror::Error)]
pub enum ExampleError {
    /// Bad command line.
    #[error("usage: {0}")]
    Usage(String),
    /// The problem file could not be opened.
    #[error("cannot open {path}: {source}")]
    Open {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },
    /// The problem definition is invalid.
    #[error(transparent)]
    Problem(#[from] ProblemError),
    /// The planning graph rejected the problem.
    #[error(transparent)]
    Graph(#[from] PlanningGraphError),
    /// Unknown log format in the environment.
    #[error(transparent)]
    LogFormat(#[from] ParseTracingFormatError),
}

/// Usage line for the `heuristics` binary.
pub const USAGE: &str = "heuristics [--serialize] [--ignore-mutexes] [--json] [problem.json]";

/// Parsed command line options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Problem file; `None` selects the built-in problem.
    pub problem: Option<PathBuf>,
    /// Graph construction flags.
    pub config: PlanningGraphConfig,
    /// Print the report as JSON.
    pub json: bool,
}

impl Options {
    /// Parses arguments, excluding the program name.
    ///
    /// # Errors
    ///
    /// Returns [`ExampleError::Usage`] on unknown flags or more than one
    /// problem path.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, ExampleError> {
        let mut options = Self::default();
        for arg in args {
            match arg.as_str() {
                "--serialize" => options.config = options.config.with_serialize(true),
                "--ignore-mutexes" => options.config = options.config.with_ignore_mutexes(true),
                "--json" => options.json = true,
                flag if flag.starts_with("--") => {
                    return Err(ExampleError::Usage(format!("unknown flag {flag}\n  {USAGE}")));
                }
                path => {
                    if options.problem.is_some() {
                        return Err(ExampleError::Usage(format!(
                            "expected at most one problem file\n  {USAGE}"
                        )));
                    }
                    options.problem = Some(PathBuf::from(path));
                }
            }
        }
        Ok(options)
    }

    /// Loads the selected problem.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed.
    pub fn load_problem(&self) -> Result<Problem, ExampleError> {
        let Some(path) = &self.problem else {
            return Ok(problems::have_cake()?);
        };
        let file = File::open(path).map_err(|source| ExampleError::Open {
            path: path.clone(),
            source,
        })?;
        Ok(Problem::from_reader(BufReader::new(file))?)
    }
}

/// Heuristic values for one problem.
#[derive(Debug)]
pub struct Report {
    /// One entry per heuristic, in [`Heuristic::ALL`] order.
    pub values: Vec<(Heuristic, Result<usize, PlanningGraphError>)>,
    /// Levels built while answering.
    pub levels: usize,
    /// Whether the graph reached its fixed point.
    pub leveled: bool,
}

impl Report {
    /// JSON rendering of the report.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let values: serde_json::Map<String, Value> = self
            .values
            .iter()
            .map(|(heuristic, value)| {
                let value = match value {
                    Ok(cost) => json!(cost),
                    Err(err) => json!({ "error": err.to_string() }),
                };
                (heuristic.name().to_string(), value)
            })
            .collect();
        json!({
            "heuristics": values,
            "levels": self.levels,
            "leveled": self.leveled,
        })
    }
}

/// Evaluates every heuristic on a single graph rooted at the initial state.
///
/// # Errors
///
/// Returns an error if the graph cannot be built. Unreachable goals are
/// reported per heuristic inside the [`Report`].
pub fn evaluate(problem: &Problem, config: PlanningGraphConfig) -> Result<Report, ExampleError> {
    let mut graph = PlanningGraph::new(problem, problem.initial_state(), config)?;
    let values = Heuristic::ALL
        .into_iter()
        .map(|heuristic| (heuristic, graph.heuristic(heuristic)))
        .collect();

    Ok(Report {
        values,
        levels: graph.level_count(),
        leveled: graph.is_leveled(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn parse_flags_and_path() {
        let options =
            Options::parse(args(&["--serialize", "problem.json", "--json"])).unwrap();
        assert!(options.config.serialize);
        assert!(!options.config.ignore_mutexes);
        assert!(options.json);
        assert_eq!(options.problem, Some(PathBuf::from("problem.json")));
    }

    #[test]
    fn parse_rejects_unknown_flag() {
        assert!(matches!(
            Options::parse(args(&["--fast"])),
            Err(ExampleError::Usage(_))
        ));
    }

    #[test]
    fn parse_rejects_two_paths() {
        assert!(matches!(
            Options::parse(args(&["a.json", "b.json"])),
            Err(ExampleError::Usage(_))
        ));
    }

    #[test]
    fn missing_file_is_reported() {
        let options = Options::parse(args(&["/nonexistent/problem.json"])).unwrap();
        assert!(matches!(
            options.load_problem(),
            Err(ExampleError::Open { .. })
        ));
    }

    #[test]
    fn built_in_problem_report() {
        let problem = Options::default().load_problem().unwrap();
        let report = evaluate(&problem, PlanningGraphConfig::new()).unwrap();

        let values: Vec<_> = report
            .values
            .iter()
            .map(|(h, v)| (*h, v.clone()))
            .collect();
        assert_eq!(
            values,
            vec![
                (Heuristic::LevelSum, Ok(1)),
                (Heuristic::MaxLevel, Ok(1)),
                (Heuristic::SetLevel, Ok(2)),
            ]
        );
        assert_eq!(report.levels, 3);
        assert!(!report.leveled);
    }

    #[test]
    fn report_json_includes_errors() {
        let problem = Problem::from_json_str(
            r#"{"fluents": ["A", "B"], "initial": [], "goal": ["B"], "actions": []}"#,
        )
        .unwrap();
        let report = evaluate(&problem, PlanningGraphConfig::new()).unwrap();
        let json = report.to_json();

        assert!(json["heuristics"]["levelsum"]["error"].is_string());
        assert_eq!(json["leveled"], Value::Bool(true));
    }
}
