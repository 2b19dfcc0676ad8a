//! Planning graph heuristics CLI.
//!
//! Prints level-sum, max-level and set-level for a STRIPS problem at its
//! initial state.
//!
//! # Usage
//!
//! ```bash
//! heuristics [--serialize] [--ignore-mutexes] [--json] [problem.json]
//! ```
//!
//! Without a problem file the built-in "have cake and eat cake too" problem
//! is used. Logging is controlled by `GRAPHPLAN_LOG` and
//! `GRAPHPLAN_LOG_FORMAT`, also read from a `.env` file.
//!
//! # Example
//!
//! ```bash
//! GRAPHPLAN_LOG=graphplan_graph=debug heuristics --serialize cargo.json
//! ```

#![expect(
    clippy::print_stdout,
    clippy::print_stderr,
    reason = "command line output"
)]

use example::{ExampleError, Options, evaluate, settings};

fn run() -> Result<(), ExampleError> {
    settings::tracing_config_from_env()?.init();

    let options = Options::parse(std::env::args().skip(1))?;
    let problem = options.load_problem()?;
    tracing::info!(
        fluents = problem.state_map().len(),
        actions = problem.actions().len(),
        goals = problem.goal().len(),
        "problem loaded"
    );

    let report = evaluate(&problem, options.config)?;

    if options.json {
        println!("{:#}", report.to_json());
        return Ok(());
    }

    for (heuristic, value) in &report.values {
        match value {
            Ok(cost) => println!("{heuristic:>10}: {cost}"),
            Err(e) => println!("{heuristic:>10}: {e}"),
        }
    }
    let state = if report.leveled { "leveled" } else { "not leveled" };
    println!("{:>10}: {} ({state})", "levels", report.levels);
    Ok(())
}

fn main() {
    let _ = dotenvy::dotenv();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
