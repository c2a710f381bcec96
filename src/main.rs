#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # sqltutor
//!
//! Command line front end for the SQL tutoring engine. `demo` walks through
//! a set of canned tutoring scenarios; `hint` answers a single JSON request
//! read from a file or stdin.

use std::{fs, io::Read, path::PathBuf};

use anyhow::{Context, Result};
use bpaf::*;
use colored::Colorize;
use dotenvy::dotenv;
use sqltutor::{AttemptAnalysis, HintEngine, HintRequest};
use tabled::{
    Table, Tabled,
    settings::{Modify, Panel, Style, Width, object::Rows},
};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Run the built-in demonstration scenarios
    Demo(Option<u64>),
    /// Answer a single hint request
    Hint(Option<u64>, Option<PathBuf>),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the optional random seed
    fn s() -> impl Parser<Option<u64>> {
        long("seed")
            .help("Seed for reproducible hint selection")
            .argument::<u64>("SEED")
            .optional()
    }

    /// parses the optional request file path
    fn f() -> impl Parser<Option<PathBuf>> {
        positional::<PathBuf>("FILE")
            .help("Path to a JSON hint request (reads stdin when omitted)")
            .optional()
    }

    let demo = construct!(Cmd::Demo(s()))
        .to_options()
        .command("demo")
        .help("Walk through the built-in tutoring scenarios");

    let hint = construct!(Cmd::Hint(s(), f()))
        .to_options()
        .command("hint")
        .help("Generate a hint for a JSON request");

    let cmd = construct!([demo, hint]);

    cmd.to_options()
        .descr("SQL tutor that hints without revealing solutions")
        .run()
}

/// One row of the demonstration output.
#[derive(Tabled)]
struct ScenarioRow {
    /// * `scenario`: informal name of the scenario
    #[tabled(rename = "Scenario")]
    scenario: &'static str,
    /// * `attempt`: the student query fed to the engine
    #[tabled(rename = "Student Query")]
    attempt:  String,
    /// * `tier`: the quality tier the engine classified the attempt into
    #[tabled(rename = "Tier")]
    tier:     String,
    /// * `hint`: the hint the engine produced
    #[tabled(rename = "Hint")]
    hint:     String,
}

/// Runs the canned scenarios and prints the resulting hints as a table.
fn demo(mut engine: HintEngine) {
    /// Assignment shared by every demo scenario.
    const ASSIGNMENT: &str = "Find all customers who have placed more than 5 orders";
    /// Table schema shared by every demo scenario.
    const SCHEMA: &str =
        "customers (id, name, email)\norders (id, customer_id, order_date, total)";

    let scenarios: [(&str, &str); 4] = [
        ("Empty query", ""),
        ("Beginning attempt", "SELECT * FROM customers"),
        (
            "Partial attempt",
            "SELECT name FROM customers JOIN orders ON customers.id = orders.customer_id",
        ),
        (
            "Advanced attempt",
            "SELECT name, COUNT(*) FROM customers JOIN orders ON customers.id = \
             orders.customer_id GROUP BY name HAVING COUNT(*) > 5",
        ),
    ];

    let rows: Vec<ScenarioRow> = scenarios
        .into_iter()
        .map(|(scenario, query)| {
            let request = HintRequest::builder()
                .assignment_description(ASSIGNMENT)
                .table_schema(SCHEMA)
                .sample_rows("Sample data...")
                .user_sql_query(query)
                .build();

            let tier = AttemptAnalysis::of(&request.user_sql_query).quality.to_string();
            let hint = engine.provide_hint(&request).to_string();

            ScenarioRow {
                scenario,
                attempt: if query.is_empty() { "(empty)".to_string() } else { query.to_string() },
                tier,
                hint,
            }
        })
        .collect();

    println!("{} {}", "Assignment:".bold(), ASSIGNMENT);
    println!(
        "{}",
        Table::new(&rows)
            .with(Panel::header("SQL Tutor - Demonstration Scenarios"))
            .with(Modify::new(Rows::new(1..)).with(Width::wrap(40).keep_words(true)))
            .with(Style::modern())
    );
}

/// Reads a JSON `HintRequest` from the given file (stdin when omitted) and
/// prints the resulting hint.
fn hint(mut engine: HintEngine, file: Option<PathBuf>) -> Result<()> {
    let raw = match file {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("Could not read request file {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Could not read request from stdin")?;
            buffer
        }
    };

    let request: HintRequest =
        serde_json::from_str(&raw).context("Could not parse the hint request as JSON")?;

    println!("{}", engine.provide_hint(&request));
    Ok(())
}

/// Builds an engine, seeded when a seed was given.
fn engine_for(seed: Option<u64>) -> HintEngine {
    match seed {
        Some(seed) => HintEngine::seeded(seed),
        None => HintEngine::new(),
    }
}

fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    match options() {
        Cmd::Demo(seed) => demo(engine_for(seed)),
        Cmd::Hint(seed, file) => hint(engine_for(seed), file)?,
    };

    Ok(())
}
