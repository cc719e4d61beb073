//! `treepath` CLI -- filter, format and explore JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Apply a filter (stdin → stdout)
//! echo '{"users":[{"name":"Alice"},{"name":"Bob"}]}' | treepath filter '.users[].name'
//!
//! # Chain stages and print compact output
//! treepath filter '.users | length' -i data.json --compact
//!
//! # Print a string result without quotes
//! treepath filter '.users[0].name' -i data.json --raw
//!
//! # Pretty-print JSON
//! treepath format -i data.json -o pretty.json
//!
//! # List every node as a ready-to-use filter
//! treepath paths -i data.json -o paths.txt
//!
//! # Render a tree, collapsing everything or selected nodes
//! treepath tree -i data.json --collapse-all
//! treepath tree -i data.json --collapse .users[1]
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::io::{self, Read};
use treepath_core::{CanonicalPath, CollapseState};

#[derive(Parser)]
#[command(
    name = "treepath",
    version,
    about = "Filter and explore JSON with path expressions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log evaluation steps to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a filter such as `.items[].name | length`
    Filter {
        /// The filter expression
        filter: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Print compact JSON instead of pretty-printing
        #[arg(long)]
        compact: bool,
        /// Print a string result without JSON quotes
        #[arg(long)]
        raw: bool,
    },
    /// Pretty-print JSON with two-space indentation
    Format {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List the filter expression of every node, one per line
    Paths {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Render the value as an indented tree
    Tree {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Collapse every non-empty array and object
        #[arg(long, conflicts_with = "collapse")]
        collapse_all: bool,
        /// Collapse the node at this path (repeatable)
        #[arg(long, value_name = "PATH")]
        collapse: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Filter {
            filter,
            input,
            output,
            compact,
            raw,
        } => {
            let value = read_value(input.as_deref())?;
            let result = treepath_core::evaluate_filter(&value, &filter)?;
            let rendered = match result {
                Value::String(s) if raw => s,
                other => to_json(&other, compact)?,
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Format { input, output } => {
            let text = read_input(input.as_deref())?;
            let pretty = treepath_core::format_json(&text).context("Failed to format JSON")?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Paths { input, output } => {
            let value = read_value(input.as_deref())?;
            let lines: Vec<String> = treepath_core::all_paths(&value)
                .iter()
                .map(CanonicalPath::to_filter_expression)
                .collect();
            write_output(output.as_deref(), &lines.join("\n"))?;
        }
        Commands::Tree {
            input,
            output,
            collapse_all,
            collapse,
        } => {
            let value = read_value(input.as_deref())?;
            let state = build_collapse_state(&value, collapse_all, &collapse)?;
            write_output(output.as_deref(), &treepath_core::render_tree(&value, &state))?;
        }
    }

    Ok(())
}

/// Install `env_logger`: `warn` by default, `debug` with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Build the tree's collapse state from `--collapse-all` / `--collapse`.
///
/// `--collapse` accepts the same text the `paths` command prints.
fn build_collapse_state(
    value: &Value,
    collapse_all: bool,
    collapse: &[String],
) -> Result<CollapseState> {
    if collapse_all {
        return Ok(CollapseState::collapse_all(value));
    }
    let mut state = CollapseState::new();
    for raw in collapse {
        let path = CanonicalPath::from_filter_expression(raw)
            .with_context(|| format!("Invalid --collapse path: {}", raw))?;
        log::debug!("collapsing {:?}", path.as_str());
        state.set_collapsed(path, true);
    }
    Ok(state)
}

fn read_value(path: Option<&str>) -> Result<Value> {
    let text = read_input(path)?;
    treepath_core::parse_value(&text).context("Failed to parse JSON input")
}

fn to_json(value: &Value, compact: bool) -> Result<String> {
    let out = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(out)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
