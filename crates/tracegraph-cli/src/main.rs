// Rust guideline compliant 2026-10-16

//! Tracegraph CLI Application
//!
//! Command-line interface for extracting traceability graphs from issue
//! tracker data.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracegraph_cli::{commands, create_formatter, logging, render_error};
use tracegraph_core::Config;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "tracegraph",
    version,
    about = "Tracegraph: traceability graphs from issue tracker data",
    long_about = "Tracegraph builds a graph of capabilities, features, requirements, threads, components and sprints from issue tracker records and writes it as a JSON document.",
    after_help = "Examples:\n  tracegraph extract --snapshot tracker.json\n  tracegraph extract --snapshot tracker.json --out graph.json --integrity repair\n  tracegraph summary graph.json\n  tracegraph jql\n  tracegraph config --write tracegraph.toml\n"
)]
struct Cli {
    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Extract the graph from a tracker snapshot
    Extract {
        /// Snapshot file holding tracker records
        #[arg(long)]
        snapshot: PathBuf,

        /// Output document path
        #[arg(long)]
        out: Option<PathBuf>,

        /// Integrity policy
        #[arg(long, value_parser = ["report", "repair", "trim"])]
        integrity: Option<String>,

        /// Verbose diagnostics
        #[arg(long)]
        debug: bool,
    },

    /// Summarize a saved graph document
    Summary {
        /// Path to the graph document
        document: PathBuf,

        /// Enable JSON output
        #[arg(long)]
        json: bool,
    },

    /// Print the static issue query
    Jql,

    /// Show the effective configuration
    Config {
        /// Write the configuration to this path instead of printing it
        #[arg(long)]
        write: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = matches!(cli.command, Some(Commands::Summary { json: true, .. }));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", render_error(&err, json));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if matches!(cli.command, Some(Commands::Extract { debug: true, .. })) {
        config.debug = true;
    }

    let level = logging::resolve_level(cli.log_level.as_deref(), config.debug)?;
    logging::init_tracing(level, cli.log_json);
    debug!(?config, "Loaded configuration");

    match cli.command {
        Some(Commands::Extract {
            snapshot,
            out,
            integrity,
            debug: _,
        }) => {
            let formatter = create_formatter(false);
            commands::extract::execute(config, &snapshot, out, integrity, formatter.as_ref())?;
        }
        Some(Commands::Summary { document, json }) => {
            let formatter = create_formatter(json);
            commands::summary::execute(&document, formatter.as_ref())?;
        }
        Some(Commands::Jql) => {
            commands::jql::execute(&config);
        }
        Some(Commands::Config { write }) => {
            commands::config::execute(&config, write.as_deref())?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
