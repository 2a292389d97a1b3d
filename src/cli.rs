//! CLI argument parsing for farepath
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config. Subcommands cover the build/query lifecycle.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use farepath_core::routing::Algorithm;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// Machine-readable JSON
    Json,
}

/// Search strategy selector for route queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Uniform-cost search; requires non-negative weights
    Dijkstra,
    /// Edge relaxation; tolerates negative weights, detects cycles
    BellmanFord,
    /// Dynamic program honoring stop/budget/duration/airline constraints
    Constrained,
}

impl AlgorithmArg {
    pub fn to_algorithm(self) -> Algorithm {
        match self {
            AlgorithmArg::Dijkstra => Algorithm::Dijkstra,
            AlgorithmArg::BellmanFord => Algorithm::BellmanFord,
            AlgorithmArg::Constrained => Algorithm::ConstrainedDp,
        }
    }
}

/// Farepath - flight route pricing and shortest-path search CLI
#[derive(Parser, Debug)]
#[command(name = "farepath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "FAREPATH_LOG")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to a routing config file (TOML); built-in defaults otherwise
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ingest a flight CSV, apply discounts, and write the graph documents
    Build {
        /// Path to the raw flight CSV
        input: PathBuf,

        /// Directory for the serialized graph documents
        #[arg(long, short = 'o', default_value = "output")]
        output_dir: PathBuf,
    },

    /// Find the cheapest route between two cities
    Route {
        /// Start city code or name
        #[arg(long)]
        from: String,

        /// Destination city code or name
        #[arg(long)]
        to: String,

        /// Search strategy
        #[arg(long, value_enum, default_value = "dijkstra")]
        algorithm: AlgorithmArg,

        /// Maximum flown segments (constrained only)
        #[arg(long)]
        max_stops: Option<usize>,

        /// Maximum total flight minutes (constrained only)
        #[arg(long)]
        max_duration: Option<u32>,

        /// Maximum total cost (constrained only)
        #[arg(long)]
        budget: Option<f64>,

        /// Preferred airline; others cost 15% more (constrained only, repeatable)
        #[arg(long, action = clap::ArgAction::Append)]
        prefer: Vec<String>,

        /// Airline to exclude entirely (constrained only, repeatable)
        #[arg(long, action = clap::ArgAction::Append)]
        avoid: Vec<String>,

        /// Directory holding the graph documents
        #[arg(long, default_value = "output")]
        graph_dir: PathBuf,
    },

    /// Run every unconstrained strategy on one query and report side by side
    Compare {
        /// Start city code or name
        #[arg(long)]
        from: String,

        /// Destination city code or name
        #[arg(long)]
        to: String,

        /// Directory holding the graph documents
        #[arg(long, default_value = "output")]
        graph_dir: PathBuf,
    },

    /// List the cheapest route from one city to every reachable destination
    Reach {
        /// Start city code or name
        #[arg(long)]
        from: String,

        /// Show only the N cheapest destinations
        #[arg(long)]
        top: Option<usize>,

        /// Directory holding the graph documents
        #[arg(long, default_value = "output")]
        graph_dir: PathBuf,
    },
}
