//! Command dispatch logic for farepath

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use farepath_core::config::RoutingConfig;
use farepath_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = match &cli.config {
        Some(path) => RoutingConfig::load(path)?,
        None => RoutingConfig::default(),
    };

    debug!(elapsed = ?start.elapsed(), "load_config");

    match &cli.command {
        Commands::Build { input, output_dir } => {
            super::build::run(cli, &config, input, output_dir)
        }
        Commands::Route {
            from,
            to,
            algorithm,
            max_stops,
            max_duration,
            budget,
            prefer,
            avoid,
            graph_dir,
        } => {
            let args = super::route::RouteArgs {
                from,
                to,
                algorithm: *algorithm,
                max_stops: *max_stops,
                max_duration: *max_duration,
                budget: *budget,
                prefer,
                avoid,
                graph_dir,
            };
            super::route::run(cli, &config, &args)
        }
        Commands::Compare {
            from,
            to,
            graph_dir,
        } => super::compare::run(cli, &config, from, to, graph_dir),
        Commands::Reach {
            from,
            top,
            graph_dir,
        } => super::reach::run(cli, &config, from, *top, graph_dir),
    }
}
