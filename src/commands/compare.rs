//! `farepath compare` - run every strategy on one query, side by side
//!
//! On the non-negative graphs `build` produces, all strategies must agree
//! on the optimal cost; a disagreement indicates corrupt graph documents.

use std::path::Path;

use farepath_core::config::RoutingConfig;
use farepath_core::error::Result;
use farepath_core::graph::export;
use farepath_core::routing::{bellman_ford, constrained, dijkstra, Constraints, RouteResult};

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::resolve_city;

pub fn run(cli: &Cli, config: &RoutingConfig, from: &str, to: &str, graph_dir: &Path) -> Result<()> {
    let from = resolve_city(config, from);
    let to = resolve_city(config, to);

    let adjacency = export::load_adjacency(graph_dir)?;
    let node_edges = export::load_node_edges(graph_dir)?;
    let detailed = export::load_detailed(graph_dir)?;

    let results = [
        dijkstra::shortest_path(&adjacency, &from, &to),
        bellman_ford::shortest_path(&node_edges, &from, &to),
        constrained::shortest_path(&detailed, &from, &to, &Constraints::default()),
    ];

    let agree = costs_agree(&results);
    if !agree {
        tracing::warn!(from = %from, to = %to, "strategies disagree on optimal cost");
    }

    match cli.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "from": from,
                "to": to,
                "agree": agree,
                "results": results,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            for result in &results {
                match &result.path {
                    Some(path) => println!(
                        "{:<14} {:>10.2}  {} ({:.3}ms)",
                        result.algorithm.to_string(),
                        result.cost,
                        path.join(" -> "),
                        result.execution_time_ms
                    ),
                    None => println!(
                        "{:<14} {:>10}  {}",
                        result.algorithm.to_string(),
                        "-",
                        result
                            .error
                            .map(|kind| kind.to_string())
                            .unwrap_or_else(|| "no route found".into())
                    ),
                }
            }
            if !agree && !cli.quiet {
                println!("warning: strategies disagree on optimal cost");
            }
        }
    }

    Ok(())
}

fn costs_agree(results: &[RouteResult]) -> bool {
    results
        .windows(2)
        .all(|pair| (pair[0].cost - pair[1].cost).abs() < 1e-9)
}
