//! `farepath reach` - cheapest route to every reachable destination

use std::path::Path;

use farepath_core::config::RoutingConfig;
use farepath_core::error::Result;
use farepath_core::graph::export;
use farepath_core::routing::bellman_ford;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::resolve_city;

pub fn run(
    cli: &Cli,
    config: &RoutingConfig,
    from: &str,
    top: Option<usize>,
    graph_dir: &Path,
) -> Result<()> {
    let from = resolve_city(config, from);
    let doc = export::load_node_edges(graph_dir)?;

    let mut routes = bellman_ford::routes_from(&doc, &from);

    // reachable destinations first, cheapest to dearest
    routes.sort_by(|(_, a), (_, b)| a.cost.total_cmp(&b.cost));
    if let Some(limit) = top {
        routes.truncate(limit);
    }

    match cli.format {
        OutputFormat::Json => {
            let value: Vec<serde_json::Value> = routes
                .iter()
                .map(|(dest, result)| {
                    serde_json::json!({
                        "destination": dest,
                        "result": result,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            for (dest, result) in &routes {
                match &result.path {
                    Some(path) => println!(
                        "{:<5} {:>10.2}  {}",
                        dest,
                        result.cost,
                        path.join(" -> ")
                    ),
                    None => println!(
                        "{:<5} {:>10}  {}",
                        dest,
                        "-",
                        result
                            .error
                            .map(|kind| kind.to_string())
                            .unwrap_or_else(|| "no route found".into())
                    ),
                }
            }
        }
    }

    Ok(())
}
