//! `farepath route` - single shortest-path query

use std::collections::HashMap;
use std::path::Path;

use farepath_core::config::RoutingConfig;
use farepath_core::error::{FarepathError, Result};
use farepath_core::graph::export::{self, DetailedEdge};
use farepath_core::routing::{bellman_ford, constrained, dijkstra};
use farepath_core::routing::{Constraints, FlightLeg, RouteResult};

use crate::cli::{AlgorithmArg, Cli};
use crate::commands::helpers::{print_result, resolve_city};

pub struct RouteArgs<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub algorithm: AlgorithmArg,
    pub max_stops: Option<usize>,
    pub max_duration: Option<u32>,
    pub budget: Option<f64>,
    pub prefer: &'a [String],
    pub avoid: &'a [String],
    pub graph_dir: &'a Path,
}

impl RouteArgs<'_> {
    fn constraints(&self) -> Constraints {
        Constraints {
            max_stops: self.max_stops,
            max_duration_minutes: self.max_duration,
            budget: self.budget,
            preferred_airlines: self.prefer.to_vec(),
            avoid_airlines: self.avoid.to_vec(),
        }
    }

    fn has_constraint_flags(&self) -> bool {
        !self.constraints().is_unconstrained()
    }
}

pub fn run(cli: &Cli, config: &RoutingConfig, args: &RouteArgs<'_>) -> Result<()> {
    if args.has_constraint_flags() && args.algorithm != AlgorithmArg::Constrained {
        return Err(FarepathError::UsageError(format!(
            "constraint flags require --algorithm constrained (got {})",
            args.algorithm.to_algorithm()
        )));
    }

    let from = resolve_city(config, args.from);
    let to = resolve_city(config, args.to);

    let result = match args.algorithm {
        AlgorithmArg::Dijkstra => {
            let adjacency = export::load_adjacency(args.graph_dir)?;
            let result = dijkstra::shortest_path(&adjacency, &from, &to);
            attach_leg_details(args.graph_dir, result)?
        }
        AlgorithmArg::BellmanFord => {
            let doc = export::load_node_edges(args.graph_dir)?;
            let result = bellman_ford::shortest_path(&doc, &from, &to);
            attach_leg_details(args.graph_dir, result)?
        }
        AlgorithmArg::Constrained => {
            let detailed = export::load_detailed(args.graph_dir)?;
            constrained::shortest_path(&detailed, &from, &to, &args.constraints())
        }
    };

    print_result(cli, &result)
}

/// Enrich a path-only result with airline/price/duration metadata from the
/// detailed edge document
fn attach_leg_details(graph_dir: &Path, result: RouteResult) -> Result<RouteResult> {
    let Some(path) = result.path.clone() else {
        return Ok(result);
    };

    let detailed = export::load_detailed(graph_dir)?;
    let by_pair: HashMap<(&str, &str), &DetailedEdge> = detailed
        .iter()
        .map(|edge| ((edge.source.as_str(), edge.destination.as_str()), edge))
        .collect();

    let mut legs = Vec::with_capacity(path.len().saturating_sub(1));
    let mut total_minutes = 0u32;
    for pair in path.windows(2) {
        let Some(edge) = by_pair.get(&(pair[0].as_str(), pair[1].as_str())) else {
            // documents out of sync; leave the result unenriched
            return Ok(result);
        };
        total_minutes += edge.duration_minutes;
        legs.push(FlightLeg {
            from: edge.source.clone(),
            to: edge.destination.clone(),
            airline: edge.airline.clone(),
            cost: edge.weight,
            price: edge.price,
            duration_minutes: edge.duration_minutes,
        });
    }

    Ok(result.with_legs(legs, total_minutes))
}
