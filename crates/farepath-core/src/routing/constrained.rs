//! Bounded-stop constrained search over the detailed edge list
//!
//! A layered relaxation: for each city and each segment count up to the
//! stop bound, keep the best known (cost, duration, path, legs) tuple.
//! Budget and duration ceilings reject candidates, avoided airlines are
//! pruned, and legs on airlines outside a non-empty preferred set incur
//! a surcharge. Only scalar total cost is minimized; the other limits
//! act as feasibility filters. O(maxStops * V * avgOutDegree).

use std::collections::HashMap;
use std::time::Instant;

use crate::graph::export::DetailedEdge;
use crate::routing::result::{
    Algorithm, Constraints, FlightLeg, RouteErrorKind, RouteResult,
};

/// Cost multiplier for legs on airlines outside a non-empty preferred set
const NON_PREFERRED_SURCHARGE: f64 = 1.15;

/// Best known way to reach a city using an exact number of segments.
/// Carries the full path and leg details directly: a city can be revisited
/// at different segment counts with different optimal histories, so a
/// single predecessor table would be wrong.
#[derive(Debug, Clone)]
struct LayerState {
    cost: f64,
    duration_minutes: u32,
    path: Vec<usize>,
    legs: Vec<FlightLeg>,
}

impl LayerState {
    fn unreached() -> Self {
        LayerState {
            cost: f64::INFINITY,
            duration_minutes: 0,
            path: Vec::new(),
            legs: Vec::new(),
        }
    }
}

/// Minimum-cost path between two cities subject to the given constraints
#[tracing::instrument(skip(edges, constraints), fields(edges = edges.len()))]
pub fn shortest_path(
    edges: &[DetailedEdge],
    start: &str,
    end: &str,
    constraints: &Constraints,
) -> RouteResult {
    let started = Instant::now();

    // city universe and stable indexing from the edge endpoints
    let mut cities: Vec<&str> = edges
        .iter()
        .flat_map(|edge| [edge.source.as_str(), edge.destination.as_str()])
        .collect();
    cities.sort_unstable();
    cities.dedup();
    let index: HashMap<&str, usize> = cities
        .iter()
        .enumerate()
        .map(|(i, city)| (*city, i))
        .collect();

    let (Some(&start_idx), Some(&end_idx)) = (index.get(start), index.get(end)) else {
        return RouteResult::error(
            Algorithm::ConstrainedDp,
            RouteErrorKind::UnknownCity,
            f64::INFINITY,
            started.elapsed(),
        );
    };

    let mut outgoing: Vec<Vec<&DetailedEdge>> = vec![Vec::new(); cities.len()];
    for edge in edges {
        outgoing[index[edge.source.as_str()]].push(edge);
    }

    let max_stops = constraints
        .max_stops
        .unwrap_or_else(|| cities.len().saturating_sub(1));

    let table = expand_layers(&cities, &index, &outgoing, constraints, start_idx, max_stops);

    // cheapest layer at the destination wins, whatever its segment count
    let best = table[end_idx]
        .iter()
        .filter(|state| state.cost.is_finite())
        .min_by(|a, b| a.cost.total_cmp(&b.cost));

    match best {
        Some(state) => {
            let path = state.path.iter().map(|&i| cities[i].to_string()).collect();
            RouteResult::found(Algorithm::ConstrainedDp, path, state.cost, started.elapsed())
                .with_legs(state.legs.clone(), state.duration_minutes)
        }
        None => {
            // nothing could have been pruned under default constraints,
            // so an empty table means plain unreachability
            let kind = if constraints.is_unconstrained() {
                RouteErrorKind::Unreachable
            } else {
                RouteErrorKind::ConstraintsUnsatisfiable
            };
            RouteResult::error(
                Algorithm::ConstrainedDp,
                kind,
                f64::INFINITY,
                started.elapsed(),
            )
        }
    }
}

/// Fill the (city, segment-count) table layer by layer. Layers have a
/// strict sequential dependency: layer s + 1 is derived only from layer s.
fn expand_layers(
    cities: &[&str],
    index: &HashMap<&str, usize>,
    outgoing: &[Vec<&DetailedEdge>],
    constraints: &Constraints,
    start_idx: usize,
    max_stops: usize,
) -> Vec<Vec<LayerState>> {
    let budget = constraints.budget.unwrap_or(f64::INFINITY);
    let max_duration = constraints.max_duration_minutes.unwrap_or(u32::MAX);

    let mut table: Vec<Vec<LayerState>> =
        vec![vec![LayerState::unreached(); max_stops + 1]; cities.len()];
    table[start_idx][0] = LayerState {
        cost: 0.0,
        duration_minutes: 0,
        path: vec![start_idx],
        legs: Vec::new(),
    };

    for s in 0..max_stops {
        for city in 0..cities.len() {
            if !table[city][s].cost.is_finite() {
                continue;
            }
            let current = table[city][s].clone();

            for edge in &outgoing[city] {
                if constraints.avoid_airlines.iter().any(|a| a == &edge.airline) {
                    continue;
                }

                let mut leg_cost = edge.weight;
                if !constraints.preferred_airlines.is_empty()
                    && !constraints
                        .preferred_airlines
                        .iter()
                        .any(|a| a == &edge.airline)
                {
                    leg_cost *= NON_PREFERRED_SURCHARGE;
                }

                let candidate_cost = current.cost + leg_cost;
                let candidate_duration =
                    current.duration_minutes.saturating_add(edge.duration_minutes);
                if candidate_cost > budget || candidate_duration > max_duration {
                    continue;
                }

                let dest = index[edge.destination.as_str()];
                if candidate_cost < table[dest][s + 1].cost {
                    let mut path = current.path.clone();
                    path.push(dest);
                    let mut legs = current.legs.clone();
                    legs.push(FlightLeg {
                        from: cities[city].to_string(),
                        to: edge.destination.clone(),
                        airline: edge.airline.clone(),
                        cost: edge.weight,
                        price: edge.price,
                        duration_minutes: edge.duration_minutes,
                    });
                    table[dest][s + 1] = LayerState {
                        cost: candidate_cost,
                        duration_minutes: candidate_duration,
                        path,
                        legs,
                    };
                }
            }
        }
    }

    table
}
