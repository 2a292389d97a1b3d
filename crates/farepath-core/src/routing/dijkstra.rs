//! Uniform-cost (label-setting) search over the adjacency view
//!
//! Classic priority-frontier expansion: each city is settled exactly once,
//! in increasing order of tentative distance. Requires non-negative edge
//! weights; a violated-weight input is a precondition failure, not a
//! runtime-detected error. O((V + E) log V).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

use crate::graph::export::AdjacencyDoc;
use crate::routing::result::{Algorithm, RouteErrorKind, RouteResult};
use crate::routing::shared::reconstruct_path;

/// Heap entry ordered by accumulated cost, then insertion order so equal
/// costs expand deterministically
#[derive(Debug, Clone)]
struct HeapEntry {
    cost: f64,
    seq: u64,
    city: String,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Minimum-weight path between two cities over the adjacency view
#[tracing::instrument(skip(graph), fields(cities = graph.len()))]
pub fn shortest_path(graph: &AdjacencyDoc, start: &str, end: &str) -> RouteResult {
    let started = Instant::now();

    // unknown endpoints are reported before any search runs
    if !graph.contains_key(start) || !graph.contains_key(end) {
        return RouteResult::error(
            Algorithm::Dijkstra,
            RouteErrorKind::UnknownCity,
            f64::INFINITY,
            started.elapsed(),
        );
    }

    let (distances, predecessors) = run(graph, start);

    match distances.get(end) {
        Some(&cost) if cost.is_finite() => {
            let path = reconstruct_path(&predecessors, start, end);
            RouteResult::found(Algorithm::Dijkstra, path, cost, started.elapsed())
        }
        _ => RouteResult::error(
            Algorithm::Dijkstra,
            RouteErrorKind::Unreachable,
            f64::INFINITY,
            started.elapsed(),
        ),
    }
}

/// Label-setting loop: tentative distances for every reachable city plus
/// predecessor links for path reconstruction
fn run(graph: &AdjacencyDoc, start: &str) -> (HashMap<String, f64>, HashMap<String, String>) {
    let mut distances: HashMap<String, f64> =
        graph.keys().map(|city| (city.clone(), f64::INFINITY)).collect();
    distances.insert(start.to_string(), 0.0);

    let mut predecessors: HashMap<String, String> = HashMap::new();
    let mut settled: HashSet<String> = HashSet::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    let mut seq = 0u64;

    heap.push(Reverse(HeapEntry {
        cost: 0.0,
        seq,
        city: start.to_string(),
    }));

    while let Some(Reverse(HeapEntry { cost, city, .. })) = heap.pop() {
        // a settled city is never re-expanded
        if !settled.insert(city.clone()) {
            continue;
        }

        let Some(neighbors) = graph.get(&city) else {
            continue;
        };

        for (neighbor, weight) in neighbors {
            let candidate = cost + weight;
            let current = distances
                .entry(neighbor.clone())
                .or_insert(f64::INFINITY);
            if candidate < *current {
                *current = candidate;
                predecessors.insert(neighbor.clone(), city.clone());
                seq += 1;
                heap.push(Reverse(HeapEntry {
                    cost: candidate,
                    seq,
                    city: neighbor.clone(),
                }));
            }
        }
    }

    (distances, predecessors)
}
