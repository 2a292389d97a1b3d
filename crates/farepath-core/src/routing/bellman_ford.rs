//! Relaxation search over the flat edge list
//!
//! Tolerates negative edge weights and detects negative cycles. Strictly
//! more general and strictly slower than the uniform-cost router: on the
//! non-negative graphs farepath normally builds, both must agree on the
//! optimal cost. O(V * E).

use std::collections::HashMap;
use std::time::Instant;

use crate::graph::export::NodeEdgeListDoc;
use crate::routing::result::{Algorithm, RouteErrorKind, RouteResult};
use crate::routing::shared::reconstruct_path;

/// Minimum-weight path between two cities over the node/edge-list view.
///
/// Reports `NegativeCycle` (cost -infinity, no path) when the edge list
/// admits unbounded improvement; a path claiming optimality is never
/// returned in that case.
#[tracing::instrument(skip(doc), fields(nodes = doc.nodes.len(), edges = doc.edges.len()))]
pub fn shortest_path(doc: &NodeEdgeListDoc, start: &str, end: &str) -> RouteResult {
    let started = Instant::now();

    if !doc.nodes.iter().any(|node| node == start) || !doc.nodes.iter().any(|node| node == end) {
        return RouteResult::error(
            Algorithm::BellmanFord,
            RouteErrorKind::UnknownCity,
            f64::INFINITY,
            started.elapsed(),
        );
    }

    let Some((distances, predecessors)) = relax_all(doc, start) else {
        return RouteResult::error(
            Algorithm::BellmanFord,
            RouteErrorKind::NegativeCycle,
            f64::NEG_INFINITY,
            started.elapsed(),
        );
    };

    match distances.get(end) {
        Some(&cost) if cost.is_finite() => {
            let path = reconstruct_path(&predecessors, start, end);
            RouteResult::found(Algorithm::BellmanFord, path, cost, started.elapsed())
        }
        _ => RouteResult::error(
            Algorithm::BellmanFord,
            RouteErrorKind::Unreachable,
            f64::INFINITY,
            started.elapsed(),
        ),
    }
}

/// Shortest routes from `start` to every other listed city, in node order
#[tracing::instrument(skip(doc), fields(nodes = doc.nodes.len()))]
pub fn routes_from(doc: &NodeEdgeListDoc, start: &str) -> Vec<(String, RouteResult)> {
    doc.nodes
        .iter()
        .filter(|node| node.as_str() != start)
        .map(|node| (node.clone(), shortest_path(doc, start, node)))
        .collect()
}

/// Up to |V| - 1 relaxation rounds with early termination, then one final
/// scan; `None` means an edge can still be relaxed, i.e. a negative cycle.
fn relax_all(
    doc: &NodeEdgeListDoc,
    start: &str,
) -> Option<(HashMap<String, f64>, HashMap<String, String>)> {
    let mut distances: HashMap<String, f64> = doc
        .nodes
        .iter()
        .map(|node| (node.clone(), f64::INFINITY))
        .collect();
    distances.insert(start.to_string(), 0.0);
    let mut predecessors: HashMap<String, String> = HashMap::new();

    for _round in 1..doc.nodes.len() {
        let mut improved = false;
        for (source, dest, weight) in &doc.edges {
            let from = distances.get(source).copied().unwrap_or(f64::INFINITY);
            if !from.is_finite() {
                continue;
            }
            let candidate = from + weight;
            let current = distances.get(dest).copied().unwrap_or(f64::INFINITY);
            if candidate < current {
                distances.insert(dest.clone(), candidate);
                predecessors.insert(dest.clone(), source.clone());
                improved = true;
            }
        }
        if !improved {
            break;
        }
    }

    for (source, dest, weight) in &doc.edges {
        let from = distances.get(source).copied().unwrap_or(f64::INFINITY);
        if from.is_finite()
            && from + weight < distances.get(dest).copied().unwrap_or(f64::INFINITY)
        {
            return None;
        }
    }

    Some((distances, predecessors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::dijkstra;
    use std::collections::BTreeMap;

    fn doc(nodes: &[&str], edges: &[(&str, &str, f64)]) -> NodeEdgeListDoc {
        NodeEdgeListDoc {
            nodes: nodes.iter().map(|n| n.to_string()).collect(),
            edges: edges
                .iter()
                .map(|(s, d, w)| (s.to_string(), d.to_string(), *w))
                .collect(),
        }
    }

    #[test]
    fn test_shortest_path_two_hops() {
        let doc = doc(
            &["A", "B", "C"],
            &[("A", "B", 10.0), ("B", "C", 5.0), ("A", "C", 20.0)],
        );
        let result = shortest_path(&doc, "A", "C");

        assert_eq!(result.path, Some(vec!["A".into(), "B".into(), "C".into()]));
        assert_eq!(result.cost, 15.0);
    }

    #[test]
    fn test_negative_edge_without_cycle() {
        let doc = doc(
            &["A", "B", "C"],
            &[("A", "B", 10.0), ("B", "C", -4.0), ("A", "C", 8.0)],
        );
        let result = shortest_path(&doc, "A", "C");

        assert_eq!(result.cost, 6.0);
        assert_eq!(result.path, Some(vec!["A".into(), "B".into(), "C".into()]));
    }

    #[test]
    fn test_negative_cycle_detected() {
        let doc = doc(&["A", "B"], &[("A", "B", -5.0), ("B", "A", -5.0)]);
        let result = shortest_path(&doc, "A", "B");

        assert_eq!(result.error, Some(RouteErrorKind::NegativeCycle));
        assert_eq!(result.cost, f64::NEG_INFINITY);
        assert!(result.path.is_none());
    }

    #[test]
    fn test_unknown_city() {
        let doc = doc(&["A", "B"], &[("A", "B", 1.0)]);
        assert_eq!(
            shortest_path(&doc, "A", "Z").error,
            Some(RouteErrorKind::UnknownCity)
        );
        assert_eq!(
            shortest_path(&doc, "Z", "B").error,
            Some(RouteErrorKind::UnknownCity)
        );
    }

    #[test]
    fn test_unreachable_destination() {
        let doc = doc(&["A", "B", "C"], &[("A", "B", 1.0)]);
        let result = shortest_path(&doc, "A", "C");

        assert_eq!(result.error, Some(RouteErrorKind::Unreachable));
        assert_eq!(result.cost, f64::INFINITY);
    }

    #[test]
    fn test_agrees_with_dijkstra_on_positive_weights() {
        let edges = [
            ("A", "B", 7.0),
            ("A", "C", 9.0),
            ("B", "C", 1.0),
            ("B", "D", 4.5),
            ("C", "D", 2.0),
            ("D", "E", 6.0),
            ("C", "E", 11.0),
        ];
        let list = doc(&["A", "B", "C", "D", "E"], &edges);

        let mut adjacency: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
        for (s, d, w) in &edges {
            adjacency
                .entry(s.to_string())
                .or_default()
                .insert(d.to_string(), *w);
            adjacency.entry(d.to_string()).or_default();
        }

        for end in ["B", "C", "D", "E"] {
            let relaxed = shortest_path(&list, "A", end);
            let uniform = dijkstra::shortest_path(&adjacency, "A", end);
            assert_eq!(relaxed.cost, uniform.cost, "cost mismatch for A->{}", end);
            assert_eq!(relaxed.path, uniform.path, "path mismatch for A->{}", end);
        }
    }

    #[test]
    fn test_routes_from_lists_all_destinations() {
        let doc = doc(
            &["A", "B", "C", "D"],
            &[("A", "B", 1.0), ("B", "C", 2.0)],
        );
        let routes = routes_from(&doc, "A");

        assert_eq!(routes.len(), 3);
        let by_dest: HashMap<&str, &RouteResult> =
            routes.iter().map(|(d, r)| (d.as_str(), r)).collect();
        assert_eq!(by_dest["B"].cost, 1.0);
        assert_eq!(by_dest["C"].cost, 3.0);
        assert_eq!(by_dest["D"].error, Some(RouteErrorKind::Unreachable));
    }
}
