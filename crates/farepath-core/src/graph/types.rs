//! Route graph storage

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::City;

/// One directed edge in the route graph: the cheapest known way to fly
/// directly between an ordered pair of cities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightEdge {
    /// Scalar search weight (price plus time penalty)
    pub weight: f64,
    /// Discounted price
    pub price: f64,
    /// Original price before discounts
    pub base_price: f64,
    pub airline: String,
    pub duration_minutes: u32,
    /// Intermediate-stop count of the full route this segment came from
    pub stops: u32,
    /// True for the first segment of a route; later segments of a
    /// multi-stop route are synthetic connectors carrying the same
    /// flight metadata.
    pub primary_segment: bool,
}

/// Directed route graph.
///
/// Nodes are keyed by city code; for each ordered (source, destination)
/// pair at most one edge exists, the minimum-weight one seen so far.
/// Built once per input batch and read-only during routing.
#[derive(Debug, Clone, Default)]
pub struct FlightGraph {
    nodes: BTreeMap<String, City>,
    edges: BTreeMap<(String, String), FlightEdge>,
}

impl FlightGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_city(&self, code: &str) -> bool {
        self.nodes.contains_key(code)
    }

    pub fn city(&self, code: &str) -> Option<&City> {
        self.nodes.get(code)
    }

    /// Cities in code order
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.nodes.values()
    }

    pub fn edge(&self, source: &str, dest: &str) -> Option<&FlightEdge> {
        self.edges.get(&(source.to_string(), dest.to_string()))
    }

    /// Edges in (source, destination) order
    pub fn edges(&self) -> impl Iterator<Item = (&(String, String), &FlightEdge)> {
        self.edges.iter()
    }

    /// Add a city node if not already present. The first-seen city object
    /// for a code wins; later duplicates are ignored.
    pub(crate) fn insert_city(&mut self, city: City) {
        self.nodes.entry(city.code.clone()).or_insert(city);
    }

    /// Insert the edge if absent, or replace it only when the new weight
    /// is strictly lower. Exact ties keep the first-seen edge so builds
    /// are deterministic for a given input order.
    pub(crate) fn upsert_edge(&mut self, source: &str, dest: &str, edge: FlightEdge) {
        let key = (source.to_string(), dest.to_string());
        match self.edges.get_mut(&key) {
            Some(existing) => {
                if edge.weight < existing.weight {
                    *existing = edge;
                }
            }
            None => {
                self.edges.insert(key, edge);
            }
        }
    }
}
