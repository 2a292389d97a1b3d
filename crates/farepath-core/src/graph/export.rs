//! Serialized graph views for the three routers
//!
//! All three documents are derived from one graph in a single pass and
//! agree on edge weights for identical (source, destination) pairs:
//!
//! - `adjacency.json`: `{city: {city: weight}}` for the uniform-cost router
//! - `edge_list.json`: `{"nodes": [...], "edges": [[src, dst, weight], ...]}`
//!   for the relaxation router
//! - `detailed_edges.json`: array of edge objects with airline/price/duration
//!   metadata for the constrained router

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FarepathError, Result};
use crate::graph::types::FlightGraph;

pub const ADJACENCY_FILE: &str = "adjacency.json";
pub const EDGE_LIST_FILE: &str = "edge_list.json";
pub const DETAILED_EDGES_FILE: &str = "detailed_edges.json";

/// Adjacency-map document: `{source_city: {dest_city: weight}}`
pub type AdjacencyDoc = BTreeMap<String, BTreeMap<String, f64>>;

/// Node/edge-list document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeEdgeListDoc {
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String, f64)>,
}

/// Detailed edge-list entry carrying the constraint metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedEdge {
    pub source: String,
    pub destination: String,
    pub weight: f64,
    pub price: f64,
    pub airline: String,
    pub duration_minutes: u32,
    pub stops: u32,
}

/// All three query documents derived from one graph
#[derive(Debug, Clone)]
pub struct GraphDocuments {
    pub adjacency: AdjacencyDoc,
    pub node_edges: NodeEdgeListDoc,
    pub detailed: Vec<DetailedEdge>,
}

/// Derive the three documents from the graph in a single edge pass
pub fn export(graph: &FlightGraph) -> GraphDocuments {
    // every node gets an adjacency entry, even if it has no outgoing edges
    let mut adjacency: AdjacencyDoc = graph
        .cities()
        .map(|city| (city.code.clone(), BTreeMap::new()))
        .collect();
    let mut edges = Vec::with_capacity(graph.edge_count());
    let mut detailed = Vec::with_capacity(graph.edge_count());

    for ((source, dest), edge) in graph.edges() {
        adjacency
            .entry(source.clone())
            .or_default()
            .insert(dest.clone(), edge.weight);
        edges.push((source.clone(), dest.clone(), edge.weight));
        detailed.push(DetailedEdge {
            source: source.clone(),
            destination: dest.clone(),
            weight: edge.weight,
            price: edge.price,
            airline: edge.airline.clone(),
            duration_minutes: edge.duration_minutes,
            stops: edge.stops,
        });
    }

    let nodes = graph.cities().map(|city| city.code.clone()).collect();

    GraphDocuments {
        adjacency,
        node_edges: NodeEdgeListDoc { nodes, edges },
        detailed,
    }
}

/// Write all three documents into a directory, creating it if needed
#[tracing::instrument(skip(docs), fields(dir = %dir.display()))]
pub fn write_documents(docs: &GraphDocuments, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    write_json(&dir.join(ADJACENCY_FILE), &docs.adjacency)?;
    write_json(&dir.join(EDGE_LIST_FILE), &docs.node_edges)?;
    write_json(&dir.join(DETAILED_EDGES_FILE), &docs.detailed)?;
    Ok(())
}

pub fn load_adjacency(dir: &Path) -> Result<AdjacencyDoc> {
    read_json(&dir.join(ADJACENCY_FILE))
}

pub fn load_node_edges(dir: &Path) -> Result<NodeEdgeListDoc> {
    read_json(&dir.join(EDGE_LIST_FILE))
}

pub fn load_detailed(dir: &Path) -> Result<Vec<DetailedEdge>> {
    read_json(&dir.join(DETAILED_EDGES_FILE))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)?;
    Ok(())
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            FarepathError::GraphNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FarepathError::Io(err)
        }
    })?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoutingConfig;
    use crate::graph::builder::GraphBuilder;
    use crate::model::{City, Flight, ProcessedFlight, Route};
    use tempfile::tempdir;

    fn sample_graph() -> FlightGraph {
        let config = RoutingConfig::default();
        let make = |airline: &str, src: &str, dst: &str, minutes: u32, price: f64| ProcessedFlight {
            flight: Flight {
                airline: airline.into(),
                route: Route::new(
                    City::new(src, src, src),
                    vec![],
                    City::new(dst, dst, dst),
                ),
                duration_minutes: minutes,
                base_price: price * 2.0,
                departure_time: None,
                arrival_time: None,
            },
            final_price: price,
        };
        GraphBuilder::new(&config).build(&[
            make("IndiGo", "BLR", "DEL", 100, 1000.0),
            make("SpiceJet", "DEL", "CCU", 120, 800.0),
        ])
    }

    #[test]
    fn test_documents_agree_on_weights() {
        let docs = export(&sample_graph());

        for (source, dest, weight) in &docs.node_edges.edges {
            assert_eq!(docs.adjacency[source][dest], *weight);
            let detailed = docs
                .detailed
                .iter()
                .find(|e| &e.source == source && &e.destination == dest)
                .unwrap();
            assert_eq!(detailed.weight, *weight);
        }
        assert_eq!(docs.node_edges.edges.len(), docs.detailed.len());
    }

    #[test]
    fn test_every_node_has_adjacency_entry() {
        let docs = export(&sample_graph());
        // CCU has no outgoing edges but still appears
        assert!(docs.adjacency.contains_key("CCU"));
        assert!(docs.adjacency["CCU"].is_empty());
        assert_eq!(docs.node_edges.nodes.len(), 3);
    }

    #[test]
    fn test_write_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let docs = export(&sample_graph());
        write_documents(&docs, dir.path()).unwrap();

        assert_eq!(load_adjacency(dir.path()).unwrap(), docs.adjacency);
        assert_eq!(load_node_edges(dir.path()).unwrap(), docs.node_edges);
        assert_eq!(load_detailed(dir.path()).unwrap(), docs.detailed);
    }

    #[test]
    fn test_missing_document_is_graph_not_found() {
        let dir = tempdir().unwrap();
        let err = load_adjacency(dir.path()).unwrap_err();
        assert!(matches!(err, FarepathError::GraphNotFound { .. }));
    }
}
