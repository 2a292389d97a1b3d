//! Route graph construction and serialization
//!
//! Consumes processed flights and produces a directed graph whose nodes
//! are city codes and whose edges keep only the cheapest direct segment
//! per ordered city pair, plus the three serialized views the routers
//! query.

pub mod builder;
pub mod export;
pub mod types;

pub use builder::GraphBuilder;
pub use export::{AdjacencyDoc, DetailedEdge, GraphDocuments, NodeEdgeListDoc};
pub use types::{FlightEdge, FlightGraph};
