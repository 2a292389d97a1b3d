//! Builds the route graph from processed flights

use crate::config::RoutingConfig;
use crate::graph::types::{FlightEdge, FlightGraph};
use crate::model::ProcessedFlight;
use crate::pricing;

/// Assembles a `FlightGraph` from processed flights.
///
/// Multi-stop routes are expanded into consecutive-city segments; the
/// first segment carries the flight's full metadata and later segments
/// are synthetic connectors with the same metadata. Parallel flights
/// between a city pair are deduplicated by minimum weight. Building is
/// idempotent given the same input order.
pub struct GraphBuilder<'a> {
    config: &'a RoutingConfig,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(config: &'a RoutingConfig) -> Self {
        GraphBuilder { config }
    }

    #[tracing::instrument(skip_all, fields(flights = flights.len()))]
    pub fn build(&self, flights: &[ProcessedFlight]) -> FlightGraph {
        let mut graph = FlightGraph::new();
        for processed in flights {
            self.add_flight(&mut graph, processed);
        }
        tracing::debug!(
            cities = graph.node_count(),
            direct_routes = graph.edge_count(),
            "graph built"
        );
        graph
    }

    fn add_flight(&self, graph: &mut FlightGraph, processed: &ProcessedFlight) {
        let flight = &processed.flight;
        let cities = flight.route.all_cities();

        for city in &cities {
            graph.insert_city((*city).clone());
        }

        let weight =
            pricing::edge_weight(processed.final_price, flight.duration_minutes, self.config);
        let stops = flight.route.stop_count() as u32;

        for (i, pair) in cities.windows(2).enumerate() {
            // Route invariant forbids equal adjacent cities; skip any
            // self-loop a dirty row slipped through
            if pair[0].code == pair[1].code {
                continue;
            }

            let edge = FlightEdge {
                weight,
                price: processed.final_price,
                base_price: flight.base_price,
                airline: flight.airline.clone(),
                duration_minutes: flight.duration_minutes,
                stops,
                primary_segment: i == 0,
            };
            graph.upsert_edge(&pair[0].code, &pair[1].code, edge);
        }
    }
}
