//! `farepath build` - ingest, price, and serialize the route graph

use std::path::Path;
use std::time::Instant;

use tracing::debug;

use farepath_core::config::RoutingConfig;
use farepath_core::error::Result;
use farepath_core::graph::export;
use farepath_core::graph::GraphBuilder;
use farepath_core::trace_time;
use farepath_core::{ingest, pricing};

use crate::cli::{Cli, OutputFormat};

pub fn run(cli: &Cli, config: &RoutingConfig, input: &Path, output_dir: &Path) -> Result<()> {
    let start = Instant::now();
    let (flights, report) = ingest::load_flights(config, input)?;
    trace_time!(start, "ingest", rows = report.total_rows);

    let start = Instant::now();
    let processed = pricing::apply_discounts(config, flights);
    trace_time!(start, "pricing", flights = processed.len());

    let total_savings: f64 = processed
        .iter()
        .map(|p| p.flight.base_price - p.final_price)
        .sum();

    let start = Instant::now();
    let graph = GraphBuilder::new(config).build(&processed);
    let docs = export::export(&graph);
    export::write_documents(&docs, output_dir)?;
    trace_time!(start, "build_graph", edges = graph.edge_count());

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph written"
    );

    match cli.format {
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "flights": processed.len(),
                "skipped_rows": report.skipped_rows,
                "high_price_rows": report.high_price_rows,
                "total_savings": total_savings,
                "nodes": graph.node_count(),
                "edges": graph.edge_count(),
                "output_dir": output_dir.display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "ingested {} flights ({} rows skipped)",
                    processed.len(),
                    report.skipped_rows
                );
                println!("total discount savings: {:.2}", total_savings);
                println!(
                    "graph: {} cities, {} edges -> {}",
                    graph.node_count(),
                    graph.edge_count(),
                    output_dir.display()
                );
            }
        }
    }

    Ok(())
}
