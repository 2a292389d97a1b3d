//! Shared output and input-resolution helpers for commands

use farepath_core::config::RoutingConfig;
use farepath_core::error::Result;
use farepath_core::routing::RouteResult;

use crate::cli::{Cli, OutputFormat};

/// Resolve a user-supplied city (code, name, alias, or misspelling) to the
/// airport code used as a graph node. Unrecognized input passes through
/// trimmed so the router reports it as an unknown city.
pub fn resolve_city(config: &RoutingConfig, raw: &str) -> String {
    let trimmed = raw.trim();
    if config.is_known_code(trimmed) {
        return trimmed.to_string();
    }
    let name = config.normalize_city_name(trimmed);
    config
        .code_for_name(&name)
        .unwrap_or_else(|| trimmed.to_string())
}

/// Print one route result in the active output format
pub fn print_result(cli: &Cli, result: &RouteResult) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Human => print_result_human(cli, result),
    }
    Ok(())
}

fn print_result_human(cli: &Cli, result: &RouteResult) {
    match (&result.path, &result.error) {
        (Some(path), _) => {
            println!("route: {}", path.join(" -> "));
            println!("cost: {:.2}", result.cost);
            println!("stops: {}", result.stops);
            if let Some(minutes) = result.total_duration_minutes {
                println!("duration: {}h {}m", minutes / 60, minutes % 60);
            }
            for leg in &result.legs {
                println!(
                    "  {} -> {} on {} ({:.2}, {}m)",
                    leg.from, leg.to, leg.airline, leg.price, leg.duration_minutes
                );
            }
        }
        (None, Some(kind)) => println!("{}", kind),
        (None, None) => println!("no route found"),
    }

    if cli.verbose {
        println!(
            "algorithm: {} ({:.3}ms)",
            result.algorithm, result.execution_time_ms
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_city_code_passthrough() {
        let config = RoutingConfig::default();
        assert_eq!(resolve_city(&config, "BLR"), "BLR");
    }

    #[test]
    fn test_resolve_city_name_and_alias() {
        let config = RoutingConfig::default();
        assert_eq!(resolve_city(&config, "Bangalore"), "BLR");
        assert_eq!(resolve_city(&config, "Banglore"), "BLR");
        assert_eq!(resolve_city(&config, "New Delhi"), "DEL");
    }

    #[test]
    fn test_resolve_unknown_city_passes_through() {
        let config = RoutingConfig::default();
        assert_eq!(resolve_city(&config, "  Atlantis "), "Atlantis");
    }
}
