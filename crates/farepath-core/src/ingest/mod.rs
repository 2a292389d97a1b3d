//! CSV ingestion
//!
//! Reads raw priced-flight exports, cleans each field, and produces the
//! normalized `Flight` records the pricing and graph layers consume.
//! Rows that fail validation are skipped and counted, never fatal.

pub mod clean;

use std::path::Path;

use serde::Deserialize;

use crate::config::RoutingConfig;
use crate::error::Result;
use crate::model::{City, Flight, Route};

/// Prices above this are flagged as suspicious in the ingest report
const HIGH_PRICE_THRESHOLD: f64 = 50_000.0;

/// One row of the raw export. Unknown columns are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Airline")]
    airline: String,
    #[serde(rename = "Source")]
    source: String,
    #[serde(rename = "Destination")]
    destination: String,
    #[serde(rename = "Route", default)]
    route: Option<String>,
    #[serde(rename = "Dep_Time", default)]
    dep_time: Option<String>,
    #[serde(rename = "Arrival_Time", default)]
    arrival_time: Option<String>,
    #[serde(rename = "Duration", default)]
    duration: Option<String>,
    #[serde(rename = "Total_Stops", default)]
    total_stops: Option<String>,
    #[serde(rename = "Price")]
    price: String,
}

/// Outcome counters for one ingestion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Rows read from the file
    pub total_rows: usize,
    /// Rows dropped by validation
    pub skipped_rows: usize,
    /// Rows kept but priced above the plausibility threshold
    pub high_price_rows: usize,
}

/// Load and clean a CSV of priced flights
#[tracing::instrument(skip(config), fields(path = %path.display()))]
pub fn load_flights(config: &RoutingConfig, path: &Path) -> Result<(Vec<Flight>, IngestReport)> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut flights = Vec::new();
    let mut report = IngestReport::default();

    for row in reader.deserialize::<RawRecord>() {
        report.total_rows += 1;
        let record = match row {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(%err, row = report.total_rows, "skipping malformed row");
                report.skipped_rows += 1;
                continue;
            }
        };

        match flight_from_record(config, &record) {
            Some(flight) => {
                if flight.base_price > HIGH_PRICE_THRESHOLD {
                    report.high_price_rows += 1;
                }
                flights.push(flight);
            }
            None => report.skipped_rows += 1,
        }
    }

    tracing::debug!(
        total = report.total_rows,
        skipped = report.skipped_rows,
        high_price = report.high_price_rows,
        "ingest complete"
    );
    Ok((flights, report))
}

/// Clean a single row into a `Flight`; `None` when any required field
/// fails validation or source and destination collapse to the same city
fn flight_from_record(config: &RoutingConfig, record: &RawRecord) -> Option<Flight> {
    let airline = clean::clean_airline(&record.airline);
    if airline.is_empty() {
        return None;
    }

    let base_price = clean::parse_price(&record.price)?;
    let duration_minutes = record
        .duration
        .as_deref()
        .and_then(clean::parse_duration)?;

    let source = city_from_identifier(config, &record.source)?;
    let destination = city_from_identifier(config, &record.destination)?;
    if source.code == destination.code {
        return None;
    }

    let intermediate_stops = intermediate_cities(config, record.route.as_deref());

    // data-quality signal: the declared stop count should match the route string
    if let Some(declared) = record.total_stops.as_deref().map(clean::parse_stop_count) {
        if declared as usize != intermediate_stops.len() {
            tracing::trace!(
                airline = %airline,
                declared,
                parsed = intermediate_stops.len(),
                "declared stop count disagrees with route string"
            );
        }
    }

    Some(Flight {
        airline,
        route: Route::new(source, intermediate_stops, destination),
        duration_minutes,
        base_price,
        departure_time: record.dep_time.as_deref().and_then(clean::parse_time),
        arrival_time: record.arrival_time.as_deref().and_then(clean::parse_time),
    })
}

/// Intermediate stops from a route string like "BLR → NAG → DEL":
/// everything between the first and last token, filtered to known codes
fn intermediate_cities(config: &RoutingConfig, route: Option<&str>) -> Vec<City> {
    let Some(route) = route else {
        return Vec::new();
    };
    let tokens = clean::split_route_string(route);
    if tokens.len() <= 2 {
        return Vec::new();
    }
    tokens[1..tokens.len() - 1]
        .iter()
        .filter(|code| config.is_known_code(code))
        .filter_map(|code| city_from_identifier(config, code))
        .collect()
}

/// Build a `City` from either an airport code or a city name.
/// Unknown names fall back to a synthetic code from the first three letters.
fn city_from_identifier(config: &RoutingConfig, raw: &str) -> Option<City> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = config.normalize_city_name(trimmed);
    if config.is_known_code(trimmed) {
        let name = config.city_name(trimmed).unwrap_or(trimmed).to_string();
        return Some(City::new(trimmed, name, normalized));
    }

    let code = config
        .code_for_name(&normalized)
        .unwrap_or_else(|| synthetic_code(&normalized));
    Some(City::new(code, normalized.clone(), normalized))
}

fn synthetic_code(name: &str) -> String {
    name.chars().take(3).collect::<String>().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const HEADER: &str = "Airline,Date_of_Journey,Source,Destination,Route,Dep_Time,Arrival_Time,Duration,Total_Stops,Additional_Info,Price\n";

    fn write_csv(rows: &[&str]) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flights.csv");
        let mut content = HEADER.to_string();
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_clean_non_stop_flight() {
        let config = RoutingConfig::default();
        let (_dir, path) = write_csv(&[
            "IndiGo,24/03/2019,Banglore,New Delhi,BLR → DEL,22:20,01:10,2h 50m,non-stop,No info,3897",
        ]);
        let (flights, report) = load_flights(&config, &path).unwrap();

        assert_eq!(report.total_rows, 1);
        assert_eq!(report.skipped_rows, 0);
        assert_eq!(flights.len(), 1);

        let flight = &flights[0];
        assert_eq!(flight.airline, "IndiGo");
        assert_eq!(flight.route.source.code, "BLR");
        assert_eq!(flight.route.source.name, "Bangalore");
        assert_eq!(flight.route.destination.code, "DEL");
        assert_eq!(flight.duration_minutes, 170);
        assert_eq!(flight.base_price, 3897.0);
        assert_eq!(flight.departure_time.as_deref(), Some("22:20"));
    }

    #[test]
    fn test_load_multi_stop_route() {
        let config = RoutingConfig::default();
        let (_dir, path) = write_csv(&[
            "Jet Airways,1/06/2019,Banglore,New Delhi,BLR → BOM → DEL,09:45,23:00,13h 15m,1 stop,In-flight meal not included,10260",
        ]);
        let (flights, _) = load_flights(&config, &path).unwrap();

        assert_eq!(flights.len(), 1);
        let stops: Vec<&str> = flights[0]
            .route
            .intermediate_stops
            .iter()
            .map(|c| c.code.as_str())
            .collect();
        assert_eq!(stops, vec!["BOM"]);
    }

    #[test]
    fn test_unknown_codes_in_route_string_filtered() {
        let config = RoutingConfig::default();
        let (_dir, path) = write_csv(&[
            "SpiceJet,9/05/2019,Kolkata,Mumbai,CCU → ZZZ → BOM,18:55,22:25,3h 30m,1 stop,No info,4174",
        ]);
        let (flights, _) = load_flights(&config, &path).unwrap();

        assert!(flights[0].route.intermediate_stops.is_empty());
    }

    #[test]
    fn test_invalid_rows_skipped_and_counted() {
        let config = RoutingConfig::default();
        let (_dir, path) = write_csv(&[
            // missing price
            "IndiGo,24/03/2019,Banglore,New Delhi,BLR → DEL,22:20,01:10,2h 50m,non-stop,No info,",
            // same source and destination after normalization
            "IndiGo,24/03/2019,Delhi,New Delhi,DEL → DEL,10:00,12:00,2h,non-stop,No info,3000",
            // unparseable duration
            "IndiGo,24/03/2019,Banglore,New Delhi,BLR → DEL,22:20,01:10,soon,non-stop,No info,3897",
            // good row
            "Air India,12/05/2019,Kolkata,Mumbai,CCU → BOM,20:00,22:35,2h 35m,non-stop,No info,8000",
        ]);
        let (flights, report) = load_flights(&config, &path).unwrap();

        assert_eq!(report.total_rows, 4);
        assert_eq!(report.skipped_rows, 3);
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].airline, "Air India");
    }

    #[test]
    fn test_high_price_rows_flagged() {
        let config = RoutingConfig::default();
        let (_dir, path) = write_csv(&[
            "Jet Airways Business,1/03/2019,Banglore,New Delhi,BLR → DEL,05:45,08:40,2h 55m,non-stop,Business class,79512",
        ]);
        let (flights, report) = load_flights(&config, &path).unwrap();

        assert_eq!(flights.len(), 1);
        assert_eq!(report.high_price_rows, 1);
    }

    #[test]
    fn test_unknown_city_gets_synthetic_code() {
        let config = RoutingConfig::default();
        let city = city_from_identifier(&config, "Goa").unwrap();
        assert_eq!(city.code, "GOA");
        assert_eq!(city.name, "Goa");
    }

    #[test]
    fn test_missing_file_is_error() {
        let config = RoutingConfig::default();
        let result = load_flights(&config, Path::new("/nonexistent/flights.csv"));
        assert!(result.is_err());
    }
}
