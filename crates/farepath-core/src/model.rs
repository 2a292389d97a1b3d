//! Core flight-domain records
//!
//! Flight, route, and discount records are built once from cleaned input
//! and never mutated afterwards; the graph builder and routers only read
//! them.

use serde::{Deserialize, Serialize};

/// A city in the route network.
///
/// Identity is the airport code: two cities are the same graph node iff
/// their codes match, regardless of name spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// Airport code like BLR, DEL
    pub code: String,
    /// Full city name like Bangalore
    pub name: String,
    /// Cleaned name used for matching
    pub normalized_name: String,
}

impl City {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        normalized_name: impl Into<String>,
    ) -> Self {
        City {
            code: code.into(),
            name: name.into(),
            normalized_name: normalized_name.into(),
        }
    }
}

/// Flight path from source to destination with intermediate stops.
///
/// Invariant: the full city sequence never contains two equal adjacent
/// cities (ingestion rejects such rows).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub source: City,
    /// Cities between source and destination, in flight order
    pub intermediate_stops: Vec<City>,
    pub destination: City,
}

impl Route {
    pub fn new(source: City, intermediate_stops: Vec<City>, destination: City) -> Self {
        Route {
            source,
            intermediate_stops,
            destination,
        }
    }

    /// Complete city sequence for multi-hop routes, source first
    pub fn all_cities(&self) -> Vec<&City> {
        let mut cities = Vec::with_capacity(self.intermediate_stops.len() + 2);
        cities.push(&self.source);
        cities.extend(self.intermediate_stops.iter());
        cities.push(&self.destination);
        cities
    }

    /// Number of intermediate stops
    pub fn stop_count(&self) -> usize {
        self.intermediate_stops.len()
    }
}

/// Single flight record from the dataset, after cleaning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Airline name like IndiGo, SpiceJet
    pub airline: String,
    /// Complete flight path
    pub route: Route,
    /// Total flight time in minutes
    pub duration_minutes: u32,
    /// Original ticket price before discounts
    pub base_price: f64,
    /// Normalized HH:MM departure time, when the source row carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,
    /// Normalized HH:MM arrival time, when the source row carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,
}

/// Discount categories available in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    Loyalty,
    CreditCard,
    Seasonal,
}

/// A single discount rule.
///
/// A rule applies to a flight iff `applicable_airlines` is empty (all
/// airlines) or contains the flight's airline. Discounts never stack: the
/// single largest-amount applicable rule wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub kind: DiscountKind,
    /// Display name like "IndiGo Loyalty"
    pub name: String,
    /// Percentage off the base price
    pub percentage: f64,
    /// Flat currency amount off the base price
    pub fixed_amount: f64,
    /// Airlines this rule applies to; empty means all airlines
    pub applicable_airlines: Vec<String>,
}

impl Discount {
    /// Whether this rule's airline filter matches the given airline
    pub fn applies_to(&self, airline: &str) -> bool {
        self.applicable_airlines.is_empty()
            || self.applicable_airlines.iter().any(|a| a == airline)
    }
}

/// Flight after discount processing is complete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedFlight {
    pub flight: Flight,
    /// Price after the best applicable discount
    pub final_price: f64,
}
