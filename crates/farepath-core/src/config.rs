//! Routing configuration for farepath
//!
//! The discount table, city-code tables, and weight-model constants are
//! explicit configuration values passed into the pricing functions and
//! the graph builder, never ambient globals, so tests can substitute
//! alternate discount sets or city tables without process-wide effects.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FarepathError, Result};
use crate::model::{Discount, DiscountKind};

/// Currency units added to an edge weight per minute of flight time
pub const DEFAULT_TIME_VALUE_PER_MINUTE: f64 = 0.05;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Per-minute time-value constant used by the edge weight model
    pub time_value_per_minute: f64,
    /// Discount rules applied to every ingested flight
    pub discounts: Vec<Discount>,
    /// Airport code -> full city name
    pub city_codes: BTreeMap<String, String>,
    /// Variant spellings -> canonical city name
    pub city_aliases: BTreeMap<String, String>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        RoutingConfig {
            time_value_per_minute: DEFAULT_TIME_VALUE_PER_MINUTE,
            discounts: default_discounts(),
            city_codes: default_city_codes(),
            city_aliases: default_city_aliases(),
        }
    }
}

impl RoutingConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: RoutingConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FarepathError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Canonical city name for a raw input string.
    ///
    /// Checks the alias table first ("Banglore" -> "Bangalore",
    /// "New Delhi" -> "Delhi"), then the code table (codes map to their
    /// city name), and falls back to the trimmed input.
    pub fn normalize_city_name(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        if let Some(canonical) = self.city_aliases.get(trimmed) {
            return canonical.clone();
        }
        if let Some(name) = self.city_codes.get(trimmed) {
            return name.clone();
        }
        trimmed.to_string()
    }

    /// Whether the given string is a known airport code
    pub fn is_known_code(&self, code: &str) -> bool {
        self.city_codes.contains_key(code)
    }

    /// Full city name for an airport code
    pub fn city_name(&self, code: &str) -> Option<&str> {
        self.city_codes.get(code).map(String::as_str)
    }

    /// Airport code for a city name (case-insensitive)
    pub fn code_for_name(&self, name: &str) -> Option<String> {
        self.city_codes
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(code, _)| code.clone())
    }
}

/// Realistic discount scenarios applied to all ingested flights
fn default_discounts() -> Vec<Discount> {
    vec![
        Discount {
            kind: DiscountKind::Loyalty,
            name: "IndiGo Loyalty".into(),
            percentage: 15.0,
            fixed_amount: 0.0,
            applicable_airlines: vec!["IndiGo".into()],
        },
        Discount {
            kind: DiscountKind::Loyalty,
            name: "Jet Airways Loyalty".into(),
            percentage: 20.0,
            fixed_amount: 0.0,
            applicable_airlines: vec!["Jet Airways".into()],
        },
        Discount {
            kind: DiscountKind::CreditCard,
            name: "Credit Card Cashback".into(),
            percentage: 0.0,
            fixed_amount: 1000.0,
            applicable_airlines: vec![],
        },
        Discount {
            kind: DiscountKind::Seasonal,
            name: "Off-Peak Discount".into(),
            percentage: 25.0,
            fixed_amount: 0.0,
            applicable_airlines: vec![],
        },
    ]
}

fn default_city_codes() -> BTreeMap<String, String> {
    [
        ("DEL", "Delhi"),
        ("BLR", "Bangalore"),
        ("BOM", "Mumbai"),
        ("CCU", "Kolkata"),
        ("MAA", "Chennai"),
        ("COK", "Cochin"),
        ("HYD", "Hyderabad"),
        ("PNQ", "Pune"),
        ("LKO", "Lucknow"),
        ("AMD", "Ahmedabad"),
        ("NAG", "Nagpur"),
        ("IDR", "Indore"),
        ("IXR", "Ranchi"),
        ("BBI", "Bhubaneswar"),
        ("GAU", "Guwahati"),
    ]
    .into_iter()
    .map(|(code, name)| (code.to_string(), name.to_string()))
    .collect()
}

fn default_city_aliases() -> BTreeMap<String, String> {
    [
        // common misspelling
        ("Banglore", "Bangalore"),
        // variant name
        ("New Delhi", "Delhi"),
    ]
    .into_iter()
    .map(|(variant, canonical)| (variant.to_string(), canonical.to_string()))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = RoutingConfig::default();
        assert_eq!(config.time_value_per_minute, 0.05);
        assert_eq!(config.discounts.len(), 4);
        assert_eq!(config.city_codes.len(), 15);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("routing.toml");

        let config = RoutingConfig::default();
        config.save(&path).unwrap();

        let loaded = RoutingConfig::load(&path).unwrap();
        assert_eq!(loaded.time_value_per_minute, config.time_value_per_minute);
        assert_eq!(loaded.discounts, config.discounts);
        assert_eq!(loaded.city_codes, config.city_codes);
    }

    #[test]
    fn test_normalize_city_name_alias() {
        let config = RoutingConfig::default();
        assert_eq!(config.normalize_city_name("Banglore"), "Bangalore");
        assert_eq!(config.normalize_city_name("New Delhi"), "Delhi");
    }

    #[test]
    fn test_normalize_city_name_code() {
        let config = RoutingConfig::default();
        assert_eq!(config.normalize_city_name("BLR"), "Bangalore");
    }

    #[test]
    fn test_normalize_city_name_passthrough() {
        let config = RoutingConfig::default();
        assert_eq!(config.normalize_city_name("  Goa  "), "Goa");
    }

    #[test]
    fn test_code_for_name_case_insensitive() {
        let config = RoutingConfig::default();
        assert_eq!(config.code_for_name("bangalore"), Some("BLR".to_string()));
        assert_eq!(config.code_for_name("Atlantis"), None);
    }

    #[test]
    fn test_custom_time_value() {
        let config = RoutingConfig {
            time_value_per_minute: 0.2,
            ..Default::default()
        };
        assert_eq!(config.time_value_per_minute, 0.2);
    }
}
