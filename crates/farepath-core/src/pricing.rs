//! Discount resolution and the edge weight model
//!
//! Pure functions: a flight plus the configured discount set resolves to a
//! final per-flight price, and (final price, duration) resolves to the
//! scalar search weight the routers consume. Weights produced here are
//! strictly positive, which the uniform-cost router relies on.

use crate::config::RoutingConfig;
use crate::model::{Discount, Flight, ProcessedFlight};

/// Largest share of the base fare any single rule may remove
const MAX_DISCOUNT_FRACTION: f64 = 0.5;

/// Discount amount one rule yields for a flight.
///
/// Zero when the rule's airline filter does not match. Capped at 50% of
/// the base price so the final price can never go negative.
pub fn discount_amount(discount: &Discount, flight: &Flight) -> f64 {
    if !discount.applies_to(&flight.airline) {
        return 0.0;
    }

    let percentage_discount = flight.base_price * (discount.percentage / 100.0);
    let total_discount = percentage_discount + discount.fixed_amount;

    total_discount.min(flight.base_price * MAX_DISCOUNT_FRACTION)
}

/// Largest single applicable discount across the configured set.
///
/// Discounts never stack; ties are broken arbitrarily since the resulting
/// price is identical either way.
pub fn best_discount_amount(discounts: &[Discount], flight: &Flight) -> f64 {
    discounts
        .iter()
        .map(|discount| discount_amount(discount, flight))
        .fold(0.0, f64::max)
}

/// Final per-flight price after the best discount.
///
/// Always within `[0.5 * base_price, base_price]`.
pub fn final_price(discounts: &[Discount], flight: &Flight) -> f64 {
    let best = best_discount_amount(discounts, flight);
    (flight.base_price - best).max(flight.base_price * MAX_DISCOUNT_FRACTION)
}

/// Scalar search weight for one direct city-to-city segment: price plus a
/// small time-value penalty per minute of flight time.
pub fn edge_weight(final_price: f64, duration_minutes: u32, config: &RoutingConfig) -> f64 {
    final_price + f64::from(duration_minutes) * config.time_value_per_minute
}

/// Apply the configured discounts to a batch of flights
#[tracing::instrument(skip_all, fields(flights = flights.len()))]
pub fn apply_discounts(config: &RoutingConfig, flights: Vec<Flight>) -> Vec<ProcessedFlight> {
    let mut discounted = 0usize;
    let mut total_savings = 0.0;

    let processed: Vec<ProcessedFlight> = flights
        .into_iter()
        .map(|flight| {
            let price = final_price(&config.discounts, &flight);
            if price < flight.base_price {
                discounted += 1;
                total_savings += flight.base_price - price;
            }
            ProcessedFlight {
                flight,
                final_price: price,
            }
        })
        .collect();

    tracing::debug!(
        discounted,
        total = processed.len(),
        total_savings,
        "applied discounts"
    );
    processed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{City, DiscountKind, Route};

    fn flight(airline: &str, base_price: f64) -> Flight {
        let route = Route::new(
            City::new("BLR", "Bangalore", "Bangalore"),
            vec![],
            City::new("DEL", "Delhi", "Delhi"),
        );
        Flight {
            airline: airline.into(),
            route,
            duration_minutes: 170,
            base_price,
            departure_time: None,
            arrival_time: None,
        }
    }

    fn percentage(airlines: Vec<String>, pct: f64) -> Discount {
        Discount {
            kind: DiscountKind::Loyalty,
            name: "test".into(),
            percentage: pct,
            fixed_amount: 0.0,
            applicable_airlines: airlines,
        }
    }

    fn fixed(amount: f64) -> Discount {
        Discount {
            kind: DiscountKind::CreditCard,
            name: "cashback".into(),
            percentage: 0.0,
            fixed_amount: amount,
            applicable_airlines: vec![],
        }
    }

    #[test]
    fn test_discount_amount_percentage() {
        let d = percentage(vec![], 25.0);
        assert_eq!(discount_amount(&d, &flight("IndiGo", 4000.0)), 1000.0);
    }

    #[test]
    fn test_discount_amount_airline_mismatch() {
        let d = percentage(vec!["IndiGo".into()], 15.0);
        assert_eq!(discount_amount(&d, &flight("SpiceJet", 4000.0)), 0.0);
    }

    #[test]
    fn test_discount_amount_capped_at_half() {
        // 40% + 2000 flat on a 4000 fare would be 3600; the cap holds it at 2000
        let d = Discount {
            kind: DiscountKind::Seasonal,
            name: "deep".into(),
            percentage: 40.0,
            fixed_amount: 2000.0,
            applicable_airlines: vec![],
        };
        assert_eq!(discount_amount(&d, &flight("IndiGo", 4000.0)), 2000.0);
    }

    #[test]
    fn test_best_discount_is_single_largest() {
        // 15% of 4000 = 600, flat 1000, 25% of 4000 = 1000: best is 1000, never a sum
        let discounts = vec![
            percentage(vec!["IndiGo".into()], 15.0),
            fixed(1000.0),
            percentage(vec![], 25.0),
        ];
        let f = flight("IndiGo", 4000.0);
        assert_eq!(best_discount_amount(&discounts, &f), 1000.0);
        assert_eq!(final_price(&discounts, &f), 3000.0);
    }

    #[test]
    fn test_final_price_within_bounds() {
        let discounts = vec![fixed(100_000.0), percentage(vec![], 99.0)];
        for base in [100.0, 999.5, 3897.0, 50_000.0] {
            let f = flight("IndiGo", base);
            let price = final_price(&discounts, &f);
            assert!(price >= base * 0.5, "price {} below floor for base {}", price, base);
            assert!(price <= base, "price {} above base {}", price, base);
        }
    }

    #[test]
    fn test_final_price_no_applicable_discounts() {
        let discounts = vec![percentage(vec!["Vistara".into()], 50.0)];
        let f = flight("IndiGo", 4000.0);
        assert_eq!(final_price(&discounts, &f), 4000.0);
    }

    #[test]
    fn test_edge_weight_adds_time_penalty() {
        let config = RoutingConfig::default();
        // 170 minutes at 0.05/minute
        assert_eq!(edge_weight(2897.0, 170, &config), 2897.0 + 8.5);
    }

    #[test]
    fn test_edge_weight_strictly_positive() {
        let config = RoutingConfig::default();
        assert!(edge_weight(50.0, 0, &config) > 0.0);
    }

    #[test]
    fn test_apply_discounts_counts_and_prices() {
        let config = RoutingConfig::default();
        let flights = vec![flight("IndiGo", 3897.0)];
        let processed = apply_discounts(&config, flights);
        assert_eq!(processed.len(), 1);
        // best of: 15% loyalty (584.55), 1000 cashback, 25% seasonal (974.25)
        assert_eq!(processed[0].final_price, 2897.0);
    }
}
