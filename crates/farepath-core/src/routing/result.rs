//! Query results and constraint options shared by the routers

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which search strategy produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Dijkstra,
    BellmanFord,
    ConstrainedDp,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => write!(f, "dijkstra"),
            Algorithm::BellmanFord => write!(f, "bellman-ford"),
            Algorithm::ConstrainedDp => write!(f, "constrained-dp"),
        }
    }
}

/// Why a query produced no usable path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteErrorKind {
    /// Start or destination city is not a node in the graph
    UnknownCity,
    /// No finite-cost path reaches the destination
    Unreachable,
    /// The edge list contains a negative-weight cycle, so no finite
    /// optimum exists
    NegativeCycle,
    /// A path may exist, but none satisfies the supplied constraints
    ConstraintsUnsatisfiable,
}

impl fmt::Display for RouteErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteErrorKind::UnknownCity => write!(f, "city not found in graph"),
            RouteErrorKind::Unreachable => write!(f, "no route found"),
            RouteErrorKind::NegativeCycle => write!(f, "negative cycle detected in the graph"),
            RouteErrorKind::ConstraintsUnsatisfiable => {
                write!(f, "no path satisfies the given constraints")
            }
        }
    }
}

/// One flown segment of a constrained route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightLeg {
    pub from: String,
    pub to: String,
    pub airline: String,
    /// Leg weight before any preference surcharge
    pub cost: f64,
    /// Discounted ticket price for the leg
    pub price: f64,
    pub duration_minutes: u32,
}

/// Outcome of one shortest-path query.
///
/// Produced per query and not retained by the core; report collaborators
/// read the path/cost/stops fields plus the timing metadata.
#[derive(Debug, Clone, Serialize)]
pub struct RouteResult {
    pub algorithm: Algorithm,
    /// Ordered city codes from start to destination, absent on error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
    /// Total path cost; +infinity when unreachable, -infinity on a
    /// negative cycle (serialized as null by JSON)
    pub cost: f64,
    /// Number of flown segments: `path.len() - 1` when a path exists
    pub stops: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RouteErrorKind>,
    /// Accumulated flight time, when the router tracks it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_duration_minutes: Option<u32>,
    /// Per-leg details, when the router tracks them
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub legs: Vec<FlightLeg>,
    /// Wall-clock query time
    pub execution_time_ms: f64,
}

impl RouteResult {
    pub fn found(algorithm: Algorithm, path: Vec<String>, cost: f64, elapsed: Duration) -> Self {
        let stops = path.len().saturating_sub(1);
        RouteResult {
            algorithm,
            path: Some(path),
            cost,
            stops,
            error: None,
            total_duration_minutes: None,
            legs: Vec::new(),
            execution_time_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }

    pub fn error(
        algorithm: Algorithm,
        kind: RouteErrorKind,
        cost: f64,
        elapsed: Duration,
    ) -> Self {
        RouteResult {
            algorithm,
            path: None,
            cost,
            stops: 0,
            error: Some(kind),
            total_duration_minutes: None,
            legs: Vec::new(),
            execution_time_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }

    /// Attach per-leg details and the accumulated duration
    pub fn with_legs(mut self, legs: Vec<FlightLeg>, total_duration_minutes: u32) -> Self {
        self.legs = legs;
        self.total_duration_minutes = Some(total_duration_minutes);
        self
    }

    pub fn is_found(&self) -> bool {
        self.error.is_none() && self.path.is_some()
    }
}

/// Optional limits for the constrained router. Defaults reject nothing:
/// stop count falls back to city count - 1, budget and duration to
/// infinity, and empty airline sets mean no preference and no exclusions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    /// Maximum flown segments
    pub max_stops: Option<usize>,
    pub max_duration_minutes: Option<u32>,
    pub budget: Option<f64>,
    /// Airlines flown without surcharge; legs on other airlines cost 15% more
    pub preferred_airlines: Vec<String>,
    /// Airlines pruned from the search entirely
    pub avoid_airlines: Vec<String>,
}

impl Constraints {
    /// True when no field can prune or reprice any candidate
    pub fn is_unconstrained(&self) -> bool {
        self.max_stops.is_none()
            && self.max_duration_minutes.is_none()
            && self.budget.is_none()
            && self.preferred_airlines.is_empty()
            && self.avoid_airlines.is_empty()
    }
}
