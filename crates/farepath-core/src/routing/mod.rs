//! Path-search strategies over the route graph
//!
//! Three interchangeable routers over the same edge-weight model:
//! - `dijkstra`: uniform-cost label-setting search, non-negative weights
//! - `bellman_ford`: general relaxation search with negative-cycle detection
//! - `constrained`: bounded-stop search with budget/duration/airline
//!   constraints
//!
//! All three are pure given their inputs; failures come back as tagged
//! `RouteErrorKind` values inside `RouteResult`, never as unwinding errors.

pub mod bellman_ford;
pub mod constrained;
pub mod dijkstra;
pub mod result;
mod shared;

pub use result::{Algorithm, Constraints, FlightLeg, RouteErrorKind, RouteResult};
