//! Farepath Core Library
//!
//! Turns raw priced flight records into a weighted directed route graph
//! and answers shortest/cheapest-route queries over it using three
//! interchangeable search strategies.

pub mod config;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod pricing;
pub mod routing;
