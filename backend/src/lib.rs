//! fltbase: a GraphQL server over FAA airport, city, state and region data.
//!
//! Filtering is built on the composable predicate layer in [orm]; the
//! request layer in [graphql] turns where inputs into predicates and runs
//! them against SQLite.

pub mod app;
pub mod cli;
pub mod config;
pub mod db;
pub mod graphql;
pub mod orm;
