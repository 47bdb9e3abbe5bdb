//! GraphQL API over the aviation dataset
//!
//! - `entities`: object types, where inputs and ordering per entity
//! - `filters`: scalar filter inputs and the where-input builder
//! - `queries` / `mutations`: per-entity root objects merged in `schema`
//! - `service`: the axum route serving `/query`

pub mod entities;
pub mod filters;
pub(crate) mod helpers;
pub mod mutations;
pub mod pagination;
pub mod queries;
mod schema;
pub mod service;

pub use schema::{FltbaseSchema, MutationRoot, QueryRoot, build_schema};
