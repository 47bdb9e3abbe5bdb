//! GraphQL schema definition
//!
//! Query and mutation roots are merged from the per-entity objects in
//! `queries/` and `mutations/`. There are no subscriptions.

use async_graphql::extensions::Tracing;
use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::db::Database;

use super::mutations::{
    AirportMutations, CityMutations, CountryMutations, RegionMutations, StateMutations,
};
use super::queries::{AirportQueries, CityQueries, CountryQueries, RegionQueries, StateQueries};

/// The GraphQL schema type
pub type FltbaseSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    CountryQueries,
    RegionQueries,
    StateQueries,
    CityQueries,
    AirportQueries,
);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    CountryMutations,
    RegionMutations,
    StateMutations,
    CityMutations,
    AirportMutations,
);

/// Build the GraphQL schema with all resolvers.
///
/// `debug` installs the tracing extension, which logs a span per resolver.
pub fn build_schema(db: Database, debug: bool) -> FltbaseSchema {
    let builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(db);

    if debug {
        builder.extension(Tracing).finish()
    } else {
        builder.finish()
    }
}
