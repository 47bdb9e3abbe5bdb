//! HTTP routes for the GraphQL endpoint.
//!
//! `POST /query` executes a request against the schema held in [AppState].

use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::routing::post;

use crate::app::AppState;

/// Return a router with /query. Merge this into the app and call
/// `.with_state(state)` on the combined router.
pub fn router() -> Router<AppState> {
    Router::new().route("/query", post(graphql_handler))
}

async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    let request = req.into_inner();
    if let Some(name) = request.operation_name.as_deref() {
        tracing::debug!(operation = %name, "GraphQL request");
    }
    state.schema.execute(request).await.into()
}
