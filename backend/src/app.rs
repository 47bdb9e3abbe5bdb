//! Application state and HTTP router construction.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Database;
use crate::graphql::{FltbaseSchema, build_schema, service};

/// Shared state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Database,
    pub schema: FltbaseSchema,
}

impl AppState {
    pub fn new(config: Config, db: Database) -> Self {
        let schema = build_schema(db.clone(), config.debug);
        Self {
            config: Arc::new(config),
            db,
            schema,
        }
    }
}

/// Build the full Axum router with request tracing.
/// Returns Router<()> (state fully applied) for use with axum::serve.
pub fn build_app(state: AppState) -> Router<()> {
    Router::new()
        .merge(service::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
