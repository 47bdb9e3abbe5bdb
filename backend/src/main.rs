//! fltbase - GraphQL server over the FAA airport dataset
//!
//! All operations are exposed via GraphQL at POST /query.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fltbase::app::{AppState, build_app};
use fltbase::cli::CliOptions;
use fltbase::config::Config;
use fltbase::db::{Database, schema_sync};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = CliOptions::from_args();
    let mut config = Config::from_env()?;
    config.apply_cli(&cli);

    let default_filter = if config.debug {
        "fltbase=debug,tower_http=debug"
    } else {
        "fltbase=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    tracing::info!("Starting fltbase");

    let db = Database::connect(&config.database_url, config.database_max_connections).await?;
    schema_sync::sync_schema(db.pool())
        .await
        .context("Schema sync failed")?;

    let addr = config.socket_addr()?;
    let state = AppState::new(config, db.clone());
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(address = %addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    tracing::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        // Keep serving rather than exiting at once
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
