//! # devicehubd
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! No domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use devicehub_adapter_http_axum::state::AppState;
use devicehub_adapter_storage_sqlite_sqlx::{
    Config as StorageConfig, SqliteDeviceGroupRepository, SqliteDeviceRepository,
    SqliteHealthProbe,
};
use devicehub_app::services::device_group_service::DeviceGroupService;
use devicehub_app::services::device_service::DeviceService;
use devicehub_app::services::health_service::HealthService;
use devicehub_domain::id::UserId;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;
    init_tracing(&config.logging.filter);

    // Database
    let db = StorageConfig {
        database_url: config.database_url().to_string(),
        max_connections: config.database.max_connections,
        acquire_timeout: config.acquire_timeout(),
    }
    .build()
    .await
    .context("initialising database")?;
    let pool = db.pool().clone();

    // Services
    let query_timeout = config.query_timeout();
    let device_group_service =
        DeviceGroupService::new(SqliteDeviceGroupRepository::new(pool.clone()))
            .with_call_timeout(query_timeout);
    let device_service =
        DeviceService::new(SqliteDeviceRepository::new(pool.clone())).with_call_timeout(query_timeout);
    let health_service =
        HealthService::new(SqliteHealthProbe::new(pool)).with_call_timeout(query_timeout);

    // HTTP
    let state = AppState::new(
        device_group_service,
        device_service,
        health_service,
        UserId::new(config.auth.default_owner_id),
    );
    let app = devicehub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!(%bind_addr, "devicehubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.pool().close().await;
    tracing::info!("devicehubd stopped");
    Ok(())
}

fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
