use anyhow::Context;
use contacts_api::app::auth::gate::PgAuthGate;
use contacts_api::app::contacts::postgres::PgContactRepository;
use contacts_api::app::contacts::service::ContactService;
use contacts_api::core::clock::SystemClock;
use contacts_api::infrastructure::{config, database::DatabaseManager, logger};
use contacts_api::{build_router, AppState};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = config::config_path();
    let config = config::load_config(config_path.as_deref()).context("loading configuration")?;
    let _log_guard = logger::init_logging(&config.logging)?;

    match &config_path {
        Some(path) => info!("Loaded configuration from {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    let database = DatabaseManager::new(&config.database).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        e
    })?;
    database.ensure_schema().await?;
    let pool = database.get_pool().clone();

    let contacts = ContactService::new(
        Arc::new(PgContactRepository::new(pool.clone())),
        Arc::new(SystemClock),
        config.birthdays.default_window_days,
    );
    let state = AppState::new(contacts, Arc::new(PgAuthGate::new(pool)));
    let app = build_router(state, Duration::from_secs(config.http.timeout_seconds));

    let listener = TcpListener::bind(config.listen_address())
        .await
        .with_context(|| format!("binding {}", config.listen_address()))?;
    info!("Contacts API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
