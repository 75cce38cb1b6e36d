//! Paramed Directory API server.
//!
//! Startup is sequential and fail-fast: a missing `DATABASE_URL` aborts the
//! process before the listener binds.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use paramed_api_rest::{app, ApiConfig, AppState};
use paramed_infrastructure::{
    database::{DatabaseConfig, DatabasePool},
    repositories::{PgRegistrationRepository, RegistrationRepository},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env();
    app::init_tracing(&config);

    let db_config = DatabaseConfig::from_env().context("storage target unconfigured")?;
    let pool = DatabasePool::new(&db_config).await?;
    pool.run_migrations().await?;

    let registrations: Arc<dyn RegistrationRepository> =
        Arc::new(PgRegistrationRepository::new(pool.pool().clone()));
    let state = AppState::new(config.clone(), registrations);
    let router = app::create_app(state);

    let address = config.server_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(%address, "Server running");

    axum::serve(listener, router).await?;
    Ok(())
}
