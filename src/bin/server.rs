//! Server: reads config from env (and `.env`), connects the store, ensures tables, serves /v1.

use freerider::{app, connect, ensure_tables, AppConfig, AppError, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("freerider=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env().map_err(AppError::from)?;
    let store = connect(&config.database_url, config.max_connections).await?;
    if config.ensure_tables {
        ensure_tables(store.as_ref()).await?;
    }

    let router = app(AppState::new(store), config.body_limit);
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
