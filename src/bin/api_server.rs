// src/bin/api_server.rs

use std::sync::Arc;

use music_library_api::transport;
use music_library_api::{Config, PgSongStore, SongInfoClient, SongService};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // --- Configuration ---
    let config = Config::from_env()?;
    info!(?config, "Configuration loaded");

    // --- Song Store Initialization ---
    info!("Connecting to database...");
    let store = PgSongStore::connect(&config.database).await?;
    info!("Database connection established, songs table ready");

    // --- Song Info Client Initialization ---
    let lookup = SongInfoClient::from_config(&config)?;
    info!(
        base_url = lookup.base_url(),
        timeout_secs = config.external_api_timeout.as_secs(),
        "Song info client ready"
    );

    let app_state = transport::http::AppState::new(SongService::new(
        Arc::new(store),
        Arc::new(lookup),
    ));

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Music API listening on http://{}", addr);
    info!("Swagger UI available at http://localhost:{}/swagger-ui", config.server_port);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for shutdown signal");
            }
            info!("Shutdown signal received, finishing in-flight requests");
        })
        .await?;

    info!("Graceful shutdown complete.");
    Ok(())
}
