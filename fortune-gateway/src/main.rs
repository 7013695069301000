//! Fortune gateway binary

use axum::{
    routing::{get, post},
    Router,
};
use fortune_gateway::{handlers, AppState, BackendClient, Config};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,fortune_gateway=debug")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting fortune gateway v{}", env!("CARGO_PKG_VERSION"));

    // Initialize Prometheus metrics
    fortune_gateway::metrics::init_prometheus()?;
    fortune_gateway::metrics::init_metrics();

    let config = Config::from_env();
    info!("Proxying to fortune backend at {}", config.backend_url());

    // A template that fails to load refuses startup
    let templates = Arc::new(fortune_gateway::templates::load(&config.template_dir)?);

    // One shared outbound client for the whole process
    let backend = BackendClient::new(config.backend_url())?;
    let state = AppState::new(backend, templates);

    // Build the application
    let app = Router::new()
        // Proxy endpoints
        .route("/api/random", get(handlers::random_fortune))
        .route("/api/all", get(handlers::all_fortunes))
        .route("/api/add", post(handlers::add_fortune))
        // Health check
        .route("/healthz", get(handlers::healthz))
        // Metrics
        .route("/metrics", get(handlers::metrics))
        // Static assets at /
        .fallback_service(ServeDir::new(&config.static_dir))
        // Add state
        .with_state(state)
        // Add middleware
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    info!("Listening on {}", config.bind_address);

    // Create the server
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    let server = axum::serve(listener, app);

    // Set up shutdown signal handler
    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Received shutdown signal, shutting down gracefully...");
    };

    // Run server with graceful shutdown
    server
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Server shutdown complete");
    Ok(())
}
