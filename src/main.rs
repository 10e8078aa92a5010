use routine_api::config::Config;
use routine_api::logging::{self, TracingSink};
use routine_api::AppState;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    // Initialize tracing
    logging::init_logging(&config.logging)?;
    tracing::debug!("init main");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Application terminated unexpectedly");
        return Err(e);
    }

    Ok(())
}

async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(environment = ?config.environment, "Configuration loaded successfully");

    // Routine records go through the global subscriber set up above
    let state = Arc::new(AppState::with_sink(Arc::new(TracingSink)));

    let app = routine_api::routes::create_router(state).layer(TraceLayer::new_for_http());

    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Starting web application...");
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
