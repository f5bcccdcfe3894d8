use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nomad_navigator_backend::{
    catalog::Catalog,
    config::Config,
    middleware::rate_limit::log_request,
    routes,
    session::{SessionStore, UserStore},
    AppState,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nomad_navigator_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    tracing::info!("Starting server at {}", config.server_addr());
    if config.map_tiles_api_key.is_none() {
        tracing::warn!("MAP_TILES_API_KEY not set; clients fall back to the map placeholder");
    }

    // Build the in-memory catalog
    let catalog = Arc::new(Catalog::load());
    tracing::info!(
        destinations = catalog.destinations().len(),
        hotels = catalog.hotels().len(),
        "Catalog loaded"
    );

    // Seed the demo account
    let users = UserStore::default();
    users
        .seed_demo_account()
        .expect("Failed to seed demo account");
    tracing::info!("Demo account ready: user@example.com");

    // Create app state
    let state = AppState {
        catalog,
        users,
        sessions: SessionStore::default(),
        config: config.clone(),
    };

    // Create router with middleware
    let app = routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(axum::middleware::from_fn(log_request));

    // Start server with socket address for rate limiting
    let addr: SocketAddr = config.server_addr().parse().expect("Invalid address");
    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Failed to start server");
}
