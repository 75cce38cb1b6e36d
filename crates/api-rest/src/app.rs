//! Application builder.
//!
//! Assembles routes, middleware, and state into an Axum router. Tracing
//! initialization lives here too but is invoked only by the binary, so tests
//! can build routers freely.

use axum::{http::header::CONTENT_TYPE, http::HeaderValue, http::Method, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::ApiConfig, routes, state::AppState};

/// Create the main application router.
///
/// Anything that is not an API route falls through to static file serving
/// from the configured public directory.
pub fn create_app(state: AppState) -> Router {
    let config = state.config.clone();
    let cors = build_cors_layer(&config);

    Router::new()
        .merge(routes::api_routes())
        .fallback_service(ServeDir::new(&config.public_dir))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(TimeoutLayer::new(config.request_timeout())),
        )
}

/// Initialize tracing/logging. Called once, from the binary.
pub fn init_tracing(config: &ApiConfig) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the CORS layer: explicit origin allow-list, GET/POST/OPTIONS, and
/// `content-type` as the only allowed request header.
fn build_cors_layer(config: &ApiConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}
