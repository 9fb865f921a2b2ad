//! hospital-server library crate
//!
//! Exposes `build_app` and `config` for integration tests.
//! The actual binary entrypoint is in `main.rs`.

pub mod ai;
pub mod config;
mod error;
pub mod knowledge;
mod middleware;
mod routes;

use std::sync::Arc;

use axum::{
    Extension, Router, middleware as axum_mw,
    routing::{get, post},
};
use hospital_core::HospitalRecord;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use ai::{GeminiClient, SharedGenerator};
use config::Config;

/// Build the Gemini generator from configuration (None if GEMINI_API_KEY not set)
pub fn generator_from_config(config: &Config) -> Option<SharedGenerator> {
    config.gemini_api_key.as_ref().map(|key| {
        let client = GeminiClient::new(key.clone())
            .with_model(config.gemini_model.clone())
            .with_base_url(config.gemini_base_url.clone());
        Arc::new(client) as SharedGenerator
    })
}

/// Build the full application router with all routes and middleware.
///
/// Extracted from `main()` so integration tests can construct the app
/// with a stub generator and without binding to a TCP port.
pub fn build_app(
    knowledge: Arc<HospitalRecord>,
    generator: Option<SharedGenerator>,
    config: &Config,
) -> Router {
    // Create rate limiter
    let rate_limiter = middleware::create_rate_limiter(config.rate_limit_rps);

    // Chat calls out to the model, so it is the only rate limited route
    let chat_routes = Router::new()
        .route("/chat", post(routes::chat::chat))
        .layer(axum_mw::from_fn(middleware::rate_limit_middleware))
        .layer(Extension(rate_limiter));

    // Install Prometheus metrics recorder.
    // Use build_recorder() + set_global_recorder() so that repeated calls
    // (e.g. in integration tests) don't panic; the second install is
    // silently ignored and we still get a valid handle for /metrics.
    let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
    let prometheus_handle = recorder.handle();
    let _ = metrics::set_global_recorder(recorder);

    let public_routes = Router::new()
        .route("/", get(routes::index::page))
        .route("/static/script.js", get(routes::index::script))
        .route("/health", get(routes::health::check))
        .route("/metrics", get(routes::metrics::get))
        .layer(Extension(prometheus_handle));

    // Build CORS layer
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Build application
    Router::new()
        .merge(public_routes)
        .merge(chat_routes)
        .route_layer(axum_mw::from_fn(middleware::metrics_middleware))
        .layer(Extension(generator))
        .with_state(knowledge)
        .layer(axum_mw::from_fn(middleware::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
