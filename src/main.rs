use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod auth;
mod config;
mod dto;
mod error;
mod handlers;
mod models;
mod services;
mod upstream;

use config::Config;
use upstream::{http::HttpUpstream, Upstream};

#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn Upstream>,
}

pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz));

    let protected_routes = Router::new()
        // Mood
        .route("/api/mood", post(handlers::mood::create_mood_log))
        .route("/api/mood", get(handlers::mood::list_mood_logs))
        .route("/api/mood/classify", post(handlers::mood::classify_intensity))
        .route("/api/mood/:id", delete(handlers::mood::delete_mood_log))
        // Appointments
        .route(
            "/api/appointments",
            get(handlers::appointments::list_appointments),
        )
        .layer(middleware::from_fn(auth::middleware::require_auth));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let allowed_origins: Vec<axum::http::HeaderValue> = {
        let mut origins = Vec::new();
        match config.frontend_url.parse::<axum::http::HeaderValue>() {
            Ok(hv) => origins.push(hv),
            Err(_) => tracing::warn!(url = %config.frontend_url, "FRONTEND_URL is not a valid origin"),
        }
        // In dev, also allow LAN access (e.g. testing from another device)
        if let Ok(extra) = std::env::var("CORS_EXTRA_ORIGINS") {
            for o in extra.split(',') {
                if let Ok(hv) = o.trim().parse::<axum::http::HeaderValue>() {
                    origins.push(hv);
                }
            }
        }
        origins
    };

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zenmind_gateway=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Config::from_env();

    let upstream = HttpUpstream::new(&config)?;
    tracing::info!(upstream = %config.upstream_api_url, "External API client ready");

    let state = AppState {
        upstream: Arc::new(upstream),
    };

    let app = build_router(state)
        .layer(cors_layer(&config))
        .layer(TraceLayer::new_for_http());

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
