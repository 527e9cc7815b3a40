//! The Roster backend: an HTTP service for signing participants up to activities.

pub mod config;
pub mod handlers;
pub mod services;

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::services::ActivityServiceInMemory;

/// State shared by every request handler.
pub struct AppState {
    pub activities: ActivityServiceInMemory,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(activities: ActivityServiceInMemory) -> Self {
        Self {
            activities,
            started_at: chrono::Utc::now(),
        }
    }
}

impl Default for AppState {
    /// A fresh state over the startup activities.
    fn default() -> Self {
        Self::new(ActivityServiceInMemory::seeded())
    }
}

fn cors(allowed_origins: &[String]) -> CorsLayer {
    let origins = if cfg!(debug_assertions) {
        let dev_ports = vec![3000, 8000, 8080, 8081, 5173];
        let mut allowed_origins = Vec::new();
        for port in dev_ports {
            allowed_origins.push(format!("http://localhost:{}", port));
            allowed_origins.push(format!("http://127.0.0.1:{}", port));
        }
        allowed_origins
    } else {
        allowed_origins.to_vec()
    };

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_headers([HeaderName::from_static("content-type")])
        .allow_methods([Method::GET, Method::POST])
}

/// Setup the routes for the server and configure CORS and tracing
pub fn router(state: Arc<AppState>, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(handlers::health::get))
        .route("/activities", get(handlers::activities::list))
        .route("/activities/{activity_name}", get(handlers::activities::get))
        .route(
            "/activities/{activity_name}/signup",
            post(handlers::activities::sign_up),
        )
        .route(
            "/activities/{activity_name}/unregister",
            post(handlers::activities::unregister),
        )
        .layer(cors(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
