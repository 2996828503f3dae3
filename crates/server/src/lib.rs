use std::sync::Arc;

use axum::{routing::get, Router};
use shared::SampleGeometry;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub geometry: Arc<SampleGeometry>,
}

impl AppState {
    pub fn new(geometry: SampleGeometry) -> Self {
        Self {
            geometry: Arc::new(geometry),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/api/health", get(routes::health))
        .route("/api/geometry", get(routes::geometry))
        .route("/api/dashboard", get(routes::dashboard))
        .route("/api/charts/mesh", get(routes::mesh_chart))
        .route("/api/charts/point-cloud", get(routes::point_cloud_chart))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
