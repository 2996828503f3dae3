use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{Html, Json},
};
use serde::Deserialize;
use serde_json::{json, Value};
use shared::chart::build_cloud_chart;
use shared::{build_surface_chart, render, Controls, Dashboard, Figure, MarkerSize};

use crate::error::AppError;
use crate::AppState;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub point_size: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct MeshQuery {
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PointCloudQuery {
    pub size: Option<i64>,
}

fn marker_size(value: Option<i64>) -> Result<MarkerSize, AppError> {
    Ok(value.map(MarkerSize::try_from).transpose()?.unwrap_or_default())
}

/// Dashboard page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Sizes of the geometry generated at startup
pub async fn geometry(State(state): State<AppState>) -> Json<Value> {
    let g = &state.geometry;
    Json(json!({
        "vertices": g.surface.vertex_count(),
        "triangles": g.surface.triangle_count(),
        "points": g.cloud.len(),
    }))
}

/// Full render pass for the current control values
pub async fn dashboard(
    State(state): State<AppState>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Result<Json<Dashboard>, AppError> {
    let Query(query) = query?;
    let controls = Controls {
        point_size: marker_size(query.point_size)?,
    };
    tracing::debug!(point_size = controls.point_size.get(), "Rendering dashboard");
    Ok(Json(render(&state.geometry, &controls)))
}

/// Mesh chart only
pub async fn mesh_chart(
    State(state): State<AppState>,
    query: Result<Query<MeshQuery>, QueryRejection>,
) -> Result<Json<Figure>, AppError> {
    let Query(query) = query?;
    Ok(Json(build_surface_chart(
        &state.geometry.surface,
        query.color.as_deref(),
    )))
}

/// Point cloud chart only
pub async fn point_cloud_chart(
    State(state): State<AppState>,
    query: Result<Query<PointCloudQuery>, QueryRejection>,
) -> Result<Json<Figure>, AppError> {
    let Query(query) = query?;
    let size = marker_size(query.size)?;
    tracing::debug!(size = size.get(), "Building point cloud chart");
    Ok(Json(build_cloud_chart(&state.geometry.cloud, size)))
}
