//! Integration tests for the HTTP routes.
//!
//! Drives the router in-process: Request -> app() -> JSON body.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;
use tower::ServiceExt;

use pcviz_server::{app, AppState};
use shared::{GeometrySettings, SampleGeometry};

fn test_app() -> Router {
    let mut rng = StdRng::seed_from_u64(7);
    let geometry = SampleGeometry::generate(&mut rng, &GeometrySettings::default());
    app(AppState::new(geometry))
}

async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
    let response = test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn interactive_marker_size(dashboard: &Value) -> &Value {
    let chart = dashboard["elements"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["id"] == "point_cloud_interactive")
        .unwrap();
    &chart["figure"]["data"][0]["marker"]["size"]
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get_json("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_index_page() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Point Cloud Visualization"));
    assert!(html.contains("/api/dashboard"));
}

#[tokio::test]
async fn test_geometry_summary() {
    let (status, body) = get_json("/api/geometry").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vertices"], 642);
    assert_eq!(body["triangles"], 1280);
    assert_eq!(body["points"], 1000);
}

#[tokio::test]
async fn test_dashboard_default_point_size() {
    let (status, body) = get_json("/api/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["elements"].as_array().unwrap().len(), 7);
    assert_eq!(body["elements"][0]["text"], "Point Cloud Visualization");
    assert_eq!(body["elements"][5]["value"], 4);
    assert_eq!(*interactive_marker_size(&body), 4);
}

#[tokio::test]
async fn test_dashboard_point_size_query() {
    let (status, body) = get_json("/api/dashboard?point_size=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["elements"][5]["value"], 10);
    assert_eq!(*interactive_marker_size(&body), 10);
    // Static point cloud keeps the default size
    assert_eq!(body["elements"][4]["figure"]["data"][0]["marker"]["size"], 4);
}

#[tokio::test]
async fn test_dashboard_rejects_out_of_range() {
    for uri in ["/api/dashboard?point_size=0", "/api/dashboard?point_size=11"] {
        let (status, body) = get_json(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(body["error"].as_str().unwrap().contains("outside the allowed range"));
    }
}

#[tokio::test]
async fn test_dashboard_rejects_non_integer() {
    let (status, body) = get_json("/api/dashboard?point_size=big").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("invalid query"));
}

#[tokio::test]
async fn test_mesh_chart() {
    let (status, body) = get_json("/api/charts/mesh").await;
    assert_eq!(status, StatusCode::OK);
    let trace = &body["data"][0];
    assert_eq!(trace["type"], "mesh3d");
    assert_eq!(trace["x"].as_array().unwrap().len(), 642);
    assert_eq!(trace["i"].as_array().unwrap().len(), 1280);
    assert_eq!(trace["color"], "lightpink");
    assert_eq!(trace["opacity"], 0.5);
}

#[tokio::test]
async fn test_mesh_chart_color() {
    let (_, body) = get_json("/api/charts/mesh?color=steelblue").await;
    assert_eq!(body["data"][0]["color"], "steelblue");
}

#[tokio::test]
async fn test_point_cloud_chart() {
    let (status, body) = get_json("/api/charts/point-cloud?size=6").await;
    assert_eq!(status, StatusCode::OK);
    let trace = &body["data"][0];
    assert_eq!(trace["type"], "scatter3d");
    assert_eq!(trace["marker"]["size"], 6);
    assert_eq!(trace["marker"]["color"].as_array().unwrap().len(), 1000);
    assert_eq!(trace["marker"]["colorscale"], "viridis");
    assert_eq!(body["layout"]["scene"]["aspectmode"], "data");
}

#[tokio::test]
async fn test_point_cloud_chart_rejects_bad_size() {
    let (status, _) = get_json("/api/charts/point-cloud?size=42").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_dashboard_echoes_slider_value() {
    for size in 1..=10 {
        let (status, body) = get_json(&format!("/api/dashboard?point_size={}", size)).await;
        assert_eq!(status, StatusCode::OK);
        let slider = body["elements"]
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["type"] == "slider")
            .unwrap();
        assert_eq!(slider["value"], size);
        assert_eq!(*interactive_marker_size(&body), size);
    }
}

#[tokio::test]
async fn test_index_page_discards_stale_renders() {
    let (_, body) = get("/").await;
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("new AbortController()"));
    assert!(html.contains("if (seq !== latestRequest) return;"));
    assert!(html.contains("Number(input.value) !== slider.value"));
}
