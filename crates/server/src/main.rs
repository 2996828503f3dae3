use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pcviz_server::config::ServerConfig;
use pcviz_server::{app, AppState};
use shared::SampleGeometry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pcviz_server=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::parse();
    config.validate()?;

    let mut rng = config.rng();
    let geometry = SampleGeometry::generate(&mut rng, &config.geometry_settings());
    geometry.surface.validate()?;
    tracing::info!(
        vertices = geometry.surface.vertex_count(),
        triangles = geometry.surface.triangle_count(),
        points = geometry.cloud.len(),
        seed = ?config.seed,
        "Geometry generated"
    );

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    tracing::info!("Server running on http://{}", config.addr);
    axum::serve(listener, app(AppState::new(geometry))).await?;

    Ok(())
}
