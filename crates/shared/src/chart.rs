use crate::figure::{
    AspectMode, Axis, ColorBar, Figure, Layout, Marker, MeshTrace, Scene, ScatterMode,
    ScatterTrace, Title, Trace,
};
use crate::{MarkerSize, Point3, PointCloud, Surface};

pub const DEFAULT_MESH_COLOR: &str = "lightpink";
pub const MESH_OPACITY: f64 = 0.5;
pub const POINT_CLOUD_COLORSCALE: &str = "viridis";
pub const COLORBAR_TITLE: &str = "Density Scale";

const MESH_NAME: &str = "Mesh";
const POINT_CLOUD_NAME: &str = "Point Cloud";

/// Общая 3D-сцена для всех графиков: оси X/Y/Z без искажения пропорций
pub fn scene_layout() -> Scene {
    Scene {
        xaxis: Axis { title: "X".into() },
        yaxis: Axis { title: "Y".into() },
        zaxis: Axis { title: "Z".into() },
        aspectmode: AspectMode::Data,
    }
}

fn layout(title: &str) -> Layout {
    Layout {
        title: Title::from(title),
        showlegend: true,
        scene: scene_layout(),
    }
}

fn split_channels<T: Copy>(rows: &[[T; 3]]) -> (Vec<T>, Vec<T>, Vec<T>) {
    let mut a = Vec::with_capacity(rows.len());
    let mut b = Vec::with_capacity(rows.len());
    let mut c = Vec::with_capacity(rows.len());
    for &[ra, rb, rc] in rows {
        a.push(ra);
        b.push(rb);
        c.push(rc);
    }
    (a, b, c)
}

/// Цвета по умолчанию: высота (z) каждой точки
pub fn height_colors(points: &[Point3]) -> Vec<f64> {
    points.iter().map(|p| p[2]).collect()
}

/// Поверхность → полупрозрачный Mesh3d-график.
///
/// Индексы граней не проверяются; см. [`Surface::validate`].
pub fn build_surface_chart(surface: &Surface, color: Option<&str>) -> Figure {
    let (x, y, z) = split_channels(&surface.vertices);
    let (i, j, k) = split_channels(&surface.faces);

    let mesh = MeshTrace {
        x,
        y,
        z,
        i,
        j,
        k,
        color: color.unwrap_or(DEFAULT_MESH_COLOR).to_string(),
        opacity: MESH_OPACITY,
        name: MESH_NAME.to_string(),
    };

    Figure {
        data: vec![Trace::Mesh3d(mesh)],
        layout: layout(MESH_NAME),
    }
}

/// Облако точек → Scatter3d-график со шкалой viridis.
///
/// Без явных цветов используется [`height_colors`].
pub fn build_point_cloud_chart(
    points: &[Point3],
    colors: Option<&[f64]>,
    size: MarkerSize,
) -> Figure {
    let (x, y, z) = split_channels(points);
    let color = match colors {
        Some(colors) => colors.to_vec(),
        None => height_colors(points),
    };

    let scatter = ScatterTrace {
        x,
        y,
        z,
        mode: ScatterMode::Markers,
        marker: Marker {
            size,
            color,
            colorscale: POINT_CLOUD_COLORSCALE.to_string(),
            colorbar: ColorBar {
                title: Title::from(COLORBAR_TITLE),
            },
        },
        name: POINT_CLOUD_NAME.to_string(),
    };

    Figure {
        data: vec![Trace::Scatter3d(scatter)],
        layout: layout(POINT_CLOUD_NAME),
    }
}

/// То же, что [`build_point_cloud_chart`], но берёт цвета из самого облака
pub fn build_cloud_chart(cloud: &PointCloud, size: MarkerSize) -> Figure {
    build_point_cloud_chart(&cloud.points, cloud.colors.as_deref(), size)
}
