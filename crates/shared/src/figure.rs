//! Declarative chart description in the JSON shape Plotly.js consumes
//! (`{ data: [...traces], layout: {...} }`).

use serde::{Deserialize, Serialize};

use crate::MarkerSize;

/// Описание графика: набор трасс + раскладка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn mesh_traces(&self) -> impl Iterator<Item = &MeshTrace> {
        self.data.iter().filter_map(|t| match t {
            Trace::Mesh3d(mesh) => Some(mesh),
            _ => None,
        })
    }

    pub fn scatter_traces(&self) -> impl Iterator<Item = &ScatterTrace> {
        self.data.iter().filter_map(|t| match t {
            Trace::Scatter3d(scatter) => Some(scatter),
            _ => None,
        })
    }
}

/// Трасса графика
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Trace {
    #[serde(rename = "mesh3d")]
    Mesh3d(MeshTrace),
    #[serde(rename = "scatter3d")]
    Scatter3d(ScatterTrace),
}

/// Полигональная сетка: каналы координат x/y/z и каналы индексов i/j/k
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshTrace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub i: Vec<u32>,
    pub j: Vec<u32>,
    pub k: Vec<u32>,
    pub color: String,
    pub opacity: f64,
    pub name: String,
}

/// Облако точек
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterTrace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub mode: ScatterMode,
    pub marker: Marker,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScatterMode {
    Markers,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub size: MarkerSize,
    pub color: Vec<f64>,
    pub colorscale: String,
    pub colorbar: ColorBar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

impl From<&str> for Title {
    fn from(text: &str) -> Self {
        Self { text: text.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: Title,
    pub showlegend: bool,
    pub scene: Scene,
}

/// 3D-сцена: подписи осей и режим пропорций
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub zaxis: Axis,
    pub aspectmode: AspectMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Title,
}

/// `Data` сохраняет реальные пропорции данных по всем трём осям
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectMode {
    Data,
}
