use serde::{Deserialize, Serialize};

pub mod chart;
pub mod dashboard;
pub mod figure;
pub mod geometry;

pub use chart::{build_point_cloud_chart, build_surface_chart, scene_layout};
pub use dashboard::{render, Controls, Dashboard, Element, Slider};
pub use figure::Figure;
pub use geometry::{GeometrySettings, SampleGeometry};

/// Точка в 3D-пространстве
pub type Point3 = [f64; 3];

/// Ошибки целостности геометрии
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// Треугольник ссылается на несуществующую вершину
    #[error("face {face} references vertex {index}, but the surface has {vertex_count} vertices")]
    IndexOutOfBounds {
        face: usize,
        index: u32,
        vertex_count: usize,
    },
    /// Число цветов не совпадает с числом точек
    #[error("{colors} colors supplied for {points} points")]
    ColorLengthMismatch { points: usize, colors: usize },
}

/// Триангулированная поверхность: вершины + тройки индексов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Surface {
    pub vertices: Vec<Point3>,
    pub faces: Vec<[u32; 3]>,
}

impl Surface {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// Проверить, что все индексы граней лежат в пределах массива вершин
    pub fn validate(&self) -> Result<(), GeometryError> {
        let vertex_count = self.vertices.len();
        for (face, triangle) in self.faces.iter().enumerate() {
            if let Some(&index) = triangle.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(GeometryError::IndexOutOfBounds {
                    face,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}

/// Облако точек с необязательными скалярными цветами (по одному на точку)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PointCloud {
    pub points: Vec<Point3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<f64>>,
}

impl PointCloud {
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points, colors: None }
    }

    /// Облако с явными цветами; длины должны совпадать
    pub fn with_colors(points: Vec<Point3>, colors: Vec<f64>) -> Result<Self, GeometryError> {
        if colors.len() != points.len() {
            return Err(GeometryError::ColorLengthMismatch {
                points: points.len(),
                colors: colors.len(),
            });
        }
        Ok(Self {
            points,
            colors: Some(colors),
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("marker size {0} is outside the allowed range {min}..={max}", min = MarkerSize::MIN, max = MarkerSize::MAX)]
pub struct MarkerSizeError(pub i64);

/// Размер маркера точки, всегда в диапазоне [1, 10]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct MarkerSize(u8);

impl MarkerSize {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const DEFAULT: MarkerSize = MarkerSize(4);

    pub fn new(value: u8) -> Result<Self, MarkerSizeError> {
        Self::try_from(i64::from(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for MarkerSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for MarkerSize {
    type Error = MarkerSizeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(MarkerSizeError(value))
        }
    }
}

impl From<MarkerSize> for u8 {
    fn from(size: MarkerSize) -> Self {
        size.0
    }
}
