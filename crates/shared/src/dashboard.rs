//! Dashboard page model and the render pass that rebuilds it from control values.

use serde::{Deserialize, Serialize};

use crate::chart::{build_cloud_chart, build_surface_chart};
use crate::figure::Figure;
use crate::geometry::SampleGeometry;
use crate::MarkerSize;

pub const PAGE_TITLE: &str = "Point Cloud Visualization";
pub const MESH_SUBHEADER: &str = "Mesh Visualization";
pub const POINT_CLOUD_SUBHEADER: &str = "Point Cloud Visualization";
pub const POINT_SIZE_LABEL: &str = "Point Size";

pub const MESH_CHART_ID: &str = "mesh";
pub const POINT_CLOUD_CHART_ID: &str = "point_cloud";
pub const INTERACTIVE_CHART_ID: &str = "point_cloud_interactive";
pub const POINT_SIZE_SLIDER_ID: &str = "point_size";

/// Текущие значения элементов управления
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Controls {
    pub point_size: MarkerSize,
}

/// Ползунок целочисленного значения
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slider {
    pub id: String,
    pub label: String,
    pub min: u8,
    pub max: u8,
    pub default: u8,
    pub value: u8,
}

/// Элемент страницы, в порядке вывода сверху вниз
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Title { text: String },
    Subheader { text: String },
    Chart { id: String, figure: Figure },
    Slider(Slider),
}

/// Результат одного прохода рендера
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub elements: Vec<Element>,
}

impl Dashboard {
    pub fn chart(&self, id: &str) -> Option<&Figure> {
        self.elements.iter().find_map(|e| match e {
            Element::Chart { id: chart_id, figure } if chart_id == id => Some(figure),
            _ => None,
        })
    }

    pub fn charts(&self) -> impl Iterator<Item = (&str, &Figure)> {
        self.elements.iter().filter_map(|e| match e {
            Element::Chart { id, figure } => Some((id.as_str(), figure)),
            _ => None,
        })
    }

    pub fn slider(&self, id: &str) -> Option<&Slider> {
        self.elements.iter().find_map(|e| match e {
            Element::Slider(slider) if slider.id == id => Some(slider),
            _ => None,
        })
    }
}

fn chart(id: &str, figure: Figure) -> Element {
    Element::Chart {
        id: id.to_string(),
        figure,
    }
}

/// Собрать страницу целиком для заданных значений управления.
///
/// Чистая функция: хост вызывает её заново при каждом изменении ползунка.
pub fn render(geometry: &SampleGeometry, controls: &Controls) -> Dashboard {
    let elements = vec![
        Element::Title {
            text: PAGE_TITLE.to_string(),
        },
        Element::Subheader {
            text: MESH_SUBHEADER.to_string(),
        },
        chart(MESH_CHART_ID, build_surface_chart(&geometry.surface, None)),
        Element::Subheader {
            text: POINT_CLOUD_SUBHEADER.to_string(),
        },
        chart(
            POINT_CLOUD_CHART_ID,
            build_cloud_chart(&geometry.cloud, MarkerSize::default()),
        ),
        Element::Slider(Slider {
            id: POINT_SIZE_SLIDER_ID.to_string(),
            label: POINT_SIZE_LABEL.to_string(),
            min: MarkerSize::MIN,
            max: MarkerSize::MAX,
            default: MarkerSize::default().get(),
            value: controls.point_size.get(),
        }),
        chart(
            INTERACTIVE_CHART_ID,
            build_cloud_chart(&geometry.cloud, controls.point_size),
        ),
    ];

    Dashboard { elements }
}
